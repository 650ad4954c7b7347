use panorbit_core::config::ViewerConfig;
use panorbit_core::viewport::DisplayRotation;

#[test]
fn defaults_match_reference_behavior() {
    let cfg = ViewerConfig::default();
    assert_eq!(cfg.display_rotation_deg, 0);
    assert!(cfg.auto_rotate);
    assert_eq!(cfg.auto_rotate_speed, 3.0);
    assert_eq!(cfg.display_rotation(), DisplayRotation::None);
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let cfg: ViewerConfig = toml::from_str("auto_rotate = false").unwrap();
    assert!(!cfg.auto_rotate);
    assert_eq!(cfg.display_rotation_deg, 0);
    assert_eq!(cfg.auto_rotate_speed, 3.0);
}

#[test]
fn rotation_setting_maps_to_axis_swap() {
    let cfg: ViewerConfig = toml::from_str("display_rotation_deg = 90").unwrap();
    assert_eq!(cfg.display_rotation(), DisplayRotation::Cw90);
    assert!(cfg.display_rotation().swaps_axes());

    let cfg: ViewerConfig = toml::from_str("display_rotation_deg = -90").unwrap();
    assert_eq!(cfg.display_rotation(), DisplayRotation::Ccw90);
}

#[test]
fn unknown_rotation_degrees_are_treated_as_unrotated() {
    let cfg: ViewerConfig = toml::from_str("display_rotation_deg = 45").unwrap();
    assert_eq!(cfg.display_rotation(), DisplayRotation::None);
    assert!(!cfg.display_rotation().swaps_axes());
}

use panorbit_core::viewport::{DisplayRotation, Viewport};

#[test]
fn aspect_is_exact_width_over_height() {
    for (w, h) in [(1920.0f32, 1080.0f32), (1080.0, 1920.0), (640.0, 480.0), (123.0, 457.0)] {
        assert_eq!(Viewport::new(w, h).aspect(), w / h);
    }
}

#[test]
fn degenerate_viewport_yields_unit_aspect() {
    assert_eq!(Viewport::new(800.0, 0.0).aspect(), 1.0);
    assert_eq!(Viewport::new(0.0, 600.0).aspect(), 1.0);
    assert_eq!(Viewport::new(-1.0, 600.0).aspect(), 1.0);
}

#[test]
fn quarter_turns_swap_axes() {
    let vp = Viewport::new(1024.0, 600.0);

    let cw = vp.oriented(DisplayRotation::from_degrees(90));
    assert_eq!(cw, Viewport::new(600.0, 1024.0));

    let ccw = vp.oriented(DisplayRotation::from_degrees(-90));
    assert_eq!(ccw, Viewport::new(600.0, 1024.0));
}

#[test]
fn zero_and_half_turns_keep_axes() {
    let vp = Viewport::new(1024.0, 600.0);
    assert_eq!(vp.oriented(DisplayRotation::from_degrees(0)), vp);
    assert_eq!(vp.oriented(DisplayRotation::from_degrees(180)), vp);
}

#[test]
fn rotation_degrees_normalize() {
    assert_eq!(DisplayRotation::from_degrees(90), DisplayRotation::Cw90);
    assert_eq!(DisplayRotation::from_degrees(450), DisplayRotation::Cw90);
    assert_eq!(DisplayRotation::from_degrees(-90), DisplayRotation::Ccw90);
    assert_eq!(DisplayRotation::from_degrees(270), DisplayRotation::Ccw90);
    assert_eq!(DisplayRotation::from_degrees(180), DisplayRotation::Flip180);
    assert_eq!(DisplayRotation::from_degrees(-180), DisplayRotation::Flip180);
    assert_eq!(DisplayRotation::from_degrees(360), DisplayRotation::None);
    assert_eq!(DisplayRotation::from_degrees(13), DisplayRotation::None);
}

#[test]
fn swapped_aspect_is_reciprocal() {
    let vp = Viewport::new(1920.0, 1080.0);
    let swapped = vp.oriented(DisplayRotation::Cw90);
    assert_eq!(swapped.aspect(), 1080.0 / 1920.0);
}

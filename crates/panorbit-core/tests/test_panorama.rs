use std::io::Write;

use panorbit_core::error::PanoError;
use panorbit_core::panorama::Panorama;

/// Encode a tiny solid-color PNG in memory.
fn encode_png(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(pixel));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .unwrap();
    bytes
}

#[test]
fn decoded_pixels_match_source() {
    let bytes = encode_png(4, 2, [10, 200, 30, 255]);
    let pano = Panorama::from_bytes(&bytes).unwrap();

    assert_eq!(pano.width, 4);
    assert_eq!(pano.height, 2);
    assert_eq!(pano.pixels.len(), 4 * 2 * 4);
    for px in pano.pixels.chunks_exact(4) {
        assert_eq!(px, [10, 200, 30, 255]);
    }
}

#[test]
fn non_image_bytes_are_rejected() {
    let err = Panorama::from_bytes(b"definitely not a bitmap").unwrap_err();
    assert!(matches!(err, PanoError::Image(_)));
}

#[test]
fn empty_input_is_rejected() {
    assert!(Panorama::from_bytes(&[]).is_err());
}

#[test]
fn load_from_file_path() {
    let bytes = encode_png(3, 3, [0, 0, 0, 255]);
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(&bytes).unwrap();
    tmp.flush().unwrap();

    let pano = Panorama::from_path(tmp.path()).unwrap();
    assert_eq!((pano.width, pano.height), (3, 3));
}

#[test]
fn missing_file_yields_io_error() {
    let err = Panorama::from_path(std::path::Path::new("/nonexistent/pano.png")).unwrap_err();
    assert!(matches!(err, PanoError::Io(_)));
}

#[test]
fn placeholder_is_single_grey_pixel() {
    let p = Panorama::placeholder();
    assert_eq!((p.width, p.height), (1, 1));
    assert_eq!(p.pixels, vec![0x33, 0x33, 0x33, 0xff]);
}

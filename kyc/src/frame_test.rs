use super::*;

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];

// =============================================================
// Construction
// =============================================================

#[test]
fn new_rejects_zero_area() {
    assert_eq!(Frame::new(0, 4, Vec::new()), Err(FrameError::Empty { width: 0, height: 4 }));
}

#[test]
fn new_rejects_mismatched_buffer() {
    assert_eq!(Frame::new(2, 2, vec![0; 15]), Err(FrameError::BufferSize { expected: 16, actual: 15 }));
}

#[test]
fn solid_rejects_unaddressable_size_without_allocating() {
    assert_eq!(
        Frame::solid(u32::MAX, u32::MAX, RED),
        Err(FrameError::TooLarge { width: u32::MAX, height: u32::MAX })
    );
}

#[test]
fn solid_rejects_zero_area() {
    assert_eq!(Frame::solid(3, 0, RED), Err(FrameError::Empty { width: 3, height: 0 }));
}

#[test]
fn solid_fills_every_pixel() {
    let frame = Frame::solid(3, 2, GREEN).unwrap();
    assert_eq!(frame.as_rgba().len(), 24);
    assert_eq!(frame.pixel(2, 1), Some(GREEN));
    assert_eq!(frame.pixel(3, 0), None);
}

// =============================================================
// Mirroring
// =============================================================

#[test]
fn mirror_swaps_left_and_right_columns() {
    let mut frame = Frame::solid(3, 2, GREEN).unwrap();
    frame.set_pixel(0, 0, RED);
    frame.set_pixel(2, 1, BLUE);

    frame.mirror_horizontal();

    assert_eq!(frame.pixel(2, 0), Some(RED));
    assert_eq!(frame.pixel(0, 0), Some(GREEN));
    assert_eq!(frame.pixel(0, 1), Some(BLUE));
    assert_eq!(frame.pixel(1, 0), Some(GREEN));
}

#[test]
fn mirror_twice_is_identity() {
    let mut frame = Frame::solid(4, 3, GREEN).unwrap();
    frame.set_pixel(1, 2, RED);
    let original = frame.clone();
    frame.mirror_horizontal();
    frame.mirror_horizontal();
    assert_eq!(frame, original);
}

#[test]
fn mirror_single_column_is_noop() {
    let mut frame = Frame::solid(1, 2, RED).unwrap();
    frame.mirror_horizontal();
    assert_eq!(frame.pixel(0, 1), Some(RED));
}

// =============================================================
// JPEG
// =============================================================

#[test]
fn encode_jpeg_produces_decodable_image_of_same_size() {
    let frame = Frame::solid(16, 8, BLUE).unwrap();
    let jpeg = frame.encode_jpeg(JPEG_QUALITY).unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

    let decoded = image::load_from_memory_with_format(&jpeg, image::ImageFormat::Jpeg).unwrap();
    assert_eq!(decoded.width(), 16);
    assert_eq!(decoded.height(), 8);
}

#[test]
fn encode_jpeg_keeps_left_right_orientation() {
    let mut frame = Frame::solid(32, 16, RED).unwrap();
    for y in 0..16 {
        for x in 16..32 {
            frame.set_pixel(x, y, BLUE);
        }
    }
    let jpeg = frame.encode_jpeg(JPEG_QUALITY).unwrap();
    let decoded = image::load_from_memory(&jpeg).unwrap().to_rgb8();
    let left = decoded.get_pixel(4, 8);
    let right = decoded.get_pixel(28, 8);
    assert!(left[0] > 200 && left[2] < 60, "left {left:?}");
    assert!(right[2] > 200 && right[0] < 60, "right {right:?}");
}

#[test]
fn jpeg_data_url_has_jpeg_prefix() {
    let frame = Frame::solid(2, 2, RED).unwrap();
    assert!(frame.jpeg_data_url(JPEG_QUALITY).unwrap().starts_with("data:image/jpeg;base64,/9j/"));
}

#[test]
fn debug_output_omits_pixels() {
    let frame = Frame::solid(2, 2, RED).unwrap();
    assert_eq!(format!("{frame:?}"), "Frame { width: 2, height: 2, .. }");
}

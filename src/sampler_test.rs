use super::*;
use image::Rgba;

fn solid(width: u32, height: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(px))
}

#[test]
fn solid_red_is_dominant() {
    let img = solid(10, 10, [255, 0, 0, 255]);
    let rgb = sample_dominant_colour(&PixelBuffer::from_rgba(&img)).unwrap();
    assert_eq!(rgb, Srgb::new(255, 0, 0));
}

#[test]
fn alpha_at_threshold_is_ignored() {
    // Two rows of barely visible red above a solid green body.
    let mut img = solid(10, 10, [0, 255, 0, 255]);
    for y in 0..2 {
        for x in 0..10 {
            img.put_pixel(x, y, Rgba([255, 0, 0, VISIBILITY_THRESHOLD]));
        }
    }
    let buffer = PixelBuffer::from_rgba(&img);
    assert_eq!(sample_dominant_colour(&buffer).unwrap(), Srgb::new(0, 255, 0));
    assert_eq!(visible_pixel_count(&buffer).unwrap(), 80);
}

#[test]
fn alpha_just_above_threshold_counts() {
    let mut img = solid(4, 1, [0, 0, 255, 0]);
    img.put_pixel(0, 0, Rgba([9, 9, 9, VISIBILITY_THRESHOLD + 1]));
    let buffer = PixelBuffer::from_rgba(&img);
    assert_eq!(sample_dominant_colour(&buffer).unwrap(), Srgb::new(9, 9, 9));
}

#[test]
fn green_square_on_transparent_background() {
    let mut img = solid(10, 10, [0, 0, 0, 0]);
    for y in 2..8 {
        for x in 2..8 {
            img.put_pixel(x, y, Rgba([0, 255, 0, 255]));
        }
    }
    for x in 0..10 {
        img.put_pixel(x, 0, Rgba([255, 0, 0, 10]));
    }
    let rgb = sample_dominant_colour(&PixelBuffer::from_rgba(&img)).unwrap();
    assert_eq!(rgb, Srgb::new(0, 255, 0));
}

#[test]
fn fully_transparent_buffer_has_no_visible_pixels() {
    let img = solid(10, 10, [0, 0, 0, 0]);
    assert!(matches!(
        sample_dominant_colour(&PixelBuffer::from_rgba(&img)),
        Err(ColourError::NoVisiblePixels)
    ));
}

#[test]
fn empty_buffer_has_no_visible_pixels() {
    let buffer = PixelBuffer::new(0, 0, 4, &[]).unwrap();
    assert!(matches!(
        sample_dominant_colour(&buffer),
        Err(ColourError::NoVisiblePixels)
    ));
}

#[test]
fn rgb_buffer_is_a_shape_error() {
    let data = vec![0u8; 10 * 10 * 3];
    let buffer = PixelBuffer::new(10, 10, 3, &data).unwrap();
    assert!(matches!(
        sample_dominant_colour(&buffer),
        Err(ColourError::Shape { channels: 3 })
    ));
    assert!(matches!(
        visible_pixel_count(&buffer),
        Err(ColourError::Shape { channels: 3 })
    ));
}

#[test]
fn mismatched_length_is_rejected() {
    let data = vec![0u8; 15];
    assert!(matches!(
        PixelBuffer::new(2, 2, 4, &data),
        Err(ColourError::BufferSize {
            expected: 16,
            actual: 15,
            ..
        })
    ));
}

#[test]
fn alpha_does_not_split_counts() {
    // Same RGB at different visible alphas is one colour.
    let data = [
        7, 7, 7, 255, //
        7, 7, 7, 100, //
        1, 2, 3, 255, //
        1, 2, 3, 255, //
        7, 7, 7, 11,
    ];
    let buffer = PixelBuffer::new(5, 1, 4, &data).unwrap();
    assert_eq!(sample_dominant_colour(&buffer).unwrap(), Srgb::new(7, 7, 7));
}

#[test]
fn ties_go_to_first_scanned_colour() {
    let data = [
        0, 0, 200, 255, //
        200, 0, 0, 255, //
        200, 0, 0, 255, //
        0, 0, 200, 255,
    ];
    let buffer = PixelBuffer::new(2, 2, 4, &data).unwrap();
    assert_eq!(sample_dominant_colour(&buffer).unwrap(), Srgb::new(0, 0, 200));

    let data = [
        200, 0, 0, 255, //
        0, 0, 200, 255, //
        0, 0, 200, 255, //
        200, 0, 0, 255,
    ];
    let buffer = PixelBuffer::new(2, 2, 4, &data).unwrap();
    assert_eq!(sample_dominant_colour(&buffer).unwrap(), Srgb::new(200, 0, 0));
}

#[test]
fn near_colours_are_not_merged() {
    let data = [
        100, 100, 100, 255, //
        101, 100, 100, 255, //
        102, 100, 100, 255, //
        50, 50, 50, 255, //
        50, 50, 50, 255,
    ];
    let buffer = PixelBuffer::new(5, 1, 4, &data).unwrap();
    assert_eq!(sample_dominant_colour(&buffer).unwrap(), Srgb::new(50, 50, 50));
}

#[test]
fn sampling_does_not_touch_the_buffer() {
    let img = solid(3, 3, [12, 34, 56, 255]);
    let before = img.clone();
    sample_dominant_colour(&PixelBuffer::from_rgba(&img)).unwrap();
    assert_eq!(img, before);
}

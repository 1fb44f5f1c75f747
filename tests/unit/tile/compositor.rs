use super::*;

use crate::foundation::core::Rgba8;

#[test]
fn center_square_uses_floor_division() {
    // 640x480 -> side 480, left (640-480)/2 = 80.
    assert_eq!(
        center_square(640, 480),
        RectPx {
            x: 80,
            y: 0,
            w: 480,
            h: 480
        }
    );
    // Odd remainder floors toward the top-left.
    assert_eq!(
        center_square(5, 2),
        RectPx {
            x: 1,
            y: 0,
            w: 2,
            h: 2
        }
    );
    assert_eq!(
        center_square(3, 9),
        RectPx {
            x: 0,
            y: 3,
            w: 3,
            h: 3
        }
    );
    // Already square: no offset.
    assert_eq!(
        center_square(7, 7),
        RectPx {
            x: 0,
            y: 0,
            w: 7,
            h: 7
        }
    );
}

#[test]
fn square_thumbnail_has_requested_dimensions() {
    let src = PreparedImage::solid(640, 480, Rgba8::opaque(90, 120, 30));
    let thumb = square_thumbnail(&src, 64).unwrap();
    assert_eq!(thumb.width, 64);
    assert_eq!(thumb.height, 64);
    assert_eq!(thumb.rgba8_premul.len(), 64 * 64 * 4);
}

#[test]
fn uniform_source_stays_uniform_after_resample() {
    let src = PreparedImage::solid(300, 200, Rgba8::opaque(90, 120, 30));
    let thumb = square_thumbnail(&src, 50).unwrap();
    for px in thumb.rgba8_premul.chunks_exact(4) {
        // Lanczos ringing cannot appear on a constant signal; allow only
        // rounding slack.
        assert!((i16::from(px[0]) - 90).abs() <= 1);
        assert!((i16::from(px[1]) - 120).abs() <= 1);
        assert!((i16::from(px[2]) - 30).abs() <= 1);
        assert_eq!(px[3], 255);
    }
}

#[test]
fn crop_keeps_the_horizontal_center_of_a_wide_source() {
    // Left third red, middle third green, right third blue, 300x100.
    // The centered 100x100 crop must come from the green band.
    let mut data = vec![0u8; 300 * 100 * 4];
    for y in 0..100usize {
        for x in 0..300usize {
            let off = (y * 300 + x) * 4;
            let color: [u8; 4] = if x < 100 {
                [255, 0, 0, 255]
            } else if x < 200 {
                [0, 255, 0, 255]
            } else {
                [0, 0, 255, 255]
            };
            data[off..off + 4].copy_from_slice(&color);
        }
    }
    let src = PreparedImage {
        width: 300,
        height: 100,
        rgba8_premul: std::sync::Arc::new(data),
    };

    let thumb = square_thumbnail(&src, 40).unwrap();
    let center = (20usize * 40 + 20) * 4;
    let px = &thumb.rgba8_premul[center..center + 4];
    assert!(px[1] > 200, "expected green-band crop, got {px:?}");
    assert!(px[0] < 50 && px[2] < 50);
}

#[test]
fn composite_tile_fills_padded_interior_and_leaves_background() {
    let mut canvas = Canvas::filled(120, 100, Rgba8::opaque(0, 0, 0));
    let src = PreparedImage::solid(200, 200, Rgba8::opaque(200, 10, 10));
    composite_tile(&src, &mut canvas, 0, 0, 100, 10).unwrap();

    let px_at = |x: usize, y: usize| {
        let off = (y * 120 + x) * 4;
        [
            canvas.data[off],
            canvas.data[off + 1],
            canvas.data[off + 2],
            canvas.data[off + 3],
        ]
    };
    // Padding band keeps the background.
    assert_eq!(px_at(5, 5), [0, 0, 0, 255]);
    assert_eq!(px_at(95, 95), [0, 0, 0, 255]);
    // Interior carries the tile.
    let center = px_at(50, 50);
    assert!((i16::from(center[0]) - 200).abs() <= 1);
    assert!(i16::from(center[1]) <= 11);
}

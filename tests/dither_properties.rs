//! # Dithering Properties
//!
//! Whole-image checks of the public dithering API: exact tiles for known
//! inputs, alpha handling, cutoff behavior and matrix tiling.

use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use sprite_dither::render::dither::{Ink, classify};
use sprite_dither::{DitherError, DitherParameters, MatrixPreset, ThresholdMatrix, dither};

fn gray(level: u8, alpha: u8) -> Rgba<u8> {
    Rgba([level, level, level, alpha])
}

/// Render a dithered image as rows of '#' (white) and '.' (black).
fn ascii(img: &RgbaImage) -> Vec<String> {
    (0..img.height())
        .map(|y| {
            (0..img.width())
                .map(|x| if img.get_pixel(x, y)[0] == 255 { '#' } else { '.' })
                .collect()
        })
        .collect()
}

#[test]
fn test_mid_gray_bayer4_tile() {
    let img = RgbaImage::from_pixel(4, 4, gray(128, 255));
    let out = dither(&img, &DitherParameters::default()).unwrap();

    // white where the cell rank is 0..=7
    assert_eq!(ascii(&out), vec!["#.#.", ".#.#", "#.#.", ".#.#"]);
}

#[test]
fn test_mid_gray_bayer2_tile() {
    let params = DitherParameters::new(MatrixPreset::Bayer2.matrix(), 10, 170).unwrap();
    let img = RgbaImage::from_pixel(4, 4, gray(128, 255));
    let out = dither(&img, &params).unwrap();

    // thresholds 31.875 (0), 95.625 (1), 159.375 (2), 223.125 (3)
    assert_eq!(ascii(&out), vec!["#.#.", ".#.#", "#.#.", ".#.#"]);
}

#[test]
fn test_dark_gray_bayer4_tile() {
    // L = 30 clears only ranks 0 and 1 (7.97 and 23.9)
    let img = RgbaImage::from_pixel(8, 4, gray(30, 255));
    let out = dither(&img, &DitherParameters::default()).unwrap();

    assert_eq!(
        ascii(&out),
        vec!["#...#...", "........", "..#...#.", "........"]
    );
}

#[test]
fn test_alpha_preserved_everywhere() {
    let img = RgbaImage::from_fn(20, 20, |x, y| {
        Rgba([(x * 13) as u8, (y * 13) as u8, ((x + y) * 6) as u8, (x * 20 + y) as u8])
    });
    let out = dither(&img, &DitherParameters::default()).unwrap();
    for (x, y, p) in out.enumerate_pixels() {
        assert_eq!(p[3], img.get_pixel(x, y)[3], "alpha at ({},{})", x, y);
    }
}

#[test]
fn test_alpha_three_is_no_ink_regardless_of_luminance() {
    let params = DitherParameters::default();
    for level in [0u8, 64, 128, 170, 255] {
        let img = RgbaImage::from_pixel(4, 4, gray(level, 3));
        let out = dither(&img, &params).unwrap();
        assert!(
            out.pixels().all(|p| *p == Rgba([0, 0, 0, 3])),
            "level {} with alpha 3 should be transparent black",
            level
        );
    }
}

#[test]
fn test_cutoff_boundaries() {
    let params = DitherParameters::default();
    let img = RgbaImage::from_fn(8, 8, |x, _| if x < 4 { gray(10, 255) } else { gray(170, 255) });
    let out = dither(&img, &params).unwrap();
    for (x, y, p) in out.enumerate_pixels() {
        let expected = if x < 4 { 0 } else { 255 };
        assert_eq!(p, &gray(expected, 255), "pixel ({},{})", x, y);
    }
}

#[test]
fn test_raising_white_cutoff_only_moves_white_to_matrix() {
    let matrix = ThresholdMatrix::bayer4();
    for luma in 11u8..=254 {
        for white in (luma + 1).max(12)..=255 {
            let low = DitherParameters::new(matrix.clone(), 10, luma).unwrap();
            let high = DitherParameters::new(matrix.clone(), 10, white).unwrap();
            for y in 0..4 {
                for x in 0..4 {
                    // at cutoff == luma the pixel is white via cutoff
                    assert_eq!(classify(luma, 255, x, y, &low), Ink::White);
                    // above it the matrix decides
                    let threshold = matrix.threshold_value(x, y);
                    let expected = if luma as f64 > threshold { Ink::White } else { Ink::Black };
                    assert_eq!(classify(luma, 255, x, y, &high), expected);
                }
            }
        }
    }
}

#[test]
fn test_custom_matrix_tiling() {
    // 1x3 matrix tiles horizontally every 3 pixels and repeats on every row
    let matrix = ThresholdMatrix::from_rows(vec![vec![2, 0, 1]]).unwrap();
    let params = DitherParameters::new(matrix, 0, 255).unwrap();
    // thresholds: 212.5, 42.5, 127.5
    let img = RgbaImage::from_pixel(7, 2, gray(100, 255));
    let out = dither(&img, &params).unwrap();
    assert_eq!(ascii(&out), vec![".#..#..", ".#..#.."]);
}

#[test]
fn test_deterministic() {
    let img = RgbaImage::from_fn(33, 17, |x, y| gray((x * 7 + y * 5) as u8, 255));
    let params = DitherParameters::default();
    let a = dither(&img, &params).unwrap();
    let b = dither(&img, &params).unwrap();
    assert!(a == b, "repeated dithering should match exactly");
}

#[test]
fn test_invalid_parameters_rejected() {
    assert!(matches!(
        DitherParameters::new(ThresholdMatrix::bayer4(), 170, 10),
        Err(DitherError::InvalidParameters(_))
    ));
    assert!(matches!(
        ThresholdMatrix::from_rows(vec![vec![0, 1], vec![2]]),
        Err(DitherError::InvalidParameters(_))
    ));
}

#[test]
fn test_zero_sized_image_rejected() {
    let err = dither(&RgbaImage::new(0, 10), &DitherParameters::default()).unwrap_err();
    assert!(matches!(err, DitherError::InvalidImage(_)));
}

//! Shared test infrastructure for strip-animator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use strip_animator::{BLACK, Color, StripAnimator};

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use strip_animator::{BLUE, GREEN, RED, WHITE};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Indices of every cell that is not black.
pub fn lit_indices(pixels: &[Color]) -> heapless::Vec<usize, 64> {
    let mut lit = heapless::Vec::new();
    for (i, pixel) in pixels.iter().enumerate() {
        if *pixel != BLACK {
            lit.push(i).unwrap();
        }
    }
    lit
}

/// Index of the single lit cell, panicking if there is not exactly one.
pub fn single_lit(pixels: &[Color]) -> usize {
    let lit = lit_indices(pixels);
    assert_eq!(lit.len(), 1, "expected exactly one lit cell in {:?}", pixels);
    lit[0]
}

/// A buffer with only `index` set to `color`.
pub fn lit_at<const N: usize>(index: usize, color: Color) -> [Color; N] {
    let mut pixels = [BLACK; N];
    pixels[index] = color;
    pixels
}

/// Ticks `strip` `count` times, failing the test on any error.
pub fn tick_n(strip: &mut StripAnimator<'_>, count: usize) {
    for _ in 0..count {
        strip.tick().unwrap();
    }
}

//! SSE kernel for the batch forward converter.
//!
//! Each 8-digit group is loaded as eight 16-bit lanes and multiplied
//! against the coefficient rows with `pmaddwd`, which widens to 32-bit
//! pair sums; two `phaddd` rounds then fold the four pair sums into lane 0.

#![allow(unsafe_code)]

use std::arch::x86_64::{
    __m128i, _mm_cvtsi128_si32, _mm_hadd_epi32, _mm_loadu_si128, _mm_madd_epi16,
};

use crate::constants::GROUP_SCALE_SHIFT;
use crate::table::{IMAG_ROW, REAL_ROW};

/// Sum of all 32-bit lanes, returned from lane 0.
#[inline]
#[target_feature(enable = "ssse3")]
unsafe fn horizontal_sum(v: __m128i) -> i32 {
    let v = _mm_hadd_epi32(v, v);
    let v = _mm_hadd_epi32(v, v);
    _mm_cvtsi128_si32(v)
}

/// Evaluate spread digit lanes against the coefficient rows.
///
/// # Safety
///
/// The CPU must support SSSE3. Callers verify this once via
/// `is_x86_feature_detected!("ssse3")` before selecting this kernel.
#[target_feature(enable = "ssse3")]
pub(crate) unsafe fn evaluate_groups(lanes: &[[i16; 8]; 16]) -> (i128, i128) {
    let real_row = _mm_loadu_si128(REAL_ROW.as_ptr().cast::<__m128i>());
    let imag_row = _mm_loadu_si128(IMAG_ROW.as_ptr().cast::<__m128i>());

    let mut real: i128 = 0;
    let mut imag: i128 = 0;
    let mut shift = 0;
    for group in lanes {
        let col = _mm_loadu_si128(group.as_ptr().cast::<__m128i>());
        let group_real = horizontal_sum(_mm_madd_epi16(real_row, col));
        let group_imag = horizontal_sum(_mm_madd_epi16(imag_row, col));

        real += i128::from(group_real) << shift;
        imag += i128::from(group_imag) << shift;
        shift += GROUP_SCALE_SHIFT;
    }

    (real, imag)
}

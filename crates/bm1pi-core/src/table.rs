//! Coefficient table: the contribution of each digit position within an
//! 8-digit group.
//!
//! Digit `j` of group `g` weighs b^(8g + j) = 16^g · b^j. The eight values
//! b^0..b^7 are `1, −1+i, −2i, 2+2i, −4, 4−4i, 8i, −8−8i`; each is a power
//! of two (the group-relative multiplier) times a sign pattern. Everything
//! here is evaluated at compile time.

use crate::constants::GROUP_BITS;

const LANES: usize = GROUP_BITS as usize;

/// Contribution of one digit position relative to the group scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitWeight {
    /// Power multiplier relative to the group scale: 1, 1, 2, 2, 4, 4, 8, 8.
    pub power: i16,
    /// Sign of the real contribution (−1, 0 or 1).
    pub real_sign: i16,
    /// Sign of the imaginary contribution (−1, 0 or 1).
    pub imag_sign: i16,
}

impl BitWeight {
    /// Unscaled real part of b^j.
    #[must_use]
    pub const fn real(self) -> i16 {
        self.power * self.real_sign
    }

    /// Unscaled imaginary part of b^j.
    #[must_use]
    pub const fn imag(self) -> i16 {
        self.power * self.imag_sign
    }
}

/// Walk b^0..b^7 by repeated multiplication with b = −1+i and split each
/// power into multiplier and signs.
const fn build_weights() -> [BitWeight; LANES] {
    let mut table = [BitWeight {
        power: 0,
        real_sign: 0,
        imag_sign: 0,
    }; LANES];
    let mut real: i16 = 1;
    let mut imag: i16 = 0;
    let mut j = 0;
    while j < LANES {
        let power: i16 = 1 << (j / 2);
        table[j] = BitWeight {
            power,
            real_sign: real / power,
            imag_sign: imag / power,
        };
        let next_real = -real - imag;
        imag = real - imag;
        real = next_real;
        j += 1;
    }
    table
}

/// Per-position weights for one group.
pub const WEIGHTS: [BitWeight; LANES] = build_weights();

const fn build_row(imaginary: bool) -> [i16; LANES] {
    let mut row = [0i16; LANES];
    let mut j = 0;
    while j < LANES {
        row[j] = if imaginary {
            WEIGHTS[j].imag()
        } else {
            WEIGHTS[j].real()
        };
        j += 1;
    }
    row
}

/// Real parts of b^0..b^7: `[1, -1, 0, 2, -4, 4, 0, -8]`.
pub const REAL_ROW: [i16; LANES] = build_row(false);

/// Imaginary parts of b^0..b^7: `[0, 1, -2, 2, 0, -4, 8, -8]`.
pub const IMAG_ROW: [i16; LANES] = build_row(true);

#[allow(clippy::cast_lossless)]
const fn build_byte_sums() -> [(i32, i32); 256] {
    let mut sums = [(0i32, 0i32); 256];
    let mut byte = 0;
    while byte < 256 {
        let mut real = 0i32;
        let mut imag = 0i32;
        let mut j = 0;
        while j < LANES {
            if (byte >> j) & 1 == 1 {
                real += REAL_ROW[j] as i32;
                imag += IMAG_ROW[j] as i32;
            }
            j += 1;
        }
        sums[byte] = (real, imag);
        byte += 1;
    }
    sums
}

/// Unscaled value of every possible group, indexed by the group's byte.
/// The same dot products the vector kernel computes, tabulated.
pub const BYTE_SUMS: [(i32, i32); 256] = build_byte_sums();

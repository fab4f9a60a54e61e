// crates/bytefec-core/src/code/syndrome.rs

use super::tables::ENCODING_TABLE;

/// Run the 8 parity checks against a full received codeword.
///
/// Zero means every check passed and the codeword is internally
/// consistent. Nonzero is the error fingerprint the corrector consumes.
/// An even number of flips inside one check's span cancels out, so zero
/// reads "nothing detectable", not "nothing happened".
#[inline]
pub fn syndrome(codeword: u16) -> u8 {
    let mut s = 0u8;
    for (row, &mask) in ENCODING_TABLE.iter().enumerate() {
        if (codeword & mask).count_ones() % 2 != 0 {
            s |= 1 << (7 - row);
        }
    }
    s
}

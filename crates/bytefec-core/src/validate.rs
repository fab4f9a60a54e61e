use crate::code::{syndrome, DECODING_TABLE, ENCODING_TABLE};
use crate::error::{FecError, Result};

pub fn validate_tables() -> Result<()> {
    // Each check row must carry exactly its own parity bit in the low byte.
    for (row, &mask) in ENCODING_TABLE.iter().enumerate() {
        let low = (mask & 0x00FF) as u8;
        if low != 0x80 >> row {
            return Err(FecError::Validation(format!(
                "encoding row {row} low byte is 0x{low:02x}, want 0x{:02x}",
                0x80u8 >> row
            )));
        }
    }

    // Fingerprints must be nonzero and pairwise distinct or the corrector
    // cannot locate single-bit errors uniquely.
    for (i, &fp) in DECODING_TABLE.iter().enumerate() {
        if fp == 0 {
            return Err(FecError::Validation(format!("decoding entry {i} is zero")));
        }
        for (j, &other) in DECODING_TABLE.iter().enumerate().skip(i + 1) {
            if fp == other {
                return Err(FecError::Validation(format!(
                    "decoding entries {i} and {j} collide on 0x{fp:02x}"
                )));
            }
        }
    }

    // The decoding table must be the column view of the encoding table.
    for (i, &fp) in DECODING_TABLE.iter().enumerate() {
        let got = syndrome(1u16 << (15 - i));
        if got != fp {
            return Err(FecError::Validation(format!(
                "decoding entry {i}: flipping codeword bit {} yields 0x{got:02x}, table says 0x{fp:02x}",
                15 - i
            )));
        }
    }

    Ok(())
}

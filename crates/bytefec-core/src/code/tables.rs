// crates/bytefec-core/src/code/tables.rs

/// Parity-check rows of the (16,8) code, one row per check bit.
///
/// Row `r`'s high byte selects the data bits that feed parity bit
/// `7 - r`; the low byte is exactly that parity bit (`0x80 >> r`), so
/// ANDing a full row against a received codeword runs the check over
/// data and parity together.
pub const ENCODING_TABLE: [u16; 8] = [
    0xF080, // d7 d6 d5 d4          -> p7
    0xCC40, // d7 d6 d3 d2          -> p6
    0xAA20, // d7 d5 d3 d1          -> p5
    0x5610, // d6 d4 d2 d1          -> p4
    0xE908, // d7 d6 d5 d3 d0       -> p3
    0x9504, // d7 d4 d2 d0          -> p2
    0x7B02, // d6 d5 d4 d3 d1 d0    -> p1
    0xE701, // d7 d6 d5 d2 d1 d0    -> p0
];

/// Single-bit-error syndromes, one per codeword bit position.
///
/// Entry `i` is the syndrome a lone flip of codeword bit `15 - i`
/// produces: entries 0..8 cover the data half, entries 8..16 the parity
/// half (a lone parity-bit flip trips exactly its own check).
pub const DECODING_TABLE: [u8; 16] = [
    0xED, // d7
    0xDB, // d6
    0xAB, // d5
    0x96, // d4
    0x6A, // d3
    0x55, // d2
    0x33, // d1
    0x0F, // d0
    0x80, // p7
    0x40, // p6
    0x20, // p5
    0x10, // p4
    0x08, // p3
    0x04, // p2
    0x02, // p1
    0x01, // p0
];

use bytefec_core::validate::validate_tables;
use bytefec_core::{syndrome, DECODING_TABLE, ENCODING_TABLE};

#[test]
fn tables_validate() {
    validate_tables().expect("fixed tables must agree");
}

#[test]
fn decoding_entries_are_the_parity_check_columns() {
    for (i, &fp) in DECODING_TABLE.iter().enumerate() {
        assert_eq!(syndrome(1u16 << (15 - i)), fp, "entry {i}");
    }
}

#[test]
fn each_check_row_owns_its_parity_bit() {
    for (row, &mask) in ENCODING_TABLE.iter().enumerate() {
        assert_eq!((mask & 0x00FF) as u8, 0x80 >> row, "row {row}");
    }
}

#[test]
fn fingerprints_are_nonzero_and_distinct() {
    for (i, &fp) in DECODING_TABLE.iter().enumerate() {
        assert_ne!(fp, 0, "entry {i}");
        for (j, &other) in DECODING_TABLE.iter().enumerate().skip(i + 1) {
            assert_ne!(fp, other, "entries {i} and {j}");
        }
    }
}

// crates/bytefec-core/src/code/mod.rs

pub mod correct;
pub mod decode;
pub mod encode;
pub mod syndrome;
pub mod tables;

pub use correct::{classify, correct, SyndromeKind};
pub use decode::{codeword, decode};
pub use encode::encode;
pub use syndrome::syndrome;
pub use tables::{DECODING_TABLE, ENCODING_TABLE};

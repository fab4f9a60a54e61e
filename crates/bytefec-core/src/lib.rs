pub mod error;
pub mod validate;

pub mod code;
pub mod stream;

pub use crate::code::{classify, codeword, correct, decode, encode, syndrome, SyndromeKind};
pub use crate::code::{DECODING_TABLE, ENCODING_TABLE};
pub use crate::error::{FecError, Result};
pub use crate::stream::{DecodeStats, EncodeStats};

// crates/bytefec-core/src/stream.rs

use std::io::{Read, Write};

use crate::code::{correct, encode, syndrome};
use crate::error::Result;

const SCRATCH: usize = 8192;

/// Counters for one encoding pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeStats {
    pub bytes_in: u64,
    pub bytes_out: u64,
}

/// Counters for one decoding pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeStats {
    pub codewords: u64,
    /// Codewords with a zero syndrome, passed through untouched.
    pub clean: u64,
    /// Codewords routed through the corrector (attempted, not verified).
    pub corrected: u64,
    /// Input ended on an odd byte, which was dropped.
    pub trailing_dropped: bool,
}

/// Encode a whole buffer.
///
/// Each input byte becomes `(data, parity)` on the wire, data byte
/// first; output is exactly twice the input length, with no header or
/// length prefix. Byte `k` of the input owns codeword `k` of the output.
pub fn encode_bytes(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() * 2);
    for &b in input {
        out.push(b);
        out.push(encode(b));
    }
    out
}

/// Decode a whole buffer of 2-byte codewords.
///
/// The data byte travels first, so a codeword reads big-endian. A
/// trailing odd byte is dropped, recorded only in the stats.
pub fn decode_bytes(input: &[u8]) -> (Vec<u8>, DecodeStats) {
    let mut stats = DecodeStats::default();
    let mut out = Vec::with_capacity(input.len() / 2);
    for pair in input.chunks_exact(2) {
        let cw = u16::from_be_bytes([pair[0], pair[1]]);
        push_decoded(cw, &mut out, &mut stats);
    }
    stats.trailing_dropped = input.len() % 2 != 0;
    (out, stats)
}

/// Streaming form of [`encode_bytes`] over `Read`/`Write`.
pub fn encode_stream<R: Read, W: Write>(mut r: R, mut w: W) -> Result<EncodeStats> {
    let mut stats = EncodeStats::default();
    let mut buf = [0u8; SCRATCH];
    loop {
        let n = r.read(&mut buf)?;
        if n == 0 {
            break;
        }
        let encoded = encode_bytes(&buf[..n]);
        w.write_all(&encoded)?;
        stats.bytes_in += n as u64;
        stats.bytes_out += encoded.len() as u64;
    }
    w.flush()?;
    Ok(stats)
}

/// Streaming form of [`decode_bytes`] over `Read`/`Write`.
///
/// Short reads are fine: a codeword split across two reads is carried
/// over and completed by the next chunk.
pub fn decode_stream<R: Read, W: Write>(mut r: R, mut w: W) -> Result<DecodeStats> {
    let mut stats = DecodeStats::default();
    let mut buf = [0u8; SCRATCH];
    let mut pending: Option<u8> = None;
    loop {
        let n = r.read(&mut buf)?;
        if n == 0 {
            break;
        }
        let mut bytes = &buf[..n];
        let mut out = Vec::with_capacity(n / 2 + 1);
        if let Some(data) = pending.take() {
            let cw = u16::from_be_bytes([data, bytes[0]]);
            push_decoded(cw, &mut out, &mut stats);
            bytes = &bytes[1..];
        }
        for pair in bytes.chunks_exact(2) {
            let cw = u16::from_be_bytes([pair[0], pair[1]]);
            push_decoded(cw, &mut out, &mut stats);
        }
        if bytes.len() % 2 != 0 {
            pending = Some(bytes[bytes.len() - 1]);
        }
        w.write_all(&out)?;
    }
    stats.trailing_dropped = pending.is_some();
    w.flush()?;
    Ok(stats)
}

fn push_decoded(cw: u16, out: &mut Vec<u8>, stats: &mut DecodeStats) {
    let data = (cw >> 8) as u8;
    let s = syndrome(cw);
    stats.codewords += 1;
    if s == 0 {
        stats.clean += 1;
        out.push(data);
    } else {
        stats.corrected += 1;
        out.push(correct(data, s));
    }
}

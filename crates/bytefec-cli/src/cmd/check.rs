use bytefec_core::validate::validate_tables;
use bytefec_core::{codeword, decode, syndrome};
use clap::Args;

#[derive(Args, Debug)]
pub struct CheckArgs {}

pub fn run(_args: CheckArgs) -> anyhow::Result<()> {
    validate_tables()?;

    let mut roundtrips = 0u32;
    for b in 0u16..=255 {
        let b = b as u8;
        let cw = codeword(b);
        if syndrome(cw) != 0 || decode(cw) != b {
            anyhow::bail!("roundtrip failed for byte 0x{b:02x}");
        }
        roundtrips += 1;
    }

    let mut single_bit = 0u32;
    for b in 0u16..=255 {
        let b = b as u8;
        let cw = codeword(b);
        for pos in 0..16 {
            if decode(cw ^ (1u16 << pos)) != b {
                anyhow::bail!("single-bit recovery failed: byte 0x{b:02x} bit {pos}");
            }
            single_bit += 1;
        }
    }

    eprintln!("check ok: tables valid, roundtrips={roundtrips} single_bit={single_bit}");
    Ok(())
}

use std::fs::File;
use std::io::{BufReader, BufWriter};

use anyhow::Context;
use bytefec_core::stream;
use clap::Args;

#[derive(Args)]
pub struct DecodeArgs {
    /// Input codeword stream (data byte first, 2 bytes per codeword)
    #[arg(long)]
    pub r#in: String,

    /// Output path for the decoded bytes
    #[arg(long)]
    pub out: String,
}

pub fn run(args: DecodeArgs) -> anyhow::Result<()> {
    let input = File::open(&args.r#in).with_context(|| format!("open {}", args.r#in))?;
    let output = File::create(&args.out).with_context(|| format!("create {}", args.out))?;

    let stats = stream::decode_stream(BufReader::new(input), BufWriter::new(output))?;

    if stats.trailing_dropped {
        eprintln!("warn: odd trailing byte dropped from {}", args.r#in);
    }
    eprintln!(
        "decode ok: in={} out={} codewords={} clean={} corrected={}",
        args.r#in, args.out, stats.codewords, stats.clean, stats.corrected
    );
    Ok(())
}

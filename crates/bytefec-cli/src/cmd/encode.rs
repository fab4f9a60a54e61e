use std::fs::File;
use std::io::{BufReader, BufWriter};

use anyhow::Context;
use bytefec_core::stream;
use clap::Args;

#[derive(Args)]
pub struct EncodeArgs {
    /// Input file to encode
    #[arg(long)]
    pub r#in: String,

    /// Output path for the codeword stream (exactly 2x the input size)
    #[arg(long)]
    pub out: String,
}

pub fn run(args: EncodeArgs) -> anyhow::Result<()> {
    let input = File::open(&args.r#in).with_context(|| format!("open {}", args.r#in))?;
    let output = File::create(&args.out).with_context(|| format!("create {}", args.out))?;

    let stats = stream::encode_stream(BufReader::new(input), BufWriter::new(output))?;

    eprintln!(
        "encode ok: in={} out={} bytes_in={} bytes_out={}",
        args.r#in, args.out, stats.bytes_in, stats.bytes_out
    );
    Ok(())
}

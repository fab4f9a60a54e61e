use bytefec_core::{classify, syndrome, SyndromeKind};
use clap::Args;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Encoded file to scan as a codeword stream
    #[arg(long)]
    pub r#in: String,

    /// Also report crc32 of the raw bytes
    #[arg(long, default_value_t = true)]
    pub crc: bool,
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.r#in)?;

    let mut clean = 0u64;
    let mut single_data = 0u64;
    let mut single_parity = 0u64;
    let mut double_pair = 0u64;
    let mut unresolved = 0u64;

    for pair in bytes.chunks_exact(2) {
        let cw = u16::from_be_bytes([pair[0], pair[1]]);
        match classify(syndrome(cw)) {
            SyndromeKind::Clean => clean += 1,
            SyndromeKind::SingleData => single_data += 1,
            SyndromeKind::SingleParity => single_parity += 1,
            SyndromeKind::DoublePair => double_pair += 1,
            SyndromeKind::Unresolved => unresolved += 1,
        }
    }

    let codewords = (bytes.len() / 2) as u64;

    eprintln!("--- analyze ---");
    eprintln!("file           = {}", args.r#in);
    eprintln!("bytes          = {}", bytes.len());
    eprintln!("codewords      = {}", codewords);
    eprintln!("clean          = {}", clean);
    eprintln!("single_data    = {}", single_data);
    eprintln!("single_parity  = {}", single_parity);
    eprintln!("double_pair    = {}", double_pair);
    eprintln!("unresolved     = {}", unresolved);
    eprintln!("damaged        = {}", codewords - clean);
    if bytes.len() % 2 != 0 {
        eprintln!("note: odd trailing byte present (decode drops it)");
    }
    if args.crc {
        eprintln!("crc32          = 0x{:08x}", crc32fast::hash(&bytes));
    }
    Ok(())
}

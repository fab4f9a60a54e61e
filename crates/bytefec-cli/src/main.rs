// crates/bytefec-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "bytefec-cli")]
#[command(about = "bytefec (16,8) FEC byte codec CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a file into a 2x codeword stream
    Encode(cmd::encode::EncodeArgs),

    /// Decode a codeword stream back to bytes, repairing bit errors
    Decode(cmd::decode::DecodeArgs),

    /// Census of an encoded stream (syndrome tallies, crc32)
    Analyze(cmd::analyze::AnalyzeArgs),

    /// Deterministically flip bits in an encoded stream (fault injection)
    Corrupt(cmd::corrupt::CorruptArgs),

    /// Self-check: table invariants plus exhaustive recovery sweeps
    Check(cmd::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Analyze(args) => cmd::analyze::run(args),
        Commands::Corrupt(args) => cmd::corrupt::run(args),
        Commands::Check(args) => cmd::check::run(args),
    }
}

use clap::Args;

#[derive(Args, Debug)]
pub struct CorruptArgs {
    /// Encoded file to damage
    #[arg(long)]
    pub r#in: String,

    /// Output path for the damaged stream
    #[arg(long)]
    pub out: String,

    /// Touch every Nth codeword (1 = all of them)
    #[arg(long, default_value_t = 1)]
    pub every: u64,

    /// Bits to flip per touched codeword (1 or 2)
    #[arg(long, default_value_t = 1)]
    pub bits: u8,

    /// LCG seed; the same seed reproduces the same damage
    #[arg(long, default_value_t = 0x5eed)]
    pub seed: u64,
}

fn lcg_next(x: &mut u64) -> u64 {
    // deterministic, not crypto
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
    *x
}

pub fn run(args: CorruptArgs) -> anyhow::Result<()> {
    if args.every == 0 {
        anyhow::bail!("--every must be >= 1");
    }
    if !(1..=2).contains(&args.bits) {
        anyhow::bail!("--bits must be 1 or 2");
    }

    let mut bytes = std::fs::read(&args.r#in)?;
    let mut seed = args.seed;

    let mut touched = 0u64;
    let mut flipped = 0u64;

    for (k, chunk) in bytes.chunks_exact_mut(2).enumerate() {
        if k as u64 % args.every != 0 {
            continue;
        }
        let mut cw = u16::from_be_bytes([chunk[0], chunk[1]]);
        let first = (lcg_next(&mut seed) >> 32) as u32 % 16;
        cw ^= 1u16 << first;
        flipped += 1;
        if args.bits == 2 {
            let mut second = (lcg_next(&mut seed) >> 32) as u32 % 16;
            while second == first {
                second = (lcg_next(&mut seed) >> 32) as u32 % 16;
            }
            cw ^= 1u16 << second;
            flipped += 1;
        }
        chunk.copy_from_slice(&cw.to_be_bytes());
        touched += 1;
    }

    std::fs::write(&args.out, &bytes)?;
    eprintln!(
        "corrupt ok: in={} out={} codewords_touched={} bits_flipped={} seed={}",
        args.r#in, args.out, touched, flipped, args.seed
    );
    Ok(())
}

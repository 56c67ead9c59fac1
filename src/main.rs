use bitpacker::BitPacker;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Pattern {
    Alternating,
    Ones,
    Zeros,
    Random,
}

/// Append a pattern of bits one at a time and print how each append changes its byte
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of bits to append
    #[arg(short, long, default_value_t = 32)]
    count: usize,

    /// Input pattern
    #[arg(short, long, value_enum, default_value_t = Pattern::Alternating)]
    pattern: Pattern,

    /// First value of the alternating pattern
    #[arg(short, long, default_value_t = true, action = clap::ArgAction::Set)]
    first: bool,

    /// Seed for the random pattern
    #[arg(short, long)]
    seed: Option<u64>,
}

fn inputs(args: &Args) -> Vec<bool> {
    match args.pattern {
        Pattern::Alternating => (0..args.count).map(|i| (i % 2 == 0) == args.first).collect(),
        Pattern::Ones => vec![true; args.count],
        Pattern::Zeros => vec![false; args.count],
        Pattern::Random => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            (0..args.count).map(|_| rng.gen()).collect()
        }
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    debug!("{:?}", args);

    let mut packer = BitPacker::with_capacity(args.count);
    for value in inputs(&args) {
        println!("{}", packer.append_bit_traced(value));
    }
    println!();

    for (i, byte) in packer.as_bytes().iter().enumerate() {
        println!("byte {:>4}: b:{:08b} d:{:>3}", i, byte, byte);
    }
    info!(
        "packed {} bits into {} bytes",
        packer.len(),
        packer.as_bytes().len()
    );
}

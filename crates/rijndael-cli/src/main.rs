//! Command-line driver for `rijndael-core`.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::{
    decrypt_block, encrypt_block, encrypt_block_traced, expand_key, Aes128, Aes128Key, Block,
    ExpandedKey, RoundTrace,
};

const DEMO_PLAINTEXT: Block = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
const DEMO_KEY: [u8; 16] = [50, 20, 46, 86, 67, 9, 70, 27, 75, 17, 51, 17, 4, 8, 6, 99];

/// AES-128 single-block CLI.
#[derive(Parser)]
#[command(name = "rijndael", version, author, about = "AES-128 single-block cipher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt and decrypt a fixed block, printing every intermediate value.
    Demo {
        /// Also print the state entering each round.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Print the 11 round keys derived from a key.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Encrypt one 16-byte block.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
        /// Also print the state entering each round.
        #[arg(long, default_value_t = false)]
        trace: bool,
    },
    /// Decrypt one 16-byte block.
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Verify the known-answer vector and random encrypt/decrypt round trips.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 1000)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Demo { trace } => cmd_demo(trace),
        Commands::Expand { key_hex } => cmd_expand(&key_hex),
        Commands::Enc {
            key_hex,
            block_hex,
            trace,
        } => cmd_enc(&key_hex, &block_hex, trace),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
    }
}

fn cmd_demo(trace: bool) -> Result<()> {
    let key = Aes128Key::from(DEMO_KEY);

    println!("\nExpanded Key :");
    print_expanded_key(&expand_key(&key));

    let (ciphertext, rounds) = encrypt_block_traced(&DEMO_PLAINTEXT, &key);
    let recovered = decrypt_block(&ciphertext, &key);

    println!("############ ORIGINAL PLAINTEXT ###########");
    print_matrix(&DEMO_PLAINTEXT);
    println!("\n\n################ CIPHERTEXT ###############");
    print_matrix(&ciphertext);
    println!("\n\n########### RECOVERED PLAINTEXT ###########");
    print_matrix(&recovered);

    if trace {
        println!();
        print_trace(&rounds);
    }
    if recovered != DEMO_PLAINTEXT {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn cmd_expand(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    for (round, round_key) in expand_key(&key).round_keys().enumerate() {
        println!("round {round:2}: {}", hex::encode(round_key));
    }
    Ok(())
}

fn cmd_enc(key_hex: &str, block_hex: &str, trace: bool) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex, "plaintext")?;
    let (ciphertext, rounds) = encrypt_block_traced(&block, &key);
    if trace {
        print_trace(&rounds);
    }
    println!("{}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex, "ciphertext")?;
    println!("{}", hex::encode(decrypt_block(&block, &key)));
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let expected = hex::decode("69c4e0d86a7b0430d8cdb78070b4c55a").context("decode vector")?;
    let key = parse_key_hex("000102030405060708090a0b0c0d0e0f")?;
    let block = parse_block_hex("00112233445566778899aabbccddeeff", "plaintext")?;
    if encrypt_block(&block, &key)[..] != expected[..] {
        bail!("FIPS-197 known-answer vector mismatch");
    }

    let mut rng = seeded_rng(seed);
    for sample in 0..samples {
        let mut key_bytes = [0u8; 16];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        rng.fill_bytes(&mut block);
        let cipher = Aes128::new(&Aes128Key::from(key_bytes));
        let ciphertext = cipher.encrypt_block(&block);
        if cipher.decrypt_block(&ciphertext) != block {
            bail!(
                "roundtrip mismatch on sample {sample}: key {} block {}",
                hex::encode(key_bytes),
                hex::encode(block)
            );
        }
    }
    println!("ok: known-answer vector and {samples} random samples");
    Ok(())
}

fn print_expanded_key(expanded: &ExpandedKey) {
    for round_key in expanded.round_keys() {
        let line: Vec<String> = round_key.iter().map(|b| format!("{b:02x}")).collect();
        println!("{}", line.join(" "));
    }
}

fn print_matrix(block: &Block) {
    for row in block.chunks_exact(4) {
        let line: String = row.iter().map(|value| format!("{value:3}   ")).collect();
        println!("{line}");
    }
}

fn print_trace(rounds: &[RoundTrace]) {
    for step in rounds {
        println!(
            "round {:2}: start {} key {}",
            step.round,
            hex::encode(step.start),
            hex::encode(step.round_key)
        );
    }
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice()).context("AES-128 key must be 16 bytes (32 hex characters)")
}

fn parse_block_hex(hex_str: &str, what: &'static str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| rijndael_core::Error::InvalidLength {
            context: what,
            expected: 16,
            got: bytes.len(),
        })
        .context("blocks are 16 bytes (32 hex characters)")
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_key_and_block() {
        let key = parse_key_hex(" 000102030405060708090a0b0c0d0e0f\n").unwrap();
        assert_eq!(key.0[15], 0x0f);
        let block = parse_block_hex("00112233445566778899aabbccddeeff", "plaintext").unwrap();
        assert_eq!(block[1], 0x11);
    }

    #[test]
    fn rejects_short_or_malformed_hex() {
        assert!(parse_key_hex("0001").is_err());
        assert!(parse_key_hex("zz").is_err());
        let err = parse_block_hex("00112233", "ciphertext").unwrap_err();
        let root = err.root_cause().to_string();
        assert_eq!(root, "invalid length for ciphertext: expected 16, got 4");
    }

    #[test]
    fn check_passes_with_seed() {
        cmd_check(16, Some(42)).unwrap();
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

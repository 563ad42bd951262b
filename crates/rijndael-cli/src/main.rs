//! Command-line interface for single-block Rijndael-256.

#![forbid(unsafe_code)]

use anyhow::{bail, ensure, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::{Args, Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::{trim_zero_padding, Rijndael256, BLOCK_SIZE};

/// Rijndael-256 (mcrypt-compatible) CLI.
#[derive(Parser)]
#[command(
    name = "rijndael256",
    version,
    author,
    about = "Single-block Rijndael-256 encryption (mcrypt compatible)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Key input, either raw text or hex.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeyArgs {
    /// Key as literal text (16, 24 or 32 bytes).
    #[arg(long, value_name = "TEXT")]
    key: Option<String>,
    /// Key as hex (32, 48 or 64 hex characters).
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt up to 32 bytes of text and print the block as base64.
    Enc {
        #[command(flatten)]
        key: KeyArgs,
        /// Plaintext; shorter input is zero-extended to 32 bytes.
        #[arg(long, value_name = "TEXT")]
        plaintext: String,
    },
    /// Decrypt a base64 block and print the plaintext.
    Dec {
        #[command(flatten)]
        key: KeyArgs,
        /// Ciphertext block as base64 (32 bytes once decoded).
        #[arg(long, value_name = "BASE64")]
        ciphertext: String,
        /// Print the full block as hex instead of trimming zero padding.
        #[arg(long, default_value_t = false)]
        keep_padding: bool,
    },
    /// Verify the built-in mcrypt known-answer vectors.
    Check,
    /// Run a local demo: random key and block, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// mcrypt `rijndael-256` known answers: key, plaintext, base64 ciphertext.
const KNOWN_ANSWERS: [(&str, &str, &str); 4] = [
    (
        "1234567890123456",
        "123",
        "Pd0dwZIwEvgxedRZNxBopvDWg1xbLrAwoh7RA/i1MW0=",
    ),
    (
        "1234567890123456",
        "26147368",
        "xy5WtslgZ7up7Fb2g+/F9XY1htilE74tVdjamnwlCBM=",
    ),
    (
        "123456789012345678901234",
        "26147368",
        "snoFT+U4A24MiX+IxzPQbbdNfG+3sPFwGxtQWvi+8vc=",
    ),
    (
        "12345678901234567890123456789012",
        "26147368",
        "hP79tLWK8PxnQrE6ZMbCN1aUILow7TykJgJ1uObTKLU=",
    ),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc { key, plaintext } => cmd_enc(&key, &plaintext),
        Commands::Dec {
            key,
            ciphertext,
            keep_padding,
        } => cmd_dec(&key, &ciphertext, keep_padding),
        Commands::Check => cmd_check(),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_enc(key: &KeyArgs, plaintext: &str) -> Result<()> {
    let cipher = build_cipher(key)?;
    println!("{}", encrypt_to_base64(&cipher, plaintext.as_bytes())?);
    Ok(())
}

fn cmd_dec(key: &KeyArgs, ciphertext: &str, keep_padding: bool) -> Result<()> {
    let cipher = build_cipher(key)?;
    let block = decrypt_from_base64(&cipher, ciphertext)?;
    if keep_padding {
        println!("{}", hex::encode(block));
    } else {
        println!("{}", String::from_utf8_lossy(trim_zero_padding(&block)));
    }
    Ok(())
}

fn cmd_check() -> Result<()> {
    for (key, plaintext, expected) in KNOWN_ANSWERS {
        let cipher = Rijndael256::new(key.as_bytes())
            .with_context(|| format!("build cipher for {}-byte key", key.len()))?;
        let actual = encrypt_to_base64(&cipher, plaintext.as_bytes())?;
        if actual != expected {
            bail!(
                "mismatch for {:?} key, plaintext {plaintext:?}: got {actual}, want {expected}",
                cipher.key_size()
            );
        }
        let block = decrypt_from_base64(&cipher, &actual)?;
        ensure!(
            trim_zero_padding(&block) == plaintext.as_bytes(),
            "round trip failed for {:?} key",
            cipher.key_size()
        );
        println!("ok   {:?} {plaintext:?} -> {actual}", cipher.key_size());
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 32];
    rng.fill_bytes(&mut key_bytes);
    let cipher = Rijndael256::new(&key_bytes).context("build demo cipher")?;

    let mut block = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut block);
    let plaintext_hex = hex::encode(block);

    cipher.encrypt_block(&mut block);
    let ciphertext_hex = hex::encode(block);

    cipher.decrypt_block(&mut block);
    let decrypted_hex = hex::encode(block);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", plaintext_hex);
    println!("ciphertext: {}", ciphertext_hex);
    println!("decrypted: {}", decrypted_hex);
    if decrypted_hex != plaintext_hex {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn build_cipher(args: &KeyArgs) -> Result<Rijndael256> {
    let bytes = match (&args.key, &args.key_hex) {
        (Some(text), None) => text.as_bytes().to_vec(),
        (None, Some(hex_str)) => hex::decode(hex_str.trim()).context("decode key hex")?,
        _ => bail!("exactly one of --key or --key-hex is required"),
    };
    Rijndael256::new(&bytes).context("build cipher")
}

fn encrypt_to_base64(cipher: &Rijndael256, plaintext: &[u8]) -> Result<String> {
    let mut block = [0u8; BLOCK_SIZE];
    cipher
        .encrypt(&mut block, plaintext)
        .context("encrypt plaintext")?;
    Ok(STANDARD.encode(block))
}

fn decrypt_from_base64(cipher: &Rijndael256, ciphertext: &str) -> Result<[u8; BLOCK_SIZE]> {
    let bytes = STANDARD
        .decode(ciphertext.trim())
        .context("decode ciphertext base64")?;
    let mut block = [0u8; BLOCK_SIZE];
    cipher
        .decrypt(&mut block, &bytes)
        .context("decrypt ciphertext")?;
    Ok(block)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use crypto_shim_core::primitives::{base64_decode_into, base64_encode_into, random_bytes, sha256};

mod hexfmt;

#[derive(Parser)]
#[command(name = "crypto-shim", version, about = "Exercise the crypto shim primitives")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate cryptographically secure random bytes
    Rand {
        /// Number of bytes
        #[arg(default_value_t = 32)]
        len: usize,
    },
    /// SHA-256 digest of a UTF-8 string
    Sha256 { input: String },
    /// Base64-encode a UTF-8 string
    Encode { input: String },
    /// Base64-decode; prints text when the result is UTF-8, hex otherwise
    Decode { input: String },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Rand { len } => {
            let mut buf = vec![0u8; len];
            random_bytes(&mut buf)?;
            println!("{}", hexfmt::format_bytes(&buf, 4));
        }
        Command::Sha256 { input } => {
            println!("{}", hexfmt::bytes_to_hex(&sha256(input.as_bytes())));
        }
        Command::Encode { input } => {
            let data = input.as_bytes();
            // 4 * ceil(n/3) plus the terminator
            let mut out = vec![0u8; (data.len() + 2) / 3 * 4 + 1];
            let n = base64_encode_into(data, &mut out)?;
            println!("{}", std::str::from_utf8(&out[..n])?);
        }
        Command::Decode { input } => {
            let mut out = vec![0u8; input.len() / 4 * 3 + 3];
            let n = base64_decode_into(&input, &mut out)?;
            match std::str::from_utf8(&out[..n]) {
                Ok(text) => println!("{text}"),
                Err(_) => println!("{}", hexfmt::format_bytes(&out[..n], 4)),
            }
        }
    }
    Ok(())
}

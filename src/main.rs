//! dstore CLI - developer tool for digest_store
//!
//! Computes digests and tokens, and wraps files in digest stores to show
//! how they would be retained.

use anyhow::Context;
use clap::{Parser, Subcommand};
use digest_store::{
    util, CompressedDigestStore, DigestStore, LazyDigestStore, StoreConfig, Zstd,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dstore")]
#[command(about = "Content-addressed blob store utilities")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Retention config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum RetentionArg {
    Auto,
    Compressed,
    Lazy,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the sha256 digest of a file, a string, or stdin
    Digest {
        /// File to digest (reads stdin when omitted)
        path: Option<PathBuf>,
        /// Digest this string instead of a file
        #[arg(short, long, conflicts_with = "path")]
        text: Option<String>,
    },

    /// Encode a string as lowercase base32
    Base32Encode {
        /// The string to encode
        text: String,
        /// Strip trailing padding
        #[arg(long)]
        no_padding: bool,
    },

    /// Decode a base32 token
    Base32Decode {
        /// The token to decode
        token: String,
    },

    /// Generate a secure 256-bit hex token
    RandomHex,

    /// Generate a non-secure random string
    RandomString {
        /// Exact length in bytes
        #[arg(short, long, conflicts_with_all = ["min", "max"])]
        len: Option<usize>,
        /// Minimum length (inclusive)
        #[arg(long, default_value = "8")]
        min: usize,
        /// Maximum length (exclusive)
        #[arg(long, default_value = "16")]
        max: usize,
    },

    /// Wrap a file in a digest store and describe it
    Inspect {
        /// The file holding the blob
        path: PathBuf,
        /// Media type label for the blob
        #[arg(short, long, default_value = "application/octet-stream")]
        media_type: String,
        /// Retention strategy
        #[arg(short, long, default_value = "auto")]
        retention: RetentionArg,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Digest { path, text } => {
            let (source, digest) = match (path, text) {
                (_, Some(text)) => ("text".to_string(), util::digest_str(&text)),
                (Some(path), None) => (path.display().to_string(), util::digest_path(&path)?),
                (None, None) => (
                    "stdin".to_string(),
                    util::digest_reader(io::stdin().lock()).context("Failed to read stdin")?,
                ),
            };
            output(
                &cli.format,
                &serde_json::json!({ "source": source, "digest": digest }),
            )?;
        }

        Commands::Base32Encode { text, no_padding } => {
            let encoded = util::encode_base32(&text, !no_padding)?;
            output(&cli.format, &serde_json::json!({ "encoded": encoded }))?;
        }

        Commands::Base32Decode { token } => {
            let decoded = util::decode_base32(&token)?;
            output(&cli.format, &serde_json::json!({ "decoded": decoded }))?;
        }

        Commands::RandomHex => {
            output(
                &cli.format,
                &serde_json::json!({ "token": util::random_256_hex() }),
            )?;
        }

        Commands::RandomString { len, min, max } => {
            let value = match len {
                Some(len) => util::random_string(len),
                None => util::random_string_between(min, max)?,
            };
            output(&cli.format, &serde_json::json!({ "value": value }))?;
        }

        Commands::Inspect {
            path,
            media_type,
            retention,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let store = inspect(&path, media_type, retention, &config)?;

            let content = store.bytes()?.unwrap_or_default();
            let verified = util::digest(&content) == store.digest();

            output(
                &cli.format,
                &serde_json::json!({
                    "descriptor": store.descriptor(),
                    "store": store.log_string(),
                    "verified": verified,
                }),
            )?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<StoreConfig> {
    match path {
        Some(path) => Ok(StoreConfig::load(path)?),
        None => Ok(StoreConfig::default()),
    }
}

fn inspect(
    path: &Path,
    media_type: String,
    retention: RetentionArg,
    config: &StoreConfig,
) -> anyhow::Result<Box<dyn DigestStore>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let digest = util::digest(&bytes);
    let size = bytes.len() as u64;

    let store: Box<dyn DigestStore> = match retention {
        RetentionArg::Auto => config
            .policy()
            .store(bytes, media_type, digest, Some(path))?,
        RetentionArg::Compressed => Box::new(CompressedDigestStore::with_codec(
            Zstd::new(config.compression_level),
            bytes,
            media_type,
            digest,
            size,
        )?),
        RetentionArg::Lazy => {
            Box::new(LazyDigestStore::from_path(path, media_type, digest).with_size(size))
        }
    };
    Ok(store)
}

fn output(format: &OutputFormat, value: &serde_json::Value) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
        OutputFormat::Text => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

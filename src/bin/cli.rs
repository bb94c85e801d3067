//! tokenreq CLI
//!
//! Encode, decode, and check Privacy Pass token requests from the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokenreq::protocol::{
    BASIC_PRIVATE_BLINDED_REQ_SIZE, BASIC_PUBLIC_BLINDED_REQ_SIZE, NAME_KEY_ID_SIZE,
    SIGNATURE_SIZE,
};
use tokenreq::vectors::{self, VectorKind};
use tokenreq::{
    BasicPrivateTokenRequest, BasicPublicTokenRequest, CodecConfig, RateLimitedTokenRequest,
    Result, TokenError, TokenRequest,
};
use tracing_subscriber::{fmt, EnvFilter};

/// tokenreq CLI
#[derive(Parser, Debug)]
#[command(name = "tokenreq")]
#[command(about = "Privacy Pass token request codec")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a hex-encoded token request and print its fields
    Decode {
        /// The encoded request
        encoded: String,

        /// Reject trailing bytes for every variant
        #[arg(long)]
        strict: bool,
    },

    /// Encode a token request and print it as hex
    Encode {
        #[command(subcommand)]
        request: EncodeCommands,
    },

    /// Work with JSON test-vector files
    Vectors {
        #[command(subcommand)]
        action: VectorCommands,
    },
}

#[derive(Subcommand, Debug)]
enum EncodeCommands {
    /// Basic private (VOPRF) request
    BasicPrivate {
        #[arg(short, long)]
        key_id: u8,

        /// 48-byte blinded request (hex)
        #[arg(short, long)]
        blinded: String,
    },

    /// Basic public (blind RSA) request
    BasicPublic {
        #[arg(short, long)]
        key_id: u8,

        /// 256-byte blinded request (hex)
        #[arg(short, long)]
        blinded: String,
    },

    /// Rate-limited request
    RateLimited {
        #[arg(short, long)]
        key_id: u8,

        /// 32-byte issuer name key ID (hex)
        #[arg(long)]
        name_key_id: String,

        /// Encrypted inner token request (hex, non-empty)
        #[arg(long)]
        encrypted: String,

        /// 96-byte signature (hex)
        #[arg(long)]
        signature: String,
    },
}

#[derive(Subcommand, Debug)]
enum VectorCommands {
    /// Decode and re-encode every token_request in a vector file
    Check {
        file: PathBuf,

        #[arg(long)]
        strict: bool,
    },

    /// Print a vector file as a fenced text block
    Format {
        file: PathBuf,

        /// Vector family; inferred from the file name when omitted
        #[arg(long)]
        kind: Option<VectorKind>,
    },
}

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tokenreq=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Decode { encoded, strict } => {
            let config = CodecConfig::builder().strict_trailing(strict).build();
            let bytes = hex::decode(encoded.trim())?;
            let request = TokenRequest::decode(&bytes, &config)?;
            print_request(&request);
        }
        Commands::Encode { request } => {
            let request = build_request(request)?;
            println!("{}", hex::encode(request.marshal()));
        }
        Commands::Vectors { action } => match action {
            VectorCommands::Check { file, strict } => {
                let config = CodecConfig::builder().strict_trailing(strict).build();
                let loaded = vectors::load_vectors(&file)?;
                let checked = vectors::check_vectors(&loaded, &config)?;
                tracing::info!("{}: {} token requests verified", file.display(), checked);
                println!("ok ({} of {} vectors)", checked, loaded.len());
            }
            VectorCommands::Format { file, kind } => {
                let kind = match kind {
                    Some(kind) => kind,
                    None => file
                        .file_name()
                        .and_then(|name| name.to_str())
                        .and_then(VectorKind::from_file_name)
                        .ok_or_else(|| {
                            TokenError::Vectors(format!(
                                "cannot infer vector kind from {}",
                                file.display()
                            ))
                        })?,
                };
                let loaded = vectors::load_vectors(&file)?;
                println!("{}", vectors::format_vectors(&loaded, kind));
            }
        },
    }
    Ok(())
}

fn build_request(command: EncodeCommands) -> Result<TokenRequest> {
    let request: TokenRequest = match command {
        EncodeCommands::BasicPrivate { key_id, blinded } => {
            let blinded = fixed_hex::<BASIC_PRIVATE_BLINDED_REQ_SIZE>("blinded_req", &blinded)?;
            BasicPrivateTokenRequest::new(key_id, blinded).into()
        }
        EncodeCommands::BasicPublic { key_id, blinded } => {
            let blinded = fixed_hex::<BASIC_PUBLIC_BLINDED_REQ_SIZE>("blinded_req", &blinded)?;
            BasicPublicTokenRequest::new(key_id, blinded).into()
        }
        EncodeCommands::RateLimited {
            key_id,
            name_key_id,
            encrypted,
            signature,
        } => RateLimitedTokenRequest::new(
            key_id,
            fixed_hex::<NAME_KEY_ID_SIZE>("name_key_id", &name_key_id)?,
            hex::decode(encrypted.trim())?,
            fixed_hex::<SIGNATURE_SIZE>("signature", &signature)?,
        )?
        .into(),
    };
    Ok(request)
}

/// Decode hex into an exactly-sized field
fn fixed_hex<const N: usize>(field: &'static str, input: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(input.trim())?;
    if bytes.len() > N {
        return Err(TokenError::FieldTooLong {
            field,
            len: bytes.len(),
            max: N,
        });
    }
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| TokenError::TruncatedInput {
            field,
            expected: N,
            available: bytes.len(),
        })
}

fn print_request(request: &TokenRequest) {
    println!("type:          {}", request.token_type());
    println!("token_key_id:  {}", request.token_key_id());
    match request {
        TokenRequest::BasicPrivate(r) => {
            println!("blinded_req:   {}", hex::encode(r.blinded_req()));
        }
        TokenRequest::BasicPublic(r) => {
            println!("blinded_req:   {}", hex::encode(r.blinded_req()));
        }
        TokenRequest::RateLimited(r) => {
            println!("name_key_id:   {}", hex::encode(r.name_key_id()));
            println!("encrypted:     {}", hex::encode(r.encrypted_token_request()));
            println!("signature:     {}", hex::encode(r.signature()));
        }
    }
    println!("length:        {}", request.marshal().len());
}

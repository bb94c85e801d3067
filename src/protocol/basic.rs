//! Basic token requests
//!
//! Private (VOPRF) and public (blind RSA) issuance share one layout and
//! differ only in tag and blinded request size.
//!
//! ```text
//! ┌───────────┬──────────┬──────────────────────────────┐
//! │ Type (2)  │ KeyID(1) │   Blinded Request (N)        │
//! └───────────┴──────────┴──────────────────────────────┘
//! ```

use std::fmt;
use std::sync::OnceLock;

use bytes::Bytes;

use crate::config::CodecConfig;
use crate::error::Result;

use super::buffer::{WireReader, WireWriter};
use super::codec::{decode_logged, expect_token_type, TokenRequestCodec};
use super::token_type::{TOKEN_KEY_ID_SIZE, TOKEN_TYPE_SIZE};
use super::TokenType;

/// Blinded request size for basic private requests (serialized VOPRF element)
pub const BASIC_PRIVATE_BLINDED_REQ_SIZE: usize = 48;

/// Blinded request size for basic public requests (RSA-2048 blind message)
pub const BASIC_PUBLIC_BLINDED_REQ_SIZE: usize = 256;

macro_rules! basic_token_request {
    ($(#[$meta:meta])* $name:ident, $token_type:expr, $size:expr) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            token_key_id: u8,
            blinded_req: [u8; $size],
            raw: OnceLock<Bytes>,
        }

        impl $name {
            pub fn new(token_key_id: u8, blinded_req: [u8; $size]) -> Self {
                Self {
                    token_key_id,
                    blinded_req,
                    raw: OnceLock::new(),
                }
            }

            pub fn token_type(&self) -> TokenType {
                Self::TOKEN_TYPE
            }

            pub fn token_key_id(&self) -> u8 {
                self.token_key_id
            }

            pub fn blinded_req(&self) -> &[u8; $size] {
                &self.blinded_req
            }

            fn encode(&self) -> Bytes {
                let mut writer =
                    WireWriter::with_capacity(TOKEN_TYPE_SIZE + TOKEN_KEY_ID_SIZE + $size);
                writer.put_u16(Self::TOKEN_TYPE.as_u16());
                writer.put_u8(self.token_key_id);
                writer.put_slice(&self.blinded_req);
                writer.freeze()
            }
        }

        impl TokenRequestCodec for $name {
            const TOKEN_TYPE: TokenType = $token_type;

            fn marshal(&self) -> &[u8] {
                self.raw.get_or_init(|| self.encode())
            }

            fn unmarshal_with(data: &[u8], config: &CodecConfig) -> Result<Self> {
                decode_logged(Self::TOKEN_TYPE, data, |data| {
                    let mut reader = WireReader::new(data);
                    expect_token_type(&mut reader, Self::TOKEN_TYPE)?;
                    let token_key_id = reader.read_u8("token_key_id")?;
                    let blinded_req = reader.read_array::<{ $size }>("blinded_req")?;

                    let consumed = data.len() - reader.remaining();
                    if config.strict_trailing {
                        reader.finish()?;
                    }

                    Ok(Self {
                        token_key_id,
                        blinded_req,
                        raw: OnceLock::from(Bytes::copy_from_slice(&data[..consumed])),
                    })
                })
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.token_key_id == other.token_key_id && self.blinded_req == other.blinded_req
            }
        }

        impl Eq for $name {}

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("token_key_id", &self.token_key_id)
                    .field("blinded_req", &hex::encode(self.blinded_req))
                    .finish()
            }
        }
    };
}

basic_token_request!(
    /// Privately verifiable basic request (type 0x0001)
    BasicPrivateTokenRequest,
    TokenType::BasicPrivate,
    BASIC_PRIVATE_BLINDED_REQ_SIZE
);

basic_token_request!(
    /// Publicly verifiable basic request (type 0x0002)
    BasicPublicTokenRequest,
    TokenType::BasicPublic,
    BASIC_PUBLIC_BLINDED_REQ_SIZE
);

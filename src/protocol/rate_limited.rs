//! Rate-limited token request
//!
//! Carries an encrypted inner token request for the issuer, addressed by
//! the issuer name key, and a signature from the client's request key.
//!
//! ```text
//! ┌──────────┬──────────┬──────────────┬─────────┬────────────────┬───────────────┐
//! │ Type (2) │ KeyID(1) │ NameKeyID(32)│ Len (2) │ Encrypted(Len) │ Signature(96) │
//! └──────────┴──────────┴──────────────┴─────────┴────────────────┴───────────────┘
//! ```
//!
//! The encrypted request must be non-empty and nothing may follow the
//! signature.

use std::fmt;
use std::sync::OnceLock;

use bytes::Bytes;

use crate::config::CodecConfig;
use crate::error::{Result, TokenError};

use super::buffer::{WireReader, WireWriter, LENGTH_PREFIX_SIZE};
use super::codec::{decode_logged, expect_token_type, TokenRequestCodec};
use super::token_type::{TOKEN_KEY_ID_SIZE, TOKEN_TYPE_SIZE};
use super::TokenType;

/// Size of the issuer name key ID
pub const NAME_KEY_ID_SIZE: usize = 32;

/// Size of the request signature
pub const SIGNATURE_SIZE: usize = 96;

/// Largest encrypted request a 16-bit length prefix can carry
pub const MAX_ENCRYPTED_REQUEST_SIZE: usize = u16::MAX as usize;

#[derive(Clone)]
pub struct RateLimitedTokenRequest {
    token_key_id: u8,
    name_key_id: [u8; NAME_KEY_ID_SIZE],
    encrypted_token_request: Bytes,
    signature: [u8; SIGNATURE_SIZE],
    raw: OnceLock<Bytes>,
}

impl RateLimitedTokenRequest {
    /// Build a request from its parts
    ///
    /// Fails if the encrypted request is empty or does not fit a 16-bit
    /// length prefix.
    pub fn new(
        token_key_id: u8,
        name_key_id: [u8; NAME_KEY_ID_SIZE],
        encrypted_token_request: impl Into<Bytes>,
        signature: [u8; SIGNATURE_SIZE],
    ) -> Result<Self> {
        let encrypted_token_request = encrypted_token_request.into();
        validate_encrypted_len(encrypted_token_request.len())?;

        Ok(Self {
            token_key_id,
            name_key_id,
            encrypted_token_request,
            signature,
            raw: OnceLock::new(),
        })
    }

    pub fn token_type(&self) -> TokenType {
        Self::TOKEN_TYPE
    }

    pub fn token_key_id(&self) -> u8 {
        self.token_key_id
    }

    pub fn name_key_id(&self) -> &[u8; NAME_KEY_ID_SIZE] {
        &self.name_key_id
    }

    pub fn encrypted_token_request(&self) -> &Bytes {
        &self.encrypted_token_request
    }

    pub fn signature(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.signature
    }

    /// Total wire size
    pub fn encoded_len(&self) -> usize {
        TOKEN_TYPE_SIZE
            + TOKEN_KEY_ID_SIZE
            + NAME_KEY_ID_SIZE
            + LENGTH_PREFIX_SIZE
            + self.encrypted_token_request.len()
            + SIGNATURE_SIZE
    }

    fn encode(&self) -> Bytes {
        let mut writer = WireWriter::with_capacity(self.encoded_len());
        writer.put_u16(Self::TOKEN_TYPE.as_u16());
        writer.put_u8(self.token_key_id);
        writer.put_slice(&self.name_key_id);
        writer.put_u16_prefixed(&self.encrypted_token_request);
        writer.put_slice(&self.signature);
        writer.freeze()
    }
}

fn validate_encrypted_len(len: usize) -> Result<()> {
    if len == 0 {
        return Err(TokenError::EmptyVariableField {
            field: "encrypted_token_request",
        });
    }
    if len > MAX_ENCRYPTED_REQUEST_SIZE {
        return Err(TokenError::FieldTooLong {
            field: "encrypted_token_request",
            len,
            max: MAX_ENCRYPTED_REQUEST_SIZE,
        });
    }
    Ok(())
}

impl TokenRequestCodec for RateLimitedTokenRequest {
    const TOKEN_TYPE: TokenType = TokenType::RateLimited;

    fn marshal(&self) -> &[u8] {
        self.raw.get_or_init(|| self.encode())
    }

    // Trailing bytes are rejected here regardless of `config`.
    fn unmarshal_with(data: &[u8], _config: &CodecConfig) -> Result<Self> {
        decode_logged(Self::TOKEN_TYPE, data, |data| {
            let mut reader = WireReader::new(data);
            expect_token_type(&mut reader, Self::TOKEN_TYPE)?;
            let token_key_id = reader.read_u8("token_key_id")?;
            let name_key_id = reader.read_array::<NAME_KEY_ID_SIZE>("name_key_id")?;

            let encrypted = reader.read_u16_prefixed("encrypted_token_request")?;
            if encrypted.is_empty() {
                return Err(TokenError::EmptyVariableField {
                    field: "encrypted_token_request",
                });
            }
            let encrypted_token_request = Bytes::copy_from_slice(encrypted);

            let signature = reader.read_array::<SIGNATURE_SIZE>("signature")?;
            reader.finish()?;

            Ok(Self {
                token_key_id,
                name_key_id,
                encrypted_token_request,
                signature,
                raw: OnceLock::from(Bytes::copy_from_slice(data)),
            })
        })
    }
}

impl PartialEq for RateLimitedTokenRequest {
    fn eq(&self, other: &Self) -> bool {
        self.token_key_id == other.token_key_id
            && self.name_key_id == other.name_key_id
            && self.encrypted_token_request == other.encrypted_token_request
            && self.signature == other.signature
    }
}

impl Eq for RateLimitedTokenRequest {}

impl fmt::Debug for RateLimitedTokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RateLimitedTokenRequest")
            .field("token_key_id", &self.token_key_id)
            .field("name_key_id", &hex::encode(self.name_key_id))
            .field(
                "encrypted_token_request",
                &hex::encode(&self.encrypted_token_request),
            )
            .field("signature", &hex::encode(self.signature))
            .finish()
    }
}

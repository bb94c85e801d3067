//! Token request codec
//!
//! The contract shared by every token request variant, plus the closed
//! [`TokenRequest`] sum type that dispatches on the leading type tag.
//!
//! ## Decode Shape
//! ```text
//! ┌───────────┬──────────┬──────────────────────────────┐
//! │ Type (2)  │ KeyID(1) │   Variant fields ...         │
//! └───────────┴──────────┴──────────────────────────────┘
//! ```

use crate::config::CodecConfig;
use crate::error::{Result, TokenError};

use super::buffer::WireReader;
use super::{BasicPrivateTokenRequest, BasicPublicTokenRequest, RateLimitedTokenRequest, TokenType};

/// Serialize/deserialize contract implemented by each variant
pub trait TokenRequestCodec: Sized {
    /// Tag this variant owns on the wire
    const TOKEN_TYPE: TokenType;

    /// Wire encoding of this request
    ///
    /// Computed on first call and cached; later calls return the same bytes.
    fn marshal(&self) -> &[u8];

    /// Parse a request of this variant with explicit decoder settings
    fn unmarshal_with(data: &[u8], config: &CodecConfig) -> Result<Self>;

    /// Parse a request of this variant with default decoder settings
    fn unmarshal(data: &[u8]) -> Result<Self> {
        Self::unmarshal_with(data, &CodecConfig::default())
    }

    /// Boolean-style boundary: any malformed input yields `None`
    fn parse(data: &[u8]) -> Option<Self> {
        Self::unmarshal(data).ok()
    }
}

/// Read the leading tag without consuming anything
pub fn peek_token_type(data: &[u8]) -> Result<TokenType> {
    let tag = WireReader::new(data).read_u16("token_type")?;
    TokenType::from_u16(tag)
}

/// Consume the leading tag and require it to be `expected`
pub(crate) fn expect_token_type(reader: &mut WireReader<'_>, expected: TokenType) -> Result<()> {
    let found = reader.read_u16("token_type")?;
    if found != expected.as_u16() {
        return Err(TokenError::TypeMismatch { expected, found });
    }
    Ok(())
}

/// Run a variant decoder and log the rejection reason on failure
pub(crate) fn decode_logged<T>(
    token_type: TokenType,
    data: &[u8],
    decode: impl FnOnce(&[u8]) -> Result<T>,
) -> Result<T> {
    tracing::trace!("Decoding {} request from {} bytes", token_type, data.len());
    decode(data).map_err(|e| {
        tracing::debug!("Rejected {} request ({} bytes): {}", token_type, data.len(), e);
        e
    })
}

// =============================================================================
// Sum Type
// =============================================================================

/// Any token request, tagged by variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRequest {
    BasicPrivate(BasicPrivateTokenRequest),
    BasicPublic(BasicPublicTokenRequest),
    RateLimited(RateLimitedTokenRequest),
}

impl TokenRequest {
    /// Decode a request of whichever variant its tag names
    pub fn decode(data: &[u8], config: &CodecConfig) -> Result<Self> {
        let token_type = peek_token_type(data).map_err(|e| {
            tracing::debug!("Rejected token request ({} bytes): {}", data.len(), e);
            e
        })?;

        match token_type {
            TokenType::BasicPrivate => {
                BasicPrivateTokenRequest::unmarshal_with(data, config).map(Self::BasicPrivate)
            }
            TokenType::BasicPublic => {
                BasicPublicTokenRequest::unmarshal_with(data, config).map(Self::BasicPublic)
            }
            TokenType::RateLimited => {
                RateLimitedTokenRequest::unmarshal_with(data, config).map(Self::RateLimited)
            }
        }
    }

    pub fn token_type(&self) -> TokenType {
        match self {
            TokenRequest::BasicPrivate(_) => TokenType::BasicPrivate,
            TokenRequest::BasicPublic(_) => TokenType::BasicPublic,
            TokenRequest::RateLimited(_) => TokenType::RateLimited,
        }
    }

    pub fn token_key_id(&self) -> u8 {
        match self {
            TokenRequest::BasicPrivate(r) => r.token_key_id(),
            TokenRequest::BasicPublic(r) => r.token_key_id(),
            TokenRequest::RateLimited(r) => r.token_key_id(),
        }
    }

    pub fn marshal(&self) -> &[u8] {
        match self {
            TokenRequest::BasicPrivate(r) => r.marshal(),
            TokenRequest::BasicPublic(r) => r.marshal(),
            TokenRequest::RateLimited(r) => r.marshal(),
        }
    }
}

impl From<BasicPrivateTokenRequest> for TokenRequest {
    fn from(request: BasicPrivateTokenRequest) -> Self {
        TokenRequest::BasicPrivate(request)
    }
}

impl From<BasicPublicTokenRequest> for TokenRequest {
    fn from(request: BasicPublicTokenRequest) -> Self {
        TokenRequest::BasicPublic(request)
    }
}

impl From<RateLimitedTokenRequest> for TokenRequest {
    fn from(request: RateLimitedTokenRequest) -> Self {
        TokenRequest::RateLimited(request)
    }
}

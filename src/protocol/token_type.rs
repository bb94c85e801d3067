//! Token type definitions
//!
//! The 16-bit tag that leads every token request on the wire.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TokenError};

/// Size of the type tag on the wire
pub const TOKEN_TYPE_SIZE: usize = 2;

/// Size of the token key ID on the wire
pub const TOKEN_KEY_ID_SIZE: usize = 1;

/// Token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TokenType {
    /// Privately verifiable (VOPRF) basic issuance
    BasicPrivate = 0x0001,

    /// Publicly verifiable (blind RSA) basic issuance
    BasicPublic = 0x0002,

    /// Rate-limited issuance
    RateLimited = 0x0003,
}

impl TokenType {
    /// All known token types, in tag order
    pub const ALL: [TokenType; 3] = [
        TokenType::BasicPrivate,
        TokenType::BasicPublic,
        TokenType::RateLimited,
    ];

    /// Map a wire tag to a token type
    pub fn from_u16(value: u16) -> Result<Self> {
        match value {
            0x0001 => Ok(TokenType::BasicPrivate),
            0x0002 => Ok(TokenType::BasicPublic),
            0x0003 => Ok(TokenType::RateLimited),
            other => Err(TokenError::UnknownTokenType(other)),
        }
    }

    /// The wire tag
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Total wire size of a request of this type, when it is fixed
    pub fn request_len(self) -> Option<usize> {
        match self {
            TokenType::BasicPrivate => Some(
                TOKEN_TYPE_SIZE + TOKEN_KEY_ID_SIZE + super::BASIC_PRIVATE_BLINDED_REQ_SIZE,
            ),
            TokenType::BasicPublic => Some(
                TOKEN_TYPE_SIZE + TOKEN_KEY_ID_SIZE + super::BASIC_PUBLIC_BLINDED_REQ_SIZE,
            ),
            TokenType::RateLimited => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            TokenType::BasicPrivate => "basic-private",
            TokenType::BasicPublic => "basic-public",
            TokenType::RateLimited => "rate-limited",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04x})", self.name(), self.as_u16())
    }
}

impl FromStr for TokenType {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        TokenType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| TokenError::UnknownName {
                kind: "token type",
                name: s.to_string(),
            })
    }
}

//! Protocol Module
//!
//! Wire encoding for Privacy Pass token requests. Big-endian throughout,
//! one message per call, no framing beyond what each variant defines.
//!
//! ## Token Request Formats
//!
//! ### Basic Private (0x0001)
//! ```text
//! ┌───────────┬──────────┬──────────────────────────────┐
//! │ Type (2)  │ KeyID(1) │   Blinded Request (48)       │
//! └───────────┴──────────┴──────────────────────────────┘
//! ```
//!
//! ### Basic Public (0x0002)
//! ```text
//! ┌───────────┬──────────┬──────────────────────────────┐
//! │ Type (2)  │ KeyID(1) │   Blinded Request (256)      │
//! └───────────┴──────────┴──────────────────────────────┘
//! ```
//!
//! ### Rate Limited (0x0003)
//! ```text
//! ┌──────────┬──────────┬──────────────┬─────────┬────────────────┬───────────────┐
//! │ Type (2) │ KeyID(1) │ NameKeyID(32)│ Len (2) │ Encrypted(Len) │ Signature(96) │
//! └──────────┴──────────┴──────────────┴─────────┴────────────────┴───────────────┘
//! ```
//!
//! Blob contents are opaque here: only lengths and presence are checked.

pub mod buffer;
mod token_type;
mod codec;
mod basic;
mod rate_limited;

pub use token_type::{TokenType, TOKEN_KEY_ID_SIZE, TOKEN_TYPE_SIZE};
pub use codec::{peek_token_type, TokenRequest, TokenRequestCodec};
pub use basic::{
    BasicPrivateTokenRequest, BasicPublicTokenRequest, BASIC_PRIVATE_BLINDED_REQ_SIZE,
    BASIC_PUBLIC_BLINDED_REQ_SIZE,
};
pub use rate_limited::{
    RateLimitedTokenRequest, MAX_ENCRYPTED_REQUEST_SIZE, NAME_KEY_ID_SIZE, SIGNATURE_SIZE,
};

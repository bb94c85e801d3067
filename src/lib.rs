//! # tokenreq
//!
//! Wire codec for Privacy Pass token requests:
//! - Basic private (VOPRF) requests
//! - Basic public (blind RSA) requests
//! - Rate-limited requests with an encrypted inner request and signature
//! - Strict rejection of truncated, mistagged, or over-long input
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Issuance protocol handler                    │
//! │                (HTTP bodies, envelopes)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ bytes
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    TokenRequest                              │
//! │              (dispatch by 16-bit tag)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!       ┌───────────────┼────────────────┐
//!       ▼               ▼                ▼
//! ┌────────────┐ ┌────────────┐ ┌──────────────┐
//! │BasicPrivate│ │BasicPublic │ │ RateLimited  │
//! └─────┬──────┘ └─────┬──────┘ └──────┬───────┘
//!       └──────────────┼───────────────┘
//!                      ▼
//!             ┌─────────────────┐
//!             │ WireReader /    │
//!             │ WireWriter      │
//!             └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod vectors;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{TokenError, Result};
pub use config::CodecConfig;
pub use protocol::{
    BasicPrivateTokenRequest, BasicPublicTokenRequest, RateLimitedTokenRequest, TokenRequest,
    TokenRequestCodec, TokenType,
};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of tokenreq
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Test vectors
//!
//! Loading, checking, and formatting the JSON issuance test vectors that
//! accompany the protocol drafts. Each file is an array of objects whose
//! values are hex strings.
//!
//! Formatted output is a `~~~` fenced block, one `key: value` line per
//! present key (wrapped at 72 columns), entries separated by a blank line.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CodecConfig;
use crate::error::{Result, TokenError};
use crate::protocol::TokenRequest;

/// Column limit for formatted vector lines
pub const WRAP_WIDTH: usize = 72;

/// One test vector entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestVector {
    /// Hex-encoded token request, if the vector carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_request: Option<String>,

    /// Every other key, kept verbatim
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl TestVector {
    /// Value of `key` as it appears in formatted output
    pub fn get(&self, key: &str) -> Option<String> {
        if key == "token_request" {
            return self.token_request.clone();
        }
        self.fields.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Vector file families and their key order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    Ed25519Blinding,
    EcdsaBlinding,
    BasicIssuance,
    BasicPrivateIssuance,
}

impl VectorKind {
    /// Keys printed for this family, in order
    pub fn ordered_keys(self) -> &'static [&'static str] {
        match self {
            VectorKind::Ed25519Blinding | VectorKind::EcdsaBlinding => {
                &["skS", "pkS", "skB", "pkB", "pkR", "message", "signature"]
            }
            VectorKind::BasicIssuance => &[
                "skS",
                "pkS",
                "challenge",
                "nonce",
                "blind",
                "salt",
                "token_request",
                "token_response",
                "token",
            ],
            VectorKind::BasicPrivateIssuance => &[
                "skS",
                "pkS",
                "challenge",
                "nonce",
                "blind",
                "token_request",
                "token_response",
                "token",
            ],
        }
    }

    /// Infer the family from a vector file name
    pub fn from_file_name(name: &str) -> Option<Self> {
        [
            ("ed25519-blinding", VectorKind::Ed25519Blinding),
            ("ecdsa-blinding", VectorKind::EcdsaBlinding),
            ("basic-issuance", VectorKind::BasicIssuance),
            ("basic-private-issuance", VectorKind::BasicPrivateIssuance),
        ]
        .into_iter()
        .find(|(marker, _)| name.contains(marker))
        .map(|(_, kind)| kind)
    }
}

impl FromStr for VectorKind {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ed25519-blinding" => Ok(VectorKind::Ed25519Blinding),
            "ecdsa-blinding" => Ok(VectorKind::EcdsaBlinding),
            "basic-issuance" => Ok(VectorKind::BasicIssuance),
            "basic-private-issuance" => Ok(VectorKind::BasicPrivateIssuance),
            other => Err(TokenError::UnknownName {
                kind: "vector kind",
                name: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Parse a JSON array of vectors
pub fn parse_vectors(json: &str) -> Result<Vec<TestVector>> {
    serde_json::from_str(json).map_err(|e| TokenError::Vectors(e.to_string()))
}

/// Read and parse a vector file
pub fn load_vectors(path: impl AsRef<Path>) -> Result<Vec<TestVector>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let vectors = parse_vectors(&json)?;
    tracing::debug!("Loaded {} vectors from {}", vectors.len(), path.display());
    Ok(vectors)
}

// =============================================================================
// Checking
// =============================================================================

/// Decode a vector's token request and confirm it re-encodes identically
pub fn check_vector(vector: &TestVector, config: &CodecConfig) -> Result<TokenRequest> {
    let encoded = vector
        .token_request
        .as_deref()
        .ok_or_else(|| TokenError::Vectors("vector has no token_request".to_string()))?;
    let bytes = hex::decode(encoded)?;

    let request = TokenRequest::decode(&bytes, config)?;
    if request.marshal() != bytes.as_slice() {
        return Err(TokenError::Vectors(format!(
            "re-encoded {} request differs from vector ({} vs {} bytes)",
            request.token_type(),
            request.marshal().len(),
            bytes.len()
        )));
    }
    Ok(request)
}

/// Check every vector that carries a token request
///
/// Returns the number of vectors checked.
pub fn check_vectors(vectors: &[TestVector], config: &CodecConfig) -> Result<usize> {
    let mut checked = 0;
    for (index, vector) in vectors.iter().enumerate() {
        if vector.token_request.is_none() {
            continue;
        }
        check_vector(vector, config).map_err(|e| {
            TokenError::Vectors(format!("vector {}: {}", index, e))
        })?;
        checked += 1;
    }
    Ok(checked)
}

// =============================================================================
// Formatting
// =============================================================================

/// Render vectors as a fenced block in `kind`'s key order
pub fn format_vectors(vectors: &[TestVector], kind: VectorKind) -> String {
    let mut out = String::from("~~~\n");
    for vector in vectors {
        for key in kind.ordered_keys() {
            if let Some(value) = vector.get(key) {
                for line in wrap_line(&format!("{}: {}", key, value), WRAP_WIDTH) {
                    out.push_str(&line);
                    out.push('\n');
                }
            }
        }
        out.push('\n');
    }
    out.push_str("~~~\n");
    out
}

/// Greedy word wrap; words wider than `width` are split across lines
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let word_len = word.chars().count();
            let sep = usize::from(current_len > 0);

            if current_len + sep + word_len <= width {
                if sep == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_len += sep + word_len;
                break;
            }

            if word_len <= width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                continue;
            }

            let space_left = width.saturating_sub(current_len + sep);
            if space_left == 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
                continue;
            }

            let split = word
                .char_indices()
                .nth(space_left)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(&word[..split]);
            lines.push(std::mem::take(&mut current));
            current_len = 0;
            word = &word[split..];
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

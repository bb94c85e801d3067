//! Configuration for tokenreq
//!
//! Decoder strictness settings with sensible defaults.

/// Decoder configuration shared by all token request variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Reject trailing bytes after the basic variants' last field.
    ///
    /// Rate-limited requests always reject trailing bytes regardless of
    /// this setting.
    pub strict_trailing: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            strict_trailing: false,
        }
    }
}

impl CodecConfig {
    /// Create a new config builder
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::default()
    }

    /// Config that rejects trailing bytes for every variant
    pub fn strict() -> Self {
        Self::builder().strict_trailing(true).build()
    }
}

/// Builder for CodecConfig
#[derive(Default)]
pub struct CodecConfigBuilder {
    config: CodecConfig,
}

impl CodecConfigBuilder {
    /// Set trailing-byte strictness for the basic variants
    pub fn strict_trailing(mut self, strict: bool) -> Self {
        self.config.strict_trailing = strict;
        self
    }

    pub fn build(self) -> CodecConfig {
        self.config
    }
}

//! Credential redaction for log and error text.

use std::sync::LazyLock;

use regex::Regex;

// Match GitHub classic tokens: ghp_..., gho_..., ghs_... etc.
static GITHUB_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"gh[pousr]_[A-Za-z0-9]{20,}").expect("valid token pattern"));

// Match fine-grained personal access tokens
static GITHUB_PAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github_pat_[A-Za-z0-9_]{20,}").expect("valid PAT pattern"));

// Match `token <value>` / `Bearer <value>` as sent in Authorization headers
static AUTH_SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(token|bearer)\s+[A-Za-z0-9_\-\.]{8,}").expect("valid scheme pattern")
});

/// Redacts API credentials from text before it is logged or printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretScrubber;

impl SecretScrubber {
    /// Create a scrubber; the patterns are shared statics.
    pub const fn new() -> Self {
        Self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let scrubbed = AUTH_SCHEME.replace_all(message, "$1 [REDACTED]");
        let scrubbed = GITHUB_PAT.replace_all(&scrubbed, "[TOKEN_REDACTED]");
        GITHUB_TOKEN
            .replace_all(&scrubbed, "[TOKEN_REDACTED]")
            .into_owned()
    }
}

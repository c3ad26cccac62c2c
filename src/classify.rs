//! Filename grammars for coverage output files.
//!
//! Two fixed shapes are recognized, shared with whatever wrote the files:
//!
//! ```text
//! <meta-prefix>.<hash>
//! <counter-prefix>.<hash>.<pid>.<sequence>
//! ```
//!
//! `<hash>` is a 128-bit digest as 32 lowercase hex characters, `<pid>` and
//! `<sequence>` are unsigned decimals. Anything else is [`Classified::Unrecognized`].

use std::fmt;

use crate::error::PodError;

/// Prefix of meta-data file names unless configured otherwise.
pub const DEFAULT_META_PREFIX: &str = "covmeta";

/// Prefix of counter-data file names unless configured otherwise.
pub const DEFAULT_COUNTER_PREFIX: &str = "covcounters";

// ---------------------------------------------------------------------------
// HashTag
// ---------------------------------------------------------------------------

/// The content-derived digest that binds counter files to their meta file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashTag([u8; 16]);

impl HashTag {
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Parse exactly 32 lowercase hex characters.
    pub fn from_hex(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 32 {
            return None;
        }

        let mut out = [0u8; 16];
        for (slot, pair) in out.iter_mut().zip(bytes.chunks_exact(2)) {
            *slot = (nibble(pair[0])? << 4) | nibble(pair[1])?;
        }
        Some(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for HashTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

fn nibble(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Classified
// ---------------------------------------------------------------------------

/// What a file name turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classified {
    /// `<meta-prefix>.<hash>`
    Meta(HashTag),

    /// `<counter-prefix>.<hash>.<pid>.<sequence>`
    Counter {
        tag:      HashTag,
        pid:      u64,
        sequence: u64,
    },

    /// Not a coverage file. Skipped silently.
    Unrecognized,
}

// ---------------------------------------------------------------------------
// FileNaming
// ---------------------------------------------------------------------------

/// The pair of prefixes that defines both grammars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNaming {
    meta_prefix:    String,
    counter_prefix: String,
}

impl Default for FileNaming {
    fn default() -> Self {
        Self {
            meta_prefix:    DEFAULT_META_PREFIX.to_string(),
            counter_prefix: DEFAULT_COUNTER_PREFIX.to_string(),
        }
    }
}

impl FileNaming {
    /// Build a naming scheme from custom prefixes.
    ///
    /// # Errors
    ///
    /// [`PodError::InvalidPrefix`] if either prefix is empty or contains a
    /// `.` or a path separator, since either would make names ambiguous.
    pub fn new(meta_prefix: impl Into<String>, counter_prefix: impl Into<String>) -> Result<Self, PodError> {
        let meta_prefix = validate_prefix(meta_prefix.into())?;
        let counter_prefix = validate_prefix(counter_prefix.into())?;
        Ok(Self { meta_prefix, counter_prefix })
    }

    pub fn meta_prefix(&self) -> &str {
        &self.meta_prefix
    }

    pub fn counter_prefix(&self) -> &str {
        &self.counter_prefix
    }

    /// Classify a bare file name. Pure: no filesystem access.
    pub fn classify(&self, name: &str) -> Classified {
        if let Some(tag) = strip_field(name, &self.meta_prefix).and_then(HashTag::from_hex) {
            return Classified::Meta(tag);
        }

        if let Some(rest) = strip_field(name, &self.counter_prefix) {
            let mut fields = rest.split('.');
            if let (Some(hash), Some(pid), Some(seq), None) =
                (fields.next(), fields.next(), fields.next(), fields.next())
            {
                if let (Some(tag), Some(pid), Some(sequence)) =
                    (HashTag::from_hex(hash), parse_decimal(pid), parse_decimal(seq))
                {
                    return Classified::Counter { tag, pid, sequence };
                }
            }
        }

        Classified::Unrecognized
    }

    /// The meta-data file name for `tag`.
    pub fn meta_file_name(&self, tag: &HashTag) -> String {
        format!("{}.{}", self.meta_prefix, tag)
    }

    /// The counter-data file name for `tag` written by process `pid`.
    pub fn counter_file_name(&self, tag: &HashTag, pid: u64, sequence: u64) -> String {
        format!("{}.{}.{}.{}", self.counter_prefix, tag, pid, sequence)
    }
}

fn validate_prefix(prefix: String) -> Result<String, PodError> {
    if prefix.is_empty() || prefix.contains(['.', '/', '\\']) {
        return Err(PodError::InvalidPrefix(prefix));
    }
    Ok(prefix)
}

/// `name` with `<prefix>.` removed from the front.
fn strip_field<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    name.strip_prefix(prefix)?.strip_prefix('.')
}

// `str::parse` accepts a leading `+`; the grammar does not.
fn parse_decimal(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

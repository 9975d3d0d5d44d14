use crate::error::NormalizeError;

/// Result of normalizing raw bytes
///
/// `Degraded` carries the reason the input could not be read as text.
/// The text of a degraded result is always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Normalized {
    Clean(String),
    Degraded(NormalizeError),
}

impl Normalized {
    /// Normalized text, empty if degraded
    #[inline]
    pub fn into_text(self) -> String {
        match self {
            Normalized::Clean(text) => text,
            Normalized::Degraded(_) => String::new(),
        }
    }

    #[inline]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Normalized::Degraded(_))
    }
}

/// Normalize a text
/// lowercase -> remove punctuation -> collapse white spaces
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`
///
/// # Arguments
/// * `text` - text to normalize
///
/// # Returns
/// * `String` - normalized text
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = remove_punctuation(&lowered);
    remove_multiple_white_spaces(&stripped)
}

/// Normalize raw bytes
/// Bytes that are not UTF-8 text degrade to an empty text and emit a warning
/// instead of failing.
///
/// # Arguments
/// * `bytes` - raw document bytes
///
/// # Returns
/// * `Normalized` - clean text, or the degraded reason
pub fn normalize_bytes(bytes: &[u8]) -> Normalized {
    match std::str::from_utf8(bytes) {
        Ok(text) => Normalized::Clean(normalize(text)),
        Err(e) => {
            let err = NormalizeError::InvalidUtf8 { valid_up_to: e.valid_up_to() };
            tracing::warn!(error = %err, len = bytes.len(), "error normalizing document, using empty text");
            Normalized::Degraded(err)
        }
    }
}

/// Remove every char that is neither alphanumeric nor white space.
/// `_` is removed as well.
/// Both classes are Unicode, so `é` or `²` are kept.
#[inline]
pub fn remove_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Collapse every run of white space into a single ' '
/// Leading and trailing runs become a single space, they are not trimmed.
pub fn remove_multiple_white_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

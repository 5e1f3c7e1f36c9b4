//! Comment cleaning and documentation flag extraction

use protodoc_common::FieldFlags;

/// Marker token authors embed in a comment to flag a mandatory field
pub const MANDATORY_MARKER: &str = "@mandatory";

/// A comment after cleaning, plus the flags extracted from it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedComment {
    pub text: Option<String>,
    pub flags: FieldFlags,
}

/// Normalize a raw comment into description prose
///
/// Newlines become single spaces and exact-case marker occurrences are
/// removed. No trimming is applied.
pub fn clean(raw: &str) -> String {
    raw.replace('\n', " ").replace(MANDATORY_MARKER, "")
}

/// Parse a raw declaration comment into cleaned text and flags
///
/// Flag detection is a case-insensitive search over the raw text, while
/// cleaning only strips the exact-case marker; an upper-cased marker
/// therefore sets the flag but survives in the cleaned text.
pub fn parse(raw: Option<&str>) -> ParsedComment {
    let Some(raw) = raw else {
        return ParsedComment::default();
    };

    ParsedComment {
        text: Some(clean(raw)),
        flags: FieldFlags {
            mandatory: raw.to_lowercase().contains(MANDATORY_MARKER),
        },
    }
}

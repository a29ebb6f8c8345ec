use std::fmt;

/// Question types the server answers with something other than TXT.
///
/// Every other question type is folded into `TXT`, which is the payload
/// carrier for all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordType {
    A,
    AAAA,
    #[default]
    TXT,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::TXT => "TXT",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "A" => Some(RecordType::A),
            "AAAA" => Some(RecordType::AAAA),
            "TXT" => Some(RecordType::TXT),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Longest payload a single TXT character-string can carry.
pub const MAX_TXT_BYTES: usize = 255;

/// Cuts `text` to at most `max_bytes`, never splitting a UTF-8 sequence.
///
/// ASCII input is cut to exactly `max_bytes`.
pub fn truncate_utf8(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Truncation used by the dictionary command: anything longer than a TXT
/// payload is cut to 252 bytes and marked with `...`.
pub fn truncate_with_ellipsis(text: &str) -> String {
    if text.len() > MAX_TXT_BYTES {
        format!("{}...", truncate_utf8(text, MAX_TXT_BYTES - 3))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii_exact() {
        let text = "x".repeat(300);
        assert_eq!(truncate_utf8(&text, MAX_TXT_BYTES).len(), 255);
    }

    #[test]
    fn test_truncate_short_untouched() {
        assert_eq!(truncate_utf8("hello", MAX_TXT_BYTES), "hello");
    }

    #[test]
    fn test_truncate_respects_char_boundary() {
        let text = format!("{}é", "a".repeat(254));
        let cut = truncate_utf8(&text, MAX_TXT_BYTES);
        assert_eq!(cut.len(), 254);
        assert!(cut.chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_ellipsis_truncation() {
        let text = "d".repeat(400);
        let cut = truncate_with_ellipsis(&text);
        assert_eq!(cut.len(), 255);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_record_type_parse() {
        assert_eq!(RecordType::parse("aaaa"), Some(RecordType::AAAA));
        assert_eq!(RecordType::parse("MX"), None);
    }
}

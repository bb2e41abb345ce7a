use serde::{Deserialize, Serialize};
use std::fmt;

/// A single verse of scripture: the minimal structured unit of Bible text.
///
/// Field order matters: records are serialized as
/// `{"book", "chapter", "verse", "text"}` in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Book name as it appears in the canon (e.g., "Genesis", "Psalms").
    pub book: String,
    /// Chapter number, starting at 1.
    pub chapter: u32,
    /// Verse number within the chapter, starting at 1.
    pub verse: u32,
    pub text: String,
}

impl VerseRecord {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
            text: text.into(),
        }
    }

    /// Human-readable reference, e.g. "John 3:16".
    pub fn reference(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

impl fmt::Display for VerseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{} {}", self.book, self.chapter, self.verse, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference() {
        let v = VerseRecord::new("John", 3, 16, "For God so loved the world");
        assert_eq!(v.reference(), "John 3:16");
        assert_eq!(v.to_string(), "John 3:16 For God so loved the world");
    }

    #[test]
    fn test_serialized_field_order() {
        let v = VerseRecord::new("Psalms", 23, 1, "The LORD is my shepherd; I shall not want.");
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(
            json,
            r#"{"book":"Psalms","chapter":23,"verse":1,"text":"The LORD is my shepherd; I shall not want."}"#
        );
    }

    #[test]
    fn test_deserialize() {
        let v: VerseRecord =
            serde_json::from_str(r#"{"book":"Genesis","chapter":1,"verse":2,"text":"x"}"#).unwrap();
        assert_eq!(v, VerseRecord::new("Genesis", 1, 2, "x"));
    }
}

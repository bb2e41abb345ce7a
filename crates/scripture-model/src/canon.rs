/// The 66 books of the Protestant canon, Genesis through Revelation.
///
/// Names are spelled the way bible-api.com accepts them in a path segment
/// ("1 Samuel", "Song of Solomon"), so they can be requested verbatim.
pub const CANON: [&str; 66] = [
    // Old Testament
    "Genesis", "Exodus", "Leviticus", "Numbers", "Deuteronomy",
    "Joshua", "Judges", "Ruth", "1 Samuel", "2 Samuel",
    "1 Kings", "2 Kings", "1 Chronicles", "2 Chronicles",
    "Ezra", "Nehemiah", "Esther", "Job", "Psalms", "Proverbs",
    "Ecclesiastes", "Song of Solomon", "Isaiah", "Jeremiah",
    "Lamentations", "Ezekiel", "Daniel", "Hosea", "Joel",
    "Amos", "Obadiah", "Jonah", "Micah", "Nahum", "Habakkuk",
    "Zephaniah", "Haggai", "Zechariah", "Malachi",
    // New Testament
    "Matthew", "Mark", "Luke", "John", "Acts", "Romans",
    "1 Corinthians", "2 Corinthians", "Galatians", "Ephesians",
    "Philippians", "Colossians", "1 Thessalonians", "2 Thessalonians",
    "1 Timothy", "2 Timothy", "Titus", "Philemon", "Hebrews",
    "James", "1 Peter", "2 Peter", "1 John", "2 John", "3 John",
    "Jude", "Revelation",
];

/// Number of books in the Old Testament portion of [`CANON`].
pub const OLD_TESTAMENT_LEN: usize = 39;

/// The canon as owned names, in canonical order.
pub fn canon() -> Vec<String> {
    CANON.iter().map(|b| b.to_string()).collect()
}

/// Position of a book in the canon (0-based), matched case-insensitively.
pub fn canon_index(book: &str) -> Option<usize> {
    CANON.iter().position(|b| b.eq_ignore_ascii_case(book.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canon_shape() {
        assert_eq!(CANON.len(), 66);
        assert_eq!(CANON[0], "Genesis");
        assert_eq!(CANON[OLD_TESTAMENT_LEN - 1], "Malachi");
        assert_eq!(CANON[OLD_TESTAMENT_LEN], "Matthew");
        assert_eq!(CANON[65], "Revelation");
    }

    #[test]
    fn test_canon_has_no_duplicates() {
        let unique: HashSet<&str> = CANON.iter().copied().collect();
        assert_eq!(unique.len(), CANON.len());
    }

    #[test]
    fn test_canon_owned_matches_const() {
        let owned = canon();
        assert_eq!(owned.len(), 66);
        assert!(owned.iter().zip(CANON.iter()).all(|(a, b)| a == b));
    }

    #[test]
    fn test_canon_index() {
        assert_eq!(canon_index("Genesis"), Some(0));
        assert_eq!(canon_index("song of solomon"), Some(21));
        assert_eq!(canon_index(" John "), Some(42));
        assert_eq!(canon_index("Tobit"), None);
    }
}

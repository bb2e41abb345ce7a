use crate::VerseRecord;

/// A fixed five-verse dataset for quick testing without network access.
pub fn sample_verses() -> Vec<VerseRecord> {
    vec![
        VerseRecord::new(
            "Genesis",
            1,
            1,
            "In the beginning God created the heaven and the earth.",
        ),
        VerseRecord::new(
            "Genesis",
            1,
            2,
            "And the earth was without form, and void; and darkness was upon the face of the deep.",
        ),
        VerseRecord::new(
            "John",
            3,
            16,
            "For God so loved the world, that he gave his only begotten Son, that whosoever believeth in him should not perish, but have everlasting life.",
        ),
        VerseRecord::new("Psalms", 23, 1, "The LORD is my shepherd; I shall not want."),
        VerseRecord::new(
            "Proverbs",
            3,
            5,
            "Trust in the LORD with all thine heart; and lean not unto thine own understanding.",
        ),
    ]
}

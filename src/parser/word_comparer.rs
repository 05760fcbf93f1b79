use crate::parser::QueryCursor;

/// Case-insensitive keyword matcher. Multi-word keywords ("GROUP BY",
/// "IS NOT NULL") tolerate any run of whitespace between words; a match must
/// start on live code and end at a word boundary, so keywords inside string
/// literals, comments, or longer identifiers never match.
#[derive(Debug)]
pub struct WordComparer {
    words: Vec<Vec<char>>,
}

impl WordComparer {
    pub fn new(keyword: &str) -> Self {
        Self {
            words: keyword
                .split_whitespace()
                .map(|word| word.to_uppercase().chars().collect())
                .collect(),
        }
    }

    pub fn is_word_char(ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_'
    }

    /// Number of characters the keyword occupies at the cursor, if it matches
    /// there. Variable because of whitespace runs between words.
    pub fn matched_len(&self, cursor: &QueryCursor) -> Option<usize> {
        if !cursor.is_live(cursor.position) {
            return None;
        }

        let mut offset = 0;
        for (index, word) in self.words.iter().enumerate() {
            if index > 0 {
                let mut gap = 0;
                while cursor.peek(offset + gap).is_whitespace() {
                    gap += 1;
                }
                if gap == 0 {
                    return None;
                }
                offset += gap;
            }

            for expected in word {
                if cursor.peek(offset).to_ascii_uppercase() != *expected {
                    return None;
                }
                offset += 1;
            }
        }

        if Self::is_word_char(cursor.peek(offset)) {
            return None;
        }

        Some(offset)
    }

    pub fn compare(&self, cursor: &QueryCursor) -> bool {
        self.matched_len(cursor).is_some()
    }
}

use crate::parser::{ParseError, QueryCursor, WordComparer};

pub struct TextCollector;

impl TextCollector {
    /// Collects the identifier run at the cursor; an empty run is an error.
    /// Stops at any non-word character, so operators and punctuation glued to
    /// an identifier ("a=1") end the run cleanly.
    pub fn collect(cursor: &mut QueryCursor) -> Result<String, ParseError> {
        let pivot = cursor.position;

        while !cursor.eof()
            && WordComparer::is_word_char(cursor.current())
            && cursor.is_live(cursor.position)
        {
            cursor.next();
        }

        if cursor.position == pivot {
            return ParseError::new("expected identifier", pivot, cursor).err();
        }

        Ok(cursor.text_from_pivot(pivot))
    }
}

use crate::error::ValidationError;

/// The single-line query field in the header.
#[derive(Debug, Clone)]
pub struct SearchInput {
    pub buffer: String,
    pub focused: bool,
}

impl Default for SearchInput {
    fn default() -> Self {
        // Focused on start so the user can type straight away
        Self {
            buffer: String::new(),
            focused: true,
        }
    }
}

impl SearchInput {
    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Trims the buffer and hands back the query. The buffer is reset like a
    /// submitted form; on an empty query it is left untouched.
    pub fn submit(&mut self) -> Result<String, ValidationError> {
        let query = self.buffer.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        let query = query.to_string();
        self.buffer.clear();
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(text: &str) -> SearchInput {
        SearchInput {
            buffer: text.to_string(),
            focused: true,
        }
    }

    #[test]
    fn whitespace_only_is_rejected() {
        for text in ["", " ", "\t  \n"] {
            assert_eq!(input(text).submit(), Err(ValidationError::EmptyQuery));
        }
    }

    #[test]
    fn submit_trims_and_resets_buffer() {
        let mut search = input("  blade runner ");
        assert_eq!(search.submit().as_deref(), Ok("blade runner"));
        assert!(search.buffer.is_empty());
    }

    #[test]
    fn editing() {
        let mut search = SearchInput::default();
        assert!(search.focused);
        search.push('a');
        search.push('b');
        search.backspace();
        assert_eq!(search.buffer, "a");
        search.clear();
        assert!(search.buffer.is_empty());
    }
}

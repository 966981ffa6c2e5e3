//! Delimiter-based string tokenizer.
//!
//! Splits text on a set of delimiters, each of which may span several
//! characters (`".."`). At every position the longest matching delimiter
//! wins. Tokens borrow from the input and are produced lazily; [`Tokenizer::reset`]
//! restarts the sequence from the beginning.
//!
//! Two switches control the output:
//!
//! - `return_delimiters`: delimiters are yielded as tokens of their own, and
//!   the empty text between two adjacent delimiters is dropped
//! - `collapse`: a run of adjacent delimiters acts as one (only its first
//!   delimiter is returned) and empty pieces are never yielded
//!
//! With both switches off the tokenizer behaves like [`str::split`] over a
//! delimiter set.
//!
//! ```rust
//! use conf_literal::tokenizer::Tokenizer;
//!
//! let tokens: Vec<_> = Tokenizer::new("1,3..5", &[",", ".."])
//!     .return_delimiters(true)
//!     .collect();
//! assert_eq!(tokens, vec!["1", ",", "3", "..", "5"]);
//! ```

#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    text: &'a str,
    delimiters: Vec<&'a str>,
    return_delimiters: bool,
    collapse: bool,
    position: usize,
    pending: Option<&'a str>,
    after_delimiter: bool,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer that neither returns nor collapses delimiters.
    ///
    /// Empty delimiters are ignored.
    pub fn new(text: &'a str, delimiters: &[&'a str]) -> Self {
        let mut delimiters: Vec<&'a str> = delimiters
            .iter()
            .copied()
            .filter(|d| !d.is_empty())
            .collect();
        delimiters.sort_by(|a, b| b.len().cmp(&a.len()));

        Tokenizer {
            text,
            delimiters,
            return_delimiters: false,
            collapse: false,
            position: 0,
            pending: None,
            after_delimiter: false,
            done: false,
        }
    }

    #[must_use]
    pub fn return_delimiters(mut self, yes: bool) -> Self {
        self.return_delimiters = yes;
        self
    }

    #[must_use]
    pub fn collapse(mut self, yes: bool) -> Self {
        self.collapse = yes;
        self
    }

    /// Restarts tokenization from the beginning of the text.
    pub fn reset(&mut self) {
        self.position = 0;
        self.pending = None;
        self.after_delimiter = false;
        self.done = false;
    }

    /// Returns `true` if `token` is one of this tokenizer's delimiters.
    pub fn is_delimiter(&self, token: &str) -> bool {
        self.delimiters.iter().any(|d| *d == token)
    }

    fn find_delimiter(&self, rest: &'a str) -> Option<(usize, &'a str)> {
        rest.char_indices().find_map(|(offset, _)| {
            self.delimiters
                .iter()
                .find(|d| rest[offset..].starts_with(**d))
                .map(|d| (offset, *d))
        })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if let Some(delimiter) = self.pending.take() {
                return Some(delimiter);
            }
            if self.done {
                return None;
            }

            let rest = &self.text[self.position..];
            let (piece, delimiter) = match self.find_delimiter(rest) {
                Some((offset, delimiter)) => {
                    self.position += offset + delimiter.len();
                    (&rest[..offset], Some(delimiter))
                }
                None => {
                    self.position = self.text.len();
                    self.done = true;
                    (rest, None)
                }
            };

            let collapsed = self.collapse && piece.is_empty() && self.after_delimiter;
            self.after_delimiter = delimiter.is_some();
            if self.return_delimiters && !collapsed {
                self.pending = delimiter;
            }

            if !piece.is_empty() || !(self.return_delimiters || self.collapse) {
                return Some(piece);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(tokenizer: Tokenizer<'_>) -> Vec<&str> {
        tokenizer.collect()
    }

    #[test]
    fn test_plain_split() {
        assert_eq!(tokens(Tokenizer::new("a,,b", &[","])), vec!["a", "", "b"]);
        assert_eq!(tokens(Tokenizer::new("a,", &[","])), vec!["a", ""]);
    }

    #[test]
    fn test_return_delimiters() {
        let t = Tokenizer::new("1,,2", &[",", ".."]).return_delimiters(true);
        assert_eq!(tokens(t), vec!["1", ",", ",", "2"]);

        let t = Tokenizer::new("..5", &[",", ".."]).return_delimiters(true);
        assert_eq!(tokens(t), vec!["..", "5"]);
    }

    #[test]
    fn test_longest_delimiter_wins() {
        let t = Tokenizer::new("1...3", &[".", ".."]).return_delimiters(true);
        assert_eq!(tokens(t), vec!["1", "..", ".", "3"]);
    }

    #[test]
    fn test_collapse() {
        let t = Tokenizer::new("a,,,b", &[","]).return_delimiters(true).collapse(true);
        assert_eq!(tokens(t), vec!["a", ",", "b"]);

        let t = Tokenizer::new(",a,,b,", &[","]).collapse(true);
        assert_eq!(tokens(t), vec!["a", "b"]);
    }

    #[test]
    fn test_brackets_and_unicode() {
        let t = Tokenizer::new("[é, [ü]]", &[",", "[", "]"]).return_delimiters(true);
        assert_eq!(tokens(t), vec!["[", "é", ",", " ", "[", "ü", "]", "]"]);
    }

    #[test]
    fn test_reset_restarts() {
        let mut t = Tokenizer::new("x,y", &[","]);
        assert_eq!(t.next(), Some("x"));
        assert_eq!(t.next(), Some("y"));
        assert_eq!(t.next(), None);
        t.reset();
        assert_eq!(t.next(), Some("x"));
        assert!(t.is_delimiter(","));
    }
}

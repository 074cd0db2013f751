//! Delimited tag string tokenizer
//!
//! Splits a canonical string such as `a,b,"c, d"` into its tags. Quotes
//! (`'` or `"`) protect embedded commas and are kept verbatim in the tag
//! text.

/// Transient quote state for a single tokenizer run
#[derive(Debug, Clone, Copy)]
struct QuoteState {
    open: bool,
    quote_char: char,
}

impl QuoteState {
    fn new() -> Self {
        Self {
            open: false,
            quote_char: '"',
        }
    }

    /// Feed one character, opening or closing a quoted segment
    fn advance(&mut self, c: char) {
        if self.open {
            if c == self.quote_char {
                self.open = false;
            }
        } else if c == '\'' || c == '"' {
            self.open = true;
            self.quote_char = c;
        }
    }
}

/// Split a raw delimited string into its ordered tags.
///
/// A single comma ends the current word, which is pushed trimmed even when
/// it trims to nothing (`"a, ,b"` keeps an empty middle tag). A comma that
/// directly follows another comma discards the word being built instead.
/// Only the dangling word after the last comma is skipped when empty.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tags = Vec::new();
    let mut quote = QuoteState::new();
    let mut current_word = String::new();
    let mut prev: Option<char> = None;

    for c in raw.chars() {
        let prev_was_comma = prev == Some(',');
        quote.advance(c);

        if !quote.open && c == ',' && !prev_was_comma {
            tags.push(current_word.trim().to_string());
            current_word.clear();
        } else if !quote.open && c == ',' {
            current_word.clear();
        } else {
            current_word.push(c);
        }

        prev = Some(c);
    }

    let last = current_word.trim();
    if !last.is_empty() {
        tags.push(last.to_string());
    }

    tags
}

/// Serialize tags back to the canonical comma-joined string
pub fn join(tags: &[String]) -> String {
    tags.join(",")
}

/// Remove empty tags left behind by `", ,"` style input
pub fn drop_empty(tags: Vec<String>) -> Vec<String> {
    tags.into_iter().filter(|tag| !tag.is_empty()).collect()
}

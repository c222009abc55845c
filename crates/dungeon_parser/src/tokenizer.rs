//! Input tokenization.
//!
//! Converts raw player input into lowercase words.

/// A command line split into its verb and arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    /// The first word.
    pub verb: String,
    /// The remaining words.
    pub arguments: Vec<String>,
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string into words.
    ///
    /// - Converts words to lowercase
    /// - Splits on whitespace
    /// - Strips punctuation, keeping `-` and `_` inside words
    /// - Drops quote characters, so `"burning ground"` gives two words
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current_word = String::new();

        for ch in input.chars() {
            if ch.is_whitespace() {
                if !current_word.is_empty() {
                    tokens.push(std::mem::take(&mut current_word));
                }
            } else if ch.is_alphanumeric() || ch == '-' || ch == '_' {
                current_word.extend(ch.to_lowercase());
            }
        }

        if !current_word.is_empty() {
            tokens.push(current_word);
        }
        tokens
    }

    /// Tokenizes input and splits off the verb.
    ///
    /// Returns `None` for input with no words.
    #[must_use]
    pub fn command(input: &str) -> Option<Command> {
        let mut tokens = Self::tokenize(input).into_iter();
        let verb = tokens.next()?;
        Some(Command {
            verb,
            arguments: tokens.collect(),
        })
    }
}

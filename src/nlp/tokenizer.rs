//! Line tokenization and normalization
//!
//! Text is processed one line at a time. For every non-empty line the
//! tokenizer counts sentence terminators, strips the configured ignorable
//! characters, splits on whitespace and lower-cases each word.

/// Characters that end a sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Word separator: Unicode whitespace plus the ASCII information separators
/// U+001C..=U+001F.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// A normalized word emitted by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lower-cased form used for filtering and counting
    pub text: String,
    /// Length in characters of the stripped word before lower-casing
    pub raw_len: usize,
}

impl Token {
    /// Length of the normalized form in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Tokens and counters produced from one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedLine {
    pub tokens: Vec<Token>,
    /// Sentence terminators seen before stripping
    pub sentence_delta: usize,
    /// Sum of `raw_len` over all tokens
    pub total_length: usize,
}

impl TokenizedLine {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.sentence_delta == 0
    }
}

/// Splits lines into normalized tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    ignored: Vec<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_IGNORED_CHARACTERS)
    }
}

impl Tokenizer {
    /// Create a tokenizer that strips every character of `ignored`.
    pub fn new(ignored: &str) -> Self {
        let mut chars: Vec<char> = Vec::new();
        for c in ignored.chars() {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        Self { ignored: chars }
    }

    /// Characters removed before splitting.
    pub fn ignored_characters(&self) -> &[char] {
        &self.ignored
    }

    /// Iterate over the lines of `text`, split on `'\n'`.
    pub fn lines(text: &str) -> impl Iterator<Item = &str> {
        text.split('\n')
    }

    /// Tokenize a single line.
    ///
    /// Blank lines yield an empty result that contributes nothing to any
    /// counter. Sentence terminators are counted on the trimmed line before
    /// ignorable characters are removed.
    pub fn tokenize_line(&self, line: &str) -> TokenizedLine {
        let trimmed = line.trim_matches(is_separator);
        if trimmed.is_empty() {
            return TokenizedLine::default();
        }

        let sentence_delta = count_sentence_terminators(trimmed);
        let stripped = strip_characters(trimmed, &self.ignored);

        let mut total_length = 0;
        let tokens: Vec<Token> = stripped
            .split(is_separator)
            .filter(|word| !word.is_empty())
            .map(|word| {
                let raw_len = word.chars().count();
                total_length += raw_len;
                Token {
                    text: word.to_lowercase(),
                    raw_len,
                }
            })
            .collect();

        TokenizedLine {
            tokens,
            sentence_delta,
            total_length,
        }
    }

    /// Tokenize a whole document, line by line.
    pub fn tokenize(&self, text: &str) -> Vec<TokenizedLine> {
        Self::lines(text)
            .map(|line| self.tokenize_line(line))
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Number of `.`, `!` and `?` characters in `line`.
pub fn count_sentence_terminators(line: &str) -> usize {
    line.chars()
        .filter(|c| SENTENCE_TERMINATORS.contains(c))
        .count()
}

/// Remove every occurrence of each character in `ignored`, literally.
pub fn strip_characters(line: &str, ignored: &[char]) -> String {
    line.chars().filter(|c| !ignored.contains(c)).collect()
}

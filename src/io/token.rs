//! # Tokens
//!
//! Splitting the text form of an amount into its tokens. Whitespace separates tokens and is
//! otherwise ignored.
use crate::error::ParseError;

/// A single meaningful piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Digits, possibly with a single decimal point: `12`, `0.25`, `.5`, `3.`.
    Number(&'a str),
    Plus,
    Minus,
    Slash,
    Open,
    Close,
}

/// A token together with the byte offset at which it starts.
pub(crate) type Located<'a> = (usize, Token<'a>);

/// Split text into tokens.
///
/// # Errors
///
/// When a character is found that can't be part of any token.
pub(crate) fn tokenize(text: &str) -> Result<Vec<Located<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut characters = text.char_indices().peekable();

    while let Some((start, character)) = characters.next() {
        let token = match character {
            c if c.is_whitespace() => continue,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '/' => Token::Slash,
            '(' => Token::Open,
            ')' => Token::Close,
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = start + c.len_utf8();
                while let Some(&(index, next)) = characters.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        end = index + next.len_utf8();
                        characters.next();
                    } else {
                        break;
                    }
                }
                Token::Number(&text[start..end])
            },
            other => return Err(ParseError::new(format!(
                "unexpected character '{}' at position {}", other, start,
            ))),
        };

        tokens.push((start, token));
    }

    Ok(tokens)
}

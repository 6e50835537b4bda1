//! # Amount parsing
//!
//! Reading amounts from text. The grammar, with whitespace allowed between all tokens:
//!
//! ```text
//! amount   = "-" "(" mixed ")" | "(" mixed ")" | mixed
//! mixed    = primary [ ("+" | "-") fraction ]
//! primary  = [ "-" ] number [ "/" integer ]
//! fraction = "(" integer "/" integer ")" | integer "/" integer
//! ```
//!
//! A `number` is an integer or a decimal such as `0.25`. A sign in front of a parenthesized mixed
//! fraction negates all of it, a sign without parentheses only the leading number: `-(1 + 1/4)`
//! is `-1.25`, while `-1 + 1/4` is `-0.75`.
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::ParseError;
use crate::io::token::{tokenize, Located, Token};
use crate::number_types::big::BigFluidAmount;

/// Parse text into an exact amount.
///
/// # Errors
///
/// A `ParseError` describing the problem, wrapped in an error naming the complete text.
pub(crate) fn parse(text: &str) -> Result<BigFluidAmount, ParseError> {
    let wrap = |error| ParseError::with_cause(
        format!("failed to parse \"{}\" as a fluid amount", text),
        error,
    );

    let tokens = tokenize(text).map_err(wrap)?;
    let mut parser = Parser { tokens: &tokens, position: 0 };
    let value = parser.amount().map_err(wrap)?;
    parser.finish().map_err(wrap)?;

    Ok(value)
}

/// Recursive descent over the tokens of a single amount.
struct Parser<'t, 'a> {
    tokens: &'t [Located<'a>],
    position: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn amount(&mut self) -> Result<BigFluidAmount, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::new("the text contains no amount"));
        }

        match (self.peek(0), self.peek(1)) {
            (Some(Token::Minus), Some(Token::Open)) => {
                self.position += 2;
                let value = self.mixed()?;
                self.expect(Token::Close)?;
                Ok(-value)
            },
            (Some(Token::Open), _) => {
                self.position += 1;
                let value = self.mixed()?;
                self.expect(Token::Close)?;
                Ok(value)
            },
            _ => self.mixed(),
        }
    }

    fn mixed(&mut self) -> Result<BigFluidAmount, ParseError> {
        let value = self.primary()?;
        match self.peek(0) {
            Some(Token::Plus) => {
                self.position += 1;
                Ok(value + self.fraction()?)
            },
            Some(Token::Minus) => {
                self.position += 1;
                Ok(value - self.fraction()?)
            },
            _ => Ok(value),
        }
    }

    fn primary(&mut self) -> Result<BigFluidAmount, ParseError> {
        let negative = self.peek(0) == Some(Token::Minus);
        if negative {
            self.position += 1;
        }

        let mut value = self.number()?;
        if self.peek(0) == Some(Token::Slash) {
            self.position += 1;
            let denominator = self.denominator()?;
            value = value.checked_div(&BigFluidAmount::from(denominator))
                .map_err(|error| ParseError::new(error.to_string()))?;
        }

        Ok(if negative { -value } else { value })
    }

    fn fraction(&mut self) -> Result<BigFluidAmount, ParseError> {
        let parenthesized = self.peek(0) == Some(Token::Open);
        if parenthesized {
            self.position += 1;
        }

        let numerator = self.integer("numerator")?;
        self.expect(Token::Slash)?;
        let denominator = self.denominator()?;
        if parenthesized {
            self.expect(Token::Close)?;
        }

        BigFluidAmount::of_fraction(numerator, denominator)
            .map_err(|error| ParseError::new(error.to_string()))
    }

    /// An integer or a decimal.
    fn number(&mut self) -> Result<BigFluidAmount, ParseError> {
        let (offset, text) = self.number_token("number")?;
        let (integer, decimals) = match text.split_once('.') {
            None => (text, ""),
            Some((integer, decimals)) => (integer, decimals),
        };
        if decimals.contains('.') || (integer.is_empty() && decimals.is_empty()) {
            return Err(ParseError::new(format!(
                "\"{}\" at position {} is not a number", text, offset,
            )));
        }

        let whole = digits(integer)?;
        let numerator = digits(decimals)?;
        let denominator = num_traits::pow(BigInt::from(10), decimals.len());
        BigFluidAmount::of(whole, numerator, denominator)
            .map_err(|error| ParseError::new(error.to_string()))
    }

    fn integer(&mut self, what: &str) -> Result<BigInt, ParseError> {
        let (offset, text) = self.number_token(what)?;
        if text.contains('.') {
            return Err(ParseError::new(format!(
                "expected an integer {} at position {}, found \"{}\"", what, offset, text,
            )));
        }

        digits(text)
    }

    fn denominator(&mut self) -> Result<BigInt, ParseError> {
        let offset = self.offset();
        let denominator = self.integer("denominator")?;
        if denominator.is_zero() {
            return Err(ParseError::new(format!("denominator at position {} is zero", offset)));
        }

        Ok(denominator)
    }

    fn number_token(&mut self, what: &str) -> Result<(usize, &'a str), ParseError> {
        match self.tokens.get(self.position) {
            Some(&(offset, Token::Number(text))) => {
                self.position += 1;
                Ok((offset, text))
            },
            Some(&(offset, token)) => Err(ParseError::new(format!(
                "expected a {} at position {}, found {}", what, offset, describe(token),
            ))),
            None => Err(ParseError::new(format!("expected a {}, but the text ended", what))),
        }
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        match self.tokens.get(self.position) {
            Some(&(_, token)) if token == expected => {
                self.position += 1;
                Ok(())
            },
            Some(&(offset, token)) => Err(ParseError::new(format!(
                "expected {} at position {}, found {}", describe(expected), offset, describe(token),
            ))),
            None => Err(ParseError::new(format!(
                "expected {}, but the text ended", describe(expected),
            ))),
        }
    }

    /// Check that all tokens were used.
    fn finish(&self) -> Result<(), ParseError> {
        match self.tokens.get(self.position) {
            None => Ok(()),
            Some(&(offset, token)) => Err(ParseError::new(format!(
                "unexpected {} at position {}", describe(token), offset,
            ))),
        }
    }

    fn peek(&self, ahead: usize) -> Option<Token<'a>> {
        self.tokens.get(self.position + ahead).map(|&(_, token)| token)
    }

    fn offset(&self) -> usize {
        self.tokens.get(self.position).map_or(0, |&(offset, _)| offset)
    }
}

/// Read a possibly empty string of ASCII digits.
fn digits(text: &str) -> Result<BigInt, ParseError> {
    if text.is_empty() {
        return Ok(BigInt::zero());
    }

    BigInt::from_str(text)
        .map_err(|error| ParseError::new(format!("failed to read \"{}\": {}", text, error)))
}

fn describe(token: Token) -> String {
    match token {
        Token::Number(text) => format!("number \"{}\"", text),
        Token::Plus => "'+'".to_string(),
        Token::Minus => "'-'".to_string(),
        Token::Slash => "'/'".to_string(),
        Token::Open => "'('".to_string(),
        Token::Close => "')'".to_string(),
    }
}

//! # Error reporting for fraction arithmetic
//!
//! A collection of enums and structures describing any problems encountered while constructing,
//! combining, converting or parsing fluid amounts.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// Shorthand for the result of a fallible fraction operation.
pub type FractionResult<T> = Result<T, FractionError>;

/// A `FractionError` is created when an operation can't produce an exact, representable value.
///
/// It is the highest error in the hierarchy of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    /// An argument is outside of the domain of the operation.
    ///
    /// The contained `String` is a message for the end user.
    InvalidArgument(String),
    /// The true result exists but doesn't fit in the fixed-width representation.
    ArithmeticOverflow,
    /// Division by a zero value, or the reciprocal of zero.
    DivideByZero,
    /// `RoundingMode::Unnecessary` was requested, but the value has a nonzero remainder.
    PrecisionLoss,
    /// Text could not be read as a fraction.
    Parse(ParseError),
    /// The operation exists in the interface but has no implementation for these arguments.
    Unsupported(&'static str),
}

impl Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FractionError::InvalidArgument(message) => write!(f, "invalid argument: {}", message),
            FractionError::ArithmeticOverflow => {
                write!(f, "arithmetic overflow: result doesn't fit in a fixed-width amount")
            },
            FractionError::DivideByZero => write!(f, "division by zero"),
            FractionError::PrecisionLoss => {
                write!(f, "precision loss: rounding was necessary but not allowed")
            },
            FractionError::Parse(error) => error.fmt(f),
            FractionError::Unsupported(operation) => write!(f, "unsupported operation: {}", operation),
        }
    }
}

impl Error for FractionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FractionError::Parse(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ParseError> for FractionError {
    fn from(error: ParseError) -> Self {
        FractionError::Parse(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may recursively hold another `ParseError` to provide more detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    description: String,
    source: Option<Box<ParseError>>,
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), source: None }
    }

    /// Wrap a new `ParseError` around an existing one.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `parse_error`: What caused this `ParseError`.
    pub fn with_cause(description: impl Into<String>, parse_error: ParseError) -> ParseError {
        ParseError {
            description: description.into(),
            source: Some(Box::new(parse_error)),
        }
    }

    /// What went wrong, without the descriptions of the causes.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get all descriptions in the chain, starting with this one.
    fn chain_description(&self) -> Vec<&str> {
        let mut descriptions = vec![self.description.as_str()];
        if let Some(source) = &self.source {
            descriptions.append(&mut source.chain_description());
        }

        descriptions
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.chain_description().join(": "))
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|error| error as &dyn Error)
    }
}

use crate::units::Category;
use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for expression evaluation and calculator state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An unrecognized character in the input, with its character offset
    LexError {
        /// Character offset of the offending character
        position: usize,
        /// The character that could not be tokenized
        character: char,
    },
    /// Error while parsing the token stream into an expression
    ParseError {
        /// Character offset the parser had reached
        position: usize,
        /// What the parser expected or rejected
        message: String,
    },
    /// A mathematically invalid argument: `sqrt` of a negative, `log` of a
    /// non-positive value, factorial of a negative or fractional number
    DomainError(String),
    /// Division by a zero denominator
    DivisionByZero,
    /// The result exceeds the representable range of `f64`
    OverflowError,
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::LexError {
                position,
                character,
            } => write!(
                fmt,
                "LexError: unexpected character '{}' at position {}",
                character, position
            ),
            Self::ParseError {
                position,
                ref message,
            } => write!(fmt, "ParseError: {} at position {}", message, position),
            Self::DomainError(ref message) => write!(fmt, "DomainError: {}", message),
            Self::DivisionByZero => write!(fmt, "DivisionByZero: division by zero"),
            Self::OverflowError => write!(fmt, "OverflowError: result exceeds the f64 range"),
        }
    }
}

impl error::Error for Error {}

/// Error type for the unit conversion engine
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// The unit identifier is not part of the category's table
    UnknownUnit {
        /// The category whose table was consulted
        category: Category,
        /// The unit identifier that was not found
        unit: String,
    },
}

impl Display for ConversionError {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::UnknownUnit {
                category,
                ref unit,
            } => write!(fmt, "UnknownUnit: no unit '{}' in {}", unit, category),
        }
    }
}

impl error::Error for ConversionError {}

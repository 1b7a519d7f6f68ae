use thiserror::Error;

/// Reasons a formula could not be turned into an expression tree.
///
/// Offsets are byte positions into the original formula text and are only
/// meant for diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("mismatched parentheses near position {offset}")]
    UnbalancedParens { offset: usize },

    #[error("unknown function '{name}' at position {offset}")]
    UnknownFunction { name: String, offset: usize },

    #[error("function '{name}' at position {offset} must come before its argument")]
    MisplacedFunction { name: String, offset: usize },

    #[error("operator '{operator}' at position {offset} is missing an operand")]
    MissingOperand { operator: char, offset: usize },

    #[error("'{text}' at position {offset} is not a value")]
    NotAValue { text: String, offset: usize },

    #[error("cannot make sense of the tokens starting at position {offset}")]
    NoSplitPoint { offset: usize },
}

impl ParseError {
    /// Byte offset the error points at, if it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Empty => None,
            ParseError::UnbalancedParens { offset }
            | ParseError::UnknownFunction { offset, .. }
            | ParseError::MisplacedFunction { offset, .. }
            | ParseError::MissingOperand { offset, .. }
            | ParseError::NotAValue { offset, .. }
            | ParseError::NoSplitPoint { offset } => Some(*offset),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("option '{0}' needs a value")]
    MissingValue(String),

    #[error("invalid number '{value}' for option '{option}'")]
    InvalidNumber { option: String, value: String },

    #[error("width {0} is out of range (expected 1 to {})", crate::sampling::MAX_WIDTH)]
    InvalidWidth(usize),

    #[error("x range is empty: x-min {x_min} must be below x-max {x_max}")]
    EmptyRange { x_min: f64, x_max: f64 },

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid log level '{0}' (expected off/error/warn/info/debug/trace)")]
    InvalidLogLevel(String),
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Cannot create a Rational from {value} ({type_name})")]
    TypeMismatch { value: String, type_name: String },

    #[error("Cannot make {left} ({left_type}) comparable with {right} ({right_type})")]
    Incompatible {
        left: String,
        left_type: String,
        right: String,
        right_type: String,
    },

    #[error("Cannot parse \"{0}\" as decimal or fraction")]
    Parse(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Cannot create a Rational from non-finite float {0}")]
    NonFinite(f64),

    #[error("Failed to write decimal text")]
    Write(#[from] std::fmt::Error),
}

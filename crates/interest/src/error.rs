//! Interest calculator errors

use tally_ports::FieldId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterestError {
    #[error("Field '{field}' is not a number: {value:?}")]
    InvalidNumber { field: FieldId, value: String },

    #[error("Principal must be positive, got {principal}")]
    NonPositivePrincipal { principal: i64 },

    #[error("Form has no '{0}' field")]
    MissingField(FieldId),

    #[error("Arithmetic overflow computing interest")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, InterestError>;

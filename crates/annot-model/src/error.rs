use thiserror::Error;

use crate::enums::{ColumnType, Unit};

#[derive(Debug, Error)]
pub enum AnnotError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown country: {0}")]
    UnknownCountry(String),
    #[error("column '{column}' has type {actual}, but the operation needs {expected}")]
    TypeMismatch {
        column: String,
        actual: ColumnType,
        expected: &'static str,
    },
    #[error("unit '{unit}' is a {} unit, which does not fit a {column_type} column", unit.kind().label())]
    UnitMismatch { unit: Unit, column_type: ColumnType },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, AnnotError>;

use super::Quantity;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    Unrecognized { quantity: Quantity, unit: String },
    Empty(Quantity),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::Unrecognized { quantity, unit } => {
                write!(f, "unrecognized {} unit: '{}'", quantity, unit)
            }
            UnitError::Empty(quantity) => write!(f, "missing {} unit", quantity),
        }
    }
}

impl std::error::Error for UnitError {}

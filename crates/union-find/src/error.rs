use std::fmt::{self, Display};
use thiserror::Error;

/// Which argument of an operation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    Element,
    First,
    Second,
}

impl Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Element => f.write_str("element"),
            Argument::First => f.write_str("first element"),
            Argument::Second => f.write_str("second element"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnionFindError {
    #[error("{0} must not be absent")]
    NullElement(Argument),
    #[error("{0} does not belong to this set")]
    UnknownElement(Argument),
}

#[cfg(test)]
mod tests {
    use super::{Argument, UnionFindError};

    #[test]
    fn messages_name_the_argument() {
        assert_eq!(
            UnionFindError::NullElement(Argument::Element).to_string(),
            "element must not be absent"
        );
        assert_eq!(
            UnionFindError::UnknownElement(Argument::Second).to_string(),
            "second element does not belong to this set"
        );
    }
}

use super::Error;

/// Error when a driver cannot decode a column of the given database type.
#[derive(Debug)]
pub(super) struct UnsupportedTypeError {
    db_type: Box<str>,
    column: Box<str>,
}

impl std::error::Error for UnsupportedTypeError {}

impl core::fmt::Display for UnsupportedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported column type `{}` for column `{}`",
            self.db_type, self.column
        )
    }
}

impl Error {
    /// Creates an unsupported column type error.
    pub fn unsupported_type(db_type: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedTypeError {
            db_type: db_type.into().into(),
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported column type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}

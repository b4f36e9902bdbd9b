pub mod cursor;
pub use cursor::{Column, Row, Rows};

mod error;
pub use error::{Error, IntoError};

pub mod record;
pub use record::{FieldMut, Record, RecordType};

pub mod registry;
pub use registry::{FieldMap, FieldPath, Registry};

pub mod str;

mod target;
pub use target::{RawBytes, ScanTarget};

pub mod value;
pub use value::{FromValue, Value};

/// A Result type alias that uses rowscan's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

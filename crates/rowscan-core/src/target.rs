use crate::{FromValue, Result, Value};

/// A writable receptacle for one column of the current row.
///
/// Cursors call [`ScanTarget::scan_value`] once per column with the decoded
/// value. Every [`FromValue`] type is a scan target.
pub trait ScanTarget {
    fn scan_value(&mut self, value: Value) -> Result<()>;
}

impl<T: FromValue> ScanTarget for T {
    fn scan_value(&mut self, value: Value) -> Result<()> {
        *self = T::from_value(value)?;
        Ok(())
    }
}

/// Receives a column that has no matching field.
///
/// The value is read off the row and dropped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RawBytes;

impl FromValue for RawBytes {
    fn from_value(_value: Value) -> Result<Self> {
        Ok(RawBytes)
    }
}

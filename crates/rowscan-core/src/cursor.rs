use crate::{Result, ScanTarget};

/// Name and position of a column in the current result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column<'a> {
    pub name: &'a str,
    pub position: usize,
}

/// A cursor over the rows of a query result.
///
/// Implemented by drivers. The cursor owns column decoding; the mapper only
/// decides which target receives each column.
pub trait Rows {
    /// Columns of the result, in result order.
    fn columns(&self) -> Vec<Column<'_>>;

    /// Advances to the next row. Returns `false` once the rows are exhausted.
    fn next(&mut self) -> Result<bool>;

    /// Decodes the current row into `targets`, one target per column.
    fn scan(&mut self, targets: &mut [&mut dyn ScanTarget]) -> Result<()>;
}

/// A single row returned by a query expected to produce at most one row.
pub trait Row {
    /// Columns of the row, in result order.
    fn columns(&self) -> Vec<Column<'_>>;

    /// Decodes the row into `targets`, one target per column.
    fn scan(self, targets: &mut [&mut dyn ScanTarget]) -> Result<()>;
}

impl<R: Rows + ?Sized> Rows for &mut R {
    fn columns(&self) -> Vec<Column<'_>> {
        (**self).columns()
    }

    fn next(&mut self) -> Result<bool> {
        (**self).next()
    }

    fn scan(&mut self, targets: &mut [&mut dyn ScanTarget]) -> Result<()> {
        (**self).scan(targets)
    }
}

impl<'a> Column<'a> {
    /// Builds column descriptors from names in result order.
    pub fn from_names(names: impl IntoIterator<Item = &'a str>) -> Vec<Column<'a>> {
        names
            .into_iter()
            .enumerate()
            .map(|(position, name)| Column { name, position })
            .collect()
    }
}

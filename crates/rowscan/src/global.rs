//! Process-wide default registry and the free functions that scan with it.

use crate::Mapper;

use rowscan_core::{Record, Registry, Result, Row, Rows};
use std::sync::{Arc, OnceLock};

static DEFAULT: OnceLock<Mapper> = OnceLock::new();

fn mapper() -> &'static Mapper {
    DEFAULT.get_or_init(Mapper::default)
}

/// Returns the registry shared by the free functions of this crate.
pub fn default_registry() -> &'static Arc<Registry> {
    mapper().registry()
}

/// Sets the tag key the default registry reads for column overrides.
///
/// Record types already cached keep their field maps, so call this before the
/// first scan.
pub fn set_tag_name(tag_name: impl Into<String>) {
    default_registry().set_tag_name(tag_name);
}

/// Sets the function the default registry uses to normalize field names.
///
/// Record types already cached keep their field maps.
pub fn set_name_mapper(name_mapper: impl Fn(&str) -> String + Send + Sync + 'static) {
    default_registry().set_name_mapper(name_mapper);
}

/// Scans the current row of `rows` into `dest`. See [`Mapper::scan`].
pub fn scan<T, R>(dest: &mut T, rows: &mut R) -> Result<()>
where
    T: Record,
    R: Rows + ?Sized,
{
    mapper().scan(dest, rows)
}

/// See [`Mapper::scan_aliased`].
pub fn scan_aliased<T, R>(dest: &mut T, rows: &mut R, alias: &str) -> Result<()>
where
    T: Record,
    R: Rows + ?Sized,
{
    mapper().scan_aliased(dest, rows, alias)
}

/// See [`Mapper::scan_row`].
pub fn scan_row<T: Record, R: Row>(dest: &mut T, row: R) -> Result<()> {
    mapper().scan_row(dest, row)
}

/// See [`Mapper::scan_all`].
pub fn scan_all<T, R>(rows: &mut R) -> Result<Vec<T>>
where
    T: Record + Default,
    R: Rows + ?Sized,
{
    mapper().scan_all(rows)
}

/// See [`Mapper::columns`].
pub fn columns<T: Record>() -> String {
    mapper().columns::<T>()
}

/// See [`Mapper::columns_aliased`].
pub fn columns_aliased<T: Record>(alias: &str) -> String {
    mapper().columns_aliased::<T>(alias)
}

mod bind;
use bind::Binding;

use rowscan_core::{Column, FieldMap, FieldPath, Record, Registry, Result, Row, Rows};
use std::sync::Arc;

/// Scans rows into records using the field maps of a [`Registry`].
///
/// Each column is matched by name against the destination's field map.
/// Columns without a matching field are read and dropped.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    registry: Arc<Registry>,
}

impl Mapper {
    pub fn new(registry: Arc<Registry>) -> Mapper {
        Mapper { registry }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Scans the current row of `rows` into `dest`.
    pub fn scan<T, R>(&self, dest: &mut T, rows: &mut R) -> Result<()>
    where
        T: Record,
        R: Rows + ?Sized,
    {
        self.scan_with_alias(dest, rows, None)
    }

    /// Scans the current row of `rows` into `dest`, stripping an `{alias}_`
    /// prefix from column names before matching.
    ///
    /// Pairs with [`Mapper::columns_aliased`] to read one side of a join.
    pub fn scan_aliased<T, R>(&self, dest: &mut T, rows: &mut R, alias: &str) -> Result<()>
    where
        T: Record,
        R: Rows + ?Sized,
    {
        self.scan_with_alias(dest, rows, Some(alias))
    }

    /// Scans a single row into `dest`.
    pub fn scan_row<T: Record, R: Row>(&self, dest: &mut T, row: R) -> Result<()> {
        let field_map = self.registry.field_map::<T>();
        let paths = resolve(std::any::type_name::<T>(), &field_map, &row.columns(), None);

        let mut bindings = bind::bind(dest, &paths);
        row.scan(&mut Binding::targets(&mut bindings))
    }

    /// Advances `rows` to the end, scanning each row into a new record.
    pub fn scan_all<T, R>(&self, rows: &mut R) -> Result<Vec<T>>
    where
        T: Record + Default,
        R: Rows + ?Sized,
    {
        let field_map = self.registry.field_map::<T>();
        let mut resolved = None;
        let mut records = vec![];

        while rows.next()? {
            // Every row of a result shares the same columns
            let paths = resolved.get_or_insert_with(|| {
                resolve(std::any::type_name::<T>(), &field_map, &rows.columns(), None)
            });

            let mut record = T::default();
            let mut bindings = bind::bind(&mut record, paths);
            rows.scan(&mut Binding::targets(&mut bindings))?;

            records.push(record);
        }

        Ok(records)
    }

    /// Returns the column names of `T`, sorted and joined with `", "`.
    pub fn columns<T: Record>(&self) -> String {
        self.registry.field_map::<T>().sorted_names().join(", ")
    }

    /// Returns the column names of `T` qualified by `alias` and renamed with an
    /// `{alias}_` prefix, e.g. `u.id AS u_id, u.name AS u_name`.
    pub fn columns_aliased<T: Record>(&self, alias: &str) -> String {
        self.registry
            .field_map::<T>()
            .sorted_names()
            .into_iter()
            .map(|name| format!("{alias}.{name} AS {alias}_{name}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn scan_with_alias<T, R>(&self, dest: &mut T, rows: &mut R, alias: Option<&str>) -> Result<()>
    where
        T: Record,
        R: Rows + ?Sized,
    {
        let field_map = self.registry.field_map::<T>();
        let paths = resolve(std::any::type_name::<T>(), &field_map, &rows.columns(), alias);

        let mut bindings = bind::bind(dest, &paths);
        rows.scan(&mut Binding::targets(&mut bindings))
    }
}

impl From<Registry> for Mapper {
    fn from(registry: Registry) -> Mapper {
        Mapper::new(Arc::new(registry))
    }
}

/// Resolves each column, in result order, to the field it scans into.
fn resolve<'a>(
    record: &str,
    field_map: &'a FieldMap,
    columns: &[Column<'_>],
    alias: Option<&str>,
) -> Vec<Option<&'a FieldPath>> {
    tracing::debug!(
        record,
        ?columns,
        alias,
        "resolving columns"
    );

    let prefix = alias
        .filter(|alias| !alias.is_empty())
        .map(|alias| format!("{}_", alias.to_ascii_lowercase()));

    columns
        .iter()
        .map(|column| {
            let name = column.name.to_ascii_lowercase();
            let name = match &prefix {
                Some(prefix) => name.strip_prefix(prefix.as_str()).unwrap_or(&name),
                None => &name,
            };
            field_map.get(name)
        })
        .collect()
}

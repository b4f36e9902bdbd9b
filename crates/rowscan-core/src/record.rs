mod field;
pub use field::{Field, FieldKind, Visibility};

mod tags;
pub use tags::Tags;

use crate::ScanTarget;
use std::any::TypeId;

/// A structured type that rows can be scanned into.
///
/// Usually implemented with `#[derive(Record)]`. A hand-written impl must keep
/// [`Record::fields_mut`] in step with [`Record::record_type`]: one entry per
/// declared field, in declaration order, with `Value` entries for public value
/// fields, `Embedded` entries for public embedded fields and `Opaque` for the
/// rest.
pub trait Record: 'static {
    /// Describes the fields of this record type.
    fn record_type() -> RecordType
    where
        Self: Sized;

    /// Returns a writable handle to every declared field.
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}

/// Describes a record type: its identity and its declared fields.
#[derive(Debug, Clone)]
pub struct RecordType {
    /// Identity of the record type, used as the metadata cache key
    pub id: TypeId,

    /// Name of the record type
    pub name: &'static str,

    /// Declared fields, in declaration order
    pub fields: Vec<Field>,
}

/// A writable handle to one declared field of a record.
pub enum FieldMut<'a> {
    /// A field that receives a column value
    Value(&'a mut dyn ScanTarget),

    /// An embedded record whose fields are flattened into the parent
    Embedded(&'a mut dyn Record),

    /// A field that is never scanned into
    Opaque,
}

impl RecordType {
    /// Creates a descriptor for `T` with the given fields.
    pub fn of<T: 'static>(name: &'static str, fields: Vec<Field>) -> RecordType {
        RecordType {
            id: TypeId::of::<T>(),
            name,
            fields,
        }
    }

    /// Get a field by index
    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index]
    }
}

impl core::fmt::Debug for FieldMut<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldMut::Value(_) => f.write_str("Value(..)"),
            FieldMut::Embedded(_) => f.write_str("Embedded(..)"),
            FieldMut::Opaque => f.write_str("Opaque"),
        }
    }
}

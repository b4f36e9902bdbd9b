mod global;
pub use global::{
    columns, columns_aliased, default_registry, scan, scan_aliased, scan_all, scan_row,
    set_name_mapper, set_tag_name,
};

mod mapper;
pub use mapper::Mapper;

pub use rowscan_core::{
    bail, cursor, err, record, registry, str, value, Column, Error, FieldMap, FieldPath,
    FromValue, RawBytes, Record, RecordType, Registry, Result, Row, Rows, ScanTarget, Value,
};

pub use rowscan_macros::Record;

#[cfg(feature = "postgresql")]
pub use rowscan_driver_postgresql as postgresql;

#[doc(hidden)]
pub mod codegen_support {
    pub use rowscan_core::{record::Field, FieldMut, Record, RecordType};
    pub use std::vec::Vec;
}

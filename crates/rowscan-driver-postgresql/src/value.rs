use postgres::types::{FromSql, Type};
use rowscan_core::{Error, Result, Value};
use tokio_postgres::Row;

/// Decodes column `index` of `row`. SQL `NULL` decodes to [`Value::Null`].
pub(crate) fn decode(row: &Row, index: usize) -> Result<Value> {
    let column = &row.columns()[index];
    let ty = column.type_();

    // NOTE: the inner representation of the PostgreSQL type enum is not
    // accessible, so each type is matched by hand.
    let value = if *ty == Type::BOOL {
        get::<bool>(row, index)?.map(Value::Bool)
    } else if *ty == Type::INT2 {
        get::<i16>(row, index)?.map(Value::I16)
    } else if *ty == Type::INT4 {
        get::<i32>(row, index)?.map(Value::I32)
    } else if *ty == Type::INT8 {
        get::<i64>(row, index)?.map(Value::I64)
    } else if *ty == Type::FLOAT4 {
        get::<f32>(row, index)?.map(Value::F32)
    } else if *ty == Type::FLOAT8 {
        get::<f64>(row, index)?.map(Value::F64)
    } else if *ty == Type::TEXT
        || *ty == Type::VARCHAR
        || *ty == Type::BPCHAR
        || *ty == Type::NAME
    {
        get::<String>(row, index)?.map(Value::String)
    } else if *ty == Type::BYTEA {
        get::<Vec<u8>>(row, index)?.map(Value::Bytes)
    } else if *ty == Type::UUID {
        get::<uuid::Uuid>(row, index)?.map(Value::Uuid)
    } else {
        return Err(Error::unsupported_type(ty.name(), column.name()));
    };

    Ok(value.unwrap_or(Value::Null))
}

fn get<'a, T: FromSql<'a>>(row: &'a Row, index: usize) -> Result<Option<T>> {
    row.try_get(index).map_err(Error::driver_operation_failed)
}

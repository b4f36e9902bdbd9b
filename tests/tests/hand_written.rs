use rowscan::record::{Field, FieldMut};
use rowscan::{Mapper, Record, RecordType, Value};
use tests::MemRows;

#[derive(Debug, Default)]
struct Point {
    x: i64,
    y: i64,
    label: String,
}

impl Record for Point {
    fn record_type() -> RecordType {
        RecordType::of::<Point>(
            "Point",
            vec![
                Field::new(0, "x").tag("sql", "pos_x"),
                Field::new(1, "y").tag("sql", "pos_y"),
                Field::new(2, "label").private(),
            ],
        )
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![
            FieldMut::Value(&mut self.x),
            FieldMut::Value(&mut self.y),
            FieldMut::Opaque,
        ]
    }
}

#[test]
fn hand_written_record() {
    let mapper = Mapper::default();
    assert_eq!(mapper.columns::<Point>(), "pos_x, pos_y");

    let mut rows = MemRows::positioned(
        vec!["pos_y", "pos_x", "label"],
        vec![vec![Value::I64(2), Value::I64(1), Value::from("origin")]],
    );

    let mut point = Point::default();
    mapper.scan(&mut point, &mut rows).unwrap();

    assert_eq!((point.x, point.y), (1, 2));
    assert_eq!(point.label, "");
}

/// Describes two fields but only hands out one.
#[derive(Debug, Default)]
struct Broken {
    a: i64,
}

impl Record for Broken {
    fn record_type() -> RecordType {
        RecordType::of::<Broken>("Broken", vec![Field::new(0, "a"), Field::new(1, "b")])
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        vec![FieldMut::Value(&mut self.a)]
    }
}

#[test]
#[should_panic(expected = "`fields_mut` does not match `record_type`")]
fn mismatched_record_panics() {
    let mut rows = MemRows::positioned(
        vec!["a", "b"],
        vec![vec![Value::I64(1), Value::I64(2)]],
    );

    let mut broken = Broken::default();
    let _ = Mapper::default().scan(&mut broken, &mut rows);
}

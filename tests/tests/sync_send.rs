use rowscan::{Error, Mapper, Registry};

fn assert_sync_send<T: Send + Sync>() {}

#[test]
fn types_are_sync_send() {
    assert_sync_send::<Mapper>();
    assert_sync_send::<Registry>();
    assert_sync_send::<Error>();
    assert_sync_send::<std::sync::Arc<rowscan::FieldMap>>();
}

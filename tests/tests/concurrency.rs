use rowscan::{Mapper, Record, Value};
use std::sync::Barrier;
use tests::MemRows;

#[derive(Debug, Default, Record)]
struct Event {
    pub id: i64,
    pub kind: String,
}

#[test]
fn threads_share_one_mapper() {
    const THREADS: usize = 8;
    const ROWS: i64 = 50;

    let mapper = Mapper::default();
    let barrier = Barrier::new(THREADS);

    std::thread::scope(|s| {
        for thread in 0..THREADS {
            let mapper = mapper.clone();
            let barrier = &barrier;

            s.spawn(move || {
                let rows = (0..ROWS)
                    .map(|id| vec![Value::I64(id), Value::from(format!("t{thread}"))])
                    .collect();
                let mut rows = MemRows::new(vec!["id", "kind"], rows);

                // Race the first lookup of `Event`
                barrier.wait();
                let events: Vec<Event> = mapper.scan_all(&mut rows).unwrap();

                assert_eq!(events.len(), ROWS as usize);
                for (id, event) in events.iter().enumerate() {
                    assert_eq!(event.id, id as i64);
                    assert_eq!(event.kind, format!("t{thread}"));
                }
            });
        }
    });

    assert_eq!(mapper.registry().len(), 1);
    assert_eq!(mapper.columns::<Event>(), "id, kind");
}

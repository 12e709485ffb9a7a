use roster_model::RecordLike;
use roster_store::{Config, Table};

#[derive(Clone)]
struct Tag(u64);

impl RecordLike for Tag {
    type Predicate = Option<u64>;

    fn merge_from(&mut self, patch: &Self) {
        self.0 = patch.0;
    }

    fn matches(&self, predicate: &Option<u64>) -> bool {
        predicate.map(|id| id == self.0).unwrap_or(true)
    }
}

#[test]
fn repeated_growth_keeps_every_key_reachable() {
    let mut table = Table::create(Config { max_size: 4 }).unwrap();
    for id in 1..=200u64 {
        table.add(id, Tag(id)).unwrap();
    }
    assert_eq!(table.len(), 200);
    for id in 1..=200u64 {
        assert_eq!(table.get_by_key(id).unwrap().0, id);
    }
    assert_eq!(table.bucket_count() % 2, 0);
}

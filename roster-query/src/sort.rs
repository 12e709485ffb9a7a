use roster_model::Record;
use roster_parser::SortKey;

/// Stable-sorts `records` (specification §4.3). `None` leaves bucket-walk
/// order untouched — only the GET-scan path sorts at all.
pub fn sort_records(records: &mut [&Record], sort: Option<SortKey>) {
    match sort {
        None => {}
        Some(SortKey::Id) => records.sort_by_key(|r| r.id),
        Some(SortKey::Date) => records.sort_by_key(|r| r.date.map(|d| d.sort_key()).unwrap_or(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::Record;

    fn rec(id: u64, date: &str) -> Record {
        Record {
            id,
            name: None,
            date: Some(date.parse().unwrap()),
            department: None,
            position: None,
        }
    }

    #[test]
    fn sorts_by_date_ascending() {
        let a = rec(10086, "2022-06-25");
        let b = rec(10087, "2022-06-24");
        let mut refs = vec![&a, &b];
        sort_records(&mut refs, Some(SortKey::Date));
        assert_eq!(refs[0].id, 10087);
        assert_eq!(refs[1].id, 10086);
    }

    #[test]
    fn sorts_by_id_ascending() {
        let a = rec(20, "2022-06-25");
        let b = rec(5, "2022-06-24");
        let mut refs = vec![&a, &b];
        sort_records(&mut refs, Some(SortKey::Id));
        assert_eq!(refs[0].id, 5);
        assert_eq!(refs[1].id, 20);
    }

    #[test]
    fn no_sort_preserves_order() {
        let a = rec(20, "2022-06-25");
        let b = rec(5, "2022-06-24");
        let mut refs = vec![&a, &b];
        sort_records(&mut refs, None);
        assert_eq!(refs[0].id, 20);
        assert_eq!(refs[1].id, 5);
    }
}

use crate::{RecordLike, RosterDate};

/// An employee record (specification §3). String fields are optional on
/// input but, once set, are never stored empty (enforced by the parser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub name: Option<String>,
    pub date: Option<RosterDate>,
    pub department: Option<String>,
    pub position: Option<String>,
}

impl Record {
    pub fn new(id: u64) -> Self {
        Record {
            id,
            name: None,
            date: None,
            department: None,
            position: None,
        }
    }
}

/// A record-shaped query: unset fields wildcard-match, set fields must
/// compare equal. An absent `id` turns a GET into a scan (specification §3,
/// resolving Open Question (i) by making "scan" a single representation).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub date: Option<RosterDate>,
    pub department: Option<String>,
    pub position: Option<String>,
}

impl Predicate {
    /// A predicate that matches every record (a full scan).
    pub fn all() -> Self {
        Predicate::default()
    }
}

impl RecordLike for Record {
    type Predicate = Predicate;

    /// Field-level merge: `id` always overwrites, `date` is overwritten
    /// when `patch.date` is set, each string field is overwritten iff the
    /// corresponding field of `patch` is set. This is the "update only the
    /// fields you mention" semantics MOD relies on (specification §4.1).
    fn merge_from(&mut self, patch: &Self) {
        self.id = patch.id;
        if patch.date.is_some() {
            self.date = patch.date;
        }
        if patch.name.is_some() {
            self.name = patch.name.clone();
        }
        if patch.department.is_some() {
            self.department = patch.department.clone();
        }
        if patch.position.is_some() {
            self.position = patch.position.clone();
        }
    }

    /// Masked equality: a `None` field on the predicate matches anything;
    /// a `Some` field must be byte-equal (specification §4.1).
    fn matches(&self, predicate: &Predicate) -> bool {
        if let Some(id) = predicate.id {
            if id != self.id {
                return false;
            }
        }
        if let Some(date) = predicate.date {
            if Some(date) != self.date {
                return false;
            }
        }
        if let Some(name) = &predicate.name {
            if self.name.as_deref() != Some(name.as_str()) {
                return false;
            }
        }
        if let Some(dept) = &predicate.department {
            if self.department.as_deref() != Some(dept.as_str()) {
                return false;
            }
        }
        if let Some(pos) = &predicate.position {
            if self.position.as_deref() != Some(pos.as_str()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Record {
        Record {
            id: 10086,
            name: Some("Lisi".to_owned()),
            date: Some("2022-06-25".parse().unwrap()),
            department: Some("CWPP".to_owned()),
            position: None,
        }
    }

    #[test]
    fn merge_overwrites_only_set_fields() {
        let mut r = fixture();
        let patch = Record {
            id: r.id,
            name: Some("ZhangSan".to_owned()),
            date: None,
            department: None,
            position: None,
        };
        r.merge_from(&patch);
        assert_eq!(r.name.as_deref(), Some("ZhangSan"));
        assert_eq!(r.department.as_deref(), Some("CWPP"));
        assert_eq!(r.date, Some("2022-06-25".parse().unwrap()));
    }

    #[test]
    fn null_predicate_fields_wildcard() {
        let r = fixture();
        let p = Predicate {
            id: None,
            name: None,
            date: None,
            department: Some("CWPP".to_owned()),
            position: None,
        };
        assert!(r.matches(&p));
    }

    #[test]
    fn set_predicate_fields_must_match_exactly() {
        let r = fixture();
        let p = Predicate {
            department: Some("Other".to_owned()),
            ..Predicate::default()
        };
        assert!(!r.matches(&p));
    }

    #[test]
    fn all_predicate_matches_everything() {
        let r = fixture();
        assert!(r.matches(&Predicate::all()));
    }
}

use roster_model::Record;

const NULL: &str = "(null)";

/// Renders one record as the single-line reply format specified in §4.3:
/// `"staff id: <id>, name: <name>, date: <YYYY-MM-DD>, department: <dept>,
/// position: <pos>.\n"`, with unset fields rendered as the literal
/// `(null)`.
pub fn render_record(record: &Record) -> String {
    format!(
        "staff id: {}, name: {}, date: {}, department: {}, position: {}.\n",
        record.id,
        record.name.as_deref().unwrap_or(NULL),
        record
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| NULL.to_owned()),
        record.department.as_deref().unwrap_or(NULL),
        record.position.as_deref().unwrap_or(NULL),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::Record;

    #[test]
    fn renders_null_for_unset_fields() {
        let r = Record::new(7);
        let line = render_record(&r);
        assert_eq!(
            line,
            "staff id: 7, name: (null), date: (null), department: (null), position: (null).\n"
        );
    }

    #[test]
    fn renders_all_fields_when_set() {
        let r = Record {
            id: 10088,
            name: Some("Lisi".to_owned()),
            date: Some("2022-05-19".parse().unwrap()),
            department: Some("CWPP".to_owned()),
            position: Some("engineer".to_owned()),
        };
        assert_eq!(
            render_record(&r),
            "staff id: 10088, name: Lisi, date: 2022-05-19, department: CWPP, position: engineer.\n"
        );
    }
}

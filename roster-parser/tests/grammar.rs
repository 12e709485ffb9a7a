use roster_parser::{parse_line, Query, SortKey};

#[test]
fn full_add_round_trips_every_field() {
    let q = parse_line("ADD id:10088 name:Lisi date:2022-05-19 dept:CWPP pos:engineer").unwrap();
    let Query::Add(record) = q else {
        panic!("expected Add");
    };
    assert_eq!(record.id, 10088);
    assert_eq!(record.name.as_deref(), Some("Lisi"));
    assert_eq!(record.department.as_deref(), Some("CWPP"));
    assert_eq!(record.position.as_deref(), Some("engineer"));
    assert_eq!(record.date.unwrap().to_string(), "2022-05-19");
}

#[test]
fn get_with_sort_and_wildcard_parses_to_the_same_query_regardless_of_order() {
    let a = parse_line("GET * --sort:date").unwrap();
    let b = parse_line("GET --sort:date *").unwrap();
    assert_eq!(a, b);
    let Query::Get { sort, .. } = a else {
        panic!("expected Get");
    };
    assert_eq!(sort, Some(SortKey::Date));
}

#[test]
fn mod_merges_only_named_fields() {
    let q = parse_line("MOD id:10086 name:ZhangSan").unwrap();
    let Query::Mod(patch) = q else {
        panic!("expected Mod");
    };
    assert_eq!(patch.id, 10086);
    assert_eq!(patch.name.as_deref(), Some("ZhangSan"));
    assert!(patch.department.is_none());
    assert!(patch.date.is_none());
}

#[test]
fn del_requires_id_unless_wildcard() {
    assert!(parse_line("DEL").is_err());
    assert!(parse_line("DEL *").is_ok());
    assert!(parse_line("DEL id:1").is_ok());
}

#[test]
fn whitespace_runs_do_not_change_the_parsed_query() {
    let collapsed = parse_line("ADD id:1 name:Foo dept:Eng").unwrap();
    let expanded = parse_line("ADD   id:1     name:Foo   dept:Eng").unwrap();
    assert_eq!(collapsed, expanded);
}

#[test]
fn command_names_are_case_insensitive() {
    for variant in ["get", "GET", "Get", "gEt"] {
        assert!(matches!(parse_line(variant), Ok(Query::Get { .. })));
    }
}

#[test]
fn every_command_in_the_set_is_recognized() {
    for line in ["ADD id:1", "DEL id:1", "MOD id:1", "GET", "LOG info", "HELP", "EXIT"] {
        assert!(parse_line(line).is_ok(), "expected {line:?} to parse");
    }
}

//! The command grammar and tokenizer (specification §4.4): turns one
//! newline-terminated request line into a structured [`Query`].

mod token;

use roster_errors::ParseError;
use roster_model::{Predicate, Record};
use roster_util::LogLevel;

pub use token::SortKey;
use token::{classify, ParamKind};

/// Maximum parameters accepted per request (specification §4.4).
pub const MAX_PARAMS: usize = 32;

/// Maximum length of a single token, matching the line-buffer size chosen
/// for the wire protocol (specification §4.4/§6).
pub const MAX_TOKEN_LEN: usize = 1024;

/// A fully parsed, ready-to-execute request.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Add(Record),
    Del { id: Option<u64>, all: bool },
    Mod(Record),
    Get { predicate: Predicate, sort: Option<SortKey> },
    Log(LogLevel),
    Help,
    Exit,
}

/// Parses one request line. On any grammar violation, returns a
/// [`ParseError`] describing the first problem found; nothing about the
/// request is executed (specification §4.4).
pub fn parse_line(line: &str) -> Result<Query, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (command, params) = tokens.split_first().ok_or(ParseError::EmptyLine)?;

    if params.len() > MAX_PARAMS {
        return Err(ParseError::TooManyParameters { max: MAX_PARAMS });
    }
    for tok in tokens.iter() {
        if tok.len() > MAX_TOKEN_LEN {
            return Err(ParseError::TokenTooLong { max: MAX_TOKEN_LEN });
        }
    }

    let kinds: Vec<ParamKind> = params.iter().map(|t| classify(t)).collect::<Result<_, _>>()?;

    match command.to_ascii_lowercase().as_str() {
        "add" => parse_add(&kinds),
        "del" => parse_del(&kinds),
        "mod" => parse_mod(&kinds),
        "get" => parse_get(&kinds),
        "log" => parse_log(&kinds),
        "help" => parse_nullary(&kinds, Query::Help),
        "exit" => parse_nullary(&kinds, Query::Exit),
        other => Err(ParseError::UnknownCommand(other.to_owned())),
    }
}

fn parse_nullary(kinds: &[ParamKind], query: Query) -> Result<Query, ParseError> {
    if let Some(bad) = kinds.first() {
        return Err(ParseError::InvalidParameter(format!("{bad:?}")));
    }
    Ok(query)
}

fn reject_repeats_and_collect_fields(
    kinds: &[ParamKind],
    allow_sort: bool,
    allow_all: bool,
    allow_log_level: bool,
) -> Result<(Option<SortKey>, bool, Option<LogLevel>, Vec<&token::FieldAssign>), ParseError> {
    let mut sort = None;
    let mut all = false;
    let mut log_level = None;
    let mut fields = Vec::new();

    for kind in kinds {
        match kind {
            ParamKind::Sort(s) => {
                if !allow_sort {
                    return Err(ParseError::InvalidParameter(format!("--sort:{s:?}")));
                }
                if sort.is_some() {
                    return Err(ParseError::RepeatedParameter("--sort:".to_owned()));
                }
                sort = Some(*s);
            }
            ParamKind::All => {
                if !allow_all {
                    return Err(ParseError::InvalidParameter("*".to_owned()));
                }
                if all {
                    return Err(ParseError::RepeatedParameter("*".to_owned()));
                }
                all = true;
            }
            ParamKind::LogLevel(level) => {
                if !allow_log_level {
                    return Err(ParseError::InvalidParameter(level.to_string()));
                }
                if log_level.is_some() {
                    return Err(ParseError::RepeatedParameter("log level".to_owned()));
                }
                log_level = Some(*level);
            }
            ParamKind::Field(f) => fields.push(f),
        }
    }

    Ok((sort, all, log_level, fields))
}

fn build_record(fields: &[&token::FieldAssign]) -> Result<Record, ParseError> {
    let mut record = Record::new(0);
    let mut seen_id = false;
    let mut seen = std::collections::HashSet::new();

    for field in fields {
        if !seen.insert(field.name()) {
            return Err(ParseError::RepeatedParameter(field.name().to_owned()));
        }
        match field {
            token::FieldAssign::Id(v) => {
                let id: u64 = v
                    .parse()
                    .ok()
                    .filter(|id| *id != 0)
                    .ok_or_else(|| ParseError::InvalidFieldValue {
                        field: "id".to_owned(),
                        value: v.clone(),
                    })?;
                record.id = id;
                seen_id = true;
            }
            token::FieldAssign::Name(v) => {
                if v.is_empty() || !v.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(ParseError::InvalidFieldValue {
                        field: "name".to_owned(),
                        value: v.clone(),
                    });
                }
                record.name = Some(v.clone());
            }
            token::FieldAssign::Date(v) => {
                record.date = Some(v.parse()?);
            }
            token::FieldAssign::Dept(v) => record.department = Some(v.clone()),
            token::FieldAssign::Pos(v) => record.position = Some(v.clone()),
        }
    }

    if !seen_id {
        return Err(ParseError::MissingId);
    }
    Ok(record)
}

fn build_predicate(fields: &[&token::FieldAssign]) -> Result<Predicate, ParseError> {
    let mut predicate = Predicate::default();
    let mut seen = std::collections::HashSet::new();

    for field in fields {
        if !seen.insert(field.name()) {
            return Err(ParseError::RepeatedParameter(field.name().to_owned()));
        }
        match field {
            token::FieldAssign::Id(v) => {
                let id: u64 = v
                    .parse()
                    .ok()
                    .filter(|id| *id != 0)
                    .ok_or_else(|| ParseError::InvalidFieldValue {
                        field: "id".to_owned(),
                        value: v.clone(),
                    })?;
                predicate.id = Some(id);
            }
            token::FieldAssign::Name(v) => {
                if v.is_empty() || !v.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(ParseError::InvalidFieldValue {
                        field: "name".to_owned(),
                        value: v.clone(),
                    });
                }
                predicate.name = Some(v.clone());
            }
            token::FieldAssign::Date(v) => predicate.date = Some(v.parse()?),
            token::FieldAssign::Dept(v) => predicate.department = Some(v.clone()),
            token::FieldAssign::Pos(v) => predicate.position = Some(v.clone()),
        }
    }
    Ok(predicate)
}

fn parse_add(kinds: &[ParamKind]) -> Result<Query, ParseError> {
    let (_, _, _, fields) = reject_repeats_and_collect_fields(kinds, false, false, false)?;
    Ok(Query::Add(build_record(&fields)?))
}

fn parse_mod(kinds: &[ParamKind]) -> Result<Query, ParseError> {
    let (_, _, _, fields) = reject_repeats_and_collect_fields(kinds, false, false, false)?;
    Ok(Query::Mod(build_record(&fields)?))
}

fn parse_del(kinds: &[ParamKind]) -> Result<Query, ParseError> {
    let (_, all, _, fields) = reject_repeats_and_collect_fields(kinds, false, true, false)?;
    let predicate = build_predicate_allow_empty(&fields)?;
    if !all && predicate.id.is_none() {
        return Err(ParseError::MissingId);
    }
    Ok(Query::Del { id: predicate.id, all })
}

fn parse_get(kinds: &[ParamKind]) -> Result<Query, ParseError> {
    let (sort, _, _, fields) = reject_repeats_and_collect_fields(kinds, true, true, false)?;
    let predicate = build_predicate(&fields)?;
    Ok(Query::Get { predicate, sort })
}

fn parse_log(kinds: &[ParamKind]) -> Result<Query, ParseError> {
    let (_, _, level, fields) = reject_repeats_and_collect_fields(kinds, false, false, true)?;
    if !fields.is_empty() {
        return Err(ParseError::InvalidParameter(fields[0].name().to_owned()));
    }
    level
        .map(Query::Log)
        .ok_or_else(|| ParseError::InvalidParameter("log level".to_owned()))
}

/// Like [`build_predicate`], but a DEL with only `*` and no field at all is
/// valid (an empty predicate whose `id` is `None`).
fn build_predicate_allow_empty(fields: &[&token::FieldAssign]) -> Result<Predicate, ParseError> {
    // DEL only ever looks at `id`; other field kinds aren't part of its grammar.
    for field in fields {
        if !matches!(field, token::FieldAssign::Id(_)) {
            return Err(ParseError::InvalidParameter(field.name().to_owned()));
        }
    }
    build_predicate(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_requires_id() {
        assert!(matches!(parse_line("ADD name:Lisi"), Err(ParseError::MissingId)));
    }

    #[test]
    fn add_parses_full_record() {
        let q = parse_line("ADD id:10088 name:Lisi date:2022-05-19 dept:CWPP pos:engineer").unwrap();
        match q {
            Query::Add(r) => {
                assert_eq!(r.id, 10088);
                assert_eq!(r.name.as_deref(), Some("Lisi"));
                assert_eq!(r.department.as_deref(), Some("CWPP"));
                assert_eq!(r.position.as_deref(), Some("engineer"));
            }
            _ => panic!("expected Add"),
        }
    }

    #[test]
    fn add_rejects_invalid_id() {
        assert!(parse_line("ADD id:invalid").is_err());
    }

    #[test]
    fn commands_are_case_insensitive() {
        let a = parse_line("add id:1").unwrap();
        let b = parse_line("ADD id:1").unwrap();
        let c = parse_line("Add id:1").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn whitespace_runs_collapse() {
        let a = parse_line("ADD   id:1    name:Foo").unwrap();
        let b = parse_line("ADD id:1 name:Foo").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_sort_flag_fails() {
        assert!(parse_line("GET --sort:id --sort:date *").is_err());
    }

    #[test]
    fn repeated_global_flag_fails() {
        assert!(parse_line("GET * *").is_err());
    }

    #[test]
    fn repeated_log_level_fails() {
        assert!(parse_line("LOG debug info").is_err());
    }

    #[test]
    fn sort_flag_accepted_anywhere_in_get_params() {
        let a = parse_line("GET * --sort:date").unwrap();
        let b = parse_line("GET --sort:date *").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn get_with_explicit_id_is_not_a_scan() {
        let q = parse_line("GET id:10089").unwrap();
        match q {
            Query::Get { predicate, .. } => assert_eq!(predicate.id, Some(10089)),
            _ => panic!("expected Get"),
        }
    }

    #[test]
    fn del_without_id_or_all_fails() {
        assert!(parse_line("DEL").is_err());
    }

    #[test]
    fn del_all_parses() {
        let q = parse_line("DEL *").unwrap();
        assert_eq!(q, Query::Del { id: None, all: true });
    }

    #[test]
    fn help_rejects_parameters() {
        assert!(parse_line("HELP foo").is_err());
    }

    #[test]
    fn exit_accepts_no_parameters() {
        assert_eq!(parse_line("EXIT").unwrap(), Query::Exit);
    }

    #[test]
    fn log_accepts_each_level() {
        for level in ["off", "fault", "error", "info", "debug"] {
            let q = parse_line(&format!("LOG {level}")).unwrap();
            assert!(matches!(q, Query::Log(_)));
        }
    }

    #[test]
    fn empty_line_fails() {
        assert!(matches!(parse_line(""), Err(ParseError::EmptyLine)));
        assert!(matches!(parse_line("   "), Err(ParseError::EmptyLine)));
    }

    #[test]
    fn too_many_parameters_fails() {
        let line = format!("ADD id:1 {}", "dept:X ".repeat(MAX_PARAMS));
        assert!(matches!(
            parse_line(&line),
            Err(ParseError::TooManyParameters { .. })
        ));
    }
}

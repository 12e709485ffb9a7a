use roster_errors::ParseError;
use roster_util::LogLevel;

/// The sort key named by a `--sort:` flag (GET only; specification §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Date,
}

/// A `<field>:<value>` parameter, not yet validated against its field's
/// value rules (that happens once we know which query is being built).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAssign {
    Id(String),
    Name(String),
    Date(String),
    Dept(String),
    Pos(String),
}

impl FieldAssign {
    pub fn name(&self) -> &'static str {
        match self {
            FieldAssign::Id(_) => "id",
            FieldAssign::Name(_) => "name",
            FieldAssign::Date(_) => "date",
            FieldAssign::Dept(_) => "dept",
            FieldAssign::Pos(_) => "pos",
        }
    }
}

/// One classified parameter token (specification §4.4's parameter kinds).
#[derive(Debug, Clone, PartialEq)]
pub enum ParamKind {
    Sort(SortKey),
    All,
    LogLevel(LogLevel),
    Field(FieldAssign),
}

/// Classifies a single whitespace-delimited token into a [`ParamKind`].
/// Any token that doesn't match a known shape is a parse failure.
pub fn classify(token: &str) -> Result<ParamKind, ParseError> {
    if let Some(rest) = token.strip_prefix("--sort:") {
        return match rest {
            "id" => Ok(ParamKind::Sort(SortKey::Id)),
            "date" => Ok(ParamKind::Sort(SortKey::Date)),
            _ => Err(ParseError::InvalidParameter(token.to_owned())),
        };
    }

    if token == "*" {
        return Ok(ParamKind::All);
    }

    if let Ok(level) = token.parse::<LogLevel>() {
        return Ok(ParamKind::LogLevel(level));
    }

    if let Some((field, value)) = token.split_once(':') {
        let value = value.to_owned();
        let assign = match field {
            "id" => FieldAssign::Id(value),
            "name" => FieldAssign::Name(value),
            "date" => FieldAssign::Date(value),
            "dept" => FieldAssign::Dept(value),
            "pos" => FieldAssign::Pos(value),
            _ => return Err(ParseError::InvalidParameter(token.to_owned())),
        };
        return Ok(ParamKind::Field(assign));
    }

    Err(ParseError::InvalidParameter(token.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_sort_flags() {
        assert_eq!(classify("--sort:id").unwrap(), ParamKind::Sort(SortKey::Id));
        assert_eq!(classify("--sort:date").unwrap(), ParamKind::Sort(SortKey::Date));
    }

    #[test]
    fn classifies_global_flag() {
        assert_eq!(classify("*").unwrap(), ParamKind::All);
    }

    #[test]
    fn classifies_log_levels() {
        assert_eq!(classify("debug").unwrap(), ParamKind::LogLevel(LogLevel::Debug));
    }

    #[test]
    fn classifies_field_assignments() {
        assert_eq!(
            classify("id:42").unwrap(),
            ParamKind::Field(FieldAssign::Id("42".to_owned()))
        );
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert!(classify("???").is_err());
        assert!(classify("unknown:field").is_err());
    }
}

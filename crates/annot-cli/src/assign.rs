//! Scripted column assignments for the `--set` flag.
//!
//! Grammar: `COL=TYPE[,country=NAME][,time_zone=ZONE][,phone_code=CODE][,unit=UNIT]`.
//! Assignments run through the same session operations as the interactive
//! prompts, so the field-presence rules hold either way.

use anyhow::{Result, anyhow, bail};

use annot_model::{ColumnType, Unit};
use annot_session::AnnotationSession;

/// One parsed `--set` specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub column: String,
    pub column_type: ColumnType,
    pub country: Option<String>,
    pub time_zone: Option<String>,
    pub phone_code: Option<String>,
    pub unit: Option<Unit>,
}

/// Parse a `--set` specification.
pub fn parse_assignment(spec: &str) -> Result<Assignment> {
    let (column, rest) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid --set '{spec}': expected COL=TYPE[,key=value...]"))?;
    let column = column.trim();
    if column.is_empty() {
        bail!("invalid --set '{spec}': empty column name");
    }
    let mut parts = rest.split(',');
    let type_part = parts.next().unwrap_or_default();
    let column_type: ColumnType = type_part
        .parse()
        .map_err(|error: String| anyhow!("invalid --set '{spec}': {error}"))?;
    let mut assignment = Assignment {
        column: column.to_string(),
        column_type,
        country: None,
        time_zone: None,
        phone_code: None,
        unit: None,
    };
    for part in parts {
        let (key, value) = part
            .split_once('=')
            .ok_or_else(|| anyhow!("invalid --set '{spec}': expected key=value, got '{part}'"))?;
        let value = value.trim();
        match key.trim() {
            "country" => assignment.country = Some(value.to_string()),
            "time_zone" => assignment.time_zone = Some(value.to_string()),
            "phone_code" => assignment.phone_code = Some(value.to_string()),
            "unit" => {
                let unit: Unit = value
                    .parse()
                    .map_err(|error: String| anyhow!("invalid --set '{spec}': {error}"))?;
                assignment.unit = Some(unit);
            }
            other => bail!("invalid --set '{spec}': unknown field '{other}'"),
        }
    }
    Ok(assignment)
}

/// Apply a parsed assignment to the session.
pub fn apply_assignment(session: &mut AnnotationSession, assignment: &Assignment) -> Result<()> {
    session.set_type(&assignment.column, assignment.column_type);
    if let Some(country) = &assignment.country {
        session.set_country(&assignment.column, country)?;
    }
    if let Some(time_zone) = &assignment.time_zone {
        session.set_time_zone(&assignment.column, time_zone)?;
    }
    if let Some(phone_code) = &assignment.phone_code {
        session.set_phone_code(&assignment.column, phone_code)?;
    }
    if let Some(unit) = assignment.unit {
        session.set_unit(&assignment.column, unit)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_type() {
        let assignment = parse_assignment("name=string").expect("parse");
        assert_eq!(assignment.column, "name");
        assert_eq!(assignment.column_type, ColumnType::String);
        assert_eq!(assignment.country, None);
    }

    #[test]
    fn parses_type_with_fields() {
        let assignment =
            parse_assignment("contact=phone,country=India,phone_code=+91").expect("parse");
        assert_eq!(assignment.column_type, ColumnType::Phone);
        assert_eq!(assignment.country.as_deref(), Some("India"));
        assert_eq!(assignment.phone_code.as_deref(), Some("+91"));
    }

    #[test]
    fn parses_unit_field() {
        let assignment = parse_assignment("amount=distance,unit=mile").expect("parse");
        assert_eq!(assignment.column_type, ColumnType::Distance);
        assert_eq!(assignment.unit, Some(Unit::Mile));
    }

    #[test]
    fn rejects_malformed_specs() {
        assert!(parse_assignment("no-equals").is_err());
        assert!(parse_assignment("=phone").is_err());
        assert!(parse_assignment("col=nosuchtype").is_err());
        assert!(parse_assignment("col=phone,zone").is_err());
        assert!(parse_assignment("col=phone,flavor=mint").is_err());
        assert!(parse_assignment("col=weights,unit=mileage").is_err());
    }

    #[test]
    fn applied_assignment_goes_through_session_rules() {
        let mut session = AnnotationSession::new();
        let assignment = parse_assignment("contact=phone,country=India").expect("parse");
        apply_assignment(&mut session, &assignment).expect("apply");
        let config = session.get("contact").expect("record");
        assert_eq!(config.country.as_deref(), Some("India"));
        // The seeded code followed the country selection.
        assert_eq!(config.phone_code.as_deref(), Some("+91"));
    }

    #[test]
    fn mismatched_unit_is_rejected_on_apply() {
        let mut session = AnnotationSession::new();
        let assignment = parse_assignment("amount=weights,unit=mile").expect("parse");
        assert!(apply_assignment(&mut session, &assignment).is_err());
    }
}

//! Interactive prompts for the annotation editor.
//!
//! Terminal rendition of the original selectable-option and text widgets:
//! one type selection per column, then the conditional country / time zone
//! / phone code / unit prompts the chosen type requires. Defaults always
//! reflect the current session record so repeated passes preserve prior
//! selections.

use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use annot_model::{COLUMN_TYPES, ColumnType, FieldRequirements, Unit, UnitKind, countries, country};
use annot_session::AnnotationSession;

/// Run the prompt sequence for one column.
pub fn annotate_column(session: &mut AnnotationSession, column: &str) -> Result<()> {
    let theme = ColorfulTheme::default();
    let current = session.ensure_column(column).column_type;
    let type_names: Vec<&str> = COLUMN_TYPES.iter().map(ColumnType::as_str).collect();
    let default_idx = COLUMN_TYPES
        .iter()
        .position(|t| *t == current)
        .unwrap_or(0);
    let selected = Select::with_theme(&theme)
        .with_prompt(format!("{column} type"))
        .items(&type_names)
        .default(default_idx)
        .interact()
        .context("type selection aborted")?;
    let column_type = COLUMN_TYPES[selected];
    session.set_type(column, column_type);

    match column_type.requirements() {
        FieldRequirements::None => {}
        FieldRequirements::CountryTimeZone => {
            prompt_country(session, column, &theme)?;
            prompt_time_zone(session, column, &theme)?;
        }
        FieldRequirements::CountryPhoneCode => {
            prompt_country(session, column, &theme)?;
            prompt_phone_code(session, column, &theme)?;
        }
        FieldRequirements::Unit(kind) => prompt_unit(session, column, kind, &theme)?,
    }
    Ok(())
}

/// Ask for confirmation before saving.
pub fn confirm_save(path: &std::path::Path) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Save configuration to {}?", path.display()))
        .default(true)
        .interact()
        .context("confirmation aborted")
}

fn prompt_country(
    session: &mut AnnotationSession,
    column: &str,
    theme: &ColorfulTheme,
) -> Result<()> {
    let names: Vec<&str> = countries().iter().map(|c| c.name).collect();
    let current = session
        .get(column)
        .and_then(|config| config.country.clone());
    let default_idx = current
        .as_deref()
        .and_then(|name| names.iter().position(|n| *n == name))
        .unwrap_or(0);
    let selected = Select::with_theme(theme)
        .with_prompt(format!("Country for {column}"))
        .items(&names)
        .default(default_idx)
        .interact()
        .context("country selection aborted")?;
    session.set_country(column, names[selected])?;
    Ok(())
}

fn prompt_time_zone(
    session: &mut AnnotationSession,
    column: &str,
    theme: &ColorfulTheme,
) -> Result<()> {
    let config = session.get(column).cloned().unwrap_or_default();
    let zones = config
        .country
        .as_deref()
        .and_then(country)
        .map(|c| c.time_zones)
        .unwrap_or_default();
    if zones.is_empty() {
        return Ok(());
    }
    let default_idx = config
        .time_zone
        .as_deref()
        .and_then(|tz| zones.iter().position(|z| *z == tz))
        .unwrap_or(0);
    let selected = Select::with_theme(theme)
        .with_prompt(format!("Time zone for {column}"))
        .items(zones)
        .default(default_idx)
        .interact()
        .context("time zone selection aborted")?;
    session.set_time_zone(column, zones[selected])?;
    Ok(())
}

fn prompt_phone_code(
    session: &mut AnnotationSession,
    column: &str,
    theme: &ColorfulTheme,
) -> Result<()> {
    let seeded = session
        .get(column)
        .and_then(|config| config.phone_code.clone())
        .unwrap_or_default();
    let code: String = Input::with_theme(theme)
        .with_prompt(format!("Phone code for {column}"))
        .with_initial_text(&seeded)
        .allow_empty(true)
        .interact_text()
        .context("phone code entry aborted")?;
    // Accepted verbatim; an unedited prompt just re-applies the seed.
    if code != seeded {
        session.set_phone_code(column, &code)?;
    }
    Ok(())
}

fn prompt_unit(
    session: &mut AnnotationSession,
    column: &str,
    kind: UnitKind,
    theme: &ColorfulTheme,
) -> Result<()> {
    let units = kind.units();
    let names: Vec<&str> = units.iter().map(Unit::as_str).collect();
    let default_idx = session
        .get(column)
        .and_then(|config| config.unit)
        .and_then(|unit| units.iter().position(|u| *u == unit))
        .unwrap_or(0);
    let selected = Select::with_theme(theme)
        .with_prompt(format!("{} unit for {column}", kind.label()))
        .items(&names)
        .default(default_idx)
        .interact()
        .context("unit selection aborted")?;
    session.set_unit(column, units[selected])?;
    Ok(())
}

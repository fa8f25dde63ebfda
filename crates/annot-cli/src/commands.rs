use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use annot_cli::assign::{Assignment, apply_assignment, parse_assignment};
use annot_cli::summary::{print_countries, print_preview, print_review, render_document};
use annot_ingest::read_csv_table;
use annot_session::AnnotationSession;
use annot_store::ConfigStore;

use crate::cli::{AnnotateArgs, ShowArgs};
use crate::prompts;

pub fn run_annotate(args: &AnnotateArgs) -> Result<()> {
    let span = info_span!("annotate", table = %args.table.display());
    let _guard = span.enter();

    let store = ConfigStore::new(&args.config);
    let mut session = match store.load().context("load existing configuration")? {
        Some(document) => {
            info!(columns = document.len(), "seeding session from stored configuration");
            AnnotationSession::from_document(document)
        }
        None => AnnotationSession::new(),
    };

    let table = read_csv_table(&args.table)?;
    println!("Loaded {}", args.table.display());
    print_preview(&table);

    let assignments = parse_assignments(&args.set, &table.headers)?;
    for header in &table.headers {
        session.ensure_column(header);
        if let Some(assignment) = assignments.get(header.as_str()) {
            apply_assignment(&mut session, assignment)?;
        } else if args.set.is_empty() {
            prompts::annotate_column(&mut session, header)?;
        } else {
            // Scripted run: untouched columns keep their current record.
            info!(column = %header, "no assignment, keeping current record");
        }
    }

    print_review(&session.summaries());

    if args.dry_run {
        println!("Dry run: configuration not saved");
        return Ok(());
    }
    if !args.yes && args.set.is_empty() && !prompts::confirm_save(store.path())? {
        println!("Configuration not saved");
        return Ok(());
    }
    let path = store.save(&session.into_document())?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let store = ConfigStore::new(&args.config);
    match store.load() {
        Ok(Some(document)) => print!("{}", render_document(&document)),
        Ok(None) => println!("No configuration found"),
        Err(error) => {
            // Reader contract: unreadable is informational, not fatal.
            warn!("configuration unreadable: {error:#}");
            println!("No configuration found");
        }
    }
    Ok(())
}

pub fn run_countries() -> Result<()> {
    print_countries();
    Ok(())
}

fn parse_assignments(
    specs: &[String],
    headers: &[String],
) -> Result<BTreeMap<String, Assignment>> {
    let mut assignments = BTreeMap::new();
    for spec in specs {
        let assignment = parse_assignment(spec)?;
        if !headers.contains(&assignment.column) {
            bail!(
                "--set names unknown column '{}' (table has: {})",
                assignment.column,
                headers.join(", ")
            );
        }
        assignments.insert(assignment.column.clone(), assignment);
    }
    Ok(assignments)
}

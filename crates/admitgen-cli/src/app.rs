//! CLI Application logic
//!
//! Contains the command-line interface implementation: one-off card
//! generation from form fields, batch generation from an uploaded
//! table, and schedule inspection.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use admitgen_archive::{pack, DEFAULT_ARCHIVE_NAME};
use admitgen_core::{CardRenderer, PersonRecord, SubjectSchedule};
use admitgen_data::load_table;
use admitgen_pdf::PdfRenderer;

#[derive(Parser)]
#[command(name = "admitgen")]
#[command(author, version, about = "Admit card generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one admit card from form fields
    Single {
        /// Full name
        #[arg(long)]
        name: String,

        /// Roll number
        #[arg(long)]
        roll: String,

        /// Date of birth
        #[arg(long)]
        dob: String,

        /// Examination center
        #[arg(long)]
        center: String,

        /// Father's name (adds a line to the card)
        #[arg(long)]
        father_name: Option<String>,

        /// Class (adds a line to the card)
        #[arg(long)]
        class: Option<String>,

        /// Photo image file (PNG, JPEG or WebP)
        #[arg(long)]
        photo: Option<PathBuf>,

        /// Output PDF path (defaults to {Name}_{Roll}_Admit_Card.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Schedule TOML file (defaults to the built-in 2026 schedule)
        #[arg(short, long)]
        schedule: Option<PathBuf>,
    },

    /// Generate admit cards for every row of a CSV or Excel table
    Batch {
        /// Student table (.csv, .xlsx or .xls) with columns
        /// Name/Roll/DOB/Center and optionally Father's Name/Class
        input: PathBuf,

        /// Output ZIP path (defaults to All_Admit_Cards_2026.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Schedule TOML file (defaults to the built-in 2026 schedule)
        #[arg(short, long)]
        schedule: Option<PathBuf>,

        /// Number of rows to preview before generating
        #[arg(long, default_value_t = 10)]
        preview: usize,
    },

    /// Print the effective examination schedule
    Schedule {
        /// Schedule TOML file (defaults to the built-in 2026 schedule)
        #[arg(short, long)]
        schedule: Option<PathBuf>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Single {
            name,
            roll,
            dob,
            center,
            father_name,
            class,
            photo,
            output,
            schedule,
        } => {
            let mut person = PersonRecord::new(name, roll, dob, center);
            person.father_name = father_name;
            person.class_name = class;
            single_command(
                person,
                photo.as_deref(),
                output.as_deref(),
                schedule.as_deref(),
            )?;
        }
        Commands::Batch {
            input,
            output,
            schedule,
            preview,
        } => {
            batch_command(&input, output.as_deref(), schedule.as_deref(), preview)?;
        }
        Commands::Schedule { schedule } => {
            schedule_command(schedule.as_deref())?;
        }
    }

    Ok(())
}

/// Execute the single command; returns the path of the written PDF
pub fn single_command(
    mut person: PersonRecord,
    photo: Option<&Path>,
    output: Option<&Path>,
    schedule: Option<&Path>,
) -> Result<PathBuf> {
    println!("admitgen v{}", admitgen_core::VERSION);

    person.validate().context("Please fill all required fields")?;

    if let Some(photo_path) = photo {
        let bytes = fs::read(photo_path)
            .with_context(|| format!("Failed to read photo: {}", photo_path.display()))?;
        person.photo = Some(bytes);
    }

    let schedule = load_schedule(schedule)?;
    let renderer = PdfRenderer::new();
    let card = renderer
        .render(&person, &schedule)
        .with_context(|| format!("Failed to generate admit card for {}", person.name))?;

    for warning in &card.warnings {
        println!("  Warning: {warning}");
    }

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(person.single_filename()),
    };
    fs::write(&output_path, &card.bytes)
        .with_context(|| format!("Failed to write PDF: {}", output_path.display()))?;

    println!("Admit card generated for {}", person.name);
    println!("  Created: {}", output_path.display());
    Ok(output_path)
}

/// Execute the batch command; returns the path of the written archive
pub fn batch_command(
    input: &Path,
    output: Option<&Path>,
    schedule: Option<&Path>,
    preview: usize,
) -> Result<PathBuf> {
    println!("admitgen v{}", admitgen_core::VERSION);
    println!("Reading: {}", input.display());

    let table = load_table(input)
        .with_context(|| format!("Failed to read student table: {}", input.display()))?;
    println!("Loaded {} students", table.len());

    if preview > 0 && !table.is_empty() {
        println!();
        println!("  {}", table.headers.join(" | "));
        for row in table.preview(preview) {
            println!("  {}", row.join(" | "));
        }
        if table.len() > preview {
            println!("  ... and {} more", table.len() - preview);
        }
        println!();
    }

    let schedule = load_schedule(schedule)?;
    let outcome = pack(&table, &schedule, &PdfRenderer::new())?;

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(DEFAULT_ARCHIVE_NAME),
    };
    fs::write(&output_path, &outcome.archive)
        .with_context(|| format!("Failed to write archive: {}", output_path.display()))?;

    println!("Packed {} admit cards", outcome.packed);
    if !outcome.failures.is_empty() {
        println!("Skipped {} rows:", outcome.failures.len());
        for failure in &outcome.failures {
            println!("  row {}: {} ({})", failure.row, failure.name, failure.reason);
        }
    }
    println!("  Created: {}", output_path.display());
    Ok(output_path)
}

/// Execute the schedule command
pub fn schedule_command(schedule: Option<&Path>) -> Result<()> {
    let schedule = load_schedule(schedule)?;

    let width = schedule
        .entries()
        .iter()
        .map(|(subject, _)| subject.len())
        .max()
        .unwrap_or(0)
        .max("Subject".len());

    println!("{:<width$}  Date of Examination", "Subject");
    for (subject, date) in schedule.entries() {
        println!("{subject:<width$}  {date}");
    }
    Ok(())
}

/// Load the schedule from a TOML file, or fall back to the built-in one
fn load_schedule(path: Option<&Path>) -> Result<SubjectSchedule> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read schedule file: {}", path.display()))?;
            let schedule = SubjectSchedule::from_toml_str(&text)
                .with_context(|| format!("Failed to parse schedule: {}", path.display()))?;
            Ok(schedule)
        }
        None => Ok(SubjectSchedule::annual_2026()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

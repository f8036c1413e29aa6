pub mod analyze;
pub mod clean;
pub mod dedupe;
pub mod extract;
pub mod init;
pub mod relabel;
pub mod repair;
pub mod upgrade;
pub mod verify;

use crate::models::{DatasetConfig, Question};
use crate::services::{load_questions, save_questions};
use crate::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::Confirm;
use std::path::{Path, PathBuf};

/// Dataset selection shared by the rewriting commands
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Dataset file to process (default: every dataset in qbank.toml)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Ask before overwriting an existing file; `--yes` skips the prompt
pub fn confirm_overwrite(path: &Path, yes: bool) -> Result<bool> {
    if yes || !path.exists() {
        return Ok(true);
    }

    let confirm = Confirm::new()
        .with_prompt(format!("Overwrite {}?", path.display()))
        .default(false)
        .interact()?;

    if !confirm {
        println!("   Skipping {}", path.display());
    }
    Ok(confirm)
}

/// Dataset loading for one run of a batch command
///
/// An explicit `--file` that cannot be read is fatal. In a run over the
/// configured datasets, unreadable files are skipped with a warning and
/// `finish` fails once every other dataset has been processed.
pub struct DatasetBatch {
    explicit: bool,
    skipped: Vec<String>,
}

impl DatasetBatch {
    /// `explicit` is true when the user named the file with `--file`
    pub fn new(explicit: bool) -> Self {
        Self {
            explicit,
            skipped: Vec::new(),
        }
    }

    pub fn load(&mut self, dataset: &DatasetConfig) -> Result<Option<Vec<Question>>> {
        match load_questions(&dataset.path) {
            Ok(questions) => Ok(Some(questions)),
            Err(e) if self.explicit => Err(e.into()),
            Err(e) => {
                eprintln!("{}", format!("⚠️  Skipping {}: {}", dataset.name, e).yellow());
                self.skipped.push(dataset.name.clone());
                Ok(None)
            }
        }
    }

    pub fn finish(self) -> Result<()> {
        if !self.skipped.is_empty() {
            anyhow::bail!(
                "{} dataset(s) could not be read: {}",
                self.skipped.len(),
                self.skipped.join(", ")
            );
        }
        Ok(())
    }
}

/// Write a transformed dataset unless this is a dry run or the user declines
pub fn write_dataset(path: &Path, questions: &[Question], args: &DatasetArgs) -> Result<bool> {
    if args.dry_run {
        println!("   {} (dry run, not written)", path.display().to_string().bright_black());
        return Ok(false);
    }
    if !confirm_overwrite(path, args.yes)? {
        return Ok(false);
    }

    save_questions(path, questions)?;
    println!("   {} {}", "✓".green(), path.display());
    Ok(true)
}

/// Print a stage header for one dataset
pub fn print_dataset_header(dataset: &DatasetConfig, count: usize) {
    println!();
    println!(
        "{} {}",
        dataset.name.cyan().bold(),
        format!("({} questions)", count).bright_black()
    );
}

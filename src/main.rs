use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use qbank::cli::{
    analyze::AnalyzeArgs, extract::ExtractArgs, relabel::RelabelArgs, upgrade::UpgradeArgs,
    verify::VerifyArgs, DatasetArgs,
};
use qbank::Result;
use std::io;

#[derive(Parser)]
#[command(name = "qbank")]
#[command(author = "Chris Cheng <chris.cheng@shopee.com>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Certification question bank toolkit", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a qbank.toml with the default settings
    Init {
        /// Overwrite an existing qbank.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Extract questions from PDF / text exam dumps
    Extract(ExtractArgs),

    /// Clean question text and drop corrupted options and records
    Clean(DatasetArgs),

    /// Remove duplicate questions
    Dedupe(DatasetArgs),

    /// Pad questions with too few options using generic distractors
    Repair(DatasetArgs),

    /// Re-assign single / double / triple answer counts
    Relabel(RelabelArgs),

    /// Check dataset structure, option counts and answers
    Verify(VerifyArgs),

    /// Report question quality heuristics
    Analyze(AnalyzeArgs),

    /// Replace the head of a bank with a premium question set
    Upgrade(UpgradeArgs),

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => {
            println!("{}", "🚀 Initializing qbank...".cyan());
            qbank::cli::init::run(force)?;
        }

        Commands::Extract(args) => {
            println!("{}", "📥 Extracting questions...".cyan());
            qbank::cli::extract::run(args)?;
        }

        Commands::Clean(args) => {
            qbank::cli::clean::run(args)?;
        }

        Commands::Dedupe(args) => {
            qbank::cli::dedupe::run(args)?;
        }

        Commands::Repair(args) => {
            qbank::cli::repair::run(args)?;
        }

        Commands::Relabel(args) => {
            qbank::cli::relabel::run(args)?;
        }

        Commands::Verify(args) => {
            qbank::cli::verify::run(args)?;
        }

        Commands::Analyze(args) => {
            qbank::cli::analyze::run(args)?;
        }

        Commands::Upgrade(args) => {
            qbank::cli::upgrade::run(args)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "qbank", &mut io::stdout());
        }
    }

    Ok(())
}

use crate::models::{QbankConfig, Severity};
use crate::validator::{CountStatus, DatasetReport, DatasetVerifier, VerifyReport};
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::env;
use std::path::PathBuf;

/// Findings printed per dataset before the list is cut short
const MAX_LISTED: usize = 20;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Dataset file to verify (default: every dataset in qbank.toml)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output the report as JSON
    #[arg(short, long)]
    pub json: bool,
}

pub fn run(args: VerifyArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = QbankConfig::load(&project_root)?;

    let datasets = config.select_datasets(&project_root, args.file.as_deref());
    let verifier = DatasetVerifier::new(config.verify.clone())?;
    let report = verifier.verify(&datasets);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, config.verify.min_options);
    }

    if !report.is_valid() {
        anyhow::bail!(
            "Verification failed: {} high-severity findings",
            report.result().count_by_severity(Severity::High)
        );
    }
    Ok(())
}

fn print_dataset(dataset: &DatasetReport, min_options: usize) {
    println!();
    println!(
        "{} {}",
        dataset.name.cyan().bold(),
        format!("({})", dataset.path.display()).bright_black()
    );
    println!("   Questions: {}", dataset.count);

    let status = match dataset.status {
        CountStatus::Ok => dataset.status.name().green(),
        CountStatus::Check => dataset.status.name().yellow(),
    };
    println!("   Status:    {}", status);

    match dataset.structure_valid {
        Some(true) => println!("   Structure: {}", "VALID".green()),
        Some(false) => println!("   Structure: {}", "INVALID".red()),
        None => {}
    }

    if !dataset.option_histogram.is_empty() {
        println!("   Option distribution:");
        for (options, count) in &dataset.option_histogram {
            println!("     {} options: {} questions", options, count);
        }
    }

    if dataset.short_records.is_empty() && dataset.count > 0 {
        println!("   {} All questions have {}+ options", "✓".green(), min_options);
    } else if !dataset.short_records.is_empty() {
        println!(
            "   {} {} questions need fixing",
            "✗".red(),
            dataset.short_records.len()
        );
    }

    for finding in dataset.findings.iter().take(MAX_LISTED) {
        let line = format!("   {}", finding.format());
        match finding.severity {
            Severity::High => println!("{}", line.red()),
            Severity::Medium => println!("{}", line.yellow()),
            Severity::Low => println!("{}", line.bright_black()),
        }
    }
    if dataset.findings.len() > MAX_LISTED {
        println!("   ... and {} more", dataset.findings.len() - MAX_LISTED);
    }
}

fn print_report(report: &VerifyReport, min_options: usize) {
    println!("{}", "=".repeat(70).bright_black());
    println!("{}", "🔍 QUESTION BANK VERIFICATION".cyan().bold());
    println!("{}", "=".repeat(70).bright_black());

    for dataset in &report.datasets {
        print_dataset(dataset, min_options);
    }

    let result = report.result();
    println!();
    println!("{}", "=".repeat(70).bright_black());
    println!("TOTAL QUESTIONS: {}", report.total);
    println!("Target total:    {}", report.target_total);
    println!("Achievement:     {:.1}%", report.achievement());
    println!(
        "Findings:        {} high, {} medium, {} low",
        result.count_by_severity(Severity::High),
        result.count_by_severity(Severity::Medium),
        result.count_by_severity(Severity::Low)
    );
    println!();

    if report.is_valid() {
        println!("{}", "✅ All datasets passed verification".green().bold());
    } else {
        println!("{}", "❌ Issues found: some datasets need fixing".red().bold());
    }
}

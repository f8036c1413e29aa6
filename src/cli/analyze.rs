use super::DatasetBatch;
use crate::models::QbankConfig;
use crate::services::{analyze, Quality};
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::env;
use std::path::PathBuf;

/// Examples listed per issue class
const MAX_EXAMPLES: usize = 3;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Dataset file to analyze (default: every dataset in qbank.toml)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Number of leading questions to sample
    #[arg(short, long)]
    pub sample: Option<usize>,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    let mut config = QbankConfig::load(&project_root)?;
    if let Some(sample) = args.sample {
        config.analyze.sample_size = sample;
    }

    let mut batch = DatasetBatch::new(args.file.is_some());
    for dataset in config.select_datasets(&project_root, args.file.as_deref()) {
        let Some(questions) = batch.load(&dataset)? else {
            continue;
        };

        let report = analyze(&questions, &config.analyze);

        println!();
        println!("{}", "=".repeat(70).bright_black());
        println!("{}", format!("🔍 Analyzing: {}", dataset.name).cyan().bold());
        println!("{}", "=".repeat(70).bright_black());
        println!();
        println!("Quality assessment (first {} questions):", report.sampled);

        for quality in [
            Quality::Good,
            Quality::TooShort,
            Quality::NoScenario,
            Quality::WeakOpener,
        ] {
            let line = format!(
                "   {:<18} {:>4} ({:.0}%)",
                format!("{}:", quality.label()),
                report.examples(quality).len(),
                report.percent(quality)
            );
            if quality == Quality::Good {
                println!("{}", line.green());
            } else {
                println!("{}", line);
            }
        }

        for quality in [Quality::TooShort, Quality::WeakOpener] {
            let examples = report.examples(quality);
            if examples.is_empty() {
                continue;
            }
            println!();
            println!("   {}:", quality.label().yellow());
            for example in examples.iter().take(MAX_EXAMPLES) {
                println!("     Q{}: {}...", example.number, example.excerpt);
            }
        }
    }

    batch.finish()
}

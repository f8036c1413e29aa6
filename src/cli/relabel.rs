use super::{print_dataset_header, write_dataset, DatasetArgs, DatasetBatch};
use crate::models::QbankConfig;
use crate::services::{relabel, Distribution};
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::env;

#[derive(Args, Debug)]
pub struct RelabelArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Override the shuffle seed from qbank.toml
    #[arg(long)]
    pub seed: Option<u64>,
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

fn print_distribution(dist: &Distribution, total: usize) {
    println!("   Single answer: {:>4} ({:.1}%)", dist.single, percent(dist.single, total));
    println!("   Two answers:   {:>4} ({:.1}%)", dist.double, percent(dist.double, total));
    println!("   Three answers: {:>4} ({:.1}%)", dist.triple, percent(dist.triple, total));
    if dist.other > 0 {
        println!("   Other:         {:>4}", dist.other);
    }
}

pub fn run(args: RelabelArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    let mut config = QbankConfig::load(&project_root)?;
    if let Some(seed) = args.seed {
        config.relabel.seed = seed;
    }

    println!(
        "{}",
        format!(
            "🎲 Re-labeling answers {}/{}/{} (seed {})",
            config.relabel.single_percent,
            config.relabel.double_percent,
            config.relabel.triple_percent(),
            config.relabel.seed
        )
        .cyan()
    );

    let mut batch = DatasetBatch::new(args.dataset.file.is_some());
    for dataset in config.select_datasets(&project_root, args.dataset.file.as_deref()) {
        let Some(questions) = batch.load(&dataset)? else {
            continue;
        };
        print_dataset_header(&dataset, questions.len());

        let (relabeled, report) = relabel(&questions, &config.relabel);
        let targets = report.targets;
        println!(
            "   Targets: {} single, {} double, {} triple",
            targets.single, targets.double, targets.triple
        );
        println!(
            "   Modified {} questions ({} double, {} triple)",
            report.modified(),
            report.upgraded_double,
            report.upgraded_triple
        );
        if report.ineligible > 0 {
            println!(
                "   {}",
                format!(
                    "{} targeted questions had too few options and kept their answer",
                    report.ineligible
                )
                .yellow()
            );
        }
        print_distribution(&report.distribution, relabeled.len());

        write_dataset(&dataset.path, &relabeled, &args.dataset)?;
    }

    batch.finish()
}

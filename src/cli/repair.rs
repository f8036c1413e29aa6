use super::{print_dataset_header, write_dataset, DatasetArgs, DatasetBatch};
use crate::models::QbankConfig;
use crate::services::repair_dataset;
use crate::Result;
use colored::Colorize;
use std::env;

pub fn run(args: DatasetArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = QbankConfig::load(&project_root)?;

    println!(
        "{}",
        format!(
            "🔧 Padding questions to at least {} options...",
            config.repair.min_options
        )
        .cyan()
    );

    let mut batch = DatasetBatch::new(args.file.is_some());
    for dataset in config.select_datasets(&project_root, args.file.as_deref()) {
        let Some(questions) = batch.load(&dataset)? else {
            continue;
        };
        print_dataset_header(&dataset, questions.len());

        let (repaired, report) = repair_dataset(&questions, &dataset.name, &config.repair);
        if report.repaired.is_empty() {
            println!("   {} All questions have enough options", "✓".green());
            continue;
        }

        println!("   Fixed {} questions", report.repaired.len().to_string().green());
        for idx in &report.still_short {
            eprintln!(
                "{}",
                format!(
                    "⚠️  Q{} still has {} options (distractor pool exhausted)",
                    idx + 1,
                    repaired[*idx].options.len()
                )
                .yellow()
            );
        }

        write_dataset(&dataset.path, &repaired, &args)?;
    }

    batch.finish()
}

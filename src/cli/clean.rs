use super::{print_dataset_header, write_dataset, DatasetArgs, DatasetBatch};
use crate::models::QbankConfig;
use crate::services::clean_dataset;
use crate::Result;
use colored::Colorize;
use std::env;

pub fn run(args: DatasetArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = QbankConfig::load(&project_root)?;

    println!("{}", "🧹 Cleaning datasets...".cyan());

    let mut batch = DatasetBatch::new(args.file.is_some());
    for dataset in config.select_datasets(&project_root, args.file.as_deref()) {
        let Some(questions) = batch.load(&dataset)? else {
            continue;
        };
        print_dataset_header(&dataset, questions.len());

        let (cleaned, report) = clean_dataset(&questions, &config.clean);
        println!("   Original:          {}", report.original);
        println!("   Cleaned:           {}", report.cleaned.to_string().green());
        println!("   Removed:           {}", report.removed());
        println!("     bad length:      {}", report.bad_length);
        println!("     too few options: {}", report.too_few_options);
        println!("     answer discards: {}", report.answer_discards);
        if report.answer_fallbacks > 0 {
            println!(
                "   {}",
                format!(
                    "{} answers replaced by the first option",
                    report.answer_fallbacks
                )
                .yellow()
            );
        }

        write_dataset(&dataset.path, &cleaned, &args)?;
    }
    batch.finish()?;

    println!();
    println!("{}", "✅ Cleaning complete".green().bold());
    Ok(())
}

use super::{print_dataset_header, write_dataset, DatasetArgs, DatasetBatch};
use crate::models::QbankConfig;
use crate::services::dedupe;
use crate::Result;
use colored::Colorize;
use std::env;

pub fn run(args: DatasetArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = QbankConfig::load(&project_root)?;

    let mut batch = DatasetBatch::new(args.file.is_some());
    for dataset in config.select_datasets(&project_root, args.file.as_deref()) {
        let Some(questions) = batch.load(&dataset)? else {
            continue;
        };
        print_dataset_header(&dataset, questions.len());

        let before = questions.len();
        let unique = dedupe(questions);
        let removed = before - unique.len();
        if removed == 0 {
            println!("   {} No duplicates", "✓".green());
            continue;
        }

        println!("   Removed {} duplicates, {} unique", removed.to_string().yellow(), unique.len());
        write_dataset(&dataset.path, &unique, &args)?;
    }

    batch.finish()
}

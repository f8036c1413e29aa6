use crate::models::{QbankConfig, CONFIG_FILE};
use crate::Result;
use colored::Colorize;
use std::env;

pub fn run(force: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    let config_path = project_root.join(CONFIG_FILE);

    if config_path.exists() && !force {
        println!("{}", format!("⚠️  {} already exists", CONFIG_FILE).yellow());
        println!("   Run with --force to overwrite it with the defaults");
        return Ok(());
    }

    let config = QbankConfig::default();
    config.save(&project_root)?;

    println!("{}", format!("✅ Wrote {}", CONFIG_FILE).green().bold());
    println!();
    println!("{}", "📁 Datasets:".cyan());
    for dataset in &config.datasets {
        println!("   {:<18} {}", dataset.name, dataset.path.display());
    }
    println!();
    println!("{}", "⏭️  Next steps:".yellow());
    println!(
        "   qbank extract   - build {} from {}/",
        config.extract.output.display(),
        config.extract.pdf_dir.display()
    );
    println!("   qbank verify    - check every dataset");

    Ok(())
}

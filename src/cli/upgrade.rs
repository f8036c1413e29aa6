use super::confirm_overwrite;
use crate::services::{load_questions, save_questions, upgrade};
use crate::Result;
use clap::Args;
use colored::Colorize;
use std::env;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct UpgradeArgs {
    /// Bank to upgrade in place
    pub bank: PathBuf,

    /// Premium question set placed at the front of the bank
    pub premium: PathBuf,

    /// Overwrite without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

pub fn run(args: UpgradeArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    let bank_path = project_root.join(&args.bank);
    let premium_path = project_root.join(&args.premium);

    let premium = load_questions(&premium_path)?;
    println!(
        "{}",
        format!("⬆️  Loaded {} premium questions", premium.len()).cyan()
    );
    for (i, q) in premium.iter().take(3).enumerate() {
        let excerpt: String = q.question.chars().take(100).collect();
        println!("   Q{}: {}...", i + 1, excerpt);
        println!(
            "       Options: {}, Correct: {}",
            q.options.len(),
            q.correct_count()
        );
    }

    let existing = load_questions(&bank_path)?;
    println!("   Current bank: {} questions", existing.len());

    let (upgraded, report) = upgrade(&existing, &premium);
    println!("   Upgraded bank: {} questions", report.total.to_string().green());
    println!("     premium:   {}", report.total - report.kept);
    println!("     remaining: {}", report.kept);

    if !confirm_overwrite(&bank_path, args.yes)? {
        return Ok(());
    }
    save_questions(&bank_path, &upgraded)?;

    println!();
    println!(
        "{}",
        format!("✅ Upgraded {}", bank_path.display()).green().bold()
    );
    Ok(())
}

use super::confirm_overwrite;
use crate::models::QbankConfig;
use crate::parser::{discover_sources, read_source, Extraction, QuestionExtractor};
use crate::services::{dedupe, save_questions};
use crate::Result;
use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::path::PathBuf;

/// Records shown after a successful extraction
const SAMPLE_SIZE: usize = 3;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Directory with *.pdf / *.txt exam dumps (default: extract.pdf_dir)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Output dataset (default: extract.output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print every per-block warning
    #[arg(short, long)]
    pub verbose: bool,

    /// Overwrite the output without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

pub fn run(args: ExtractArgs) -> Result<()> {
    let project_root = env::current_dir()?;
    let config = QbankConfig::load(&project_root)?;

    let dir = project_root.join(args.dir.as_ref().unwrap_or(&config.extract.pdf_dir));
    let output = project_root.join(args.output.as_ref().unwrap_or(&config.extract.output));
    let extractor = QuestionExtractor::new(config.extract.clone())?;

    let sources = discover_sources(&dir)?;
    if sources.is_empty() {
        println!(
            "{}",
            format!("⚠️  No *.pdf or *.txt files in {}", dir.display()).yellow()
        );
        return Ok(());
    }
    println!(
        "{}",
        format!("📄 Found {} source files in {}", sources.len(), dir.display()).cyan()
    );

    let pb = ProgressBar::new(sources.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let mut extraction = Extraction::default();
    let mut per_file: Vec<(String, usize)> = Vec::with_capacity(sources.len());
    for path in &sources {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        pb.set_message(name.clone());

        match read_source(path) {
            Ok(doc) => {
                for warning in &doc.warnings {
                    pb.suspend(|| eprintln!("{}", format!("⚠️  {}", warning).yellow()));
                }
                let found = extractor.extract_documents(std::slice::from_ref(&doc));
                per_file.push((name, found.questions.len()));
                extraction.questions.extend(found.questions);
                extraction.report.merge(found.report);
            }
            Err(e) => {
                pb.suspend(|| {
                    eprintln!("{}", format!("⚠️  Error processing {}: {:#}", name, e).yellow())
                });
                per_file.push((name, 0));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let report = &extraction.report;
    let extracted = extraction.questions.len();
    let questions = dedupe(extraction.questions);

    for (name, count) in &per_file {
        println!("   {:<40} {:>5} questions", name, count);
    }

    println!();
    println!("{}", "📊 Extraction summary".cyan().bold());
    println!("   Blocks found:          {}", report.blocks);
    println!("   Records extracted:     {}", extracted);
    println!("   Duplicates removed:    {}", extracted - questions.len());
    println!("   Unique questions:      {}", questions.len().to_string().green());
    println!("   Too short:             {}", report.short_blocks + report.short_question);
    println!("   No answer marker:      {}", report.missing_answer);
    println!("   Too few options:       {}", report.missing_options);
    println!("   Failed blocks:         {}", report.failed_blocks);
    for (strategy, count) in &report.by_strategy {
        println!("   via {:<19} {}", format!("{}:", strategy), count);
    }
    if report.answer_fallbacks > 0 {
        println!(
            "   {}",
            format!(
                "Answer letter fell back to the first option {} times",
                report.answer_fallbacks
            )
            .yellow()
        );
    }

    if args.verbose {
        for warning in &report.warnings {
            eprintln!("{}", format!("⚠️  {}", warning).yellow());
        }
    } else if !report.warnings.is_empty() {
        println!(
            "   {}",
            format!("{} warnings (use --verbose to list them)", report.warnings.len()).yellow()
        );
    }

    if questions.is_empty() {
        println!("{}", "⚠️  Nothing extracted; output not written".yellow());
        return Ok(());
    }

    if !confirm_overwrite(&output, args.yes)? {
        return Ok(());
    }
    save_questions(&output, &questions)?;

    println!();
    println!("{}", format!("✅ Saved {} questions to {}", questions.len(), output.display()).green().bold());

    println!();
    println!("{}", "Sample questions:".cyan());
    for (i, q) in questions.iter().take(SAMPLE_SIZE).enumerate() {
        let excerpt: String = q.question.chars().take(100).collect();
        println!("   Q{}: {}...", i + 1, excerpt);
        println!(
            "       Options: {}, Answer: {}",
            q.options.len(),
            q.answer.first().unwrap_or_default()
        );
    }

    Ok(())
}

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

use crate::config::{self, AppConfig};
use crate::loader;
use crate::model::risk::RiskCategory;
use crate::model::work_item::WorkItem;
use crate::report::{self, bundle, RenderContext};
use crate::util::dates;

#[derive(Debug, PartialEq)]
pub enum Command {
    Generate(GenerateArgs),
    Help,
}

#[derive(Debug, Default, PartialEq)]
pub struct GenerateArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub dir: Option<PathBuf>,
    pub today: Option<NaiveDate>,
    pub due_soon_days: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub struct IssuerSummary {
    pub issuer: String,
    pub dated: usize,
    pub undated: usize,
    pub overdue: usize,
}

/// Parse command-line arguments (without the program name).
///
/// Supported forms:
///   roadmap items.csv
///   roadmap items.csv -o out/roadmaps.zip
///   roadmap items.csv --dir preview/ --today 2025-01-01
pub fn parse_args(args: &[String]) -> Result<Command> {
    if args.is_empty() {
        bail!("Usage: roadmap <input.csv> [-o <file.zip>] [--dir <directory>] [--today YYYY-MM-DD] [--due-soon-days N]");
    }
    if matches!(args[0].as_str(), "help" | "-h" | "--help") {
        return Ok(Command::Help);
    }

    let mut parsed = GenerateArgs::default();
    let mut input: Option<PathBuf> = None;
    let mut i = 0;

    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-o" | "--output" | "--dir" | "--today" | "--due-soon-days" => {
                i += 1;
                let Some(value) = args.get(i) else {
                    bail!("Missing value for {flag} flag");
                };
                match flag {
                    "--dir" => parsed.dir = Some(PathBuf::from(value)),
                    "--today" => {
                        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                            .with_context(|| format!("Invalid --today date {value:?}, expected YYYY-MM-DD"))?;
                        parsed.today = Some(date);
                    }
                    "--due-soon-days" => {
                        let days: i64 = value
                            .parse()
                            .with_context(|| format!("Invalid --due-soon-days value {value:?}"))?;
                        if days < 0 {
                            bail!("--due-soon-days cannot be negative");
                        }
                        parsed.due_soon_days = Some(days);
                    }
                    _ => parsed.output = Some(PathBuf::from(value)),
                }
            }
            other if other.starts_with('-') => bail!("Unknown flag {other}"),
            other => {
                if input.is_some() {
                    bail!("Only one input file can be given");
                }
                input = Some(PathBuf::from(other));
            }
        }
        i += 1;
    }

    let Some(input) = input else {
        bail!("Missing input CSV file");
    };
    if parsed.output.is_some() && parsed.dir.is_some() {
        bail!("Use either --output or --dir, not both");
    }
    parsed.input = input;

    Ok(Command::Generate(parsed))
}

pub fn summarize(items: &[WorkItem], ctx: &RenderContext) -> Vec<IssuerSummary> {
    report::group_by_issuer(items)
        .into_iter()
        .map(|(issuer, group)| {
            let dated = group.iter().filter(|i| i.due.is_some()).count();
            IssuerSummary {
                issuer: issuer.to_string(),
                dated,
                undated: group.len() - dated,
                overdue: group
                    .iter()
                    .filter(|i| ctx.risk(i) == RiskCategory::Overdue)
                    .count(),
            }
        })
        .collect()
}

/// Load the CSV, render every report and write the archive (or directory).
pub fn handle_generate(args: GenerateArgs) -> Result<()> {
    generate(args, config::load_config)
}

/// The input is read before the config, so a malformed CSV is reported even
/// when the config file is broken too.
fn generate(args: GenerateArgs, load_config: impl FnOnce() -> Result<AppConfig>) -> Result<()> {
    let items = loader::load_from_path(&args.input)
        .with_context(|| format!("Failed to process {}", args.input.display()))?;

    let config = load_config()?;

    let today = match args.today {
        Some(today) => today,
        None => dates::today_at_offset(config.utc_offset_hours())
            .context("Invalid [report] utc_offset_hours in config")?,
    };
    log::info!("classifying against {today}");

    let mut ctx = RenderContext::new(&config, today);
    if let Some(days) = args.due_soon_days {
        ctx.due_soon_days = days;
    }

    let files = report::build_reports(&items, &ctx);

    for s in summarize(&items, &ctx) {
        println!(
            "{}: {} planned, {} backlog, {} overdue",
            s.issuer, s.dated, s.undated, s.overdue
        );
    }

    match args.dir {
        Some(dir) => {
            bundle::write_dir(&files, &dir)?;
            println!("Wrote {} report(s) to {}", files.len(), dir.display());
        }
        None => {
            let output = args.output.unwrap_or_else(|| config.output());
            bundle::write_zip_to_path(&files, &output)?;
            println!("Wrote {} report(s) to {}", files.len(), output.display());
        }
    }

    Ok(())
}

pub fn print_help() {
    println!("roadmap — render issuer roadmaps from a work item CSV\n");
    println!("USAGE:");
    println!("  roadmap <input.csv> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -o, --output <file.zip>   Archive to write (default: roadmaps.zip)");
    println!("      --dir <directory>     Write the HTML files unpacked instead of zipping");
    println!("      --today <YYYY-MM-DD>  Classify against this date instead of today");
    println!("      --due-soon-days <N>   Days ahead that count as due soon (default: 10)");
    println!();
    println!("CONFIG:");
    println!("  ~/.roadmap/config.toml    [report] and [theme] sections");
}

use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use tracing::debug;
use twindiff_sdk::{Comparison, Detection, DiffEntry, DiffLimits, Engine, EngineConfig};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let file_config = cli.config.as_deref().map(EngineConfig::load).transpose()?;
    if let Some(path) = &cli.config {
        debug!(path = %path.display(), "loaded engine config");
    }
    match cli.command {
        Command::Diff(args) => cmd_diff(args, file_config, &cli.format),
        Command::Patch(args) => cmd_patch(args, file_config, &cli.format),
        Command::Apply(args) => cmd_apply(args, file_config),
        Command::Report(args) => cmd_report(args, file_config),
        Command::Detect(args) => cmd_detect(args, file_config, &cli.format),
    }
}

/// Layer command-line flags over the config file, or over defaults named
/// after the input paths when there is no config file.
fn resolve_config(file_config: Option<EngineConfig>, pair: &PairArgs) -> EngineConfig {
    let mut config = file_config.unwrap_or_else(|| EngineConfig {
        left_name: pair.left.display().to_string(),
        right_name: pair.right.display().to_string(),
        ..Default::default()
    });
    if let Some(name) = &pair.left_name {
        config.left_name = name.clone();
    }
    if let Some(name) = &pair.right_name {
        config.right_name = name.clone();
    }
    if pair.no_limit {
        config.limits = DiffLimits::unbounded();
    } else if let Some(max) = pair.max_lines {
        config.limits = DiffLimits::with_max_total_lines(max);
    }
    config
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn read_pair(pair: &PairArgs) -> anyhow::Result<(String, String)> {
    Ok((read(&pair.left)?, read(&pair.right)?))
}

fn write_or_print(output: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            println!("{} Wrote {}", "✓".green().bold(), path.display().to_string().bold());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn cmd_diff(
    args: DiffArgs,
    file_config: Option<EngineConfig>,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let mut config = resolve_config(file_config, &args.pair);
    config.options.ignore_whitespace |= args.ignore_whitespace;
    config.options.ignore_case |= args.ignore_case;
    config.options.ignore_blank_lines |= args.ignore_blank_lines;

    let (left, right) = read_pair(&args.pair)?;
    let engine = Engine::new(config);
    let comparison = engine.compare(&left, &right)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison)?),
        OutputFormat::Text => {
            if !args.stat {
                for entry in &comparison.entries {
                    print_entry(entry);
                }
            }
            print_summary(&comparison, engine.config());
        }
    }
    Ok(())
}

fn print_entry(entry: &DiffEntry) {
    match entry {
        DiffEntry::Unchanged { left, right } => {
            println!("{:>5} {:>5}   {}", left.number, right.number, left.text.dimmed());
        }
        DiffEntry::Deleted { left } => {
            println!("{}", format!("{:>5} {:>5} - {}", left.number, "", left.text).red());
        }
        DiffEntry::Added { right } => {
            println!("{}", format!("{:>5} {:>5} + {}", "", right.number, right.text).green());
        }
        DiffEntry::Modified { left, right } => {
            println!("{}", format!("{:>5} {:>5} ~ {}", left.number, "", left.text).yellow());
            println!("{}", format!("{:>5} {:>5} ~ {}", "", right.number, right.text).yellow());
        }
    }
}

fn print_summary(comparison: &Comparison, config: &EngineConfig) {
    let stats = &comparison.stats;
    if !stats.has_changes() {
        println!("{} No differences.", "✓".green().bold());
    }
    println!(
        "{} unchanged, {} deleted, {} added, {} modified",
        stats.unchanged.to_string().bold(),
        stats.deleted.to_string().red(),
        stats.added.to_string().green(),
        stats.modified.to_string().yellow(),
    );
    println!(
        "{}: {}  {}: {}",
        config.left_name,
        comparison.left_language.language.cyan(),
        config.right_name,
        comparison.right_language.language.cyan(),
    );
}

fn cmd_patch(
    args: PatchArgs,
    file_config: Option<EngineConfig>,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let config = resolve_config(file_config, &args.pair);
    let (left, right) = read_pair(&args.pair)?;
    let patch = Engine::new(config).build_patch(&left, &right)?;
    let text = match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&patch)?),
        OutputFormat::Text => patch.to_string(),
    };
    write_or_print(args.output.as_deref(), &text)
}

fn cmd_apply(args: ApplyArgs, file_config: Option<EngineConfig>) -> anyhow::Result<()> {
    let patch = read(&args.patch)?;
    let original = read(&args.file)?;
    let engine = Engine::new(file_config.unwrap_or_default());
    let patched = engine
        .apply(&original, &patch)
        .with_context(|| format!("failed to apply {}", args.patch.display()))?;
    write_or_print(args.output.as_deref(), &patched)
}

fn cmd_report(args: ReportArgs, file_config: Option<EngineConfig>) -> anyhow::Result<()> {
    let config = resolve_config(file_config, &args.pair);
    let (left, right) = read_pair(&args.pair)?;
    let html = Engine::new(config).report(&left, &right)?;
    write_or_print(Some(&args.output), &html)
}

fn cmd_detect(
    args: DetectArgs,
    file_config: Option<EngineConfig>,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let text = read(&args.file)?;
    let engine = Engine::new(file_config.unwrap_or_default());
    let detection = engine.detect_with_override(&text, args.language.as_deref());
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&detection)?),
        OutputFormat::Text => print_detection(&args.file, &detection),
    }
    Ok(())
}

fn print_detection(path: &Path, detection: &Detection) {
    let formatter = detection.formatter.as_deref().unwrap_or("none");
    println!(
        "{}: {} (formatter: {})",
        path.display(),
        detection.language.cyan().bold(),
        formatter.dimmed()
    );
}

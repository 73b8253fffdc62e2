//! resume-docx CLI - render resume JSON into formatted documents

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use resume_docx::{JsonFormat, Preset, RenderStats, ResumeFormatter, StyleProfile};

#[derive(Parser)]
#[command(name = "resume-docx")]
#[command(version)]
#[command(about = "Render resume JSON into a formatted Word document", long_about = None)]
struct Cli {
    /// Input resume JSON file
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (.docx or .json)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Style preset
    #[arg(
        long,
        value_enum,
        global = true,
        env = "RESUME_DOCX_PRESET",
        default_value = "basic"
    )]
    preset: PresetArg,

    /// Show or hide the clearance in the header (preset decides by default)
    #[arg(long, value_enum, global = true)]
    clearance: Option<ClearanceArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a resume to DOCX (or JSON, by output extension)
    Render {
        /// Input resume JSON file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (defaults to the input name with .docx)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the rendered paragraph layout as JSON
    Blocks {
        /// Input resume JSON file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render several resumes into a directory
    Batch {
        /// Input resume JSON files
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "docx")]
        format: FormatArg,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    /// Single font, list bullets, underlined section headers
    Basic,
    /// Header and body fonts, ruled section headers, hanging bullets
    Enhanced,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Basic => Preset::Basic,
            PresetArg::Enhanced => Preset::Enhanced,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ClearanceArg {
    /// Show the clearance after the title
    Show,
    /// Leave the clearance out
    Hide,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Word document
    Docx,
    /// Paragraph layout as JSON
    Json,
}

impl FormatArg {
    fn extension(self) -> &'static str {
        match self {
            FormatArg::Docx => "docx",
            FormatArg::Json => "json",
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let formatter = build_formatter(cli.preset, cli.clearance);

    let result = match cli.command {
        Some(Commands::Render { input, output }) => {
            let output = output.unwrap_or_else(|| input.with_extension("docx"));
            cmd_render(&formatter, &input, &output)
        }
        Some(Commands::Blocks {
            input,
            output,
            compact,
        }) => cmd_blocks(&formatter, &input, output.as_deref(), compact),
        Some(Commands::Batch {
            inputs,
            out_dir,
            format,
        }) => cmd_batch(&formatter, &inputs, &out_dir, format),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => match (cli.input, cli.output) {
            (Some(input), Some(output)) => cmd_render(&formatter, &input, &output),
            _ => {
                println!("{}", "Usage: resume-docx <INPUT> <OUTPUT>".yellow());
                println!("       resume-docx --help for more information");
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_formatter(preset: PresetArg, clearance: Option<ClearanceArg>) -> ResumeFormatter {
    let mut formatter = ResumeFormatter::new()
        .preset(preset.into())
        .with_created(chrono::Utc::now());
    if let Some(mode) = clearance {
        formatter = formatter.with_clearance(mode == ClearanceArg::Show);
    }
    formatter
}

fn cmd_render(
    formatter: &ResumeFormatter,
    input: &Path,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{} {}", "Reading".cyan(), input.display());
    let resume = formatter.clone().load(input)?;

    resume.save(output)?;
    print_stats(&resume.stats(), formatter.profile());
    println!("{} {}", "Saved to".green(), output.display());

    Ok(())
}

fn cmd_blocks(
    formatter: &ResumeFormatter,
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let resume = formatter.clone().load(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = resume.to_json(format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(
    formatter: &ResumeFormatter,
    inputs: &[PathBuf],
    out_dir: &Path,
    format: FormatArg,
) -> Result<(), Box<dyn std::error::Error>> {
    let jobs = batch_outputs(inputs, out_dir, format)?;
    fs::create_dir_all(out_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let results: Vec<(PathBuf, resume_docx::Result<PathBuf>)> = jobs
        .into_par_iter()
        .map(|(input, output)| {
            let result = formatter
                .clone()
                .load(input)
                .and_then(|resume| resume.save(&output))
                .map(|()| output);
            pb.inc(1);
            (input.clone(), result)
        })
        .collect();

    pb.finish_with_message("Done!");

    let mut failures = 0;
    println!();
    for (input, result) in &results {
        match result {
            Ok(output) => println!("  {} {}", "├─".dimmed(), output.display()),
            Err(e) => {
                failures += 1;
                eprintln!("  {} {}: {}", "├─".dimmed(), input.display().to_string().red(), e);
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} resumes failed", failures, inputs.len()).into());
    }
    println!(
        "\n{} {} resumes rendered",
        "Done!".green().bold(),
        results.len()
    );
    Ok(())
}

/// Pair each input with its output path; two inputs with the same file stem
/// would write the same file, so that is rejected up front.
fn batch_outputs<'a>(
    inputs: &'a [PathBuf],
    out_dir: &Path,
    format: FormatArg,
) -> Result<Vec<(&'a PathBuf, PathBuf)>, Box<dyn std::error::Error>> {
    let mut seen: HashMap<PathBuf, &PathBuf> = HashMap::new();
    let mut jobs = Vec::with_capacity(inputs.len());

    for input in inputs {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        let output = out_dir.join(format!("{}.{}", stem, format.extension()));
        if let Some(first) = seen.insert(output.clone(), input) {
            return Err(format!(
                "{} and {} would both be written to {}",
                first.display(),
                input.display(),
                output.display()
            )
            .into());
        }
        jobs.push((input, output));
    }

    Ok(jobs)
}

fn print_stats(stats: &RenderStats, profile: &StyleProfile) {
    log::info!(
        "{} preset: {} paragraphs, {} bullets, {} words",
        profile.preset.name(),
        stats.paragraph_count,
        stats.bullet_count,
        stats.word_count
    );
}

fn cmd_version() {
    println!("{} {}", "resume-docx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Resume to DOCX renderer");
    println!();
    println!("Presets: basic, enhanced");
    println!("License: MIT");
}

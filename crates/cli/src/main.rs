use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dubbing_core::constants::{DEFAULT_EXPORT_FILENAME, DEFAULT_LINES_PER_CHUNK};
use dubbing_core::{chunk_lines, PromptBlock, RoleNames, ScriptConfig, ScriptService};

#[derive(Parser)]
#[command(name = "dubbing")]
#[command(about = "Dubbing script to shot list tool")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a script workbook into shots and speaker runs
    Split {
        /// Script workbook (.xlsx)
        script: PathBuf,
    },
    /// Split a script, merge prompts and roles, and export the shot list
    Merge {
        /// Script workbook (.xlsx)
        script: PathBuf,
        /// Image prompts, one line per shot
        #[arg(long)]
        image_prompts: Option<PathBuf>,
        /// Video prompts, one line per shot
        #[arg(long)]
        video_prompts: Option<PathBuf>,
        /// Character names (comma-separated)
        #[arg(long, default_value = "")]
        roles: String,
        /// Export workbook path
        #[arg(long, short, default_value = DEFAULT_EXPORT_FILENAME)]
        output: PathBuf,
    },
    /// Append 。 to every line of a text file and cut it into chunks
    Chunk {
        /// Text file, or `-` for stdin
        input: PathBuf,
        /// Lines per chunk
        #[arg(long, default_value_t = DEFAULT_LINES_PER_CHUNK)]
        lines: usize,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dubbing=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ScriptConfig::from_env_values(
        std::env::var("DUBBING_NARRATOR").ok(),
        std::env::var("DUBBING_SPEAKER_COLUMN").ok(),
        std::env::var("DUBBING_TEXT_COLUMN").ok(),
    )?;
    tracing::debug!(?config, "resolved script config");

    match cli.command {
        Some(Commands::Split { script }) => {
            let rows = dubbing_sheets::read_script_rows(&script, &config)?;
            let breakdown = ScriptService::new(config).split(&rows);

            println!(
                "{} shots, {} rows",
                breakdown.shot_count(),
                breakdown.run_count()
            );
            for run in breakdown.runs() {
                println!("{}\t{}\t{}", run.shot_id, run.speaker, run.text);
            }
        }
        Some(Commands::Merge {
            script,
            image_prompts,
            video_prompts,
            roles,
            output,
        }) => {
            let rows = dubbing_sheets::read_script_rows(&script, &config)?;
            let image = read_optional_prompts(image_prompts.as_deref())?;
            let video = read_optional_prompts(video_prompts.as_deref())?;

            let service = ScriptService::new(config);
            let breakdown = service.split(&rows);
            let records = service.merge(&breakdown, &image, &video, &RoleNames::parse(&roles))?;

            dubbing_sheets::write_records(&output, &records)
                .with_context(|| format!("exporting {} records", records.len()))?;
            println!("Exported {} rows to {}", records.len(), output.display());
        }
        Some(Commands::Chunk { input, lines }) => {
            let text = read_input_text(&input)?;
            let chunks = chunk_lines(&text, lines)?;
            for chunk in chunks {
                println!("第 {} 段（共 {} 段）：", chunk.index, chunk.total);
                println!("{}", chunk.text);
                println!();
            }
        }
        None => {
            println!("Use 'dubbing --help' for commands");
        }
    }

    Ok(())
}

fn read_optional_prompts(path: Option<&Path>) -> anyhow::Result<PromptBlock> {
    match path {
        Some(path) => Ok(dubbing_sheets::read_prompt_file(path)?),
        None => Ok(PromptBlock::default()),
    }
}

fn read_input_text(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))
}

//! Corpus Browser - Entry Point

use clap::Parser;
use corpus_browser::model::AppError;
use corpus_browser::{config, source, view};
use std::path::PathBuf;
use tracing::info;

/// Corpus Browser - browse a word ranking and the corpus behind it
#[derive(Parser, Debug)]
#[command(name = "corpus-browser")]
#[command(version)]
#[command(
    about = "Interactive terminal browser for a word-frequency ranking and its source corpus"
)]
pub struct Args {
    /// Init directory holding messages.word-rank.txt and messages.txt
    pub dir: Option<PathBuf>,

    /// Rank file (overrides the one in DIR)
    #[arg(long, value_name = "FILE")]
    pub rank: Option<PathBuf>,

    /// Corpus file (overrides the one in DIR)
    #[arg(long, value_name = "FILE")]
    pub corpus: Option<PathBuf>,

    /// Co-occurrence window width in tokens
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub window: Option<u32>,

    /// Rows shown below the focused item
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Typos tolerated by the filter page
    #[arg(long, value_name = "N")]
    pub max_typos: Option<u32>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged)?;

        // --no-color only overrides when given
        let no_color_override = if args.no_color { Some(true) } else { None };
        let resolved = config::apply_cli_overrides(
            with_env,
            args.window.map(|n| n as usize),
            args.height.map(|n| n as usize),
            args.max_typos.map(|n| n as usize),
            no_color_override,
        );
        config::validate(resolved)?
    };

    corpus_browser::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let paths = source::resolve_inputs(
        args.dir.as_deref(),
        args.rank.as_deref(),
        args.corpus.as_deref(),
    )?;

    let color = view::ColorConfig::from_env_and_args(config.no_color);
    let styles = view::PageStyles::with_color_config(color);

    view::run_with_inputs(&paths, config.browser_options(), styles)?;

    Ok(())
}

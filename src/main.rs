use anyhow::Context;
use clap::{Parser, Subcommand};
use falim_core::{logger, render_svg, BirthChart, ChartView, FalimConfig, Language, Legend};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "falim", version, about = "Birth-chart wheels and localized text for falım")]
struct Cli {
    /// Language code (tr, en, de, fr, es); overrides the config file
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Path to a falim.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a backend birth-chart JSON document as SVG
    Chart {
        input: PathBuf,

        /// Write the SVG here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the localized legend
        #[arg(long)]
        legend: bool,
    },
    /// Resolve message keys in the selected language
    Translate { keys: Vec<String> },
    /// List supported languages
    Languages,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FalimConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => FalimConfig::default(),
    };

    if config.logging.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!(?cli, "starting falim");

    let mut translator = config.translator()?;
    if let Some(code) = &cli.lang {
        translator.set_language_code(code)?;
    }

    match cli.command {
        Command::Chart {
            input,
            output,
            legend,
        } => {
            let json = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let chart = BirthChart::from_json(&json)
                .with_context(|| format!("failed to parse {}", input.display()))?;

            let view = ChartView::from_chart(Some(&chart));
            if !view.is_ready() {
                tracing::warn!("chart has no houses or planets, rendering placeholder");
            }
            let svg = render_svg(&view, &translator);

            match output {
                Some(path) => {
                    std::fs::write(&path, &svg)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "chart written");
                }
                None => print!("{}", svg),
            }

            if legend && view.is_ready() {
                let legend = Legend::build(&chart, &translator, config.chart.legend_houses);
                println!("{}", legend);
            }
        }
        Command::Translate { keys } => {
            for key in &keys {
                println!("{}", translator.translate(key));
            }
        }
        Command::Languages => {
            for language in Language::ALL {
                let marker = if language == translator.current_language() {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{} {} {} {}",
                    marker,
                    language.code(),
                    language.flag(),
                    language.display_name()
                );
            }
        }
    }

    Ok(())
}

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use clap::{Parser, ValueEnum};
use log::info;
use miette::{IntoDiagnostic, WrapErr};
use qdk_circuitizer::{
    AsciiCircuitizer, Circuitizer, CircuitizerConfig, ClassicalAnnotation, DirectiveCircuitizer,
    Error, Event, GlyphStyle, parse_trace, replay,
};
use std::path::{Path, PathBuf};

/// Draws a recorded event trace as a circuit diagram.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON array of events to replay.
    #[arg(long)]
    input: PathBuf,

    /// File the diagram is written to.
    #[arg(long)]
    output: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// JSON rendering options. Flags below take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mark gates inside classically conditioned regions.
    #[arg(long)]
    annotate_classical: bool,

    /// Draw measured wires as classical until reset.
    #[arg(long)]
    collapse_measured: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Ascii,
    Directive,
}

fn main() -> miette::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CircuitizerConfig::default(),
    };
    if cli.annotate_classical {
        config.classical_annotation = ClassicalAnnotation::Border;
    }
    if cli.collapse_measured {
        config.collapse_measured = true;
    }

    let trace = std::fs::read_to_string(&cli.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {}", cli.input.display()))?;
    let events = parse_trace(&trace)?;
    info!("replaying {} events from {}", events.len(), cli.input.display());

    let diagram = match cli.format {
        OutputFormat::Ascii => draw(AsciiCircuitizer::ascii(config), &events, &cli.output)?,
        OutputFormat::Directive => {
            draw(DirectiveCircuitizer::directive(config), &events, &cli.output)?
        }
    };
    print!("{diagram}");
    Ok(())
}

fn load_config(path: &Path) -> miette::Result<CircuitizerConfig> {
    let text = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text)
        .into_diagnostic()
        .wrap_err("malformed circuitizer config")
}

fn draw<S: GlyphStyle>(
    mut circuitizer: Circuitizer<S>,
    events: &[Event],
    output: &Path,
) -> Result<String, Error> {
    replay(events, &mut circuitizer)?;
    circuitizer.write_to_file(output)?;
    Ok(circuitizer.render())
}

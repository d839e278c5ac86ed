//! Texplot - a terminal graphing calculator with structural math input.
//!
//! # Usage
//!
//! ```bash
//! texplot
//! texplot '\sin{x}'
//! texplot --x-min -5 --x-max 5 --steps 400 '\frac{1}{x}'
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use texplot::app::App;
use texplot::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use texplot::graph::SampleRange;
use texplot::perf;

/// A terminal graphing calculator with structural math input
#[derive(Parser, Debug)]
#[command(name = "texplot", version, about, long_about = None)]
struct Cli {
    /// Initial expression in the editor's markup, e.g. '\sin{x}'
    #[arg(value_name = "EXPRESSION")]
    expression: Option<String>,

    /// Left edge of the plot window
    #[arg(long, allow_hyphen_values = true)]
    x_min: Option<f64>,

    /// Right edge of the plot window
    #[arg(long, allow_hyphen_values = true)]
    x_max: Option<f64>,

    /// Number of sample points across the window
    #[arg(long)]
    steps: Option<usize>,

    /// Enable performance logging to stderr
    #[arg(long)]
    perf: bool,

    /// Write detailed event timing to a file
    #[arg(long, value_name = "PATH")]
    debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    perf::set_enabled(effective.perf);
    if let Err(err) = perf::set_event_log_path(cli.debug_log.as_deref()) {
        eprintln!(
            "[warn] Failed to initialize event log {}: {}",
            cli.debug_log
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            err
        );
    }

    let x_min = effective.x_min.unwrap_or(texplot::graph::DEFAULT_X_START);
    let x_max = effective.x_max.unwrap_or(texplot::graph::DEFAULT_X_END);
    if x_min >= x_max {
        anyhow::bail!("--x-min must be less than --x-max ({x_min} >= {x_max})");
    }
    let steps = effective.steps.unwrap_or(texplot::graph::DEFAULT_STEPS);
    if steps < 2 {
        anyhow::bail!("--steps must be at least 2");
    }

    let mut app = App::new()
        .with_expression(cli.expression)
        .with_range(SampleRange::new(x_min, x_max).with_steps(steps));

    app.run().context("Application error")
}

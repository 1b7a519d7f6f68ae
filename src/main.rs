mod format;
#[cfg(feature = "tui")]
mod tui_mode;

use anyhow::{Context, Result};
use log::{info, warn};
use rustgraph::config::USAGE;
use rustgraph::logging::init_logger;
use rustgraph::{parse_args, Expression, LogLevel, Mode, Options, Plot};
use std::io::{self, BufWriter, Write};

use crate::format::format_number;

fn main() -> Result<()> {
    let options = parse_args(std::env::args().skip(1))?;
    if options.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mode = options.mode.unwrap_or(if options.formula.is_some() {
        Mode::Table
    } else {
        Mode::Tui
    });
    // Log lines would be drawn over the alternate screen.
    let default_level = if mode == Mode::Tui {
        LogLevel::Off
    } else {
        LogLevel::Warn
    };
    init_logger(options.log_level.unwrap_or(default_level));
    info!("rustgraph {} starting in {:?} mode", rustgraph::VERSION, mode);

    match mode {
        Mode::Table => run_table(&options),
        Mode::Tree => run_tree(&options),
        Mode::Tui => run_tui(options),
    }
}

fn formula(options: &Options) -> Result<&str> {
    options
        .formula
        .as_deref()
        .context("no expression given (try `rustgraph --help`)")
}

fn run_table(options: &Options) -> Result<()> {
    let formula = formula(options)?;
    let plot = Plot::from_formula(formula, &options.grid);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match &plot {
        Plot::Curve(samples) => {
            for sample in samples {
                writeln!(
                    out,
                    "{}\t{}",
                    format_number(sample.x, options.precision),
                    format_number(sample.y, options.precision)
                )?;
            }
        }
        Plot::Blank { error, grid } => {
            warn!("could not parse {:?}: {}; leaving the output blank", formula, error);
            for x in grid.abscissas() {
                writeln!(out, "{}\t", format_number(x, options.precision))?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn run_tree(options: &Options) -> Result<()> {
    let formula = formula(options)?;
    let expr = Expression::parse(formula).with_context(|| format!("could not parse {:?}", formula))?;
    println!("{}", expr);
    info!("{} nodes", expr.node_count());
    Ok(())
}

#[cfg(feature = "tui")]
fn run_tui(options: Options) -> Result<()> {
    tui_mode::run_tui(options.grid, options.formula, options.precision)
}

#[cfg(not(feature = "tui"))]
fn run_tui(_options: Options) -> Result<()> {
    anyhow::bail!("built without the `tui` feature; pass an expression to print a table")
}

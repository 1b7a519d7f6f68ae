//! Command-line configuration.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::sampling::SampleGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One `x<TAB>y` row per sample.
    Table,
    /// The parsed tree, fully parenthesised.
    Tree,
    /// Interactive explorer.
    Tui,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub formula: Option<String>,
    pub grid: SampleGrid,
    /// Significant digits after the point when printing values.
    pub precision: usize,
    /// `None` lets the front end pick: table with a formula, TUI without.
    pub mode: Option<Mode>,
    /// `None` means no level was asked for on the command line.
    pub log_level: Option<LogLevel>,
    pub show_help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            formula: None,
            grid: SampleGrid::default(),
            precision: 6,
            mode: None,
            log_level: None,
            show_help: false,
        }
    }
}

pub const USAGE: &str = "\
Sample a formula in x over a range.

USAGE:
    rustgraph [OPTIONS] [EXPRESSION]...

Words of EXPRESSION are joined with spaces, so `rustgraph sin x` works.
Without an expression the interactive explorer starts.

OPTIONS:
    -x, --x-min NUM          Lower bound of the x range (default: -2)
    -X, --x-max NUM          Upper bound of the x range (default: 2)
    -w, --width NUM          Columns, 1 to 1048576; samples = width + 1 (default: 60)
    -p, --precision NUM      Digits after the point in printed values (default: 6)
        --tree               Print how the expression was grouped
        --tui                Start the interactive explorer
    -q, --quiet              Turn logging off
        --log-level=LEVEL    off/error/warn/info/debug/trace (default: warn)
    -h, --help               Show this help
        --                   Treat everything after this as the expression

FUNCTIONS:
    sin cos tan sec csc cot asin acos atan log (natural) exp";

fn value_for(option: &str, value: Option<String>) -> Result<String, ConfigError> {
    value.ok_or_else(|| ConfigError::MissingValue(option.to_string()))
}

fn number<T: FromStr>(option: &str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value_for(option, value)?;
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        option: option.to_string(),
        value,
    })
}

fn push_formula(options: &mut Options, word: String) {
    match &mut options.formula {
        Some(formula) => {
            formula.push(' ');
            formula.push_str(&word);
        }
        None => options.formula = Some(word),
    }
}

/// Looks like a flag rather than a signed literal such as `-3*x`.
fn is_flag(arg: &str) -> bool {
    let mut chars = arg.chars();
    chars.next() == Some('-') && chars.next().map_or(false, |c| c.is_ascii_alphabetic())
}

/// Parses arguments, program name excluded.
pub fn parse_args<I, S>(args: I) -> Result<Options, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter().map(Into::into);
    let mut only_expression = false;

    while let Some(arg) = args.next() {
        if only_expression {
            push_formula(&mut options, arg);
            continue;
        }

        match arg.as_str() {
            "--" => only_expression = true,
            "-x" | "--x-min" => options.grid.x_min = number(&arg, args.next())?,
            "-X" | "--x-max" => options.grid.x_max = number(&arg, args.next())?,
            "-w" | "--width" => options.grid.width = number(&arg, args.next())?,
            "-p" | "--precision" => options.precision = number(&arg, args.next())?,
            "--tree" => options.mode = Some(Mode::Tree),
            "--tui" => options.mode = Some(Mode::Tui),
            "-q" | "--quiet" => options.log_level = Some(LogLevel::Off),
            "-h" | "--help" => options.show_help = true,
            _ if arg.starts_with("--log-level=") => {
                options.log_level = Some(arg["--log-level=".len()..].parse()?);
            }
            _ if arg.starts_with("--") || is_flag(&arg) => {
                return Err(ConfigError::UnknownOption(arg));
            }
            _ => push_formula(&mut options, arg),
        }
    }

    options.grid.validate()?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, ConfigError> {
        parse_args(args.iter().copied())
    }

    #[test]
    fn defaults() {
        let options = parse(&[]).unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.grid.width, 60);
        assert_eq!(options.grid.x_min, -2.0);
        assert_eq!(options.grid.x_max, 2.0);
    }

    #[test]
    fn range_and_width() {
        let options = parse(&["-x", "-10", "--x-max", "10.5", "-w", "80", "x^2"]).unwrap();
        assert_eq!(options.grid.x_min, -10.0);
        assert_eq!(options.grid.x_max, 10.5);
        assert_eq!(options.grid.width, 80);
        assert_eq!(options.formula.as_deref(), Some("x^2"));
    }

    #[test]
    fn expression_words_are_joined() {
        let options = parse(&["sin", "x", "+", "1"]).unwrap();
        assert_eq!(options.formula.as_deref(), Some("sin x + 1"));
    }

    #[test]
    fn signed_literal_is_an_expression() {
        let options = parse(&["-3*x"]).unwrap();
        assert_eq!(options.formula.as_deref(), Some("-3*x"));
    }

    #[test]
    fn double_dash_ends_options() {
        let options = parse(&["--", "-x", "--tree"]).unwrap();
        assert_eq!(options.formula.as_deref(), Some("-x --tree"));
        assert_eq!(options.mode, None);
    }

    #[test]
    fn modes_and_logging() {
        let options = parse(&["--tree", "--log-level=debug", "x"]).unwrap();
        assert_eq!(options.mode, Some(Mode::Tree));
        assert_eq!(options.log_level, Some(LogLevel::Debug));

        let options = parse(&["--tui", "-q"]).unwrap();
        assert_eq!(options.mode, Some(Mode::Tui));
        assert_eq!(options.log_level, Some(LogLevel::Off));
    }

    #[test]
    fn errors() {
        assert_eq!(parse(&["-w"]), Err(ConfigError::MissingValue("-w".to_string())));
        assert_eq!(
            parse(&["--width", "wide"]),
            Err(ConfigError::InvalidNumber {
                option: "--width".to_string(),
                value: "wide".to_string()
            })
        );
        assert_eq!(parse(&["--plot"]), Err(ConfigError::UnknownOption("--plot".to_string())));
        assert_eq!(parse(&["-z"]), Err(ConfigError::UnknownOption("-z".to_string())));
        assert_eq!(
            parse(&["--log-level=loud"]),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
        assert_eq!(parse(&["-w", "0"]), Err(ConfigError::InvalidWidth(0)));
        assert_eq!(
            parse(&["-w", "2000000", "x"]),
            Err(ConfigError::InvalidWidth(2_000_000))
        );
        assert!(matches!(
            parse(&["-x", "3", "-X", "1"]),
            Err(ConfigError::EmptyRange { .. })
        ));
    }

    #[test]
    fn log_levels() {
        assert_eq!("TRACE".parse::<LogLevel>(), Ok(LogLevel::Trace));
        assert_eq!(LogLevel::Warn.to_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Off.to_filter(), log::LevelFilter::Off);
    }
}

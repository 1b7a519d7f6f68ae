//! Parse formulas in `x` and sample them for terminal plotting.
//!
//! ```
//! use rustgraph::{Expression, Plot, SampleGrid};
//!
//! let expr = Expression::parse("2 + 3 * x").unwrap();
//! assert_eq!(expr.evaluate(4.0), 14.0);
//!
//! let grid = SampleGrid::new(0.0, 1.0, 2).unwrap();
//! assert_eq!(Plot::from_expression(&expr, &grid).samples().len(), 3);
//! assert!(Plot::from_formula("sinx", &grid).is_blank());
//! ```

pub mod config;
pub mod error;
pub mod expression;
pub mod logging;
pub mod sampling;

pub use crate::{
    config::{parse_args, LogLevel, Mode, Options},
    error::{ConfigError, ParseError},
    expression::{evaluate, parse_expression, Expression, Node},
    sampling::{Plot, Sample, SampleGrid},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

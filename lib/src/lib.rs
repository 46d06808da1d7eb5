//! __Ecaview__ runs [elementary cellular automata](https://en.wikipedia.org/wiki/Elementary_cellular_automaton).
//!
//! A [`RuleTable`] is built from a rule number in Wolfram's numbering,
//! and a [`Generator`] lazily produces one row after another from an
//! initial row. Cells beyond the edges of a row are always dead.
//!
//! # Example
//!
//! ```rust
//! use ecaview_lib::{build_rule_table, generate, Row};
//!
//! let table = build_rule_table(90).unwrap();
//! let rows: Vec<String> = generate(table, Row::center(7))
//!     .take(3)
//!     .map(|row| row.to_string())
//!     .collect();
//! assert_eq!(rows, vec!["...o...", "..o.o..", ".o...o."]);
//! ```

mod cells;
mod config;
mod error;
mod generator;
mod rule;

pub use cells::{Pattern, Row, State, ALIVE, DEAD};
pub use config::{Config, InitRow, MAX_SCALE};
pub use error::Error;
pub use generator::{generate, step, Generator};
pub use rule::{build_rule_table, RuleTable};

//! A library for reasoning with propositional formulas.
//!
//! ponens parses formulas over named variables, normalises formulas to conjunctive normal form, decides satisfiability, and uses satisfiability to maintain a consistent knowledge base which may be told new formulas and asked about others.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! A context is built from a [configuration](crate::config) and holds a [knowledge base](crate::db::knowledge), together with an [oracle] used to decide satisfiability.
//! Formulas are given to a context either as text, read by the [parser], or programatically as [structures::formula::Formula]s.
//!
//! Useful starting points, then, may be:
//! - The [tell](crate::procedures::tell) and [ask](crate::procedures::ask) procedures, to see how the knowledge base is kept consistent.
//! - The [CNF normaliser](crate::procedures::cnf), which is independent of any context.
//! - The [inference rules](crate::procedures::modus_ponens), which apply to the structure of formulas rather than through the oracle.
//! - The [structures] to familiarise yourself with how formulas, clauses, literals, etc. are represented.
//!
//! # Examples
//!
//! + Learn some formulas and ask about others.
//!
//! ```rust
//! # use ponens::config::Config;
//! # use ponens::context::Context;
//! # use ponens::reports::{AskReport, TellReport};
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert_eq!(the_context.tell_str("rain implies wet"), Ok(TellReport::Learned));
//! assert_eq!(the_context.tell_str("not wet"), Ok(TellReport::Learned));
//!
//! assert_eq!(the_context.ask_str("rain"), Ok(AskReport::Contradicts));
//! assert_eq!(the_context.tell_str("rain"), Ok(TellReport::Rejected));
//! ```
//!
//! + Normalise a formula and inspect its truth table.
//!
//! ```rust
//! # use ponens::context::Context;
//! let the_context = Context::default();
//!
//! let (formula, cnf) = the_context.cnf_str("not (p and q) or r").unwrap();
//! assert_eq!(formula.to_string(), "~(p & q) | r");
//! assert_eq!(cnf.to_string(), "~p | ~q | r");
//!
//! let table = the_context.truth_table_str("p implies q").unwrap();
//! assert_eq!(table.values().collect::<Vec<_>>(), vec![true, true, false, true]);
//! ```
//!
//! # Satisfiability
//!
//! The library [oracle](oracle::Enumeration) decides satisfiability by enumerating every assignment to the variables of a formula.
//! This is simple, and suited to formulas of a handful of variables, but takes time exponential in the number of variables.
//! As such, the oracle refuses formulas with more variables than a [configured limit](config::Config::variable_limit), twenty by default.
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are lists in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the knowledge base can be filtered with `RUST_LOG=knowledge_base …` or,
//! - Each stage of normalisation can be seen with `RUST_LOG=cnf=trace …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod config;
pub mod context;
pub mod db;
pub mod misc;
pub mod oracle;
pub mod parser;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;

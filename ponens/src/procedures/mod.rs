//! Procedures of a context, and of formulas.
//!
//! - [cnf] normalises a formula, and is independent of any context.
//! - [tell] and [ask] are the two ways of interacting with the knowledge base of a context.
//! - [modus_ponens] and [resolution] apply inference rules to the structure of formulas, and tell any conclusion to the context.
//!
//! Procedures on a context are implemented as methods of [GenericContext](crate::context::GenericContext).

pub mod ask;
pub mod cnf;
pub mod modus_ponens;
pub mod resolution;
pub mod tell;

//! Asking a context about a formula.
//!
//! Asking never revises the knowledge base.
//! Exactly one of the following holds, checked in order:
//!
//! - The knowledge base entails the formula, i.e. the knowledge base with the negation of the formula is unsatisfiable.
//! - The knowledge base contradicts the formula, i.e. the knowledge base with the formula is unsatisfiable.
//! - Otherwise, the formula is undecided.
//!
//! As the knowledge base is always satisfiable, it never both entails and contradicts a formula.
//! And, an empty knowledge base entails only tautologies and contradicts only unsatisfiable formulas.

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    oracle::Oracle,
    parser::parse,
    reports::AskReport,
    structures::formula::Formula,
    types::err::{self},
};

impl<O: Oracle> GenericContext<O> {
    /// Asks whether the knowledge base entails, or contradicts, `formula`.
    pub fn ask(&self, formula: &Formula) -> Result<AskReport, err::ErrorKind> {
        let mut premises = self.knowledge_db.premises();

        let report = if self.oracle.entails(&premises, formula)? {
            AskReport::Entails
        } else {
            premises.push(formula);
            match self.oracle.is_satisfiable(&premises)? {
                false => AskReport::Contradicts,
                true => AskReport::Undecided,
            }
        };

        log::info!(target: targets::KNOWLEDGE_BASE, "Asked {formula}: {report:?}");
        Ok(report)
    }

    /// Parses `text` and asks about the formula.
    pub fn ask_str(&self, text: &str) -> Result<AskReport, err::ErrorKind> {
        self.ask(&parse(text)?)
    }
}

//! Telling a formula to a context.
//!
//! A told formula is examined in two steps, and the knowledge base is revised only after both:
//!
//! 1. Novelty. If the formula is already known, the knowledge base is unchanged.
//!    What it is to be known depends on [the configuration](crate::config::Novelty):
//!    - By default, a formula is known if it is equivalent to some single formula in the knowledge base.
//!    - Alternatively, a formula is known if the knowledge base entails the formula.
//! 2. Consistency. If the formula together with the knowledge base is unsatisfiable the formula is rejected, and otherwise learned.
//!
//! ```rust
//! # use ponens::context::Context;
//! # use ponens::reports::TellReport;
//! let mut the_context = Context::default();
//!
//! assert_eq!(the_context.tell_str("p implies q"), Ok(TellReport::Learned));
//! assert_eq!(the_context.tell_str("not q implies not p"), Ok(TellReport::AlreadyKnown));
//! ```

use crate::{
    config::Novelty,
    context::GenericContext,
    misc::log::targets::{self},
    oracle::Oracle,
    parser::parse,
    reports::TellReport,
    structures::formula::Formula,
    types::err::{self},
};

impl<O: Oracle> GenericContext<O> {
    /// Tells `formula` to the context.
    ///
    /// On an error the knowledge base is unchanged.
    pub fn tell(&mut self, formula: Formula) -> Result<TellReport, err::ErrorKind> {
        if self.is_known(&formula)? {
            log::info!(target: targets::KNOWLEDGE_BASE, "Already known: {formula}");
            return Ok(TellReport::AlreadyKnown);
        }

        let mut premises = self.knowledge_db.premises();
        premises.push(&formula);

        if !self.oracle.is_satisfiable(&premises)? {
            log::info!(target: targets::KNOWLEDGE_BASE, "Rejected: {formula}");
            return Ok(TellReport::Rejected);
        }

        log::info!(target: targets::KNOWLEDGE_BASE, "Learned #{}: {formula}", self.knowledge_db.len() + 1);
        self.knowledge_db.store(formula);
        Ok(TellReport::Learned)
    }

    /// Parses `text` and tells the formula to the context.
    pub fn tell_str(&mut self, text: &str) -> Result<TellReport, err::ErrorKind> {
        let formula = parse(text)?;
        self.tell(formula)
    }

    /// Whether `formula` is already known, as configured.
    fn is_known(&self, formula: &Formula) -> Result<bool, err::ErrorKind> {
        match self.config.novelty.value {
            Novelty::Equivalence => {
                for known in self.knowledge_db.formulas() {
                    if self.oracle.equivalent(formula, known)? {
                        log::debug!(target: targets::KNOWLEDGE_BASE, "{formula} is equivalent to {known}");
                        return Ok(true);
                    }
                }
                Ok(false)
            }

            Novelty::Entailment => self
                .oracle
                .entails(&self.knowledge_db.premises(), formula),
        }
    }
}

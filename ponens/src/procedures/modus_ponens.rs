//! Modus ponens: from `p` and `p implies q`, derive `q`.
//!
//! The rule applies to the structure of the given formulas:
//! - The implication must be an implication at the top level, so `(p implies q) and r` is not an implication.
//! - The premise must be equivalent to the antecedent of the implication, though need not be identical.
//!
//! On success, the consequent is [told](crate::procedures::tell) to the context, and the outcome of telling is reported.
//! Neither the premise nor the implication is required to be in the knowledge base.
//!
//! ```rust
//! # use ponens::context::Context;
//! # use ponens::reports::{InferenceReport, TellReport};
//! # use ponens::structures::formula::Formula;
//! let mut the_context = Context::default();
//!
//! let report = the_context.modus_ponens_str("p", "p implies q").unwrap();
//! assert_eq!(
//!     report,
//!     InferenceReport::Told {
//!         conclusion: Formula::var("q"),
//!         report: TellReport::Learned
//!     }
//! );
//! ```

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    oracle::Oracle,
    parser::parse,
    reports::InferenceReport,
    structures::formula::Formula,
    types::err::{self},
};

impl<O: Oracle> GenericContext<O> {
    /// Applies modus ponens to `premise` and `implication`, and tells the consequent to the context.
    pub fn modus_ponens(
        &mut self,
        premise: &Formula,
        implication: &Formula,
    ) -> Result<InferenceReport, err::ErrorKind> {
        let Formula::Implies(antecedent, consequent) = implication else {
            return Err(err::ErrorKind::from(err::InferenceError::NotAnImplication(
                implication.clone(),
            )));
        };

        if !self.oracle.equivalent(premise, antecedent)? {
            return Err(err::ErrorKind::from(err::InferenceError::AntecedentMismatch {
                premise: premise.clone(),
                antecedent: antecedent.as_ref().clone(),
            }));
        }

        let conclusion = consequent.as_ref().clone();
        log::info!(target: targets::INFERENCE, "Modus ponens on {premise} and {implication}: {conclusion}");

        let report = self.tell(conclusion.clone())?;
        Ok(InferenceReport::Told { conclusion, report })
    }

    /// Parses `premise` and `implication` and applies modus ponens.
    pub fn modus_ponens_str(
        &mut self,
        premise: &str,
        implication: &str,
    ) -> Result<InferenceReport, err::ErrorKind> {
        let premise = parse(premise)?;
        let implication = parse(implication)?;
        self.modus_ponens(&premise, &implication)
    }
}

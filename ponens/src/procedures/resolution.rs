//! Resolution: from `a or p` and `not p or b`, derive `a or b`.
//!
//! Both formulas must be [clauses](crate::structures::clause), i.e. disjunctions of literals.
//! The pivot is the first literal of the first clause, in canonical order, whose complement is in the second clause.
//! The resolvent is every literal of either clause but the pivot and its complement, without duplicates.
//!
//! - If the resolvent is non-empty, the resolvent is [told](crate::procedures::tell) to the context, and the outcome of telling is reported.
//! - If the resolvent is empty, the clauses are jointly unsatisfiable.
//!   A [contradiction](InferenceReport::Contradiction) is reported, and the knowledge base is unchanged.
//!
//! ```rust
//! # use ponens::context::Context;
//! # use ponens::reports::{InferenceReport, TellReport};
//! let mut the_context = Context::default();
//!
//! let report = the_context.resolution_str("p or q", "not p or r").unwrap();
//! let InferenceReport::Told { conclusion, report } = report else {
//!     panic!("expected a resolvent");
//! };
//! assert_eq!(conclusion.to_string(), "q | r");
//! assert_eq!(report, TellReport::Learned);
//!
//! let report = the_context.resolution_str("p", "not p").unwrap();
//! assert_eq!(report, InferenceReport::Contradiction);
//! ```

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    oracle::Oracle,
    parser::parse,
    reports::InferenceReport,
    structures::{clause::Clause, formula::Formula},
    types::err::{self},
};

impl<O: Oracle> GenericContext<O> {
    /// Resolves `first` and `second`, and tells the resolvent to the context.
    pub fn resolution(
        &mut self,
        first: &Formula,
        second: &Formula,
    ) -> Result<InferenceReport, err::ErrorKind> {
        let first = Clause::try_from(first)?;
        let second = Clause::try_from(second)?;

        let Some(pivot) = first.complementary_literal(&second) else {
            return Err(err::ErrorKind::from(
                err::InferenceError::NoComplementaryLiterals,
            ));
        };

        let resolvent = first.resolve(&second, pivot);
        log::info!(target: targets::INFERENCE, "Resolved {first} and {second} on {pivot}: {resolvent}");

        match resolvent.as_formula() {
            Some(conclusion) => {
                let report = self.tell(conclusion.clone())?;
                Ok(InferenceReport::Told { conclusion, report })
            }

            None => Ok(InferenceReport::Contradiction),
        }
    }

    /// Parses `first` and `second` and applies resolution.
    pub fn resolution_str(
        &mut self,
        first: &str,
        second: &str,
    ) -> Result<InferenceReport, err::ErrorKind> {
        let first = parse(first)?;
        let second = parse(second)?;
        self.resolution(&first, &second)
    }
}

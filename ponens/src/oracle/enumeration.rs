use std::sync::Arc;

use crate::{
    config::{Config, VARIABLE_LIMIT_MAX},
    misc::log::targets::{self},
    structures::{formula::Formula, valuation::Assignment},
    types::err::{self},
};

use super::{evaluate::evaluate, Oracle, TruthTable};

/// An oracle which decides satisfiability by evaluating formulas on every assignment, in canonical order.
///
/// Deciding satisfiability takes time exponential in the number of distinct variables, and so the oracle refuses formulas whose variables exceed the configured limit.
#[derive(Clone, Debug)]
pub struct Enumeration {
    /// The most distinct variables to enumerate assignments over.
    variable_limit: usize,
}

impl Enumeration {
    /// An oracle with the configured variable limit, at most [VARIABLE_LIMIT_MAX].
    pub fn from_config(config: &Config) -> Self {
        Enumeration {
            variable_limit: config.variable_limit.value.min(VARIABLE_LIMIT_MAX),
        }
    }

    /// The distinct variables of `formulas`, by first appearance, if within the variable limit.
    fn atoms_within_limit(&self, formulas: &[&Formula]) -> Result<Arc<[String]>, err::OracleError> {
        let mut atoms = Vec::default();
        for formula in formulas {
            formula.extend_variables(&mut atoms);
        }

        match atoms.len() <= self.variable_limit {
            true => Ok(atoms.into()),
            false => {
                log::info!(target: targets::ORACLE, "Refused to enumerate over {} variables", atoms.len());
                Err(err::OracleError::TooManyVariables {
                    count: atoms.len(),
                    limit: self.variable_limit,
                })
            }
        }
    }
}

impl Default for Enumeration {
    fn default() -> Self {
        Enumeration::from_config(&Config::default())
    }
}

impl Oracle for Enumeration {
    fn find_model(&self, formulas: &[&Formula]) -> Result<Option<Assignment>, err::ErrorKind> {
        let atoms = self.atoms_within_limit(formulas)?;
        let assignment_count = 1_usize << atoms.len();

        'assignment_loop: for index in 0..assignment_count {
            let assignment = Assignment::from_index(atoms.clone(), index);

            for formula in formulas {
                if !evaluate(formula, &assignment)? {
                    continue 'assignment_loop;
                }
            }

            log::trace!(target: targets::ORACLE, "Model found after {} of {assignment_count} assignments: {assignment}", index + 1);
            return Ok(Some(assignment));
        }

        log::trace!(target: targets::ORACLE, "No model among {assignment_count} assignments");
        Ok(None)
    }

    fn truth_table(&self, formula: &Formula) -> Result<TruthTable, err::ErrorKind> {
        let atoms = self.atoms_within_limit(&[formula])?;
        let assignment_count = 1_usize << atoms.len();

        let mut rows = Vec::with_capacity(assignment_count);
        for index in 0..assignment_count {
            let assignment = Assignment::from_index(atoms.clone(), index);
            let value = evaluate(formula, &assignment)?;
            rows.push((assignment, value));
        }

        Ok(TruthTable::new(atoms, rows))
    }
}

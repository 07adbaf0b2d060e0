use crate::{
    structures::{formula::Formula, valuation::Valuation},
    types::err::{self},
};

/// The value of `formula` on `valuation`.
///
/// Both operands of a binary operator are evaluated, so an error is returned whenever some variable of the formula has no value on the valuation.
///
/// ```rust
/// # use std::collections::HashMap;
/// # use ponens::oracle::evaluate;
/// # use ponens::parser::parse;
/// # use ponens::types::err::{ErrorKind, OracleError};
/// let formula = parse("p implies q").unwrap();
///
/// let valuation = HashMap::from([("p".to_string(), true), ("q".to_string(), false)]);
/// assert_eq!(evaluate(&formula, &valuation), Ok(false));
///
/// let partial = HashMap::from([("p".to_string(), false)]);
/// assert_eq!(
///     evaluate(&formula, &partial),
///     Err(ErrorKind::Oracle(OracleError::Unassigned("q".to_string())))
/// );
/// ```
pub fn evaluate(formula: &Formula, valuation: &impl Valuation) -> Result<bool, err::ErrorKind> {
    Ok(value(formula, valuation)?)
}

fn value(formula: &Formula, valuation: &impl Valuation) -> Result<bool, err::OracleError> {
    match formula {
        Formula::Variable(name) => valuation
            .value_of(name)
            .ok_or_else(|| err::OracleError::Unassigned(name.clone())),

        Formula::Not(operand) => Ok(!value(operand, valuation)?),

        Formula::And(left, right) => {
            let (left, right) = (value(left, valuation)?, value(right, valuation)?);
            Ok(left && right)
        }

        Formula::Or(left, right) => {
            let (left, right) = (value(left, valuation)?, value(right, valuation)?);
            Ok(left || right)
        }

        Formula::Implies(antecedent, consequent) => {
            let (antecedent, consequent) =
                (value(antecedent, valuation)?, value(consequent, valuation)?);
            Ok(!antecedent || consequent)
        }

        Formula::Iff(left, right) => {
            let (left, right) = (value(left, valuation)?, value(right, valuation)?);
            Ok(left == right)
        }
    }
}

/*!
Oracles for satisfiability, and things which follow from satisfiability.

An [Oracle] decides whether the conjunction of some formulas is satisfiable and, for a single formula, builds a [TruthTable].
Tautology, entailment, and equivalence are each decided through satisfiability:
- A formula is a tautology *iff* the negation of the formula is unsatisfiable.
- Some formulas entail a formula *iff* the formulas together with the negation of the formula are unsatisfiable.
- Two formulas are equivalent *iff* the biconditional of the formulas is a tautology.

The library provides a single oracle, [Enumeration], which examines every assignment to the variables of the formulas in turn.
As the number of assignments is exponential in the number of variables, the oracle is configured with a [variable limit](crate::config::Config::variable_limit) and errs when asked about formulas with more variables.

The trait is the seam at which a decision procedure (e.g. DPLL or CDCL) may be swapped in, as nothing outside of this module relies on how an oracle decides satisfiability.

```rust
# use ponens::config::Config;
# use ponens::oracle::{Enumeration, Oracle};
# use ponens::parser::parse;
let oracle = Enumeration::from_config(&Config::default());

let excluded_middle = parse("p or not p").unwrap();
assert_eq!(oracle.is_tautology(&excluded_middle), Ok(true));

let p_implies_q = parse("p implies q").unwrap();
let p = parse("p").unwrap();
let q = parse("q").unwrap();
assert_eq!(oracle.entails(&[&p_implies_q, &p], &q), Ok(true));
assert_eq!(oracle.entails(&[&p_implies_q], &q), Ok(false));
```
*/

mod enumeration;
pub use enumeration::Enumeration;

mod evaluate;
pub use evaluate::evaluate;

mod truth_table;
pub use truth_table::TruthTable;

use crate::{
    structures::{formula::Formula, valuation::Assignment},
    types::err::{self},
};

/// Something which decides satisfiability of (conjunctions of) formulas.
pub trait Oracle {
    /// Some assignment to the variables of `formulas` on which each formula is true, or nothing if there is no such assignment.
    ///
    /// Variables are ordered by first appearance across the formulas, in the order given.
    fn find_model(&self, formulas: &[&Formula]) -> Result<Option<Assignment>, err::ErrorKind>;

    /// The value of `formula` on every assignment to its variables, in canonical order.
    fn truth_table(&self, formula: &Formula) -> Result<TruthTable, err::ErrorKind>;

    /// Whether the conjunction of `formulas` is satisfiable.
    ///
    /// The conjunction of no formulas is satisfiable.
    fn is_satisfiable(&self, formulas: &[&Formula]) -> Result<bool, err::ErrorKind> {
        Ok(self.find_model(formulas)?.is_some())
    }

    /// Whether `formula` is true on every assignment to its variables.
    fn is_tautology(&self, formula: &Formula) -> Result<bool, err::ErrorKind> {
        let negation = Formula::not(formula.clone());
        Ok(!self.is_satisfiable(&[&negation])?)
    }

    /// Whether every assignment on which each of `premises` is true is an assignment on which `conclusion` is true.
    fn entails(&self, premises: &[&Formula], conclusion: &Formula) -> Result<bool, err::ErrorKind> {
        let negation = Formula::not(conclusion.clone());
        let mut formulas = premises.to_vec();
        formulas.push(&negation);
        Ok(!self.is_satisfiable(&formulas)?)
    }

    /// Whether `a` and `b` have the same value on every assignment.
    fn equivalent(&self, a: &Formula, b: &Formula) -> Result<bool, err::ErrorKind> {
        self.is_tautology(&Formula::iff(a.clone(), b.clone()))
    }
}

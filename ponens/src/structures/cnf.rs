//! Formulas in conjunctive normal form, as a set of [clauses](super::clause) interpreted as their conjunction.
//!
//! Clauses are kept in canonical order (the lexicographic order of their canonically ordered literals) and without duplicates.
//! So, a CNF is stable for a fixed input, though two equivalent formulas may have distinct CNFs.
//!
//! The empty CNF is true on every assignment.
//!
//! ```rust
//! # use ponens::structures::{clause::Clause, cnf::Cnf, literal::Literal};
//! let cnf = Cnf::from_clauses([
//!     Clause::from_literals([Literal::new("r", false), Literal::new("c", false)]),
//!     Clause::from_literals([Literal::new("r", true), Literal::new("c", true)]),
//! ]);
//!
//! assert_eq!(cnf.to_string(), "(c | r) & (~c | ~r)");
//! ```

use crate::structures::{clause::Clause, formula::Formula};

/// A conjunction of clauses, in canonical order and without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cnf {
    clauses: Vec<Clause>,
}

impl Cnf {
    pub fn from_clauses(clauses: impl IntoIterator<Item = Clause>) -> Self {
        let mut clauses = clauses.into_iter().collect::<Vec<_>>();
        clauses.sort_unstable();
        clauses.dedup();
        Cnf { clauses }
    }

    /// An iterator over the clauses, in canonical order.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// A count of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// The CNF as the (left-associated) conjunction of its clauses, each as the disjunction of its literals.
    ///
    /// Returns nothing if the CNF is empty, as there is no formula for 'true'.
    pub fn as_formula(&self) -> Option<Formula> {
        Formula::conjunction(self.clauses.iter().filter_map(|clause| clause.as_formula()))
    }
}

impl std::fmt::Display for Cnf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.clauses.as_slice() {
            [] => write!(f, "true"),

            [clause] => write!(f, "{clause}"),

            [first, rest @ ..] => {
                let write_clause = |f: &mut std::fmt::Formatter<'_>, clause: &Clause| match clause.size() {
                    0 | 1 => write!(f, "{clause}"),
                    _ => write!(f, "({clause})"),
                };

                write_clause(f, first)?;
                for clause in rest {
                    write!(f, " & ")?;
                    write_clause(f, clause)?;
                }
                Ok(())
            }
        }
    }
}

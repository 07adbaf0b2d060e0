//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The literals of a clause are kept in [canonical order](super::literal) and without duplicates, and so two clauses are equal exactly when they contain the same literals.
//!
//! ```rust
//! # use ponens::structures::clause::Clause;
//! # use ponens::structures::literal::Literal;
//! let clause = Clause::from_literals([
//!     Literal::new("r", true),
//!     Literal::new("p", false),
//!     Literal::new("r", true),
//! ]);
//!
//! assert_eq!(clause.size(), 2);
//! assert_eq!(clause.to_string(), "~p | r");
//! assert!(!clause.is_tautology());
//! ```
//!
//! - The empty clause is always false (never true).
//!   The empty clause is only the result of [resolution](crate::procedures::resolution), and is never stored.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause, where the 'unit' is the literal).

use crate::{
    structures::{formula::Formula, literal::Literal},
    types::err::InferenceError,
};

/// A disjunction of literals, in canonical order and without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// The clause of the given literals, with duplicates removed.
    pub fn from_literals(literals: impl IntoIterator<Item = Literal>) -> Self {
        let mut literals = literals.into_iter().collect::<Vec<_>>();
        literals.sort_unstable();
        literals.dedup();
        Clause { literals }
    }

    /// An iterator over all literals in the clause, in canonical order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.binary_search(literal).is_ok()
    }

    /// Whether the clause contains some literal and its negation, and so is true on any assignment.
    pub fn is_tautology(&self) -> bool {
        // Complements are adjacent in canonical order.
        self.literals
            .windows(2)
            .any(|pair| pair[0].is_complement_of(&pair[1]))
    }

    /// The first literal of the clause, in canonical order, whose complement is in `other`.
    pub fn complementary_literal(&self, other: &Clause) -> Option<&Literal> {
        self.literals
            .iter()
            .find(|literal| other.contains(&literal.negate()))
    }

    /// The resolvent of the clause and `other` on `pivot`.
    ///
    /// That is, every literal of either clause except `pivot` (from this clause) and its complement (from `other`).
    pub fn resolve(&self, other: &Clause, pivot: &Literal) -> Clause {
        let complement = pivot.negate();
        let remaining_self = self.literals.iter().filter(|l| *l != pivot);
        let remaining_other = other.literals.iter().filter(|l| **l != complement);

        Clause::from_literals(remaining_self.chain(remaining_other).cloned())
    }

    /// The clause as the (left-associated) disjunction of its literals, or nothing if the clause is empty.
    pub fn as_formula(&self) -> Option<Formula> {
        Formula::disjunction(self.literals.iter().map(Formula::from))
    }
}

impl TryFrom<&Formula> for Clause {
    type Error = InferenceError;

    /// A clause from any formula built from literals by disjunction alone.
    fn try_from(formula: &Formula) -> Result<Self, Self::Error> {
        let mut literals = Vec::default();
        let mut pending = vec![formula];

        while let Some(next) = pending.pop() {
            match next {
                Formula::Or(left, right) => {
                    pending.push(right.as_ref());
                    pending.push(left.as_ref());
                }
                _ => match next.as_literal() {
                    Some(literal) => literals.push(literal),
                    None => return Err(InferenceError::NotAClause(formula.clone())),
                },
            }
        }

        Ok(Clause::from_literals(literals))
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "false");
        }

        let mut literals = self.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{first}")?;
        }
        for literal in literals {
            write!(f, " | {literal}")?;
        }
        Ok(())
    }
}

//! Key structures, such as formulas, literals, and clauses.
//!
//! # Formulas and normal forms
//!
//! A [formula] is a tree built from variables by negation, conjunction, disjunction, implication, and the biconditional.
//! Formulas are the input to, and contents of, a [knowledge base](crate::db::knowledge).
//!
//! A formula in conjunctive normal form is instead represented as a [cnf]: a set of [clauses](clause), each a set of [literals](literal).
//! The [normaliser](crate::procedures::cnf) takes a formula to a CNF, and the CNF may be taken back to a formula.
//!
//! ## (Boolean) values
//!
//! A [valuation] gives (some) variables a value of [true] or [false].
//! The [oracle](crate::oracle) works with total [assignments](valuation::Assignment) to the variables of a formula.

pub mod clause;
pub mod cnf;
pub mod formula;
pub mod literal;
pub mod valuation;

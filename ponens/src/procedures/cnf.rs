//! Normalisation of a formula to conjunctive normal form.
//!
//! # Overview
//!
//! A formula is rewritten in stages, each total over formulas and each preserving equivalence:
//!
//! 1. [Biconditionals are eliminated](eliminate_biconditionals): `a iff b` becomes `(a implies b) and (b implies a)`.
//! 2. [Implications are eliminated](eliminate_implications): `a implies b` becomes `not a or b`.
//! 3. [Negations are pushed inward](push_negations) by De Morgan's laws and double negation, until only variables are negated.
//! 4. [Disjunction is distributed over conjunction](distribute): `(a and b) or c` becomes `(a or c) and (b or c)`, and symmetrically, to a fixed point.
//! 5. [The tree is flattened](flatten) to a set of clauses, each a set of literals.
//!
//! When flattening, clauses which contain some literal and its negation may be dropped, as these are true on every assignment.
//! See [Config::tautology_elimination].
//!
//! ```rust
//! # use ponens::parser::parse;
//! # use ponens::procedures::cnf::to_cnf;
//! let formula = parse("c iff not r").unwrap();
//! assert_eq!(to_cnf(&formula).to_string(), "(c | r) & (~c | ~r)");
//! ```
//!
//! Distribution may produce a CNF exponentially larger than the input formula.
//! No attempt is made to find a smallest CNF.

use crate::{
    config::Config,
    misc::log::targets::{self},
    structures::{clause::Clause, cnf::Cnf, formula::Formula},
};

/// The CNF of `formula`, with tautological clauses eliminated.
pub fn to_cnf(formula: &Formula) -> Cnf {
    to_cnf_with(formula, &Config::default())
}

/// The CNF of `formula`, as configured.
pub fn to_cnf_with(formula: &Formula, config: &Config) -> Cnf {
    let stage = eliminate_biconditionals(formula);
    log::trace!(target: targets::CNF, "Without biconditionals: {stage}");

    let stage = eliminate_implications(&stage);
    log::trace!(target: targets::CNF, "Without implications: {stage}");

    let stage = push_negations(&stage);
    log::trace!(target: targets::CNF, "Negation normal: {stage}");

    let stage = distribute(&stage);
    log::trace!(target: targets::CNF, "Distributed: {stage}");

    let cnf = flatten(&stage, config.tautology_elimination.value);
    log::debug!(target: targets::CNF, "CNF of {formula}: {cnf}");
    cnf
}

/// Rewrites each `a iff b` as `(a implies b) and (b implies a)`.
pub fn eliminate_biconditionals(formula: &Formula) -> Formula {
    match formula {
        Formula::Variable(_) => formula.clone(),

        Formula::Not(operand) => Formula::not(eliminate_biconditionals(operand)),

        Formula::And(left, right) => Formula::and(
            eliminate_biconditionals(left),
            eliminate_biconditionals(right),
        ),

        Formula::Or(left, right) => Formula::or(
            eliminate_biconditionals(left),
            eliminate_biconditionals(right),
        ),

        Formula::Implies(antecedent, consequent) => Formula::implies(
            eliminate_biconditionals(antecedent),
            eliminate_biconditionals(consequent),
        ),

        Formula::Iff(left, right) => {
            let left = eliminate_biconditionals(left);
            let right = eliminate_biconditionals(right);
            Formula::and(
                Formula::implies(left.clone(), right.clone()),
                Formula::implies(right, left),
            )
        }
    }
}

/// Rewrites each `a implies b` as `not a or b`.
///
/// Any biconditional is eliminated first.
pub fn eliminate_implications(formula: &Formula) -> Formula {
    match formula {
        Formula::Variable(_) => formula.clone(),

        Formula::Not(operand) => Formula::not(eliminate_implications(operand)),

        Formula::And(left, right) => {
            Formula::and(eliminate_implications(left), eliminate_implications(right))
        }

        Formula::Or(left, right) => {
            Formula::or(eliminate_implications(left), eliminate_implications(right))
        }

        Formula::Implies(antecedent, consequent) => Formula::or(
            Formula::not(eliminate_implications(antecedent)),
            eliminate_implications(consequent),
        ),

        Formula::Iff(_, _) => eliminate_implications(&eliminate_biconditionals(formula)),
    }
}

/// Rewrites a formula to negation normal form, where negation applies only to variables.
///
/// Any implication or biconditional is eliminated first.
pub fn push_negations(formula: &Formula) -> Formula {
    negation_normal(formula, true)
}

/// The negation normal form of `formula` if `positive`, and of the negation of `formula` otherwise.
fn negation_normal(formula: &Formula, positive: bool) -> Formula {
    match formula {
        Formula::Variable(_) => match positive {
            true => formula.clone(),
            false => Formula::not(formula.clone()),
        },

        Formula::Not(operand) => negation_normal(operand, !positive),

        Formula::And(left, right) => {
            let left = negation_normal(left, positive);
            let right = negation_normal(right, positive);
            match positive {
                true => Formula::and(left, right),
                false => Formula::or(left, right),
            }
        }

        Formula::Or(left, right) => {
            let left = negation_normal(left, positive);
            let right = negation_normal(right, positive);
            match positive {
                true => Formula::or(left, right),
                false => Formula::and(left, right),
            }
        }

        Formula::Implies(_, _) | Formula::Iff(_, _) => {
            negation_normal(&eliminate_implications(formula), positive)
        }
    }
}

/// Distributes disjunction over conjunction, so no conjunction is beneath a disjunction.
///
/// The formula is expected to be in negation normal form.
/// Otherwise, the formula is first rewritten to negation normal form.
pub fn distribute(formula: &Formula) -> Formula {
    match formula {
        Formula::Variable(_) => formula.clone(),

        Formula::Not(operand) => match operand.as_ref() {
            Formula::Variable(_) => formula.clone(),
            _ => distribute(&push_negations(formula)),
        },

        Formula::And(left, right) => Formula::and(distribute(left), distribute(right)),

        Formula::Or(left, right) => distribute_or(distribute(left), distribute(right)),

        Formula::Implies(_, _) | Formula::Iff(_, _) => distribute(&push_negations(formula)),
    }
}

/// The disjunction of two formulas in CNF, as a formula in CNF.
fn distribute_or(left: Formula, right: Formula) -> Formula {
    match (left, right) {
        (Formula::And(a, b), right) => Formula::and(
            distribute_or(a.as_ref().clone(), right.clone()),
            distribute_or(b.as_ref().clone(), right),
        ),

        (left, Formula::And(a, b)) => Formula::and(
            distribute_or(left.clone(), a.as_ref().clone()),
            distribute_or(left, b.as_ref().clone()),
        ),

        (left, right) => Formula::or(left, right),
    }
}

/// Flattens a formula in CNF to a set of clauses.
///
/// If `tautology_elimination` is set, clauses which contain some literal and its negation are dropped.
///
/// Any subformula of a disjunction which is not a literal is first normalised.
pub fn flatten(formula: &Formula, tautology_elimination: bool) -> Cnf {
    let mut clauses = Vec::default();

    let mut conjuncts = vec![formula];
    while let Some(conjunct) = conjuncts.pop() {
        match conjunct {
            Formula::And(left, right) => {
                conjuncts.push(right.as_ref());
                conjuncts.push(left.as_ref());
            }
            _ => clauses.extend(flatten_disjunction(conjunct, tautology_elimination)),
        }
    }

    Cnf::from_clauses(clauses)
}

/// The clauses of a conjunct, typically one.
fn flatten_disjunction(formula: &Formula, tautology_elimination: bool) -> Vec<Clause> {
    let mut literals = Vec::default();

    let mut disjuncts = vec![formula];
    while let Some(disjunct) = disjuncts.pop() {
        match disjunct {
            Formula::Or(left, right) => {
                disjuncts.push(right.as_ref());
                disjuncts.push(left.as_ref());
            }
            _ => match disjunct.as_literal() {
                Some(literal) => literals.push(literal),
                None => {
                    // Not in CNF, so normalise the conjunct as a whole.
                    let normal = distribute(&push_negations(formula));
                    return flatten(&normal, tautology_elimination)
                        .clauses()
                        .cloned()
                        .collect();
                }
            },
        }
    }

    let clause = Clause::from_literals(literals);
    match tautology_elimination && clause.is_tautology() {
        true => {
            log::trace!(target: targets::CNF, "Eliminated tautology: {clause}");
            vec![]
        }
        false => vec![clause],
    }
}

/*!
Formulas, as immutable trees over named variables.

A formula is one of six things:
- A variable, e.g. `p`.
- The negation of a formula, e.g. `not p`.
- The conjunction, disjunction, implication, or biconditional of two formulas, e.g. `p and q`, `p or q`, `p implies q`, `p iff q`.

Subformulas are held behind an [Arc], and so may be shared between formulas (and threads) freely, as no formula is mutated after construction.

```rust
# use ponens::structures::formula::Formula;
let p = Formula::var("p");
let q = Formula::var("q");

let formula = Formula::implies(Formula::and(p.clone(), Formula::not(q.clone())), p);

assert_eq!(formula.to_string(), "p & ~q => p");
assert_eq!(formula.variables(), vec!["p", "q"]);
```

# Display

Formulas are displayed infix, with `~`, `&`, `|`, `=>`, and `<=>`, and with only those parentheses required by the precedence and associativity of the operators.
These are also read by the [parser](crate::parser), so the display of a formula parses back to the same formula.
*/

use std::sync::Arc;

use super::literal::Literal;

/// A propositional formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    /// A (case-sensitive) named variable.
    Variable(String),

    Not(Arc<Formula>),

    And(Arc<Formula>, Arc<Formula>),

    Or(Arc<Formula>, Arc<Formula>),

    /// The antecedent and consequent of an implication, in that order.
    Implies(Arc<Formula>, Arc<Formula>),

    Iff(Arc<Formula>, Arc<Formula>),
}

impl Formula {
    pub fn var(name: impl Into<String>) -> Self {
        Formula::Variable(name.into())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: Formula) -> Self {
        Formula::Not(Arc::new(operand))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Arc::new(left), Arc::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Arc::new(left), Arc::new(right))
    }

    pub fn implies(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implies(Arc::new(antecedent), Arc::new(consequent))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Arc::new(left), Arc::new(right))
    }

    /// The left-associated conjunction of the given formulas, or nothing if there are no formulas.
    pub fn conjunction(formulas: impl IntoIterator<Item = Formula>) -> Option<Self> {
        formulas.into_iter().reduce(Formula::and)
    }

    /// The left-associated disjunction of the given formulas, or nothing if there are no formulas.
    pub fn disjunction(formulas: impl IntoIterator<Item = Formula>) -> Option<Self> {
        formulas.into_iter().reduce(Formula::or)
    }

    /// The distinct variables of the formula, in order of first appearance (left-to-right, depth-first).
    pub fn variables(&self) -> Vec<String> {
        let mut names = Vec::default();
        self.extend_variables(&mut names);
        names
    }

    /// Appends any variable of the formula not already in `names`, in order of first appearance.
    pub fn extend_variables(&self, names: &mut Vec<String>) {
        match self {
            Formula::Variable(name) => {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
            Formula::Not(operand) => operand.extend_variables(names),
            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Implies(left, right)
            | Formula::Iff(left, right) => {
                left.extend_variables(names);
                right.extend_variables(names);
            }
        }
    }

    /// The number of nodes in the formula.
    pub fn size(&self) -> usize {
        match self {
            Formula::Variable(_) => 1,
            Formula::Not(operand) => 1 + operand.size(),
            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Implies(left, right)
            | Formula::Iff(left, right) => 1 + left.size() + right.size(),
        }
    }

    /// The formula as a literal, if the formula is a variable or the negation of a variable.
    pub fn as_literal(&self) -> Option<Literal> {
        match self {
            Formula::Variable(name) => Some(Literal::new(name.clone(), true)),
            Formula::Not(operand) => match operand.as_ref() {
                Formula::Variable(name) => Some(Literal::new(name.clone(), false)),
                _ => None,
            },
            _ => None,
        }
    }

    /// How tightly the top-level operator of the formula binds, higher is tighter.
    fn precedence(&self) -> u8 {
        match self {
            Formula::Iff(_, _) => 1,
            Formula::Implies(_, _) => 2,
            Formula::Or(_, _) => 3,
            Formula::And(_, _) => 4,
            Formula::Not(_) => 5,
            Formula::Variable(_) => 6,
        }
    }
}

/// Writes `formula`, parenthesised if it binds looser than `bound`.
fn write_bounded(f: &mut std::fmt::Formatter<'_>, formula: &Formula, bound: u8) -> std::fmt::Result {
    match formula.precedence() < bound {
        true => write!(f, "({formula})"),
        false => write!(f, "{formula}"),
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precedence = self.precedence();

        // Left associative operators require parentheses on an equal right, and right associative on an equal left.
        let (left, symbol, right) = match self {
            Formula::Variable(name) => return write!(f, "{name}"),
            Formula::Not(operand) => {
                write!(f, "~")?;
                return write_bounded(f, operand, precedence);
            }
            Formula::And(left, right) => (left, "&", right),
            Formula::Or(left, right) => (left, "|", right),
            Formula::Iff(left, right) => (left, "<=>", right),
            Formula::Implies(left, right) => {
                write_bounded(f, left, precedence + 1)?;
                write!(f, " => ")?;
                return write_bounded(f, right, precedence);
            }
        };

        write_bounded(f, left, precedence)?;
        write!(f, " {symbol} ")?;
        write_bounded(f, right, precedence + 1)
    }
}

impl From<Literal> for Formula {
    fn from(literal: Literal) -> Self {
        match literal.polarity() {
            true => Formula::Variable(literal.name().to_owned()),
            false => Formula::not(Formula::Variable(literal.name().to_owned())),
        }
    }
}

impl From<&Literal> for Formula {
    fn from(literal: &Literal) -> Self {
        Formula::from(literal.clone())
    }
}

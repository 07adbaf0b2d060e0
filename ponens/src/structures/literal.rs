//! Literals are variables paired with a (boolean) polarity.
//!
//! A literal with positive polarity is the variable itself, and a literal with negative polarity is the negation of the variable.
//! Two literals are complementary if they share a variable and differ in polarity.
//!
//! ```rust
//! # use ponens::structures::literal::Literal;
//! let p = Literal::new("p", true);
//! let not_p = p.negate();
//!
//! assert!(!not_p.polarity());
//! assert!(p.is_complement_of(&not_p));
//! assert_eq!(not_p.to_string(), "~p");
//! ```
//!
//! Literals are ordered by variable name and then by negation, with the positive literal first.
//! This is the canonical order of literals within a [clause](super::clause), and so the order in which clauses are displayed and compared.

/// A variable paired with a polarity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    /// The name of the variable of the literal.
    name: String,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing a variable name with a boolean.
    pub fn new(name: impl Into<String>, polarity: bool) -> Self {
        Literal {
            name: name.into(),
            polarity,
        }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            name: self.name.clone(),
            polarity: !self.polarity,
        }
    }

    /// The name of the variable of the literal.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.name == other.name && self.polarity != other.polarity
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Keyed on (name, negated), and so the reverse of polarity.
        self.name
            .cmp(&other.name)
            .then_with(|| other.polarity.cmp(&self.polarity))
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.name),
            false => write!(f, "~{}", self.name),
        }
    }
}

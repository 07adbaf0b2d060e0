/*!
A (partial) function from variables to truth values.

The [Valuation] trait asks only for the value of a variable, if any.
The trait is implemented for maps from names to booleans, and for [Assignment]s.

An assignment is the canonical representation of a valuation over some fixed, ordered, collection of variables, as used by the [oracle](crate::oracle).
In an assignment every variable has a value, and the values are listed in the order of the variables.

```rust
# use ponens::structures::valuation::{Assignment, Valuation};
let atoms = vec!["p".to_string(), "q".to_string()];

// Assignments over n atoms are indexed by counting in binary, with the first atom as the most significant bit.
let assignment = Assignment::from_index(atoms.into(), 2);

assert_eq!(assignment.value_of("p"), Some(true));
assert_eq!(assignment.value_of("q"), Some(false));
assert_eq!(assignment.value_of("r"), None);
```
*/

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

/// Something which stores the value of a variable, or perhaps the information that the variable has no value.
pub trait Valuation {
    /// Some value of the named variable under the valuation, or otherwise nothing.
    fn value_of(&self, name: &str) -> Option<bool>;
}

impl Valuation for HashMap<String, bool> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Valuation for BTreeMap<String, bool> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

/// A total assignment of values to an ordered collection of variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// The variables, shared between all assignments of a truth table.
    atoms: Arc<[String]>,

    /// The value of each variable, by index.
    values: Vec<bool>,
}

impl Assignment {
    /// The assignment to `atoms` given by the binary representation of `index`, with the first atom as the most significant bit.
    ///
    /// Indices at least 2^n (for n atoms) are taken modulo 2^n.
    pub fn from_index(atoms: Arc<[String]>, index: usize) -> Self {
        let count = atoms.len();
        let values = (0..count)
            .map(|position| (index >> (count - 1 - position)) & 1 == 1)
            .collect();
        Assignment { atoms, values }
    }

    /// The variables of the assignment, in order.
    pub fn atoms(&self) -> &[String] {
        &self.atoms
    }

    /// The values of the assignment, in the order of the variables.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// An iterator through all (variable, value) pairs, in the order of the variables.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, bool)> {
        self.atoms
            .iter()
            .map(|name| name.as_str())
            .zip(self.values.iter().copied())
    }
}

impl Valuation for Assignment {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.atoms
            .iter()
            .position(|atom| atom == name)
            .map(|index| self.values[index])
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pairs = self.pairs();
        if let Some((name, value)) = pairs.next() {
            write!(f, "{name}={}", value as u8)?;
        }
        for (name, value) in pairs {
            write!(f, ", {name}={}", value as u8)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_order() {
        let atoms: Arc<[String]> = vec!["a".to_string(), "b".to_string(), "c".to_string()].into();

        let rows = (0..8)
            .map(|index| Assignment::from_index(atoms.clone(), index).to_string())
            .collect::<Vec<_>>();

        assert_eq!(rows[0], "a=0, b=0, c=0");
        assert_eq!(rows[1], "a=0, b=0, c=1");
        assert_eq!(rows[4], "a=1, b=0, c=0");
        assert_eq!(rows[7], "a=1, b=1, c=1");
    }

    #[test]
    fn no_atoms() {
        let assignment = Assignment::from_index(Vec::<String>::new().into(), 0);
        assert!(assignment.values().is_empty());
        assert_eq!(assignment.to_string(), "");
    }
}

/*!
A database of formulas, aka. the knowledge base of a context.

Formulas are stored in the order they were accepted, and are never removed or revised.
The database is exclusively owned by its context, and formulas are only stored through [tell](crate::context::GenericContext::tell), which ensures:
- The conjunction of stored formulas is satisfiable.
- No stored formula is stored twice (nor, in the default configuration, is any formula equivalent to some stored formula).

External access is read-only.
*/

use crate::structures::formula::Formula;

/// The knowledge base of a context, as an insertion-ordered sequence of formulas.
#[derive(Clone, Debug, Default)]
pub struct KnowledgeDB {
    formulas: Vec<Formula>,
}

impl KnowledgeDB {
    /// The stored formulas, in the order they were accepted.
    pub fn formulas(&self) -> &[Formula] {
        &self.formulas
    }

    /// References to the stored formulas, in order, e.g. as premises to an [oracle](crate::oracle).
    pub fn premises(&self) -> Vec<&Formula> {
        self.formulas.iter().collect()
    }

    /// A count of stored formulas.
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Appends `formula`.
    ///
    /// The caller is responsible for ensuring the database remains consistent.
    pub(crate) fn store(&mut self, formula: Formula) {
        self.formulas.push(formula);
    }
}

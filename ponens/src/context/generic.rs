use crate::{
    config::Config,
    db::knowledge::KnowledgeDB,
    oracle::{Oracle, TruthTable},
    parser::parse,
    procedures::cnf::to_cnf_with,
    structures::{cnf::Cnf, formula::Formula, valuation::Assignment},
    types::err::{self},
};

/// A generic context, parameratised to an oracle.
///
/// # Example
///
/// ```rust
/// # use ponens::context::GenericContext;
/// # use ponens::oracle::Enumeration;
/// # use ponens::config::Config;
/// let config = Config::default();
/// let oracle = Enumeration::from_config(&config);
/// let context = GenericContext::from_parts(config, oracle);
/// assert!(context.formulas().is_empty());
/// ```
pub struct GenericContext<O: Oracle> {
    /// The configuration of a context.
    pub config: Config,

    /// The oracle used to decide satisfiability.
    pub oracle: O,

    /// The knowledge base.
    /// See [db::knowledge](crate::db::knowledge) for details.
    pub(crate) knowledge_db: KnowledgeDB,
}

impl<O: Oracle> GenericContext<O> {
    /// A context with an empty knowledge base.
    pub fn from_parts(config: Config, oracle: O) -> Self {
        GenericContext {
            config,
            oracle,
            knowledge_db: KnowledgeDB::default(),
        }
    }

    /// The knowledge base of the context.
    pub fn knowledge_db(&self) -> &KnowledgeDB {
        &self.knowledge_db
    }

    /// The formulas of the knowledge base, in the order they were learned.
    pub fn formulas(&self) -> &[Formula] {
        self.knowledge_db.formulas()
    }

    /// The CNF of `formula`, as configured by the context.
    pub fn to_cnf(&self, formula: &Formula) -> Cnf {
        to_cnf_with(formula, &self.config)
    }

    /// Parses `text` and returns the formula with its CNF.
    pub fn cnf_str(&self, text: &str) -> Result<(Formula, Cnf), err::ErrorKind> {
        let formula = parse(text)?;
        let cnf = self.to_cnf(&formula);
        Ok((formula, cnf))
    }

    /// The truth table of `formula`.
    pub fn truth_table(&self, formula: &Formula) -> Result<TruthTable, err::ErrorKind> {
        self.oracle.truth_table(formula)
    }

    /// Parses `text` and returns the truth table of the formula.
    pub fn truth_table_str(&self, text: &str) -> Result<TruthTable, err::ErrorKind> {
        self.truth_table(&parse(text)?)
    }

    /// Some assignment on which every formula of the knowledge base is true.
    ///
    /// As the knowledge base is always consistent, there is always some model, though the oracle may refuse to find one.
    pub fn consistent_model(&self) -> Result<Option<Assignment>, err::ErrorKind> {
        self.oracle.find_model(&self.knowledge_db.premises())
    }
}

/// When [tell](crate::context::GenericContext::tell) treats a formula as already known.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Novelty {
    /// Already known if equivalent to some single formula in the knowledge base.
    Equivalence,

    /// Already known if entailed by the formulas in the knowledge base, taken together.
    Entailment,
}

impl Novelty {
    pub const MIN: Novelty = Novelty::Equivalence;
    pub const MAX: Novelty = Novelty::Entailment;
}

impl std::fmt::Display for Novelty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equivalence => write!(f, "equivalence"),
            Self::Entailment => write!(f, "entailment"),
        }
    }
}

impl std::str::FromStr for Novelty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "equivalence" => Ok(Self::Equivalence),
            "entailment" => Ok(Self::Entailment),
            _ => Err(()),
        }
    }
}

/*!
Reports for the context.

Each report is the outcome of some successful call on a context, as opposed to an [error](crate::types::err).
The [Display] of a report is the conventional reply of a reasoner to the call.
*/

use crate::structures::formula::Formula;

/// The outcome of telling a formula to a context.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TellReport {
    /// The formula was added to the knowledge base.
    Learned,

    /// The formula was already known, and so the knowledge base is unchanged.
    AlreadyKnown,

    /// The formula is inconsistent with the knowledge base, and so the knowledge base is unchanged.
    Rejected,
}

impl std::fmt::Display for TellReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Learned => write!(f, "I've learned something new"),
            Self::AlreadyKnown => write!(f, "I already know that"),
            Self::Rejected => write!(f, "I do not believe that"),
        }
    }
}

/// The outcome of asking a context about a formula.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum AskReport {
    /// The knowledge base entails the formula.
    Entails,

    /// The knowledge base entails the negation of the formula.
    Contradicts,

    /// The knowledge base entails neither the formula nor its negation.
    Undecided,
}

impl std::fmt::Display for AskReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entails => write!(f, "Yes"),
            Self::Contradicts => write!(f, "No"),
            Self::Undecided => write!(f, "I do not know"),
        }
    }
}

/// The outcome of applying an inference rule.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum InferenceReport {
    /// A conclusion was derived and told to the context, with the given outcome.
    Told {
        conclusion: Formula,
        report: TellReport,
    },

    /// The empty clause was derived, and so the premises are jointly unsatisfiable.
    ///
    /// Nothing is told to the context.
    Contradiction,
}

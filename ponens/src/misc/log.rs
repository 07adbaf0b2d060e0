/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when tracing how a verdict was reached.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [parser](crate::parser)
    pub const PARSER: &str = "parser";

    /// Logs related to [CNF normalisation](crate::procedures::cnf)
    pub const CNF: &str = "cnf";

    /// Logs related to the [oracle](crate::oracle)
    pub const ORACLE: &str = "oracle";

    /// Logs related to the [knowledge base](crate::db::knowledge), e.g. tell and ask verdicts
    pub const KNOWLEDGE_BASE: &str = "knowledge_base";

    /// Logs related to [modus ponens](crate::procedures::modus_ponens) and [resolution](crate::procedures::resolution)
    pub const INFERENCE: &str = "inference";
}

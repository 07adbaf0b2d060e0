//! Databases held by a context.
//!
//! For the moment, the only database is the [knowledge base](knowledge).

pub mod knowledge;

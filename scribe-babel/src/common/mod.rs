//! Dialect-independent helpers used by the engine and the rule set.

pub mod footnotes;
pub mod languages;
pub mod links;
pub mod tags;

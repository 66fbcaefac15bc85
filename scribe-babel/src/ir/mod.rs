//! Document tree and export options as received from the parser side.
//!
//! The tree is format-agnostic: every target dialect renders from the same
//! [`nodes::Node`] values.

pub mod nodes;
pub mod options;

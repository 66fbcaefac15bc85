//! Format implementations
//!
//! One module per target dialect. Each holds the dialect's rendering profile
//! and the [`crate::format::Format`] implementation built on it.

pub mod bbcode;
pub mod html;

pub use bbcode::{BbcodeFormat, BBCODE_PROFILE};
pub use html::{HtmlFormat, HTML_PROFILE};

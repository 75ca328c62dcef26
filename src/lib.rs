//! lifereview - Daily and weekly life reviews in plain markdown
//!
//! Reviews are markdown files filled in from fixed templates. This crate
//! parses them back into records, keeps a six-domain life map table up to
//! date inside a hand-edited document, and averages domain scores over a
//! window of daily reviews.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ReviewError;

//! Domain models for agent-brief.
//!
//! # Core Concepts
//!
//! ## Static Tables
//!
//! - [`RuleSet`]: Policy text embedded in every brief. [`RuleSet::defaults`] is used
//!   field-by-field whenever the user leaves a rule blank.
//! - [`DeliverableDefinition`]: The fixed catalogue of artifacts an agent can be asked
//!   to produce, in the order the form presents them.
//!
//! ## Per-Invocation Values
//!
//! - [`FormInput`]: Snapshot of every form field, taken when the user asks for a brief.
//! - [`OutputDocument`]: The brief itself. Built fresh on each generate and only ever
//!   held as rendered JSON text.

mod deliverable;
mod document;
mod form;
mod rules;

pub use deliverable::*;
pub use document::*;
pub use form::*;
pub use rules::*;

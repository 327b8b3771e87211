//! Language-specific signature extraction
//!
//! # Architecture
//!
//! - `grammar`: static per-language query definitions (declaration, input
//!   types, output types)
//! - `capability`: the [`ExtractionCapability`] trait, the query-driven
//!   implementation and the [`CapabilityRegistry`] keyed by language tag
//!
//! Adding a language means writing a `SignatureGrammar` (or a custom
//! capability) and registering it; nothing downstream changes.

pub mod capability;
pub mod grammar;

pub use capability::{CapabilityRegistry, ExtractionCapability, QueryCapability};
pub use grammar::{grammar_for, SignatureGrammar};

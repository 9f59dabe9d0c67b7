//! Core abstractions and common definitions
//!
//! This module provides:
//! - `traits`: the `TripleIndex` lookup abstraction
//! - `namespaces`: namespace constants and the path vocabulary

pub mod traits;
pub mod namespaces;

pub use traits::*;
pub use namespaces::{ns, vocabulary, PathDeclaration, PathKeyword, Vocabulary};

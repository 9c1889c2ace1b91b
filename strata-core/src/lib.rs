//! Core utilities and types for the strata Flutter scaffolding tool.
//!
//! This crate provides the naming transforms and file-writing primitives
//! shared by the configuration, code generation and CLI crates.

mod case;
mod emit;
mod file;

// Naming transforms
pub use case::{
    pluralize, split_words, to_camel_case, to_constant_case, to_dot_case, to_kebab_case,
    to_pascal_case, to_path_case, to_sentence_case, to_snake_case, to_title_case,
};
// Emission
pub use emit::{Emitted, Emitter};
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};

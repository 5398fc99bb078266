//! # name-lint-java
//!
//! Tree-sitter based Java front-end for name-lint.
//!
//! [`JavaExtractor`] implements [`name_lint_core::SourceExtractor`] and turns
//! `.java` files into declaration trees: packages, types, fields, methods,
//! parameters, enum constants, record components and type parameters.
//! Constructors and initializer blocks are recorded under their synthesized
//! names so checkers can exempt them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod constant;
pub mod java;

pub use java::JavaExtractor;

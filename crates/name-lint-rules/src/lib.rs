//! # name-lint-rules
//!
//! Built-in naming convention rules for name-lint.
//!
//! ## Categories
//!
//! | Code | Name | Convention |
//! |------|------|------------|
//! | NL001 | `type-name` | UpperCamelCase (`Foo`, `FooBar`) |
//! | NL002 | `member-name` | lowerCamelCase (`foo`, `fooBar`) |
//! | NL003 | `constant-name` | UPPER_SNAKE_CASE (`FOO`, `FOO_BAR`) |
//! | NL004 | `package-name` | lowercase dot-separated (`com.example.util`) |
//!
//! ## Usage
//!
//! ```ignore
//! use name_lint_core::Analyzer;
//! use name_lint_rules::NameChecker;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src/main/java")
//!     .checker(NameChecker::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod constant_classifier;
mod name_checker;
mod naming_rules;

pub use constant_classifier::ConstantSignal;
pub use name_checker::NameChecker;
pub use naming_rules::{Category, NamingRules};

/// Re-export core types for convenience.
pub use name_lint_core::{Checker, CheckerBox, Diagnostic, Severity};

/// Returns all built-in checkers.
#[must_use]
pub fn all_checkers() -> Vec<CheckerBox> {
    vec![Box::new(NameChecker::new())]
}

//! Identifier categories and their fixed validation patterns.

use regex::Regex;
use std::fmt;

/// Naming category an identifier is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Class, interface, enum, record, and annotation names.
    Type,
    /// Methods, non-constant variables, parameters, and type parameters.
    MemberOrParameter,
    /// Constant-classified variables.
    Constant,
    /// Dotted package paths.
    PackagePath,
}

impl Category {
    /// All categories, in table order.
    pub const ALL: [Self; 4] = [
        Self::Type,
        Self::MemberOrParameter,
        Self::Constant,
        Self::PackagePath,
    ];

    /// Rule code reported for violations of this category.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Type => "NL001",
            Self::MemberOrParameter => "NL002",
            Self::Constant => "NL003",
            Self::PackagePath => "NL004",
        }
    }

    /// Rule name reported for violations of this category.
    #[must_use]
    pub fn rule_name(self) -> &'static str {
        match self {
            Self::Type => "type-name",
            Self::MemberOrParameter => "member-name",
            Self::Constant => "constant-name",
            Self::PackagePath => "package-name",
        }
    }

    /// The convention, in words.
    #[must_use]
    pub fn convention(self) -> &'static str {
        match self {
            Self::Type => "UpperCamelCase",
            Self::MemberOrParameter => "lowerCamelCase",
            Self::Constant => "UPPER_SNAKE_CASE",
            Self::PackagePath => "lowercase dot-separated segments",
        }
    }

    /// Conforming example names.
    #[must_use]
    pub fn example(self) -> &'static str {
        match self {
            Self::Type => "Foo, FooBar",
            Self::MemberOrParameter => "foo, fooBar",
            Self::Constant => "FOO, FOO_BAR",
            Self::PackagePath => "com.example.util",
        }
    }

    /// Anchored pattern source.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Type => r"^(?:[A-Z][a-z]+)+$",
            Self::MemberOrParameter => r"^[a-z]+(?:[A-Z][a-z]+)*$",
            Self::Constant => r"^[A-Z]+(?:_[A-Z]+)*$",
            Self::PackagePath => r"^[a-z]+(?:\.[a-z]+)*$",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rule_name())
    }
}

/// Immutable table of compiled patterns, one per [`Category`].
///
/// Compiled once and shared read-only; safe to reuse across concurrent passes.
#[derive(Debug, Clone)]
pub struct NamingRules {
    type_name: Regex,
    member_or_parameter: Regex,
    constant: Regex,
    package_path: Regex,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingRules {
    /// Compiles the built-in pattern table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            type_name: compile(Category::Type),
            member_or_parameter: compile(Category::MemberOrParameter),
            constant: compile(Category::Constant),
            package_path: compile(Category::PackagePath),
        }
    }

    /// Compiled pattern for `category`.
    #[must_use]
    pub fn regex(&self, category: Category) -> &Regex {
        match category {
            Category::Type => &self.type_name,
            Category::MemberOrParameter => &self.member_or_parameter,
            Category::Constant => &self.constant,
            Category::PackagePath => &self.package_path,
        }
    }

    /// Returns true if `identifier` conforms to `category`.
    #[must_use]
    pub fn matches(&self, category: Category, identifier: &str) -> bool {
        self.regex(category).is_match(identifier)
    }
}

#[allow(clippy::expect_used)] // Patterns are compile-time constants covered by tests
fn compile(category: Category) -> Regex {
    Regex::new(category.pattern()).expect("built-in naming pattern must compile")
}

//! Naming convention checker over declaration trees.
//!
//! # Rules
//!
//! | Node kind | Category |
//! |-----------|----------|
//! | Package | package path |
//! | Type | type name |
//! | Method | member name (constructors and initializers exempt) |
//! | Type parameter | member name |
//! | Variable | constant name if classified constant, else member name |
//!
//! Every violation is reported as a warning. A node yields at most one
//! diagnostic per pass and the walk never stops early.

use name_lint_core::{
    Checker, Diagnostic, DiagnosticReporter, Location, MethodKind, NodeId, NodeKind, Severity,
    SourceUnit, Suggestion,
};

use crate::constant_classifier::{self, ConstantSignal};
use crate::naming_rules::{Category, NamingRules};

/// Checker code for the naming checker as a whole.
pub const CODE: &str = "NL000";

/// Checker name.
pub const NAME: &str = "naming-convention";

/// Names the host synthesizes for constructors and initializer blocks.
const SYNTHESIZED_NAMES: &[&str] = &["<init>", "<clinit>", ""];

/// Validates every identifier in a declaration tree against [`NamingRules`].
#[derive(Debug, Clone, Default)]
pub struct NameChecker {
    rules: NamingRules,
}

impl NameChecker {
    /// Creates a checker with the built-in rule table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule table used by this checker.
    #[must_use]
    pub fn rules(&self) -> &NamingRules {
        &self.rules
    }

    /// Selects the category that applies to a node, or `None` if it is exempt.
    #[must_use]
    pub fn category_for(&self, unit: &SourceUnit, id: NodeId) -> Option<Category> {
        let node = unit.tree.node(id);
        match node.kind {
            NodeKind::Package => Some(Category::PackagePath),
            NodeKind::Type(_) => Some(Category::Type),
            NodeKind::Method(MethodKind::Method) if !is_synthesized(&node.name) => {
                Some(Category::MemberOrParameter)
            }
            NodeKind::Method(_) => None,
            NodeKind::TypeParameter => Some(Category::MemberOrParameter),
            NodeKind::Variable(_) => {
                if constant_classifier::is_constant(&unit.tree, id) {
                    Some(Category::Constant)
                } else {
                    Some(Category::MemberOrParameter)
                }
            }
        }
    }

    fn violation(&self, unit: &SourceUnit, id: NodeId, category: Category) -> Diagnostic {
        let node = unit.tree.node(id);
        let subject = if category == Category::Constant {
            "constant name"
        } else {
            node.kind.subject()
        };

        let diagnostic = Diagnostic::new(
            category.code(),
            category.rule_name(),
            Severity::Warning,
            Location::for_node(unit.path.clone(), id, node.position),
            format!(
                "{subject} '{}' should be {}, e.g. {} (pattern: {})",
                node.name,
                category.convention(),
                category.example(),
                category.pattern()
            ),
        );

        match constant_classifier::classify(&unit.tree, id) {
            Some(signal) if category == Category::Constant => {
                diagnostic.with_suggestion(Suggestion::new(format!(
                    "checked as a constant because it {}",
                    reason(signal)
                )))
            }
            _ => diagnostic,
        }
    }
}

fn is_synthesized(name: &str) -> bool {
    SYNTHESIZED_NAMES.contains(&name)
}

fn reason(signal: ConstantSignal) -> &'static str {
    match signal {
        ConstantSignal::EnumConstant => "is an enum constant",
        ConstantSignal::CompileTimeValue => "has a compile-time constant value",
        ConstantSignal::InterfaceMember => "is declared in an interface",
        ConstantSignal::PublicStaticFinal => "is public static final",
        ConstantSignal::PrivateStaticFinal => "is private static final",
    }
}

impl Checker for NameChecker {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Checks type, member, constant, and package names against fixed conventions"
    }

    fn check_node(&self, unit: &SourceUnit, id: NodeId, reporter: &mut dyn DiagnosticReporter) {
        let Some(category) = self.category_for(unit, id) else {
            return;
        };

        let name = &unit.tree.node(id).name;
        if !self.rules.matches(category, name) {
            tracing::debug!("{} violation for '{}' in {}", category, name, unit.path.display());
            reporter.report(self.violation(unit, id, category));
        }
    }
}

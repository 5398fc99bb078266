//! Checker and reporter traits.

use crate::context::SourceUnit;
use crate::tree::NodeId;
use crate::types::{Diagnostic, LintResult, Severity};

/// Sink that receives diagnostics as a checking pass produces them.
///
/// Reporting is infallible from the checker's point of view. Sinks that
/// can fail are responsible for their own recovery.
pub trait DiagnosticReporter {
    /// Receives one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticReporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl DiagnosticReporter for LintResult {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl<R: DiagnosticReporter + ?Sized> DiagnosticReporter for &mut R {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// A tree-walking check run over one root declaration at a time.
///
/// # Example
///
/// ```ignore
/// use name_lint_core::{Checker, DiagnosticReporter, NodeId, SourceUnit};
///
/// pub struct NoEmptyNames;
///
/// impl Checker for NoEmptyNames {
///     fn name(&self) -> &'static str { "no-empty-names" }
///     fn code(&self) -> &'static str { "NL900" }
///
///     fn check_node(&self, unit: &SourceUnit, id: NodeId, reporter: &mut dyn DiagnosticReporter) {
///         // inspect unit.tree.node(id) and report
///     }
/// }
/// ```
pub trait Checker: Send + Sync {
    /// Returns the kebab-case name of this checker.
    fn name(&self) -> &'static str;

    /// Returns the checker code (e.g., "NL000").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this checker validates.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the severity of diagnostics from this checker.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks a single node without descending into its children.
    fn check_node(&self, unit: &SourceUnit, id: NodeId, reporter: &mut dyn DiagnosticReporter);

    /// Checks `root` and every descendant exactly once, in pre-order.
    fn check(&self, unit: &SourceUnit, root: NodeId, reporter: &mut dyn DiagnosticReporter) {
        for id in unit.tree.descendants(root) {
            self.check_node(unit, id, reporter);
        }
    }
}

/// Type alias for boxed Checker trait objects.
pub type CheckerBox = Box<dyn Checker>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{DeclarationNode, DeclarationTree, NodeKind, TypeKind};
    use crate::types::Location;

    struct EveryNode;

    impl Checker for EveryNode {
        fn name(&self) -> &'static str {
            "every-node"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }

        fn check_node(
            &self,
            unit: &SourceUnit,
            id: NodeId,
            reporter: &mut dyn DiagnosticReporter,
        ) {
            reporter.report(Diagnostic::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::for_node(unit.path.clone(), id, None),
                unit.tree.node(id).name.clone(),
            ));
        }
    }

    #[test]
    fn default_check_walks_in_pre_order() {
        let mut tree = DeclarationTree::new();
        let outer = tree.add_root(DeclarationNode::new(NodeKind::Type(TypeKind::Class), "Outer"));
        let inner = tree.add_child(
            outer,
            DeclarationNode::new(NodeKind::Type(TypeKind::Class), "Inner"),
        );
        tree.add_child(inner, DeclarationNode::new(NodeKind::TypeParameter, "T"));
        tree.add_child(outer, DeclarationNode::new(NodeKind::TypeParameter, "U"));
        let unit = SourceUnit::new("Outer.java", tree);

        let mut sink: Vec<Diagnostic> = Vec::new();
        EveryNode.check(&unit, outer, &mut sink);

        let names: Vec<&str> = sink.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(names, vec!["Outer", "Inner", "T", "U"]);
        assert_eq!(EveryNode.default_severity(), Severity::Warning);
    }
}

//! Decides whether a variable-like declaration is validated as a constant.
//!
//! Constant-ness is not declared directly in the tree, so it is inferred
//! from independent signals. The signals are evaluated in [`SIGNALS`] order
//! and the first one that fires wins.

use name_lint_core::{DeclarationTree, Modifier, NodeId, NodeKind, VariableKind};

/// Evidence that a variable is a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantSignal {
    /// The node is an enum constant.
    EnumConstant,
    /// The node carries a compile-time constant value.
    CompileTimeValue,
    /// The node is declared directly inside an interface.
    InterfaceMember,
    /// The node is `public static final`.
    PublicStaticFinal,
    /// The node is `private static final`.
    PrivateStaticFinal,
}

/// Predicate over one variable node.
pub type Predicate = fn(&DeclarationTree, NodeId) -> bool;

/// Ordered predicate table. Earlier entries take precedence.
pub const SIGNALS: &[(ConstantSignal, Predicate)] = &[
    (ConstantSignal::EnumConstant, is_enum_constant),
    (ConstantSignal::CompileTimeValue, has_constant_value),
    (ConstantSignal::InterfaceMember, is_interface_member),
    (ConstantSignal::PublicStaticFinal, is_public_static_final),
    (ConstantSignal::PrivateStaticFinal, is_private_static_final),
];

/// Returns the first signal classifying `id` as a constant, if any.
///
/// Only variable nodes are ever classified; every other kind yields `None`.
#[must_use]
pub fn classify(tree: &DeclarationTree, id: NodeId) -> Option<ConstantSignal> {
    if !matches!(tree.node(id).kind, NodeKind::Variable(_)) {
        return None;
    }
    SIGNALS
        .iter()
        .find(|(_, predicate)| predicate(tree, id))
        .map(|&(signal, _)| signal)
}

/// Returns true if `id` must be validated against the constant pattern.
#[must_use]
pub fn is_constant(tree: &DeclarationTree, id: NodeId) -> bool {
    classify(tree, id).is_some()
}

fn is_enum_constant(tree: &DeclarationTree, id: NodeId) -> bool {
    tree.node(id).kind == NodeKind::Variable(VariableKind::EnumConstant)
}

fn has_constant_value(tree: &DeclarationTree, id: NodeId) -> bool {
    tree.node(id).constant_value.is_some()
}

fn is_interface_member(tree: &DeclarationTree, id: NodeId) -> bool {
    matches!(
        tree.enclosing(id).map(|n| n.kind),
        Some(NodeKind::Type(kind)) if kind.is_interface()
    )
}

fn is_public_static_final(tree: &DeclarationTree, id: NodeId) -> bool {
    tree.node(id)
        .has_all(&[Modifier::Public, Modifier::Static, Modifier::Final])
}

fn is_private_static_final(tree: &DeclarationTree, id: NodeId) -> bool {
    tree.node(id)
        .has_all(&[Modifier::Private, Modifier::Static, Modifier::Final])
}

#[cfg(test)]
mod tests {
    use super::*;
    use name_lint_core::{ConstantValue, DeclarationNode, MethodKind, TypeKind};

    fn within(kind: TypeKind, variable: DeclarationNode) -> (DeclarationTree, NodeId) {
        let mut tree = DeclarationTree::new();
        let owner = tree.add_root(DeclarationNode::new(NodeKind::Type(kind), "Owner"));
        let id = tree.add_child(owner, variable);
        (tree, id)
    }

    fn field(name: &str) -> DeclarationNode {
        DeclarationNode::new(NodeKind::Variable(VariableKind::Field), name)
    }

    #[test]
    fn public_static_final_field_is_constant() {
        let (tree, id) = within(
            TypeKind::Class,
            field("maxCount").with_modifiers([Modifier::Public, Modifier::Static, Modifier::Final]),
        );
        assert_eq!(classify(&tree, id), Some(ConstantSignal::PublicStaticFinal));
    }

    #[test]
    fn private_static_final_field_is_constant() {
        let (tree, id) = within(
            TypeKind::Class,
            field("LOG").with_modifiers([
                Modifier::Private,
                Modifier::Static,
                Modifier::Final,
                Modifier::Transient,
            ]),
        );
        assert_eq!(classify(&tree, id), Some(ConstantSignal::PrivateStaticFinal));
    }

    #[test]
    fn interface_field_is_constant_without_modifiers() {
        let (tree, id) = within(TypeKind::Interface, field("timeout"));
        assert_eq!(classify(&tree, id), Some(ConstantSignal::InterfaceMember));

        let (tree, id) = within(TypeKind::Annotation, field("DEFAULT"));
        assert!(is_constant(&tree, id));
    }

    #[test]
    fn plain_instance_field_is_not_constant() {
        let (tree, id) = within(TypeKind::Class, field("count"));
        assert_eq!(classify(&tree, id), None);

        let (tree, id) = within(
            TypeKind::Class,
            field("cache").with_modifiers([Modifier::Private, Modifier::Final]),
        );
        assert!(!is_constant(&tree, id));

        let (tree, id) = within(
            TypeKind::Class,
            field("shared").with_modifiers([Modifier::Protected, Modifier::Static, Modifier::Final]),
        );
        assert!(!is_constant(&tree, id));
    }

    #[test]
    fn enum_constant_wins_over_later_signals() {
        let (tree, id) = within(
            TypeKind::Enum,
            DeclarationNode::new(NodeKind::Variable(VariableKind::EnumConstant), "RED")
                .with_constant_value(ConstantValue::new("0")),
        );
        assert_eq!(classify(&tree, id), Some(ConstantSignal::EnumConstant));
    }

    #[test]
    fn constant_value_wins_over_modifiers() {
        let (tree, id) = within(
            TypeKind::Interface,
            field("LIMIT")
                .with_modifiers([Modifier::Public, Modifier::Static, Modifier::Final])
                .with_constant_value(ConstantValue::new("10")),
        );
        assert_eq!(classify(&tree, id), Some(ConstantSignal::CompileTimeValue));
    }

    #[test]
    fn interface_method_parameter_is_not_constant() {
        let mut tree = DeclarationTree::new();
        let iface = tree.add_root(DeclarationNode::new(
            NodeKind::Type(TypeKind::Interface),
            "Service",
        ));
        let method = tree.add_child(
            iface,
            DeclarationNode::new(NodeKind::Method(MethodKind::Method), "call"),
        );
        let param = tree.add_child(
            method,
            DeclarationNode::new(NodeKind::Variable(VariableKind::Parameter), "request"),
        );
        assert!(!is_constant(&tree, param));
    }

    #[test]
    fn non_variables_are_never_classified() {
        let (tree, _) = within(TypeKind::Interface, field("x"));
        let owner = tree.roots()[0];
        assert_eq!(classify(&tree, owner), None);
    }
}

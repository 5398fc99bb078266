//! Compile-time constant detection for field initializers.
//!
//! Approximates the Java rule: a `final` field of primitive or `String`
//! type initialized with a constant expression. Literals, casts to a
//! primitive or `String` type, and simple names of constant fields already
//! seen in the same compilation unit are combined through unary, binary,
//! ternary and parenthesized expressions. Qualified names such as
//! `Other.LIMIT` are not resolved.

use std::collections::HashSet;

use tree_sitter::Node;

const LITERAL_KINDS: &[&str] = &[
    "decimal_integer_literal",
    "hex_integer_literal",
    "octal_integer_literal",
    "binary_integer_literal",
    "decimal_floating_point_literal",
    "hex_floating_point_literal",
    "character_literal",
    "string_literal",
    "true",
    "false",
];

const PRIMITIVE_TYPE_KINDS: &[&str] = &["integral_type", "floating_point_type", "boolean_type"];

/// Returns true if a field of this declared type can hold a compile-time constant.
pub(crate) fn is_constant_type(type_node: &Node<'_>, src: &[u8]) -> bool {
    if PRIMITIVE_TYPE_KINDS.contains(&type_node.kind()) {
        return true;
    }
    matches!(
        type_node.utf8_text(src),
        Ok("String" | "java.lang.String")
    )
}

/// Returns true if `node` is a constant expression.
///
/// `known` holds the simple names of fields already recognized as constants.
pub(crate) fn is_constant_expression(node: &Node<'_>, src: &[u8], known: &HashSet<String>) -> bool {
    let kind = node.kind();
    if LITERAL_KINDS.contains(&kind) {
        return true;
    }

    let field = |name: &str| {
        node.child_by_field_name(name)
            .is_some_and(|child| is_constant_expression(&child, src, known))
    };

    match kind {
        "identifier" => node
            .utf8_text(src)
            .is_ok_and(|name| known.contains(name)),
        "parenthesized_expression" => node
            .named_child(0)
            .is_some_and(|inner| is_constant_expression(&inner, src, known)),
        "cast_expression" => {
            node.child_by_field_name("type")
                .is_some_and(|ty| is_constant_type(&ty, src))
                && field("value")
        }
        "unary_expression" => field("operand"),
        "binary_expression" => field("left") && field("right"),
        "ternary_expression" => field("condition") && field("consequence") && field("alternative"),
        _ => false,
    }
}

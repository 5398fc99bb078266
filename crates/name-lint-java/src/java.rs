//! Java front-end using Tree-sitter.
//!
//! Builds one [`DeclarationTree`] per compilation unit. The package
//! declaration (when present) becomes the single root and owns the
//! top-level types; otherwise each top-level type is a root.
//!
//! Only declarations are recorded. Local variables, lambda parameters and
//! anonymous class bodies are not part of the tree.

use std::collections::HashSet;
use std::path::Path;

use name_lint_core::{
    ConstantValue, DeclarationNode, DeclarationTree, ExtractError, MethodKind, Modifier, NodeId,
    NodeKind, SourceExtractor, SourcePosition, SourceUnit, TypeKind, VariableKind, DEFAULT_MARKER,
};
use tree_sitter::{Language, Node, Parser};

use crate::constant;

/// Name the host gives constructors.
const CONSTRUCTOR_NAME: &str = "<init>";

/// Name the host gives static initializer blocks.
const STATIC_INITIALIZER_NAME: &str = "<clinit>";

/// Extracts declaration trees from Java source.
pub struct JavaExtractor {
    language: Language,
    marker: String,
}

impl JavaExtractor {
    /// Creates an extractor recognizing the default `@CheckName` marker.
    #[must_use]
    pub fn new() -> Self {
        Self::with_marker(DEFAULT_MARKER)
    }

    /// Creates an extractor recognizing a custom marker annotation.
    ///
    /// The marker matches by simple name, so `@CheckName` and
    /// `@com.acme.CheckName` are both accepted for `"CheckName"`.
    #[must_use]
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
            marker: marker.into(),
        }
    }
}

impl Default for JavaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceExtractor for JavaExtractor {
    fn language_id(&self) -> &'static str {
        "java"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["java"]
    }

    fn extract(&self, path: &Path, source: &str) -> Result<SourceUnit, ExtractError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ExtractError::Grammar {
                language: "java",
                message: e.to_string(),
            })?;

        let parsed = parser
            .parse(source, None)
            .ok_or_else(|| ExtractError::Parse {
                path: path.to_path_buf(),
            })?;
        let root = parsed.root_node();
        if root.has_error() {
            tracing::debug!("{} contains syntax errors, extracting what parsed", path.display());
        }

        let mut builder = TreeBuilder {
            src: source.as_bytes(),
            marker: &self.marker,
            tree: DeclarationTree::new(),
            constants: HashSet::new(),
        };
        builder.compilation_unit(&root);
        tracing::trace!("{}: {} declarations", path.display(), builder.tree.len());

        Ok(SourceUnit::new(path, builder.tree))
    }
}

fn type_kind(kind: &str) -> Option<TypeKind> {
    let kind = match kind {
        "class_declaration" => TypeKind::Class,
        "interface_declaration" => TypeKind::Interface,
        "enum_declaration" => TypeKind::Enum,
        "record_declaration" => TypeKind::Record,
        "annotation_type_declaration" => TypeKind::Annotation,
        _ => return None,
    };
    Some(kind)
}

fn child_of_kind<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}

fn position(node: &Node<'_>) -> SourcePosition {
    let start = node.start_position();
    SourcePosition::new(start.row + 1, start.column + 1)
        .with_span(node.start_byte(), node.end_byte() - node.start_byte())
}

struct TreeBuilder<'s> {
    src: &'s [u8],
    marker: &'s str,
    tree: DeclarationTree,
    /// Simple names of fields given a constant value so far.
    constants: HashSet<String>,
}

impl<'s> TreeBuilder<'s> {
    fn text(&self, node: &Node<'_>) -> &'s str {
        std::str::from_utf8(&self.src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn add(&mut self, parent: Option<NodeId>, node: DeclarationNode) -> NodeId {
        match parent {
            Some(parent) => self.tree.add_child(parent, node),
            None => self.tree.add_root(node),
        }
    }

    fn compilation_unit(&mut self, root: &Node<'_>) {
        let package = child_of_kind(root, "package_declaration").and_then(|p| self.package(&p));

        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            if let Some(kind) = type_kind(child.kind()) {
                self.type_declaration(package, &child, kind, true);
            }
        }
    }

    fn package(&mut self, node: &Node<'_>) -> Option<NodeId> {
        let name = child_of_kind(node, "scoped_identifier")
            .or_else(|| child_of_kind(node, "identifier"))?;
        let path: String = self.text(&name).split_whitespace().collect();
        Some(
            self.tree
                .add_root(DeclarationNode::new(NodeKind::Package, path).with_position(position(&name))),
        )
    }

    /// Collects modifier keywords and reports whether the marker is attached.
    fn modifiers(&self, owner: &Node<'_>) -> (Vec<Modifier>, bool) {
        let Some(modifiers) = child_of_kind(owner, "modifiers") else {
            return (Vec::new(), false);
        };

        let mut keywords = Vec::new();
        let mut marked = false;
        let mut cursor = modifiers.walk();
        for child in modifiers.children(&mut cursor) {
            match child.kind() {
                "marker_annotation" | "annotation" => {
                    marked |= child
                        .child_by_field_name("name")
                        .is_some_and(|name| self.is_marker(self.text(&name)));
                }
                keyword => keywords.extend(Modifier::from_keyword(keyword)),
            }
        }
        (keywords, marked)
    }

    fn is_marker(&self, annotation: &str) -> bool {
        annotation.rsplit('.').next() == Some(self.marker)
    }

    fn type_declaration(
        &mut self,
        parent: Option<NodeId>,
        node: &Node<'_>,
        kind: TypeKind,
        top_level: bool,
    ) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let (modifiers, marked) = self.modifiers(node);
        let decl = DeclarationNode::new(NodeKind::Type(kind), self.text(&name))
            .with_modifiers(modifiers)
            .with_opt_in(top_level && marked)
            .with_position(position(&name));
        let id = self.add(parent, decl);

        if let Some(params) = node.child_by_field_name("type_parameters") {
            self.type_parameters(id, &params);
        }
        if kind == TypeKind::Record {
            if let Some(components) = node.child_by_field_name("parameters") {
                self.record_components(id, &components);
            }
        }

        let body = node.child_by_field_name("body");
        let needs_default_constructor = matches!(
            kind,
            TypeKind::Class | TypeKind::Enum | TypeKind::Record
        ) && !body.is_some_and(|b| has_constructor(&b));
        if needs_default_constructor {
            self.tree.add_child(
                id,
                DeclarationNode::new(NodeKind::Method(MethodKind::Constructor), CONSTRUCTOR_NAME)
                    .with_position(position(&name)),
            );
        }

        if let Some(body) = body {
            self.body(id, kind, &body);
        }
    }

    fn body(&mut self, owner: NodeId, owner_kind: TypeKind, body: &Node<'_>) {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            match member.kind() {
                "field_declaration" | "constant_declaration" => {
                    self.fields(owner, owner_kind, &member);
                }
                "method_declaration" | "annotation_type_element_declaration" => {
                    self.method(owner, &member);
                }
                "constructor_declaration" | "compact_constructor_declaration" => {
                    self.constructor(owner, &member);
                }
                "static_initializer" => {
                    self.initializer(owner, &member, MethodKind::StaticInitializer);
                }
                "block" => self.initializer(owner, &member, MethodKind::InstanceInitializer),
                "enum_constant" => self.enum_constant(owner, &member),
                "enum_body_declarations" => self.body(owner, owner_kind, &member),
                other => {
                    if let Some(kind) = type_kind(other) {
                        self.type_declaration(Some(owner), &member, kind, false);
                    }
                }
            }
        }
    }

    fn fields(&mut self, owner: NodeId, owner_kind: TypeKind, node: &Node<'_>) {
        let (modifiers, _) = self.modifiers(node);
        let is_final = owner_kind.is_interface() || modifiers.contains(&Modifier::Final);
        let constant_type = node
            .child_by_field_name("type")
            .is_some_and(|ty| constant::is_constant_type(&ty, self.src));

        let mut cursor = node.walk();
        for declarator in node.children_by_field_name("declarator", &mut cursor) {
            let Some(name) = declarator.child_by_field_name("name") else {
                continue;
            };
            let mut decl = DeclarationNode::new(NodeKind::Variable(VariableKind::Field), self.text(&name))
                .with_modifiers(modifiers.iter().copied())
                .with_position(position(&name));

            let scalar = declarator.child_by_field_name("dimensions").is_none();
            if is_final && constant_type && scalar {
                if let Some(value) = declarator
                    .child_by_field_name("value")
                    .filter(|v| constant::is_constant_expression(v, self.src, &self.constants))
                {
                    decl = decl.with_constant_value(ConstantValue::new(self.text(&value)));
                    self.constants.insert(self.text(&name).to_string());
                }
            }
            self.tree.add_child(owner, decl);
        }
    }

    fn enum_constant(&mut self, owner: NodeId, node: &Node<'_>) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        self.tree.add_child(
            owner,
            DeclarationNode::new(NodeKind::Variable(VariableKind::EnumConstant), self.text(&name))
                .with_position(position(&name)),
        );
    }

    fn method(&mut self, owner: NodeId, node: &Node<'_>) {
        let Some(name) = node.child_by_field_name("name") else {
            return;
        };
        let (modifiers, _) = self.modifiers(node);
        let id = self.tree.add_child(
            owner,
            DeclarationNode::new(NodeKind::Method(MethodKind::Method), self.text(&name))
                .with_modifiers(modifiers)
                .with_position(position(&name)),
        );
        self.signature(id, node);
    }

    fn constructor(&mut self, owner: NodeId, node: &Node<'_>) {
        let (modifiers, _) = self.modifiers(node);
        let mut decl = DeclarationNode::new(NodeKind::Method(MethodKind::Constructor), CONSTRUCTOR_NAME)
            .with_modifiers(modifiers);
        if let Some(name) = node.child_by_field_name("name") {
            decl = decl.with_position(position(&name));
        }
        let id = self.tree.add_child(owner, decl);
        self.signature(id, node);
    }

    fn initializer(&mut self, owner: NodeId, node: &Node<'_>, kind: MethodKind) {
        let name = match kind {
            MethodKind::StaticInitializer => STATIC_INITIALIZER_NAME,
            _ => "",
        };
        self.tree.add_child(
            owner,
            DeclarationNode::new(NodeKind::Method(kind), name).with_position(position(node)),
        );
    }

    fn signature(&mut self, method: NodeId, node: &Node<'_>) {
        if let Some(params) = node.child_by_field_name("type_parameters") {
            self.type_parameters(method, &params);
        }
        if let Some(params) = node.child_by_field_name("parameters") {
            self.parameters(method, &params, VariableKind::Parameter, &[]);
        }
    }

    fn type_parameters(&mut self, owner: NodeId, node: &Node<'_>) {
        let mut cursor = node.walk();
        for param in node.named_children(&mut cursor) {
            if param.kind() != "type_parameter" {
                continue;
            }
            if let Some(name) = child_of_kind(&param, "type_identifier") {
                self.tree.add_child(
                    owner,
                    DeclarationNode::new(NodeKind::TypeParameter, self.text(&name))
                        .with_position(position(&name)),
                );
            }
        }
    }

    fn record_components(&mut self, owner: NodeId, node: &Node<'_>) {
        self.parameters(
            owner,
            node,
            VariableKind::RecordComponent,
            &[Modifier::Private, Modifier::Final],
        );
    }

    fn parameters(
        &mut self,
        owner: NodeId,
        node: &Node<'_>,
        kind: VariableKind,
        implicit: &[Modifier],
    ) {
        let mut cursor = node.walk();
        for param in node.named_children(&mut cursor) {
            let name = match param.kind() {
                "formal_parameter" => param.child_by_field_name("name"),
                "spread_parameter" => child_of_kind(&param, "variable_declarator")
                    .and_then(|d| d.child_by_field_name("name")),
                _ => None,
            };
            let Some(name) = name else {
                continue;
            };
            let (modifiers, _) = self.modifiers(&param);
            self.tree.add_child(
                owner,
                DeclarationNode::new(NodeKind::Variable(kind), self.text(&name))
                    .with_modifiers(modifiers)
                    .with_modifiers(implicit.iter().copied())
                    .with_position(position(&name)),
            );
        }
    }
}

/// Returns true if a class, enum or record body declares any constructor.
fn has_constructor(body: &Node<'_>) -> bool {
    let mut cursor = body.walk();
    let found = body.named_children(&mut cursor).any(|member| match member.kind() {
        "constructor_declaration" | "compact_constructor_declaration" => true,
        "enum_body_declarations" => has_constructor(&member),
        _ => false,
    });
    found
}

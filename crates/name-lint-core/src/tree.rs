//! Declaration tree model.
//!
//! A [`DeclarationTree`] is an arena of [`DeclarationNode`]s supplied by a
//! host front-end. Children are owned through the arena and listed in
//! declaration order; the link back to the enclosing node is a plain
//! [`NodeId`], never an owning pointer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Index of a node inside a [`DeclarationTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Flavor of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// `class Foo`
    Class,
    /// `interface Foo`
    Interface,
    /// `enum Foo`
    Enum,
    /// `record Foo(...)`
    Record,
    /// `@interface Foo`
    Annotation,
}

impl TypeKind {
    /// Whether members declared directly inside this type are implicitly constants.
    ///
    /// Annotation types are interfaces in the Java model.
    #[must_use]
    pub fn is_interface(self) -> bool {
        matches!(self, Self::Interface | Self::Annotation)
    }
}

/// Flavor of an executable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    /// Ordinary method or annotation element.
    Method,
    /// Constructor, explicit or synthesized (`<init>`).
    Constructor,
    /// `static { ... }` block (`<clinit>`).
    StaticInitializer,
    /// Instance initializer block (empty name).
    InstanceInitializer,
}

/// Flavor of a variable-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    /// Field of a class, interface, enum, record, or annotation.
    Field,
    /// Member of an enum constant list.
    EnumConstant,
    /// Method, constructor, or lambda parameter.
    Parameter,
    /// Component in a record header.
    RecordComponent,
}

/// Kind of a declaration node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Package declaration; the name is the full dotted path.
    Package,
    /// Class, interface, enum, record, or annotation type.
    Type(TypeKind),
    /// Method, constructor, or initializer.
    Method(MethodKind),
    /// Field, enum constant, parameter, or record component.
    Variable(VariableKind),
    /// Generic type parameter.
    TypeParameter,
}

impl NodeKind {
    /// Human-readable subject used in diagnostic messages.
    #[must_use]
    pub fn subject(self) -> &'static str {
        match self {
            Self::Package => "package path",
            Self::Type(TypeKind::Interface) => "interface name",
            Self::Type(TypeKind::Enum) => "enum name",
            Self::Type(TypeKind::Annotation) => "annotation name",
            Self::Type(TypeKind::Record) => "record name",
            Self::Type(TypeKind::Class) => "class name",
            Self::Method(MethodKind::Method) => "method name",
            Self::Method(_) => "initializer name",
            Self::Variable(VariableKind::Parameter) => "parameter name",
            Self::Variable(VariableKind::EnumConstant) => "enum constant name",
            Self::Variable(VariableKind::RecordComponent) => "record component name",
            Self::Variable(VariableKind::Field) => "field name",
            Self::TypeParameter => "type parameter name",
        }
    }
}

/// Declaration modifier keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modifier {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `abstract`
    Abstract,
    /// `default`
    Default,
    /// `static`
    Static,
    /// `final`
    Final,
    /// `sealed`
    Sealed,
    /// `non-sealed`
    NonSealed,
    /// `synchronized`
    Synchronized,
    /// `native`
    Native,
    /// `transient`
    Transient,
    /// `volatile`
    Volatile,
    /// `strictfp`
    Strictfp,
}

impl Modifier {
    /// Parses a modifier keyword as written in source.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let modifier = match keyword {
            "public" => Self::Public,
            "protected" => Self::Protected,
            "private" => Self::Private,
            "abstract" => Self::Abstract,
            "default" => Self::Default,
            "static" => Self::Static,
            "final" => Self::Final,
            "sealed" => Self::Sealed,
            "non-sealed" => Self::NonSealed,
            "synchronized" => Self::Synchronized,
            "native" => Self::Native,
            "transient" => Self::Transient,
            "volatile" => Self::Volatile,
            "strictfp" => Self::Strictfp,
            _ => return None,
        };
        Some(modifier)
    }
}

/// Source text of a compile-time constant expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstantValue(pub String);

impl ConstantValue {
    /// Creates a constant value from its source text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Position of a node's identifier in the source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file.
    #[serde(default)]
    pub offset: usize,
    /// Length of the identifier in bytes.
    #[serde(default)]
    pub length: usize,
}

impl SourcePosition {
    /// Creates a position from line and column.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte span of this position.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A single declaration in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationNode {
    /// Kind of declaration.
    pub kind: NodeKind,
    /// Simple name (full dotted path for packages).
    pub name: String,
    /// Explicit modifiers.
    pub modifiers: BTreeSet<Modifier>,
    /// Compile-time constant value, when the host guarantees one.
    pub constant_value: Option<ConstantValue>,
    /// Whether the opt-in marker is attached to this declaration.
    pub opt_in: bool,
    /// Where the identifier appears in source.
    pub position: Option<SourcePosition>,
    enclosing: Option<NodeId>,
    children: Vec<NodeId>,
}

impl DeclarationNode {
    /// Creates a detached node with no modifiers.
    #[must_use]
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            modifiers: BTreeSet::new(),
            constant_value: None,
            opt_in: false,
            position: None,
            enclosing: None,
            children: Vec::new(),
        }
    }

    /// Adds modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Sets the compile-time constant value.
    #[must_use]
    pub fn with_constant_value(mut self, value: ConstantValue) -> Self {
        self.constant_value = Some(value);
        self
    }

    /// Marks this node as opted in for checking.
    #[must_use]
    pub fn with_opt_in(mut self, opt_in: bool) -> Self {
        self.opt_in = opt_in;
        self
    }

    /// Sets the source position.
    #[must_use]
    pub fn with_position(mut self, position: SourcePosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Returns true if every modifier in `required` is present.
    #[must_use]
    pub fn has_all(&self, required: &[Modifier]) -> bool {
        required.iter().all(|m| self.modifiers.contains(m))
    }

    /// The enclosing node, if this is not a root.
    #[must_use]
    pub fn enclosing(&self) -> Option<NodeId> {
        self.enclosing
    }

    /// Child nodes in declaration order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed declaration tree (possibly a forest).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationTree {
    nodes: Vec<DeclarationNode>,
    roots: Vec<NodeId>,
}

impl DeclarationTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root node and returns its id.
    pub fn add_root(&mut self, mut node: DeclarationNode) -> NodeId {
        node.enclosing = None;
        node.children.clear();
        let id = self.push(node);
        self.roots.push(id);
        id
    }

    /// Adds `node` as the last child of `parent` and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn add_child(&mut self, parent: NodeId, mut node: DeclarationNode) -> NodeId {
        assert!(parent.0 < self.nodes.len(), "unknown parent node {parent}");
        node.enclosing = Some(parent);
        node.children.clear();
        let id = self.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    fn push(&mut self, node: DeclarationNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &DeclarationNode {
        &self.nodes[id.0]
    }

    /// Returns the enclosing node of `id`, if any.
    #[must_use]
    pub fn enclosing(&self, id: NodeId) -> Option<&DeclarationNode> {
        self.node(id).enclosing.map(|p| self.node(p))
    }

    /// Returns the children of `id` in declaration order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Root nodes in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level type declarations: types that are roots or whose enclosing node is a package.
    #[must_use]
    pub fn top_level_types(&self) -> Vec<NodeId> {
        self.roots
            .iter()
            .flat_map(|&root| match self.node(root).kind {
                NodeKind::Package => self.children(root).to_vec(),
                _ => vec![root],
            })
            .filter(|&id| matches!(self.node(id).kind, NodeKind::Type(_)))
            .collect()
    }

    /// Returns the package node that encloses `id`, if any.
    #[must_use]
    pub fn package_of(&self, id: NodeId) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(c) = current {
            if self.node(c).kind == NodeKind::Package {
                return Some(c);
            }
            current = self.node(c).enclosing;
        }
        None
    }

    /// Pre-order traversal of `root` and all of its descendants.
    #[must_use]
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![root],
        }
    }
}

/// Iterator returned by [`DeclarationTree::descendants`].
pub struct Descendants<'a> {
    tree: &'a DeclarationTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}

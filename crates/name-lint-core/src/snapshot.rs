//! Serializable declaration tree snapshots.
//!
//! Hosts that do not link a front-end crate can hand over a nested snapshot
//! (typically JSON) which is flattened into a [`DeclarationTree`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::context::SourceUnit;
use crate::tree::{
    ConstantValue, DeclarationNode, DeclarationTree, MethodKind, Modifier, NodeId, NodeKind,
    SourcePosition, TypeKind, VariableKind,
};

/// Flat kind tag used in snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotKind {
    /// Package declaration.
    Package,
    /// Class declaration.
    Class,
    /// Interface declaration.
    Interface,
    /// Enum declaration.
    Enum,
    /// Record declaration.
    Record,
    /// Annotation type declaration.
    Annotation,
    /// Method.
    Method,
    /// Constructor.
    Constructor,
    /// Static initializer.
    StaticInitializer,
    /// Instance initializer.
    InstanceInitializer,
    /// Field.
    Field,
    /// Enum constant.
    EnumConstant,
    /// Parameter.
    Parameter,
    /// Record component.
    RecordComponent,
    /// Type parameter.
    TypeParameter,
}

impl From<SnapshotKind> for NodeKind {
    fn from(kind: SnapshotKind) -> Self {
        match kind {
            SnapshotKind::Package => Self::Package,
            SnapshotKind::Class => Self::Type(TypeKind::Class),
            SnapshotKind::Interface => Self::Type(TypeKind::Interface),
            SnapshotKind::Enum => Self::Type(TypeKind::Enum),
            SnapshotKind::Record => Self::Type(TypeKind::Record),
            SnapshotKind::Annotation => Self::Type(TypeKind::Annotation),
            SnapshotKind::Method => Self::Method(MethodKind::Method),
            SnapshotKind::Constructor => Self::Method(MethodKind::Constructor),
            SnapshotKind::StaticInitializer => Self::Method(MethodKind::StaticInitializer),
            SnapshotKind::InstanceInitializer => Self::Method(MethodKind::InstanceInitializer),
            SnapshotKind::Field => Self::Variable(VariableKind::Field),
            SnapshotKind::EnumConstant => Self::Variable(VariableKind::EnumConstant),
            SnapshotKind::Parameter => Self::Variable(VariableKind::Parameter),
            SnapshotKind::RecordComponent => Self::Variable(VariableKind::RecordComponent),
            SnapshotKind::TypeParameter => Self::TypeParameter,
        }
    }
}

/// One node of a nested snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Kind tag.
    pub kind: SnapshotKind,
    /// Simple name.
    pub name: String,
    /// Explicit modifiers.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Compile-time constant value, if any.
    #[serde(default)]
    pub constant_value: Option<String>,
    /// Opt-in marker flag.
    #[serde(default)]
    pub opt_in: bool,
    /// Line of the identifier (1-indexed).
    #[serde(default)]
    pub line: Option<usize>,
    /// Column of the identifier (1-indexed).
    #[serde(default)]
    pub column: Option<usize>,
    /// Children in declaration order.
    #[serde(default)]
    pub children: Vec<NodeSnapshot>,
}

/// A whole snapshot: one compilation unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// Path reported in diagnostics.
    pub path: PathBuf,
    /// Root declarations.
    pub roots: Vec<NodeSnapshot>,
}

/// Problems reading a snapshot.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// The snapshot text is not valid snapshot JSON.
    #[error("invalid snapshot JSON: {message}")]
    Json {
        /// Parser message, with line and column.
        message: String,
    },

    /// A package node appeared below the top level.
    #[error("package '{name}' must be a root declaration")]
    MisplacedPackage {
        /// Package name.
        name: String,
    },

    /// A leaf declaration was given children.
    #[error("{parent} '{name}' cannot enclose other declarations")]
    UnexpectedChildren {
        /// Subject of the parent node.
        parent: &'static str,
        /// Parent name.
        name: String,
    },
}

impl TreeSnapshot {
    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if the text is not a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Json {
            message: e.to_string(),
        })
    }

    /// Flattens the snapshot into a source unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the nesting is not a valid declaration tree.
    pub fn into_unit(self) -> Result<SourceUnit, SnapshotError> {
        let mut tree = DeclarationTree::new();
        for root in self.roots {
            let id = tree.add_root(root.to_node());
            insert_children(&mut tree, id, root.children)?;
        }
        Ok(SourceUnit::new(self.path, tree))
    }
}

impl NodeSnapshot {
    fn to_node(&self) -> DeclarationNode {
        let mut node = DeclarationNode::new(self.kind.into(), self.name.clone())
            .with_modifiers(self.modifiers.iter().copied())
            .with_opt_in(self.opt_in);
        if let Some(value) = &self.constant_value {
            node = node.with_constant_value(ConstantValue::new(value.clone()));
        }
        if let Some(line) = self.line {
            node = node.with_position(SourcePosition::new(line, self.column.unwrap_or(1)));
        }
        node
    }
}

fn insert_children(
    tree: &mut DeclarationTree,
    parent: NodeId,
    children: Vec<NodeSnapshot>,
) -> Result<(), SnapshotError> {
    if children.is_empty() {
        return Ok(());
    }

    let parent_node = tree.node(parent);
    if matches!(
        parent_node.kind,
        NodeKind::Variable(_) | NodeKind::TypeParameter
    ) {
        return Err(SnapshotError::UnexpectedChildren {
            parent: parent_node.kind.subject(),
            name: parent_node.name.clone(),
        });
    }

    for child in children {
        if child.kind == SnapshotKind::Package {
            return Err(SnapshotError::MisplacedPackage { name: child.name });
        }
        let id = tree.add_child(parent, child.to_node());
        insert_children(tree, id, child.children)?;
    }
    Ok(())
}

use serde::ser::{Serialize, SerializeTuple, Serializer};

/// How a navigation node fills the third slot of its serialized form.
///
/// The wire format overloads that slot: entry nodes carry an inheritance
/// suffix, group nodes carry their label. The distinction is kept explicit
/// here and collapsed only at serialization time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
	/// A class, module or file leaf: `[name, path, suffix, children]`.
	Entry {
		/// Inheritance suffix, e.g. `" < Base"`, or empty.
		suffix: String,
	},
	/// A grouping node (the files root or a directory segment):
	/// `["", "", label, children]`.
	Group {
		/// Display label of the group.
		label: String,
	},
}

/// One node of the navigation tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
	/// Display name; empty for group nodes.
	pub name: String,
	/// Output path of the node's own page; empty when the node is only a folder.
	pub path: String,
	/// Entry/group discriminant.
	pub kind: NodeKind,
	/// Child nodes, already ordered.
	pub children: Vec<TreeNode>,
}

impl TreeNode {
	/// Build an entry node for a class, module or file leaf.
	pub fn entry(
		name: impl Into<String>,
		path: impl Into<String>,
		suffix: impl Into<String>,
		children: Vec<TreeNode>,
	) -> Self {
		Self {
			name: name.into(),
			path: path.into(),
			kind: NodeKind::Entry {
				suffix: suffix.into(),
			},
			children,
		}
	}

	/// Build a grouping node holding a label and children.
	pub fn group(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
		Self {
			name: String::new(),
			path: String::new(),
			kind: NodeKind::Group {
				label: label.into(),
			},
			children,
		}
	}
}

impl Serialize for TreeNode {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		// The navigation panel consumes 4-element arrays, not objects.
		let mut tuple = serializer.serialize_tuple(4)?;
		match &self.kind {
			NodeKind::Entry { suffix } => {
				tuple.serialize_element(&self.name)?;
				tuple.serialize_element(&self.path)?;
				tuple.serialize_element(suffix)?;
			}
			NodeKind::Group { label } => {
				tuple.serialize_element("")?;
				tuple.serialize_element("")?;
				tuple.serialize_element(label)?;
			}
		}
		tuple.serialize_element(&self.children)?;
		tuple.end()
	}
}

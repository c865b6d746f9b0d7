use serde::{Deserialize, Serialize};

pub mod tree;

/// A single entry in the snippet tree: either a file with text content or a
/// folder with an ordered list of children.
///
/// Serialized form is a tagged object: `{"id", "name", "type": "file",
/// "content"}` or `{"id", "name", "type": "folder", "children": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileNode {
    File {
        id: String,
        name: String,
        #[serde(default)]
        content: String,
    },
    Folder {
        id: String,
        name: String,
        #[serde(default)]
        children: Vec<FileNode>,
    },
}

/// The complete ordered collection of top-level nodes. This is the single
/// unit of persistence.
pub type Forest = Vec<FileNode>;

impl FileNode {
    pub fn file(id: impl Into<String>, name: impl Into<String>) -> Self {
        FileNode::File {
            id: id.into(),
            name: name.into(),
            content: String::new(),
        }
    }

    pub fn folder(id: impl Into<String>, name: impl Into<String>) -> Self {
        FileNode::Folder {
            id: id.into(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            FileNode::File { id, .. } | FileNode::Folder { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FileNode::File { name, .. } | FileNode::Folder { name, .. } => name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, FileNode::Folder { .. })
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            FileNode::File { content, .. } => Some(content),
            FileNode::Folder { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&[FileNode]> {
        match self {
            FileNode::Folder { children, .. } => Some(children),
            FileNode::File { .. } => None,
        }
    }
}

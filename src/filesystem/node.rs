use chrono::{DateTime, Utc};
use std::fmt;

/// Identifier of a node in the inode table
pub type InodeId = u64;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Directory,
    File,
    Symlink,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Directory => "directory",
            NodeKind::File => "file",
            NodeKind::Symlink => "symlink",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Payload of a node. The variant decides the node kind.
#[derive(Clone, Debug)]
pub enum FileContent {
    /// Child inodes in child-list order, newest first
    Directory(Vec<InodeId>),
    RegularFile(Vec<u8>),
    /// Target path, stored verbatim
    SymbolicLink(String),
}

/// Informational attributes. Permissions and owner are never enforced.
#[derive(Clone, Debug)]
pub struct Metadata {
    pub owner: String,
    pub permissions: u32,
    pub size: u64,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Owner and mode given to newly created nodes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDefaults {
    pub owner: String,
    pub permissions: u32,
}

impl Default for NodeDefaults {
    fn default() -> Self {
        Self {
            owner: "root".to_string(),
            permissions: 0o755,
        }
    }
}

impl Metadata {
    fn fresh(defaults: &NodeDefaults, size: u64) -> Self {
        let now = Utc::now();
        Self {
            owner: defaults.owner.clone(),
            permissions: defaults.permissions,
            size,
            created: now,
            modified: now,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) name: String,
    /// Non-owning back-reference, `None` only for the root
    pub(crate) parent: Option<InodeId>,
    pub(crate) meta: Metadata,
    pub(crate) content: FileContent,
}

impl Node {
    pub(crate) fn directory(name: &str, parent: Option<InodeId>, defaults: &NodeDefaults) -> Self {
        Self {
            name: name.to_string(),
            parent,
            meta: Metadata::fresh(defaults, 0),
            content: FileContent::Directory(Vec::new()),
        }
    }

    pub(crate) fn file(name: &str, parent: InodeId, data: Vec<u8>, defaults: &NodeDefaults) -> Self {
        Self {
            name: name.to_string(),
            parent: Some(parent),
            meta: Metadata::fresh(defaults, data.len() as u64),
            content: FileContent::RegularFile(data),
        }
    }

    pub(crate) fn symlink(name: &str, parent: InodeId, target: &str, defaults: &NodeDefaults) -> Self {
        Self {
            name: name.to_string(),
            parent: Some(parent),
            meta: Metadata::fresh(defaults, 0),
            content: FileContent::SymbolicLink(target.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<InodeId> {
        self.parent
    }

    pub fn metadata(&self) -> &Metadata {
        &self.meta
    }

    pub fn content(&self) -> &FileContent {
        &self.content
    }

    pub fn kind(&self) -> NodeKind {
        match self.content {
            FileContent::Directory(_) => NodeKind::Directory,
            FileContent::RegularFile(_) => NodeKind::File,
            FileContent::SymbolicLink(_) => NodeKind::Symlink,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.content, FileContent::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self.content, FileContent::RegularFile(_))
    }

    /// Children in child-list order; empty for anything but a directory
    pub fn children(&self) -> &[InodeId] {
        match &self.content {
            FileContent::Directory(children) => children,
            _ => &[],
        }
    }

    pub fn data(&self) -> Option<&[u8]> {
        match &self.content {
            FileContent::RegularFile(data) => Some(data),
            _ => None,
        }
    }

    pub fn link_target(&self) -> Option<&str> {
        match &self.content {
            FileContent::SymbolicLink(target) => Some(target),
            _ => None,
        }
    }

    /// Replace file content, keeping `size` in step. Returns false for non-files.
    pub(crate) fn replace_data(&mut self, data: Vec<u8>) -> bool {
        match &mut self.content {
            FileContent::RegularFile(existing) => {
                self.meta.size = data.len() as u64;
                *existing = data;
                self.touch_modified();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn touch_modified(&mut self) {
        self.meta.modified = Utc::now();
    }
}

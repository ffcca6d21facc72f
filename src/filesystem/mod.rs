/*!
This module implements the in-memory tree engine: a single rooted tree of directories, files
and symbolic links held in an inode table, plus the operations that read and mutate it.

# Layout
- `node`: the `Node` entry, its `FileContent` payload and informational `Metadata`.
- `resolve`: path tokenizing and resolution from the root or the current directory.
- `mutate`: mkdir, touch, write, rm, rmdir, rename, mv, cp, createSymlink, chmod, chown.
- `search`: breadth-first name and content search from the current directory.
- `codec`: the lossy whole-tree content dump (`save`) and single-node restore (`load`).
- `archive`: seeding the tree from a `.tar.gz` image.

# Structure
Every node lives in `FileSystem::inodes`, keyed by an `InodeId`. A directory owns the ordered
list of its children's ids (index 0 is the most recently inserted); every node keeps a
non-owning `parent` id. Removing a directory releases every inode in its subtree.

Names are only partially unique among siblings: `mkdir` refuses an existing directory of the
same name and `touch` an existing file, but a file and a directory may share a name. Lookups
take the first match in child-list order, i.e. the newest entry.

## Usage Example:
```rust
use memfs::FileSystem;

let mut fs = FileSystem::default();
fs.mkdir("/docs").unwrap();
fs.touch("/docs/a.txt", "hello").unwrap();
fs.cd("/docs").unwrap();
assert_eq!(fs.pwd(), "/docs");
assert_eq!(fs.grep("hello"), vec!["a.txt".to_string()]);
```
*/
mod archive;
mod codec;
mod mutate;
mod node;
mod resolve;
mod search;

pub use archive::ImportSummary;
pub use node::{FileContent, InodeId, Metadata, Node, NodeDefaults, NodeKind};
pub use resolve::MAX_PATH_LEN;
pub use search::SearchHit;

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::error::{FsError, Result};

/// Name given to the root directory
pub const ROOT_NAME: &str = "/";

/// One row of a directory listing
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryView {
    pub name: String,
    pub kind: NodeKind,
}

/// Everything `stat` reports about a node
#[derive(Clone, Debug)]
pub struct NodeStat {
    pub name: String,
    pub kind: NodeKind,
    pub owner: String,
    pub permissions: u32,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    /// Present for files only
    pub size: Option<u64>,
    /// Present for symlinks only
    pub link_target: Option<String>,
}

#[derive(Debug)]
pub struct FileSystem {
    /// Inode number of the root directory
    root_inode: InodeId,

    /// Current directory, the anchor for relative paths and searches
    cwd: InodeId,

    /// Inode table: maps inode numbers to nodes
    inodes: HashMap<InodeId, Node>,

    /// Next available inode number
    next_inode: InodeId,

    /// Owner and mode for new nodes
    defaults: NodeDefaults,
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::with_defaults(NodeDefaults::default())
    }
}

impl FileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: NodeDefaults) -> Self {
        let root_inode = 1; // Root inode is always 1
        let mut inodes = HashMap::with_capacity(64);
        inodes.insert(root_inode, Node::directory(ROOT_NAME, None, &defaults));

        FileSystem {
            root_inode,
            cwd: root_inode,
            inodes,
            next_inode: 2,
            defaults,
        }
    }

    fn allocate_inode(&mut self) -> InodeId {
        let inode = self.next_inode;
        self.next_inode += 1;
        inode
    }

    pub(crate) fn node(&self, inode: InodeId) -> Result<&Node> {
        self.inodes.get(&inode).ok_or(FsError::MissingInode(inode))
    }

    pub(crate) fn node_mut(&mut self, inode: InodeId) -> Result<&mut Node> {
        self.inodes.get_mut(&inode).ok_or(FsError::MissingInode(inode))
    }

    pub fn get(&self, inode: InodeId) -> Option<&Node> {
        self.inodes.get(&inode)
    }

    pub fn root(&self) -> InodeId {
        self.root_inode
    }

    pub fn current_dir(&self) -> InodeId {
        self.cwd
    }

    pub fn defaults(&self) -> &NodeDefaults {
        &self.defaults
    }

    /// Number of live nodes, root included
    pub fn node_count(&self) -> usize {
        self.inodes.len()
    }

    /// Absolute path of a node, rebuilt by walking parent references
    pub fn path_of(&self, inode: InodeId) -> String {
        let mut segments = Vec::new();
        let mut current = self.inodes.get(&inode);
        while let Some(node) = current {
            let Some(parent) = node.parent else { break };
            segments.push(node.name.as_str());
            current = self.inodes.get(&parent);
        }

        if segments.is_empty() {
            return "/".to_string();
        }
        segments.reverse();
        format!("/{}", segments.join("/"))
    }

    pub fn pwd(&self) -> String {
        self.path_of(self.cwd)
    }

    /// Change the current directory. Fails unless `path` resolves to a directory.
    pub fn cd(&mut self, path: &str) -> Result<()> {
        let target = self.resolve(path)?;
        if !self.node(target)?.is_directory() {
            return Err(FsError::NotADirectory(path.to_string()));
        }
        log::trace!("cd {} -> inode {}", path, target);
        self.cwd = target;
        Ok(())
    }

    /// Immediate children of the current directory, in child-list order
    pub fn ls(&self) -> Result<Vec<EntryView>> {
        self.list_directory(self.cwd)
    }

    pub fn list_directory(&self, dir: InodeId) -> Result<Vec<EntryView>> {
        let node = self.node(dir)?;
        if !node.is_directory() {
            return Err(FsError::NotADirectory(self.path_of(dir)));
        }

        node.children()
            .iter()
            .map(|&child| {
                let child = self.node(child)?;
                Ok(EntryView {
                    name: child.name.clone(),
                    kind: child.kind(),
                })
            })
            .collect()
    }

    /// Content of the file at `path`
    pub fn cat(&self, path: &str) -> Result<&[u8]> {
        let target = self.resolve(path)?;
        self.node(target)?
            .data()
            .ok_or_else(|| FsError::NotAFile(path.to_string()))
    }

    pub fn stat(&self, path: &str) -> Result<NodeStat> {
        let target = self.resolve(path)?;
        let node = self.node(target)?;
        let kind = node.kind();

        Ok(NodeStat {
            name: node.name.clone(),
            kind,
            owner: node.meta.owner.clone(),
            permissions: node.meta.permissions,
            created: node.meta.created,
            modified: node.meta.modified,
            size: (kind == NodeKind::File).then_some(node.meta.size),
            link_target: node.link_target().map(str::to_string),
        })
    }
}

//! Error types for tree engine operations.

use thiserror::Error;

use crate::filesystem::{InodeId, NodeKind};

/// Every way an engine operation can fail.
///
/// A failed operation never leaves the tree partially modified, so all of
/// these are recoverable: the caller may retry with corrected input.
#[derive(Error, Debug)]
pub enum FsError {
    #[error("Path length exceeds maximum allowed length of {max} characters")]
    PathTooLong { len: usize, max: usize },

    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Not a file: {0}")]
    NotAFile(String),

    /// `kind` is the kind the collision check was restricted to; `None` means
    /// any sibling with the same name conflicts.
    #[error("{} '{name}' already exists", existing_label(.kind))]
    AlreadyExists { name: String, kind: Option<NodeKind> },

    #[error("Cannot modify the root directory")]
    CannotModifyRoot,

    #[error("The source stream is empty")]
    EmptySourceStream,

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Invalid name: '{0}'")]
    InvalidName(String),

    #[error("Source and destination are the same: {0}")]
    SameSourceAndDestination(String),

    #[error("Cannot move '{path}' into its own subtree '{destination}'")]
    CircularMove { path: String, destination: String },

    #[error("Inode {0} is not allocated")]
    MissingInode(InodeId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn existing_label(kind: &Option<NodeKind>) -> &'static str {
    match kind {
        Some(NodeKind::Directory) => "Directory",
        Some(NodeKind::File) => "File",
        Some(NodeKind::Symlink) => "Symlink",
        None => "An entry named",
    }
}

pub type Result<T> = std::result::Result<T, FsError>;

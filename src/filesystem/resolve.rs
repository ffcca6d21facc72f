use super::{FileSystem, InodeId};
use crate::error::{FsError, Result};

/// Longest path string any operation accepts
pub const MAX_PATH_LEN: usize = 255;

pub(crate) fn check_path_len(path: &str) -> Result<()> {
    let len = path.chars().count();
    if len > MAX_PATH_LEN {
        return Err(FsError::PathTooLong { len, max: MAX_PATH_LEN });
    }
    Ok(())
}

/// Split a path into the path of its parent directory and its final segment.
///
/// Trailing slashes are ignored. A path without any `/` names an entry of the
/// current directory, which is what the empty parent path resolves to.
pub(crate) fn split_parent(path: &str) -> (&str, &str) {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some(("", name)) => ("/", name),
        Some((parent, name)) => (parent, name),
        None if path.starts_with('/') => ("/", ""),
        None => ("", trimmed),
    }
}

/// A name must be a single, non-empty segment that is not `.` or `..`
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains('/') {
        return Err(FsError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl FileSystem {
    /// Resolve `path` against the root (absolute) or the current directory (relative).
    pub fn resolve(&self, path: &str) -> Result<InodeId> {
        self.resolve_from(self.cwd, path)
    }

    /// Resolve `path` starting from `anchor` when it is relative.
    ///
    /// Tokens are matched against child names in child-list order and the first
    /// match wins whatever its kind. `..` at the root fails the whole lookup.
    /// Symlinks are never followed.
    pub fn resolve_from(&self, anchor: InodeId, path: &str) -> Result<InodeId> {
        check_path_len(path)?;

        if path == "/" {
            return Ok(self.root_inode);
        }

        let mut current = if path.starts_with('/') { self.root_inode } else { anchor };

        for token in path.split('/').filter(|segment| !segment.is_empty()) {
            current = match token {
                "." => current,
                ".." => self
                    .node(current)?
                    .parent
                    .ok_or_else(|| FsError::PathNotFound(path.to_string()))?,
                name => self.child_named(current, name).ok_or_else(|| {
                    log::trace!("Path component '{}' not found while resolving {}", name, path);
                    FsError::PathNotFound(path.to_string())
                })?,
            };
        }

        Ok(current)
    }

    /// First child of `dir` called `name`, in child-list order
    pub(crate) fn child_named(&self, dir: InodeId, name: &str) -> Option<InodeId> {
        self.inodes.get(&dir)?
            .children()
            .iter()
            .copied()
            .find(|child| self.inodes.get(child).is_some_and(|node| node.name == name))
    }

    /// True if `ancestor` is `node` itself or lies on its parent chain
    pub fn is_ancestor_or_self(&self, ancestor: InodeId, node: InodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.inodes.get(&id).and_then(|n| n.parent);
        }
        false
    }
}

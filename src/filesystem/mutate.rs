use std::collections::HashMap;

use super::node::{FileContent, InodeId, Node, NodeKind};
use super::resolve::{check_path_len, split_parent, validate_name};
use super::FileSystem;
use crate::error::{FsError, Result};

impl FileSystem {
    /// Resolve the parent part of `path` to a directory and return it with the final name.
    fn parent_dir_and_name<'p>(&self, path: &'p str) -> Result<(InodeId, &'p str)> {
        check_path_len(path)?;
        let (parent_path, name) = split_parent(path);
        let parent = self.resolve(parent_path)?;
        if !self.node(parent)?.is_directory() {
            return Err(FsError::NotADirectory(parent_path.to_string()));
        }
        validate_name(name)?;
        Ok((parent, name))
    }

    /// True if `dir` has a child called `name`, optionally restricted to one kind
    fn has_child(&self, dir: InodeId, name: &str, kind: Option<NodeKind>) -> Result<bool> {
        for &child in self.node(dir)?.children() {
            let child = self.node(child)?;
            if child.name == name && kind.is_none_or(|kind| child.kind() == kind) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn children_mut(&mut self, dir: InodeId) -> Result<&mut Vec<InodeId>> {
        if !self.node(dir)?.is_directory() {
            return Err(FsError::NotADirectory(self.path_of(dir)));
        }
        match &mut self.node_mut(dir)?.content {
            FileContent::Directory(children) => Ok(children),
            _ => Err(FsError::MissingInode(dir)),
        }
    }

    /// Insert `child` at the head of `parent`'s child list
    fn link_front(&mut self, parent: InodeId, child: InodeId) -> Result<()> {
        self.children_mut(parent)?.insert(0, child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Append `child` at the tail of `parent`'s child list
    fn link_back(&mut self, parent: InodeId, child: InodeId) -> Result<()> {
        self.children_mut(parent)?.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn unlink(&mut self, parent: InodeId, child: InodeId) -> Result<()> {
        let children = self.children_mut(parent)?;
        if let Some(index) = children.iter().position(|&c| c == child) {
            children.remove(index);
        }
        Ok(())
    }

    /// Drop `inode` and everything below it from the inode table
    fn release_subtree(&mut self, inode: InodeId) -> usize {
        let mut released = 0;
        let mut pending = vec![inode];
        while let Some(id) = pending.pop() {
            if let Some(node) = self.inodes.remove(&id) {
                pending.extend_from_slice(node.children());
                released += 1;
            }
        }
        released
    }

    pub fn mkdir(&mut self, path: &str) -> Result<InodeId> {
        let (parent, name) = self.parent_dir_and_name(path)?;

        if self.has_child(parent, name, Some(NodeKind::Directory))? {
            return Err(FsError::AlreadyExists { name: name.to_string(), kind: Some(NodeKind::Directory) });
        }

        let inode = self.allocate_inode();
        self.inodes.insert(inode, Node::directory(name, Some(parent), &self.defaults));
        self.link_front(parent, inode)?;

        log::debug!("Directory '{}' created at {}", name, path);
        Ok(inode)
    }

    pub fn touch(&mut self, path: &str, content: impl Into<Vec<u8>>) -> Result<InodeId> {
        let (parent, name) = self.parent_dir_and_name(path)?;

        if self.has_child(parent, name, Some(NodeKind::File))? {
            return Err(FsError::AlreadyExists { name: name.to_string(), kind: Some(NodeKind::File) });
        }

        let inode = self.allocate_inode();
        self.inodes.insert(inode, Node::file(name, parent, content.into(), &self.defaults));
        self.link_front(parent, inode)?;

        log::debug!("File '{}' created at {}", name, path);
        Ok(inode)
    }

    /// Replace the content of an existing file
    pub fn write(&mut self, path: &str, content: impl Into<Vec<u8>>) -> Result<()> {
        let target = self.resolve(path)?;
        if !self.node_mut(target)?.replace_data(content.into()) {
            return Err(FsError::NotAFile(path.to_string()));
        }
        log::debug!("Wrote {}", path);
        Ok(())
    }

    /// Remove a file or symlink. Directories go through `rmdir`.
    pub fn rm(&mut self, path: &str) -> Result<()> {
        check_path_len(path)?;
        let (parent_path, _) = split_parent(path);
        let parent = self.resolve(parent_path)?;
        if !self.node(parent)?.is_directory() {
            return Err(FsError::NotADirectory(parent_path.to_string()));
        }

        let target = self.resolve(path)?;
        let node = self.node(target)?;
        if node.is_directory() {
            return Err(FsError::NotAFile(path.to_string()));
        }
        let owner = node.parent.ok_or(FsError::CannotModifyRoot)?;

        self.unlink(owner, target)?;
        self.inodes.remove(&target);

        log::debug!("Removed {}", path);
        Ok(())
    }

    /// Remove a node and its entire subtree. Returns how many nodes were released.
    ///
    /// If the current directory was inside the removed subtree it moves to the
    /// removed node's parent.
    pub fn rmdir(&mut self, path: &str) -> Result<usize> {
        let target = self.resolve(path)?;
        let parent = self.node(target)?.parent.ok_or(FsError::CannotModifyRoot)?;

        if self.is_ancestor_or_self(target, self.cwd) {
            log::debug!("Current directory was inside {}, moving to its parent", path);
            self.cwd = parent;
        }

        self.unlink(parent, target)?;
        let released = self.release_subtree(target);

        log::debug!("Removed {} ({} nodes)", path, released);
        Ok(released)
    }

    /// Rename in place. The new name may not match any sibling, whatever its kind.
    pub fn rename(&mut self, old_path: &str, new_name: &str) -> Result<()> {
        let target = self.resolve(old_path)?;
        let parent = self.node(target)?.parent.ok_or(FsError::CannotModifyRoot)?;
        validate_name(new_name)?;

        if self.has_child(parent, new_name, None)? {
            return Err(FsError::AlreadyExists { name: new_name.to_string(), kind: None });
        }

        let node = self.node_mut(target)?;
        node.name = new_name.to_string();
        node.touch_modified();

        log::debug!("Renamed {} to {}", old_path, new_name);
        Ok(())
    }

    /// Work out where `mv` or `cp` should place `source`.
    ///
    /// An existing directory at `dest_path` receives the source under its own
    /// name; anything else is read as parent path plus new name.
    fn resolve_destination(&self, source: InodeId, dest_path: &str) -> Result<(InodeId, String)> {
        if let Ok(dest) = self.resolve(dest_path) {
            let dest_node = self.node(dest)?;
            if dest_node.is_directory() {
                return Ok((dest, self.node(source)?.name.clone()));
            }
        }

        let (parent, name) = self.parent_dir_and_name(dest_path)?;
        Ok((parent, name.to_string()))
    }

    pub fn mv(&mut self, source_path: &str, dest_path: &str) -> Result<InodeId> {
        check_path_len(dest_path)?;
        let source = self.resolve(source_path)?;

        if source_path == dest_path || self.resolve(dest_path).is_ok_and(|dest| dest == source) {
            return Err(FsError::SameSourceAndDestination(source_path.to_string()));
        }

        let old_parent = self.node(source)?.parent.ok_or(FsError::CannotModifyRoot)?;
        let (dest_parent, dest_name) = self.resolve_destination(source, dest_path)?;

        if self.is_ancestor_or_self(source, dest_parent) {
            return Err(FsError::CircularMove {
                path: source_path.to_string(),
                destination: dest_path.to_string(),
            });
        }

        if self.has_child(dest_parent, &dest_name, None)? {
            return Err(FsError::AlreadyExists { name: dest_name, kind: None });
        }

        self.unlink(old_parent, source)?;
        let node = self.node_mut(source)?;
        node.name = dest_name;
        node.touch_modified();
        self.link_front(dest_parent, source)?;

        log::debug!("Moved {} to {}", source_path, dest_path);
        Ok(source)
    }

    pub fn cp(&mut self, source_path: &str, dest_path: &str) -> Result<InodeId> {
        check_path_len(dest_path)?;
        let source = self.resolve(source_path)?;
        if source == self.root_inode {
            return Err(FsError::CannotModifyRoot);
        }
        let (dest_parent, dest_name) = self.resolve_destination(source, dest_path)?;

        if self.has_child(dest_parent, &dest_name, None)? {
            return Err(FsError::AlreadyExists { name: dest_name, kind: None });
        }

        let copy = self.deep_copy(source, dest_parent, &dest_name)?;
        log::debug!("Copied {} to {}", source_path, dest_path);
        Ok(copy)
    }

    /// Duplicate the subtree at `source` under `dest_parent`, naming its root `name`.
    ///
    /// The whole subtree is cloned before anything is linked, so copying a
    /// directory into itself copies only what existed beforehand.
    fn deep_copy(&mut self, source: InodeId, dest_parent: InodeId, name: &str) -> Result<InodeId> {
        let mut originals = Vec::new();
        let mut pending = vec![source];
        while let Some(id) = pending.pop() {
            let node = self.node(id)?;
            pending.extend_from_slice(node.children());
            originals.push((id, node.clone()));
        }

        let mut remap = HashMap::with_capacity(originals.len());
        for (old, _) in &originals {
            remap.insert(*old, self.allocate_inode());
        }
        let lookup = |old: InodeId| remap.get(&old).copied().ok_or(FsError::MissingInode(old));

        let mut copies = Vec::with_capacity(originals.len());
        for (old, mut node) in originals {
            if old == source {
                node.name = name.to_string();
                node.parent = Some(dest_parent);
            } else if let Some(parent) = node.parent {
                node.parent = Some(lookup(parent)?);
            }
            if let FileContent::Directory(children) = &mut node.content {
                for child in children.iter_mut() {
                    *child = lookup(*child)?;
                }
            }
            copies.push((lookup(old)?, node));
        }

        let copy_root = lookup(source)?;
        self.inodes.extend(copies);
        self.link_front(dest_parent, copy_root)?;
        Ok(copy_root)
    }

    /// Create a symlink named `link_name` in the current directory.
    ///
    /// The target must exist now; it is stored as the literal path string and
    /// never re-checked. The link goes at the tail of the child list.
    pub fn create_symlink(&mut self, target_path: &str, link_name: &str) -> Result<InodeId> {
        match self.resolve(target_path) {
            Ok(_) => {}
            Err(err @ FsError::PathTooLong { .. }) => return Err(err),
            Err(_) => return Err(FsError::InvalidTarget(target_path.to_string())),
        }

        let inode = self.insert_symlink(self.cwd, link_name, target_path)?;
        log::debug!("Symbolic link '{}' created, pointing to '{}'", link_name, target_path);
        Ok(inode)
    }

    pub(crate) fn insert_symlink(&mut self, dir: InodeId, name: &str, target: &str) -> Result<InodeId> {
        validate_name(name)?;
        if self.has_child(dir, name, None)? {
            return Err(FsError::AlreadyExists { name: name.to_string(), kind: None });
        }

        let inode = self.allocate_inode();
        self.inodes.insert(inode, Node::symlink(name, dir, target, &self.defaults));
        self.link_back(dir, inode)?;
        Ok(inode)
    }

    pub fn chmod(&mut self, path: &str, mode: u32) -> Result<()> {
        let target = self.resolve(path)?;
        let node = self.node_mut(target)?;
        node.meta.permissions = mode;
        node.touch_modified();
        log::debug!("Permissions for {} set to {:o}", path, mode);
        Ok(())
    }

    pub fn chown(&mut self, path: &str, owner: &str) -> Result<()> {
        let target = self.resolve(path)?;
        let node = self.node_mut(target)?;
        node.meta.owner = owner.to_string();
        node.touch_modified();
        log::debug!("Owner of {} set to {}", path, owner);
        Ok(())
    }
}

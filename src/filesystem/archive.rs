use chrono::DateTime;
use flate2::read::GzDecoder;
use std::io::Read;
use tar::{Archive, EntryType};

use super::node::InodeId;
use super::resolve::split_parent;
use super::FileSystem;
use crate::error::{FsError, Result};

/// What `import_archive` created and what it had to leave out
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub directories: usize,
    pub files: usize,
    pub symlinks: usize,
    pub skipped: usize,
}

/// Header fields copied onto imported nodes
struct EntryAttributes {
    mode: Option<u32>,
    owner: Option<String>,
    mtime: Option<u64>,
}

/// Turn an archive member path such as `./etc/passwd` into `/etc/passwd`
fn archive_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim_start_matches("./").trim_start_matches('/').trim_end_matches('/');
    if trimmed.is_empty() || trimmed == "." {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

impl FileSystem {
    /// Populate the tree from a gzip-compressed tar image.
    ///
    /// Entries are applied in archive order, relative to the root. Directories
    /// that already exist are kept. Files that collide, members whose parent is
    /// missing, symlinks whose target does not resolve from the link's directory,
    /// and unsupported entry types are skipped with a warning.
    pub fn import_archive<R: Read>(&mut self, reader: R) -> Result<ImportSummary> {
        let mut archive = Archive::new(GzDecoder::new(reader));
        let mut summary = ImportSummary::default();

        for entry in archive.entries()? {
            let mut entry = entry?;
            let raw_path = entry.path()?.to_string_lossy().to_string();
            let header = entry.header();
            let entry_type = header.entry_type();
            log::trace!("Processing entry: {} Type: {:?} Size: {}", raw_path, entry_type, header.size().unwrap_or(0));

            let Some(path) = archive_path(&raw_path) else {
                continue;
            };

            let attributes = EntryAttributes {
                mode: header.mode().ok(),
                owner: header.username().ok().flatten().map(str::to_string),
                mtime: header.mtime().ok(),
            };

            let outcome = match entry_type {
                EntryType::Directory => self.import_directory(&path, &attributes).map(|created| {
                    if created {
                        summary.directories += 1;
                    }
                }),
                EntryType::Regular | EntryType::Continuous => {
                    let mut content = Vec::new();
                    entry.read_to_end(&mut content)?;
                    self.import_file(&path, content, &attributes).map(|_| summary.files += 1)
                }
                EntryType::Symlink => match entry.link_name()? {
                    Some(target) => {
                        let target = target.to_string_lossy().to_string();
                        self.import_symlink(&path, &target, &attributes).map(|_| summary.symlinks += 1)
                    }
                    None => Err(FsError::InvalidTarget(path.clone())),
                },
                other => {
                    log::warn!("Skipping unsupported entry type {:?}: {}", other, path);
                    summary.skipped += 1;
                    Ok(())
                }
            };

            if let Err(err) = outcome {
                log::warn!("Failed to import {}: {}", path, err);
                summary.skipped += 1;
            }
        }

        log::debug!("Archive import finished: {:?}", summary);
        Ok(summary)
    }

    /// Returns false when the directory was already there
    fn import_directory(&mut self, path: &str, attributes: &EntryAttributes) -> Result<bool> {
        match self.mkdir(path) {
            Ok(inode) => {
                self.apply_attributes(inode, attributes)?;
                Ok(true)
            }
            Err(FsError::AlreadyExists { .. }) => {
                log::trace!("Directory already exists: {}", path);
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    fn import_file(&mut self, path: &str, content: Vec<u8>, attributes: &EntryAttributes) -> Result<()> {
        let inode = self.touch(path, content)?;
        self.apply_attributes(inode, attributes)
    }

    fn import_symlink(&mut self, path: &str, target: &str, attributes: &EntryAttributes) -> Result<()> {
        let (parent_path, name) = split_parent(path);
        let parent = self.resolve_from(self.root_inode, parent_path)?;
        self.resolve_from(parent, target)
            .map_err(|_| FsError::InvalidTarget(target.to_string()))?;

        let inode = self.insert_symlink(parent, name, target)?;
        self.apply_attributes(inode, attributes)
    }

    fn apply_attributes(&mut self, inode: InodeId, attributes: &EntryAttributes) -> Result<()> {
        let default_owner = self.defaults.owner.clone();
        let node = self.node_mut(inode)?;
        if let Some(mode) = attributes.mode {
            node.meta.permissions = mode & 0o7777;
        }
        node.meta.owner = attributes.owner.clone().unwrap_or(default_owner);
        if let Some(modified) = attributes
            .mtime
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
        {
            node.meta.modified = modified;
        }
        Ok(())
    }
}

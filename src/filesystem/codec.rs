//! Flatten and restore.
//!
//! The two halves are not inverses of each other:
//!
//! - [`FileSystem::save`] walks the **whole tree** and writes every file's content followed by a
//!   newline. Names, directories, symlinks and metadata are not written, so the output cannot
//!   rebuild the tree.
//! - [`FileSystem::load`] overwrites **one file node** with the entire content of a stream.
//!
//! Do not expect `load(save(tree))` to reproduce anything but a single file holding the
//! concatenated dump.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use super::node::{FileContent, InodeId};
use super::FileSystem;
use crate::error::{FsError, Result};

impl FileSystem {
    /// Write the content of every file, depth-first from the root in child-list order,
    /// each followed by `\n`.
    pub fn save<W: Write>(&self, out: &mut W) -> Result<()> {
        self.save_node(self.root_inode, out)
    }

    fn save_node<W: Write>(&self, inode: InodeId, out: &mut W) -> Result<()> {
        match &self.node(inode)?.content {
            FileContent::RegularFile(data) => {
                out.write_all(data)?;
                out.write_all(b"\n")?;
            }
            FileContent::Directory(children) => {
                for &child in children {
                    self.save_node(child, out)?;
                }
            }
            FileContent::SymbolicLink(_) => {}
        }
        Ok(())
    }

    /// `save` into a host file, created or truncated. The file is closed before returning.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.save(&mut out)?;
        out.flush()?;
        log::debug!("File system content saved to {}", path.display());
        Ok(())
    }

    /// The file node `load` would write into
    fn load_target(&self, target_path: &str) -> Result<InodeId> {
        let target = self
            .resolve(target_path)
            .map_err(|_| FsError::InvalidTarget(target_path.to_string()))?;
        if !self.node(target)?.is_file() {
            return Err(FsError::InvalidTarget(target_path.to_string()));
        }
        Ok(target)
    }

    /// Replace the content of the file at `target_path` with everything `input` yields.
    ///
    /// The target must be an existing file and the stream must not be empty.
    /// Returns the number of bytes loaded.
    pub fn load<R: Read>(&mut self, input: &mut R, target_path: &str) -> Result<usize> {
        let target = self.load_target(target_path)?;

        let mut content = Vec::new();
        input.read_to_end(&mut content)?;
        if content.is_empty() {
            return Err(FsError::EmptySourceStream);
        }

        let loaded = content.len();
        self.node_mut(target)?.replace_data(content);
        log::debug!("Loaded {} bytes into {}", loaded, target_path);
        Ok(loaded)
    }

    /// `load` from a host file. The target is checked before the file is opened.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>, target_path: &str) -> Result<usize> {
        self.load_target(target_path)?;
        let mut input = File::open(path.as_ref())?;
        self.load(&mut input, target_path)
    }
}

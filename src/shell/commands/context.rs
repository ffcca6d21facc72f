use crate::filesystem::FileSystem;

/// State shared by every command of one shell session
pub struct CommandContext {
    /// The tree the session operates on. Holds the current directory too.
    pub filesystem: FileSystem,
}

impl CommandContext {
    pub fn new(filesystem: FileSystem) -> Self {
        Self { filesystem }
    }

    pub fn into_filesystem(self) -> FileSystem {
        self.filesystem
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new(FileSystem::default())
    }
}

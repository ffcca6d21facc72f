pub mod config;
pub mod error;
pub mod filesystem;
pub mod paths;
pub mod shell;

pub use error::{FsError, Result};
pub use filesystem::FileSystem;

pub mod command_trait;
pub mod context;
pub mod registry;
pub mod dispatcher;
pub mod file_commands;
pub mod metadata_commands;
pub mod navigation_commands;
pub mod persistence_commands;
pub mod search_commands;
pub mod tree_commands;

pub use command_trait::{Command, CommandResult, CommandError};
pub use context::CommandContext;
pub use registry::CommandRegistry;
pub use dispatcher::CommandDispatcher;
pub use file_commands::{CatCommand, RmCommand, TouchCommand, WriteCommand};
pub use metadata_commands::{ChmodCommand, ChownCommand, StatCommand};
pub use navigation_commands::{CdCommand, LsCommand, PwdCommand};
pub use persistence_commands::{LoadCommand, SaveCommand};
pub use search_commands::{FindCommand, GrepCommand};
pub use tree_commands::{CpCommand, CreateSymlinkCommand, MkdirCommand, MvCommand, RenameCommand, RmdirCommand};

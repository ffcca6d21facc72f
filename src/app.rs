use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(version, about = "An in-memory filesystem shell", long_about = "An in-memory filesystem shell. Directories, files and symbolic links live only in memory for the lifetime of the process; the tree can be seeded from a .tar.gz image and file contents can be dumped to or loaded from host files")]
pub struct App {
    /// Configuration file, defaults to config.toml in the XDG config directory
    #[arg(short = 'c', long = "config", env = "MEMFS_CONFIG")]
    pub config: Option<PathBuf>,

    /// .tar.gz image to populate the tree with before the first command
    #[arg(short = 's', long = "seed", env = "MEMFS_SEED")]
    pub seed: Option<PathBuf>,

    /// Run the commands in this file instead of reading standard input
    #[arg(long = "script")]
    pub script: Option<PathBuf>,

    /// Prompt shown before each interactive command
    #[arg(short = 'p', long = "prompt", env = "MEMFS_PROMPT")]
    pub prompt: Option<String>,

    /// Increase log verbosity, repeatable
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl App {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

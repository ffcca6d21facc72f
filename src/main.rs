mod app;

use app::App;

use clap::Parser;
use memfs::config::Config;
use memfs::paths::PathManager;
use memfs::shell::Shell;
use memfs::FileSystem;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = App::parse();

    env_logger::builder()
        .filter_level(app.log_level())
        .parse_env(env_logger::Env::default())
        .init();

    let paths = PathManager::new();
    paths.log_paths();

    let config_path = app.config.clone().unwrap_or_else(|| paths.config_file());
    let config = Config::load(&config_path)?;

    let mut filesystem = FileSystem::with_defaults(config.node_defaults());

    let seed = app.seed.clone().or_else(|| config.seed_archive.as_deref().map(|name| paths.seed_file(name)));
    if let Some(seed) = seed {
        log::info!("Seeding file system from {}", seed.display());
        let summary = filesystem.import_archive(BufReader::new(File::open(&seed)?))?;
        log::info!(
            "Imported {} directories, {} files, {} symlinks ({} skipped)",
            summary.directories, summary.files, summary.symlinks, summary.skipped
        );
    }

    let prompt = app.prompt.clone().unwrap_or(config.prompt);
    let mut shell = Shell::new(filesystem, prompt);
    let mut stdout = io::stdout().lock();

    match &app.script {
        Some(script) => {
            log::info!("Running commands from {}", script.display());
            shell.run(BufReader::new(File::open(script)?), &mut stdout, false)?;
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            shell.run(stdin.lock(), &mut stdout, interactive)?;
        }
    }

    Ok(())
}

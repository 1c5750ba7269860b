use std::io;

use env_logger::Builder;
use floor13::{ContentPack, FileStore, Game, InputJournal, SeededDice};
use floor13_app::app_loop::run_session;
use floor13_app::config::AppConfig;
use floor13_app::seed::{generate_runtime_seed, resolve_seed};
use floor13_app::{format_snapshot_hash, journal_file};
use log::{info, warn};

fn main() {
    let default_path = AppConfig::get_default_path();
    let (config, config_error) = AppConfig::load_or_default(default_path.as_deref());
    Builder::new().filter_level(config.level_filter()).init();
    if let Some(err) = config_error {
        warn!("using default settings: {err}");
    }

    let seed = resolve_seed(config.seed, generate_runtime_seed());
    let save_path = config.resolve_save_path();
    info!("{seed:?}, save file {}", save_path.display());

    let mut game = Game::start(
        ContentPack::default(),
        Box::new(FileStore::new(save_path)),
        Box::new(SeededDice::new(seed.value())),
    );
    let mut journal = InputJournal::new(seed.value());

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_session(&mut game, &mut journal, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(exit) => {
            info!("{exit:?}, snapshot {}", format_snapshot_hash(game.snapshot_hash()));
        }
        Err(err) => warn!("terminal I/O failed: {err}"),
    }

    if let Some(path) = &config.journal_path {
        if game.is_restored() {
            warn!("journal of a resumed session only replays from a fresh start");
        }
        if let Err(err) = journal_file::write_atomic(&journal, path) {
            warn!("failed to write journal {}: {err}", path.display());
        }
    }
}

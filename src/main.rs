//! Dirstore main program entry

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

use clap::Parser;
use dirstore::config::Config;
use dirstore::logger::initialize_logger;
use dirstore::menu::Menu;
use dirstore::store::{RecordStore, timed};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::parse();
    initialize_logger(config.log_level);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (store, elapsed) = timed(|| RecordStore::random(&mut rng, config.records));
    info!("generated and sorted {} records in {:?}", store.len(), elapsed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = Menu::new(&store, config.format, stdin.lock(), stdout.lock()).run();

    let released = store.destroy();
    info!("released {} records", released);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("menu stopped: {}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

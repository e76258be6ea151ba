use crate::profile::Profile;
use crate::seed::SeedContext;
use colored::*;
use common::config::Config;
use common::logger;
use std::process::ExitCode;

mod profile;
mod seed;
mod seeds;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::init(".env") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "configuration error:".red());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::init_logger(&config.log_level, config.log_file.as_deref()) {
        eprintln!("{} {e}", "failed to initialise logger:".red());
        return ExitCode::FAILURE;
    }

    let profile = match Profile::from_locale_name(&config.generation.locale) {
        Ok(profile) => profile,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let url = match config.database.url() {
        Ok(url) => url,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let db = match db::connect(&url).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("failed to connect to {}: {e}", config.database.redacted_url());
            return ExitCode::FAILURE;
        }
    };

    log::info!("generating data with locale {}", profile.locale);
    let mut ctx = SeedContext::new(db, profile, config.generation.rng_seed);
    let result = seeds::seed_all(&mut ctx, &config.generation).await;
    db::disconnect(ctx.into_db()).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("seeding aborted: {e}");
            ExitCode::FAILURE
        }
    }
}

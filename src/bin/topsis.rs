use std::process::ExitCode;

use topsis_rank::config::Config;

fn main() -> ExitCode {
    let config = match Config::from_args_and_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_level.as_str()))
        .init();

    if let Some(path) = &config.settings_source {
        log::debug!("settings loaded from {}", path.display());
    }

    match topsis_rank::run(&config) {
        Ok(summary) => {
            if let Some(best) = summary.best {
                log::info!("rank 1: {}", best);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

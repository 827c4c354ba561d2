// Scheduled entry point: run once per cron tick, print the JSON outcome, exit non-zero on failure.

use {
    setup_grader::relay::{RelayEnv, RelayOutcome, run_reminder_relay},
    std::process::ExitCode,
};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let result = match RelayEnv::from_env() {
        Ok(env) => run_reminder_relay(&env).await,
        Err(e) => Err(e),
    };

    let (outcome, code) = match result {
        Ok(sent) => {
            log::info!("Reminder relay finished: {} sent", sent);
            (RelayOutcome::sent(sent), ExitCode::SUCCESS)
        }
        Err(e) => {
            log::error!("Reminder relay failed: {:#}", e);
            (RelayOutcome::failed(&e), ExitCode::FAILURE)
        }
    };

    match serde_json::to_string(&outcome) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not encode outcome: {}", e),
    }
    code
}

use harness_relay::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Pick the UI language before anything prints.
    let locale = harness_relay::init();

    match cli::run(&locale).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

use std::io;
use std::process;

use dotenv::dotenv;
use string_index_quiz::quiz::error::QuizError;
use string_index_quiz::quiz::runner::QuizRunner;
use string_index_quiz::quiz::QuizConfig;

fn main() {
    // .env is optional; it only carries RUST_LOG for the logger.
    dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting string indexing quiz...");

    let config = QuizConfig::default();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let result = QuizRunner::new(&config, stdin.lock(), stdout.lock(), rand::thread_rng())
        .and_then(|runner| runner.run());

    match result {
        Ok(outcome) => {
            log::info!("Scored {} of {}", outcome.score, outcome.total);
        }
        Err(QuizError::EndOfInput) => {
            log::warn!("stdin closed mid-quiz");
            eprintln!("\nInput closed; the quiz ended without a score.");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

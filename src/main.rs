// src/main.rs

use hookrun::{cli, logging, run_cli};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("hookrun error: {err}");
            std::process::exit(1);
        }
    }
}

async fn run_main() -> hookrun::errors::Result<i32> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run_cli(args).await
}

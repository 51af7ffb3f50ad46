use std::io;
use std::process::ExitCode;

use clap::Parser;

use g25_average::app::{self, Args};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let stdin = io::stdin();

    match app::run(&args, &mut stdin.lock(), &mut io::stdout().lock(), &mut io::stderr()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("run failed: {err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::from(app::exit_status(&err))
        }
    }
}

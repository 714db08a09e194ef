use std::io;
use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;

use extremum_cli::{CliError, Prompt, Result, Session, logging};

fn run() -> Result<()> {
    let rng = StdRng::try_from_os_rng().map_err(|err| {
        CliError::Search(extremum_solvers::Error::Entropy {
            reason: err.to_string(),
        })
    })?;

    let stdin = io::stdin();
    let prompt = Prompt::new(stdin.lock(), io::stdout());
    Session::new(prompt, rng).run()
}

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

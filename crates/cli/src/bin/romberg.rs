use std::process::ExitCode;

use extremum_cli::{Result, logging};
use extremum_quadrature::romberg;

const ROWS: usize = 3;

fn integrand(x: f64) -> f64 {
    x.powi(4) + 1.0 / x
}

fn run() -> Result<()> {
    let table = romberg(integrand, 1.0, 5.0, ROWS)?;

    for row in table.rows() {
        println!("{row:?}");
    }
    println!("estimate: {}", table.estimate());
    println!("order of accuracy: {}", table.order_of_accuracy(0)?);

    Ok(())
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

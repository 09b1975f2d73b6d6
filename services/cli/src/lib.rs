mod cli;
mod demo;
mod infra;

use rental_registry::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

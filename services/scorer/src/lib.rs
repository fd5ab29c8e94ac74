mod cli;
mod commands;
mod infra;

use amana_scoring::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}

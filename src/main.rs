mod cli;
mod hist;
mod loader;
mod model;
mod scale;
mod stats;
mod text_summary;
#[cfg(feature = "tui")]
mod tui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    match cli::run(args) {
        Err(e) => {
            if let Some(loader::LoadError::NotFound { path }) = e.downcast_ref::<loader::LoadError>()
            {
                // A missing input is a user-facing notice with a clean exit,
                // not a crash. The second file is never opened once the first
                // one is found missing.
                println!("Error: No se encontró el archivo {}.", path.display());
                return Ok(());
            }
            Err(e)
        }
        ok => ok,
    }
}

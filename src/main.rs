use log::{error, info};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use tandoor_import::{ImportConfig, ImportError, ImportResult, RecipeImporter};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_not_found() => {
            error!("{}", e);
            eprintln!("Nothing to import: {}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ImportError> {
    // tandoor-import [--payload] [FILE]; reads stdin without FILE
    let args: Vec<String> = env::args().skip(1).collect();
    let payload = args.iter().any(|arg| arg == "--payload");
    let path = args.iter().find(|arg| !arg.starts_with("--"));

    let text = match path {
        Some(path) => {
            info!("Reading AI response from {}", path);
            fs::read_to_string(path)?
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let mut builder = RecipeImporter::builder()
        .config(ImportConfig::load()?)
        .text(text);
    if payload {
        builder = builder.payload();
    }

    let output = match builder.build()? {
        ImportResult::Recipe(recipe) => serde_json::to_string_pretty(&recipe)?,
        ImportResult::Payload(payload) => serde_json::to_string_pretty(&payload)?,
    };
    println!("{}", output);

    Ok(())
}

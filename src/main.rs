mod args;
mod config;
mod demo;
mod reader;
mod writer;

use tba::{input::InputEvent, Bank, Result};

use std::path::PathBuf;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let mut wtr = writer::build_writer();

    match args::parse_input_arg()? {
        Some(input_path) => {
            log::debug!("Found filepath as input arg: {input_path:?}");
            run_script(input_path, &mut wtr)?;
        }
        None => {
            log::debug!("No input arg, running the built-in demo");
            demo::run(&mut wtr)?;
        }
    }

    let output = writer::write_to_string(wtr)?;

    log::debug!("Writing to stdout: {output:?}");
    print!("{}", output);

    log::debug!("Application finished successfully!");

    Ok(())
}

/// Read the operation script and apply each row to a fresh bank, skipping rows that fail
fn run_script(input_path: PathBuf, wtr: &mut Vec<u8>) -> Result {
    let mut bank = Bank::new();
    let mut rdr = reader::build_csv_reader(input_path)?;

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputEvent>() {
        log::debug!("Parsing record into InputEvent: {record:?}");
        let input_event = match record {
            Ok(input_event) => input_event,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        let operation = match input_event.parse_operation() {
            Ok(operation) => operation,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if let Err(e) = bank.apply(operation, wtr) {
            log::warn!("{e}");
        }
    }

    if bank.is_empty() {
        log::warn!("Script opened no accounts");
    }

    log::debug!("Script complete with {} accounts", bank.len());

    Ok(())
}

// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::warn;

use cadxref::report;
use cadxref::{CadReader, Db74, Db74Reader};

#[derive(Parser)]
#[command(name = "cadxref")]
#[command(about = "CAD netlist cross-reference and pin report tool", long_about = None)]
#[command(version)]
struct Cli {
    /// Component designator to report, e.g. U1
    designator: String,

    /// Restrict the report to this pin number
    pin: Option<u32>,

    /// CAD export to read
    #[arg(short = 'f', long = "file", default_value = "cad.temp", value_name = "PATH")]
    file: PathBuf,

    /// Pin-function lookup table (JSON)
    #[arg(long = "db", default_value = "74xxdb.json", value_name = "PATH")]
    db: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let design = CadReader::new().read(&cli.file)?;

    // The lookup table only annotates the report; keep going without it.
    let db = match Db74Reader::new().read(&cli.db) {
        Ok(db) => db,
        Err(err) => {
            warn!("pin-function table unavailable ({err}); reporting without pin functions");
            Db74::default()
        }
    };

    let Some(component) = design.component(&cli.designator) else {
        println!("Designator {} not found", cli.designator);
        process::exit(1);
    };

    println!("{}", report::header(component, cli.pin));
    println!();

    let output = match cli.pin {
        Some(pin) => report::render(
            &report::pin_rows(&design, component, pin, &db),
            pin,
            Some(pin),
        ),
        None => report::render(&report::component_rows(&design, component, &db), 1, None),
    };
    print!("{output}");
    Ok(())
}

//! # A 6502 opcode dispatch generator
//!
//! Reads one markdown document per instruction and generates two Rust source
//! files for the emulator: `instructions.rs` holding one body macro per
//! instruction, and `clock.rs` holding the `clock` routine whose `match`
//! routes each opcode byte to its addressing mode resolver, instruction body
//! and cycle budget.
//!
//! ## Getting Started
//! ```text
//! cargo run -- --docs documentations --out-dir generated
//! ```
//! Nothing is written unless every document builds cleanly; otherwise every
//! problem found is listed and the exit status is non-zero.
//!
//! ## Options
//! Help for command line options is available using -h or --help.
#[macro_use]
mod macros;
mod config;
mod emit;
mod error;
mod lexer;
mod loader;
mod model;
mod modes;
mod reference;
mod sections;
mod table;
mod writer;
use crate::emit::Generated;
use crate::loader::SpecLoader;
use std::path::Path;
use std::result::Result;
use std::{fmt, io};
pub(crate) use crate::error::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::init();
    // process_dir does all the work
    if let Err(e) = process_dir(&config::ARGS.docs, &config::ARGS.out_dir, config::write_outputs()) {
        println!("{}", e);
        if e.kind == ErrorKind::Build {
            let summary: Vec<String> = [
                (ErrorKind::Structural, "structural"),
                (ErrorKind::UnsupportedMode, "unsupported mode"),
                (ErrorKind::OpcodeConflict, "opcode conflict"),
                (ErrorKind::MalformedRow, "malformed row"),
            ]
            .iter()
            .map(|&(kind, name)| (e.count_kind(kind), name))
            .filter(|&(n, _)| n > 0)
            .map(|(n, name)| format!("{} {}", n, name))
            .collect();
            warn!("no files written ({})", summary.join(", "));
        }
        return Err(Box::new(e));
    }
    Ok(())
}
/// process_dir drives the top level functionality (load, build, render, write) of the app
fn process_dir(docs: &Path, out_dir: &Path, write: bool) -> Result<Generated, Error> {
    info!("Loading instruction documents from {}", docs.display());
    let loader = SpecLoader::open(docs)?;
    verbose_println!("enabled addressing modes: {}", modes::enabled_codes().collect::<Vec<_>>().join(" "));
    let sources = loader.load_all()?;
    // nothing below may write until the whole model has been validated
    let model = model::build(&sources, &reference::NMOS_6502)?;
    info!(
        "Built {} instruction(s) and {} opcode entries",
        model.specs.len(),
        model.table.len()
    );
    if config::ARGS.list {
        model.table.write_listing(&mut io::stdout())?;
    }
    let generated = emit::render(&model);
    if write {
        for pb in writer::write_outputs(out_dir, &generated)? {
            info!("Wrote {}", pb.display());
        }
    } else {
        info!("Check only; no files written");
    }
    Ok(generated)
}

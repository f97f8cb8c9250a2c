use clap::Parser;
use lazy_static::lazy_static;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author,version,about,long_about=None)]
pub struct Args {
    /// Directory holding one <MNEMONIC>.md document per instruction
    #[arg(long, default_value = "documentations")]
    pub docs: PathBuf,

    /// Directory receiving the generated instructions.rs and clock.rs
    #[arg(long, default_value = "generated")]
    pub out_dir: PathBuf,

    /// Build and validate the opcode table without writing any output files
    #[arg(short, long)]
    pub check: bool,

    /// Dump a listing of the opcode table to stdout after a successful build
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

lazy_static! {
    pub static ref ARGS: Args = if cfg!(test) {
        // manually set parameters for running tests
        Args::parse_from(["test"])
    } else {
        Args::parse()
    };
}

pub fn init() { lazy_static::initialize(&ARGS); }
pub fn write_outputs() -> bool { !ARGS.check }

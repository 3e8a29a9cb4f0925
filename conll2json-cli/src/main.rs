use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::debug;

use conll2json::{convert, get_version};

#[derive(Debug, Parser)]
#[clap(
    name = "conll2json",
    author,
    about = "Convert a code-switched CoNLL sentiment file into JSON sentence records",
    version = get_version(),
)]
struct CommandArgs {
    /// Tab-separated input file with meta and token lines.
    #[arg(default_value = "dataset/Spanglish_dev.conll")]
    input_file: PathBuf,

    /// Destination of the JSON array.
    #[arg(default_value = "spanglish_dataset.json")]
    output_file: PathBuf,
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = CommandArgs::parse();
    debug!("{:?}", args);

    convert(args.input_file.as_path(), args.output_file.as_path())?;

    println!("Conversion successful! JSON file saved.");
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

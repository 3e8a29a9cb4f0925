pub mod converter;
pub mod error;
pub mod record;
pub mod serializer;

use std::path::Path;

use log::info;

use crate::converter::Converter;
pub use crate::error::{Error, Result};
pub use crate::record::Record;
use crate::serializer::Serializer;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn get_version() -> &'static str {
    VERSION
}

/// Converts the CoNLL file at `input` and writes the JSON array to `output`.
///
/// The whole input is scanned before `output` is touched, so a malformed
/// input never leaves a partial output file behind.
///
/// # Returns
/// The number of records written.
///
/// # Errors
/// Returns the first error met while reading, parsing or writing.
pub fn convert(input: &Path, output: &Path) -> Result<usize> {
    let records = Converter::new().convert_file(input)?;
    Serializer::write_file(&records, output)?;

    info!(
        "converted {} sentences from {} to {}",
        records.len(),
        input.display(),
        output.display()
    );
    Ok(records.len())
}

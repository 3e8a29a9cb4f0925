use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::record::Record;

/// Serializer writes records as a pretty-printed JSON array.
/// Objects are indented by two spaces and non-ASCII text is kept as is.
pub struct Serializer;

impl Serializer {
    /// Writes `records` to `writer`.
    ///
    /// # Arguments
    /// * `records` - The records to serialize, in output order.
    /// * `writer` - The destination.
    ///
    /// # Errors
    /// Returns an error if serialization or the underlying write fails.
    pub fn write<W: Write>(records: &[Record], writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, records)?;
        Ok(())
    }

    /// Creates (or truncates) the file at `path` and writes `records` into it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written.
    pub fn write_file(records: &[Record], path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = io::BufWriter::new(file);

        Self::write(records, &mut writer)?;
        writer.flush()?;

        debug!("wrote {} records to {}", records.len(), path.display());
        Ok(())
    }

    /// Renders `records` as a JSON string.
    pub fn to_string(records: &[Record]) -> Result<String> {
        Ok(serde_json::to_string_pretty(records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::NamedTempFile;

    fn sample() -> Vec<Record> {
        vec![
            Record::Group {
                id: 1,
                sentence: "Hola amigo".to_string(),
                language: "es es".to_string(),
                sentiment_label: "positive".to_string(),
            },
            Record::Last {
                id: 2,
                sentence: "qué bye".to_string(),
                gold_label: "negative".to_string(),
            },
        ]
    }

    #[test]
    fn test_to_string_layout() -> Result<()> {
        let json = Serializer::to_string(&sample())?;

        let expected = r#"[
  {
    "id": 1,
    "sentence": "Hola amigo",
    "language": "es es",
    "sentiment_label": "positive"
  },
  {
    "id": 2,
    "sentence": "qué bye",
    "gold_label": "negative"
  }
]"#;
        assert_eq!(json, expected);
        Ok(())
    }

    #[test]
    fn test_empty() -> Result<()> {
        assert_eq!(Serializer::to_string(&[])?, "[]");
        Ok(())
    }

    #[test]
    fn test_write_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let output = NamedTempFile::new()?;
        let records = sample();

        Serializer::write_file(&records, output.path())?;

        // The file holds exactly what to_string renders, without a trailing newline.
        let written = fs::read_to_string(output.path())?;
        assert_eq!(written, Serializer::to_string(&records)?);
        assert!(written.contains("qué"));
        assert!(!written.contains("\\u00e9"));
        Ok(())
    }
}

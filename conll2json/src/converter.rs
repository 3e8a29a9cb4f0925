use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::record::Record;

const META_TAG: &str = "meta";
const SEPARATOR: char = '\t';

/// A classified, non-blank input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `meta<TAB>id<TAB>sentiment`, opens a new sentence group.
    Meta { id: i64, sentiment: &'a str },
    /// `word<TAB>lang`, one token of the current group.
    Token { word: &'a str, lang: &'a str },
}

/// Classifies a single input line.
///
/// # Arguments
/// * `line` - The raw line, with or without its line terminator.
/// * `line_number` - The 1-based position of the line, used in errors.
///
/// # Returns
/// `None` for a blank line, otherwise the parsed [`Line`].
///
/// The meta id must fit in an `i64`. Surrounding spaces and a leading sign
/// are accepted; digit separators such as `1_000` are not.
///
/// # Errors
/// Returns [`Error::Format`] if a meta line carries a non-integer id or if a
/// token line does not split into exactly two tab-separated fields.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<Line<'_>>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    match *fields.as_slice() {
        [META_TAG, id, sentiment] => {
            let id = id.trim().parse::<i64>().map_err(|e| {
                Error::format(line_number, line, format!("invalid sentence id: {}", e))
            })?;
            Ok(Some(Line::Meta { id, sentiment }))
        }
        [word, lang] => Ok(Some(Line::Token { word, lang })),
        _ => Err(Error::format(
            line_number,
            line,
            format!("expected 2 tab-separated fields, found {}", fields.len()),
        )),
    }
}

/// Running state of the sentence group currently being read.
#[derive(Debug, Default)]
pub struct Accumulator {
    /// Id and sentiment of the open group, set by its meta line.
    header: Option<(i64, String)>,
    words: Vec<String>,
    lang_markers: Vec<String>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new group, flushing the open one.
    ///
    /// # Returns
    /// The previous group as a [`Record::Group`], or `None` if no group was open.
    pub fn open(&mut self, id: i64, sentiment: &str) -> Option<Record> {
        let flushed = self.header.take().map(|(prev_id, prev_sentiment)| Record::Group {
            id: prev_id,
            sentence: self.words.join(" "),
            language: self.lang_markers.join(" "),
            sentiment_label: prev_sentiment,
        });

        self.words.clear();
        self.lang_markers.clear();
        self.header = Some((id, sentiment.to_string()));

        flushed
    }

    /// Appends a token to the open group.
    /// Tokens seen before any meta line belong to no group and are dropped.
    pub fn push(&mut self, word: &str, lang: &str) {
        if self.header.is_none() {
            debug!("dropping token {:?} outside of any sentence group", word);
            return;
        }
        self.words.push(word.to_string());
        self.lang_markers.push(lang.to_string());
    }

    /// Consumes the accumulator at end of input.
    ///
    /// # Returns
    /// The open group as a [`Record::Last`], or `None` if no meta line was ever seen.
    pub fn finish(self) -> Option<Record> {
        let (id, gold_label) = self.header?;
        Some(Record::Last {
            id,
            sentence: self.words.join(" "),
            gold_label,
        })
    }
}

/// Groups token lines into sentence records.
#[derive(Debug, Default)]
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Converter
    }

    /// Converts the file at `path` into records.
    ///
    /// # Errors
    /// Returns [`Error::FileNotFound`] if the file cannot be opened, and any
    /// error of [`Converter::convert_reader`].
    pub fn convert_file(&self, path: &Path) -> Result<Vec<Record>> {
        let file = File::open(path).map_err(|source| Error::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("reading {}", path.display());

        self.convert_reader(io::BufReader::new(file))
    }

    /// Scans `reader` once and returns one record per meta line, in input order.
    ///
    /// # Errors
    /// Stops at the first malformed line with [`Error::Format`], or at the
    /// first line that is not UTF-8 with [`Error::Encoding`].
    pub fn convert_reader<R: BufRead>(&self, mut reader: R) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        let mut acc = Accumulator::new();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let chunk = std::str::from_utf8(&buf).map_err(|_| Error::Encoding {
                line: line_number + 1,
            })?;

            // A bare `\r` also ends a line; `\r\n` ends only one.
            let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
            let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);

            for line in chunk.split('\r') {
                line_number += 1;

                match parse_line(line, line_number)? {
                    None => continue,
                    Some(Line::Meta { id, sentiment }) => {
                        trace!("sentence {} opened at line {}", id, line_number);
                        if let Some(record) = acc.open(id, sentiment) {
                            records.push(record);
                        }
                    }
                    Some(Line::Token { word, lang }) => acc.push(word, lang),
                }
            }
        }

        if let Some(record) = acc.finish() {
            records.push(record);
        }

        debug!("read {} lines, {} records", line_number, records.len());
        Ok(records)
    }
}

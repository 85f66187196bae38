use crate::core::normalizer::normalize;
use crate::domain::model::Gtin;
use crate::utils::error::{GtinError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Csv,
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Csv,
    #[default]
    Json,
}

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input_format: InputFormat,
    /// Header name of the GTIN column; csv input only.
    pub column: String,
    pub delimiter: u8,
    pub trim: bool,
    pub sort: bool,
    pub dedup: bool,
    pub only_valid: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            input_format: InputFormat::Csv,
            column: "gtin".to_string(),
            delimiter: b',',
            trim: false,
            sort: false,
            dedup: false,
            only_valid: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// 1-based line in the input.
    pub line: u64,
    pub input: String,
    pub valid: bool,
    pub canonical: Option<Gtin>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub duplicates: usize,
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn has_invalid(&self) -> bool {
        self.invalid > 0
    }

    pub fn write_to<W: Write>(&self, format: ReportFormat, writer: W) -> Result<()> {
        match format {
            ReportFormat::Json => self.write_json(writer),
            ReportFormat::Csv => self.write_csv(writer),
        }
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Entries only; the counters are logged, not written.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for entry in &self.entries {
            csv_writer.serialize(entry)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

pub struct BatchChecker {
    options: BatchOptions,
}

impl BatchChecker {
    pub fn new(options: BatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    pub fn check_file<P: AsRef<Path>>(&self, path: P) -> Result<BatchReport> {
        tracing::info!("Checking GTINs from {}", path.as_ref().display());
        let file = File::open(path)?;
        self.check_reader(file)
    }

    pub fn check_reader<R: Read>(&self, reader: R) -> Result<BatchReport> {
        let candidates = match self.options.input_format {
            InputFormat::Csv => self.read_csv(reader)?,
            InputFormat::Lines => self.read_lines(reader)?,
        };
        Ok(self.check_candidates(candidates))
    }

    /// Values that are not UTF-8 are decoded lossily and come out as invalid
    /// candidates instead of failing the run.
    fn read_csv<R: Read>(&self, reader: R) -> Result<Vec<(u64, String)>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.byte_headers()?.clone();
        let column_index = headers
            .iter()
            .position(|header| header == self.options.column.as_bytes())
            .ok_or_else(|| GtinError::ConfigError {
                message: format!(
                    "Column '{}' not found in input header ({})",
                    self.options.column,
                    headers
                        .iter()
                        .map(String::from_utf8_lossy)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            })?;
        tracing::debug!("Reading GTINs from column {} ('{}')", column_index, self.options.column);

        let mut candidates = Vec::new();
        for record in csv_reader.byte_records() {
            let record = record?;
            let line = record.position().map(|pos| pos.line()).unwrap_or(0);
            let value = record.get(column_index).unwrap_or_default();
            candidates.push((line, String::from_utf8_lossy(value).into_owned()));
        }
        Ok(candidates)
    }

    fn read_lines<R: Read>(&self, reader: R) -> Result<Vec<(u64, String)>> {
        let mut candidates = Vec::new();
        for (index, line) in BufReader::new(reader).split(b'\n').enumerate() {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let line = String::from_utf8_lossy(&line).into_owned();
            if line.trim().is_empty() {
                continue;
            }
            candidates.push((index as u64 + 1, line));
        }
        Ok(candidates)
    }

    /// Validates already-extracted candidates, `(line, text)` pairs in input order.
    pub fn check_candidates<I>(&self, candidates: I) -> BatchReport
    where
        I: IntoIterator<Item = (u64, String)>,
    {
        let mut report = BatchReport::default();
        let mut seen: HashSet<Gtin> = HashSet::new();

        for (line, raw) in candidates {
            report.total += 1;
            let candidate = if self.options.trim {
                raw.trim().to_string()
            } else {
                raw
            };

            let entry = match normalize(&candidate) {
                Ok(gtin) => {
                    report.valid += 1;
                    if self.options.dedup && !seen.insert(gtin.clone()) {
                        tracing::debug!("Line {}: duplicate of {}", line, gtin);
                        report.duplicates += 1;
                        continue;
                    }
                    BatchEntry {
                        line,
                        input: candidate,
                        valid: true,
                        canonical: Some(gtin),
                        error: None,
                    }
                }
                Err(e) => {
                    tracing::debug!("Line {}: {}", line, e);
                    report.invalid += 1;
                    if self.options.only_valid {
                        continue;
                    }
                    BatchEntry {
                        line,
                        input: candidate,
                        valid: false,
                        canonical: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            report.entries.push(entry);
        }

        if self.options.sort {
            report.entries.sort_by(order_entries);
        }

        tracing::info!(
            "Checked {} candidates: {} valid, {} invalid, {} duplicates dropped",
            report.total,
            report.valid,
            report.invalid,
            report.duplicates
        );
        report
    }
}

/// Valid entries by GTIN order, invalid ones after them. The sort is stable,
/// so invalid entries keep input order.
fn order_entries(left: &BatchEntry, right: &BatchEntry) -> Ordering {
    match (&left.canonical, &right.canonical) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

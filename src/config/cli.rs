use crate::core::batch::{BatchReport, ReportFormat};
use crate::utils::error::Result;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Where a batch report is written.
#[derive(Debug, Clone)]
pub enum ReportSink {
    Stdout,
    File(PathBuf),
}

impl ReportSink {
    pub fn new(path: Option<&str>) -> Self {
        match path {
            Some(path) => ReportSink::File(PathBuf::from(path)),
            None => ReportSink::Stdout,
        }
    }

    pub fn write_report(&self, report: &BatchReport, format: ReportFormat) -> Result<String> {
        match self {
            ReportSink::Stdout => {
                let stdout = io::stdout();
                report.write_to(format, stdout.lock())?;
                Ok("<stdout>".to_string())
            }
            ReportSink::File(path) => {
                let full_path = path.as_path();
                if let Some(parent) = full_path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }

                let mut writer = BufWriter::new(File::create(full_path)?);
                report.write_to(format, &mut writer)?;
                writer.flush()?;
                Ok(full_path.display().to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::batch::{BatchChecker, BatchOptions, InputFormat};
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("nested/out/report.json");

        let checker = BatchChecker::new(BatchOptions {
            input_format: InputFormat::Lines,
            ..BatchOptions::default()
        });
        let report = checker.check_reader("036000291452\n".as_bytes()).unwrap();

        let sink = ReportSink::new(target.to_str());
        let written = sink.write_report(&report, ReportFormat::Json).unwrap();
        assert_eq!(written, target.display().to_string());

        let content = std::fs::read_to_string(&target).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["valid"], 1);
        assert_eq!(json["entries"][0]["canonical"], "36000291452");
    }
}

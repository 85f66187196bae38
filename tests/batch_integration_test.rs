use anyhow::Result;
use gtin::config::cli::ReportSink;
use gtin::core::batch::ReportFormat;
use gtin::utils::validation::Validate;
use gtin::{BatchChecker, BatchConfig};
use tempfile::TempDir;

/// End to end: TOML config on disk, CSV input, sorted JSON report on disk.
#[test]
fn test_batch_from_toml_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let input_path = format!("{}/catalog.csv", temp_path);
    std::fs::write(
        &input_path,
        "sku,ean,name\n\
         A1,4006381333931,Pen\n\
         A2,036000291452,Tissues\n\
         A3,036000291453,Typo\n\
         A4,0036000291452,Tissues again\n\
         A5,93,Short\n",
    )?;

    let config_path = format!("{}/batch.toml", temp_path);
    std::fs::write(
        &config_path,
        format!(
            r#"
[input]
path = "{}"
format = "csv"
column = "ean"

[output]
path = "{}/out/report.json"
format = "json"
sort = true
dedup = true

[policy]
fail_on_invalid = true
"#,
            input_path, temp_path
        ),
    )?;

    let config = BatchConfig::from_file(&config_path)?;
    config.validate()?;

    let checker = BatchChecker::new(config.to_options()?);
    let report = checker.check_file(config.input_path()?)?;

    assert_eq!(report.total, 5);
    assert_eq!(report.valid, 4);
    assert_eq!(report.invalid, 1);
    assert_eq!(report.duplicates, 1);
    assert!(report.has_invalid() && config.fail_on_invalid());

    let written = ReportSink::new(config.output_path()).write_report(&report, config.report_format())?;
    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&written)?)?;

    let canonical: Vec<&serde_json::Value> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| &entry["canonical"])
        .collect();
    assert_eq!(
        canonical,
        vec![
            &serde_json::json!("36000291452"),
            &serde_json::json!("4006381333931"),
            &serde_json::json!("93"),
            &serde_json::Value::Null,
        ]
    );
    assert_eq!(json["entries"][3]["line"], 4);
    assert_eq!(json["entries"][3]["input"], "036000291453");

    Ok(())
}

#[test]
fn test_batch_lines_to_csv_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("codes.txt");
    std::fs::write(&input_path, "96385074\n\n10614141000415\n12a456\n")?;

    let mut config = BatchConfig::default();
    config.input.path = Some(input_path.to_str().unwrap().to_string());
    config.input.format = Some(gtin::core::batch::InputFormat::Lines);
    config.output.format = Some(ReportFormat::Csv);
    config.output.only_valid = Some(true);
    config.validate()?;

    let report = BatchChecker::new(config.to_options()?).check_file(config.input_path()?)?;
    assert_eq!(report.total, 3);
    assert_eq!(report.invalid, 1);
    assert_eq!(report.entries.len(), 2);

    let mut out = Vec::new();
    report.write_to(config.report_format(), &mut out)?;
    let text = String::from_utf8(out)?;
    assert_eq!(
        text,
        "line,input,valid,canonical,error\n\
         1,96385074,true,96385074,\n\
         3,10614141000415,true,10614141000415,\n"
    );

    Ok(())
}

#[test]
fn test_missing_input_file_is_io_error() {
    let checker = BatchChecker::new(Default::default());
    let err = checker.check_file("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, gtin::GtinError::IoError(_)));
}

use anyhow::{bail, Context};
use clap::Parser;
use gtin::config::cli::ReportSink;
use gtin::config::{BatchArgs, Command, LogFormat};
use gtin::utils::{logger, validation::Validate};
use gtin::{BatchChecker, BatchConfig, CliConfig, ExternalType, Gtin, GtinError, GtinWidth};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.log_format {
        LogFormat::Compact => logger::init_cli_logger(config.verbose),
        LogFormat::Json => logger::init_json_logger(config.verbose),
    }
    tracing::debug!("CLI config: {:?}", config);

    let all_ok = match &config.command {
        Command::Check { values } => run_check(values),
        Command::Normalize { values, pad } => run_normalize(values, *pad),
        Command::Compare { left, right, op } => run_compare(left, right, op.as_deref())?,
        Command::Batch(args) => match run_batch(args) {
            Ok(all_ok) => all_ok,
            Err(e) => {
                tracing::error!("❌ Batch run failed: {} (Severity: {:?})", e, e.severity());
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(e.severity().exit_code());
            }
        },
    };

    if !all_ok {
        std::process::exit(1);
    }
    Ok(())
}

fn run_check(values: &[String]) -> bool {
    let mut all_ok = true;
    for value in values {
        let valid = gtin::is_valid_gtin(value);
        println!("{}\t{}", value, if valid { "valid" } else { "invalid" });
        all_ok &= valid;
    }
    all_ok
}

fn run_normalize(values: &[String], pad: Option<GtinWidth>) -> bool {
    let mut all_ok = true;
    for value in values {
        match Gtin::input(value) {
            Ok(canonical) => {
                if !canonical.fits_storage() {
                    tracing::warn!(
                        "{} has {} digits, more than the {} a gtin column stores",
                        canonical,
                        canonical.len(),
                        gtin::MAX_GTIN_LEN
                    );
                }
                match pad {
                    None => println!("{}", canonical.output()),
                    Some(width) => match canonical.to_padded(width) {
                        Some(padded) => println!("{}", padded),
                        None => {
                            eprintln!("❌ {} has more than {} digits", canonical, width.digits());
                            all_ok = false;
                        }
                    },
                }
            }
            Err(e) => {
                tracing::debug!("normalize failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                all_ok = false;
            }
        }
    }
    all_ok
}

fn run_compare(left: &str, right: &str, op: Option<&str>) -> anyhow::Result<bool> {
    let left = Gtin::input(left).with_context(|| "left operand")?;
    let right = Gtin::input(right).with_context(|| "right operand")?;

    match op {
        None => println!("{}", left.compare(&right)),
        Some(symbol) => {
            let Some(operator) = Gtin::lookup_operator(symbol) else {
                bail!("unknown operator '{}' (expected one of =, <>, <, <=, >, >=)", symbol);
            };
            println!("{}", (operator.apply)(&left, &right));
        }
    }
    Ok(true)
}

fn run_batch(args: &BatchArgs) -> Result<bool, GtinError> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading batch configuration from: {}", path);
            BatchConfig::from_file(path)?
        }
        None => BatchConfig::default(),
    };
    args.apply_to(&mut config);
    config.validate()?;

    let checker = BatchChecker::new(config.to_options()?);
    let report = checker.check_file(config.input_path()?)?;

    let sink = ReportSink::new(config.output_path());
    let written_to = sink.write_report(&report, config.report_format())?;
    tracing::info!("✅ Report written to {}", written_to);

    if report.has_invalid() && config.fail_on_invalid() {
        tracing::error!("{} invalid GTINs found", report.invalid);
        return Ok(false);
    }
    Ok(true)
}

pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use args::{BatchArgs, CliConfig, Command, LogFormat};

#[cfg(feature = "cli")]
mod args {
    use crate::config::toml_config::BatchConfig;
    use crate::core::batch::{InputFormat, ReportFormat};
    use crate::domain::model::GtinWidth;
    use clap::{Args, Parser, Subcommand, ValueEnum};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "gtin")]
    #[command(about = "Validate, normalize and compare GTINs (UPC/EAN/ITF-14)")]
    pub struct CliConfig {
        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, value_enum, global = true, default_value_t = LogFormat::Compact)]
        pub log_format: LogFormat,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum LogFormat {
        Compact,
        Json,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Report whether each value is a valid GTIN
        Check {
            #[arg(required = true)]
            values: Vec<String>,
        },
        /// Print the canonical form of each value
        Normalize {
            #[arg(required = true)]
            values: Vec<String>,

            /// Zero-pad the canonical form to a standard width
            #[arg(long, value_enum)]
            pad: Option<GtinWidth>,
        },
        /// Compare two GTINs by their canonical text
        Compare {
            left: String,
            right: String,

            /// Evaluate one operator (=, <>, <, <=, >, >=) instead of printing -1/0/1
            #[arg(long)]
            op: Option<String>,
        },
        /// Validate a file of GTINs and write a report
        Batch(BatchArgs),
    }

    #[derive(Debug, Clone, Default, Args)]
    pub struct BatchArgs {
        /// TOML batch configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long)]
        pub input: Option<String>,

        #[arg(long, value_enum)]
        pub input_format: Option<InputFormat>,

        #[arg(long)]
        pub column: Option<String>,

        #[arg(long)]
        pub delimiter: Option<String>,

        #[arg(short, long)]
        pub output: Option<String>,

        #[arg(short, long, value_enum)]
        pub format: Option<ReportFormat>,

        #[arg(long)]
        pub trim: bool,

        #[arg(long)]
        pub sort: bool,

        #[arg(long)]
        pub dedup: bool,

        #[arg(long)]
        pub only_valid: bool,

        #[arg(long)]
        pub fail_on_invalid: bool,
    }

    impl BatchArgs {
        /// Command line values win over the file; flags can only switch options on.
        pub fn apply_to(&self, config: &mut BatchConfig) {
            if let Some(input) = &self.input {
                config.input.path = Some(input.clone());
            }
            if let Some(format) = self.input_format {
                config.input.format = Some(format);
            }
            if let Some(column) = &self.column {
                config.input.column = Some(column.clone());
            }
            if let Some(delimiter) = &self.delimiter {
                config.input.delimiter = Some(delimiter.clone());
            }
            if let Some(output) = &self.output {
                config.output.path = Some(output.clone());
            }
            if let Some(format) = self.format {
                config.output.format = Some(format);
            }
            if self.trim {
                config.input.trim = Some(true);
            }
            if self.sort {
                config.output.sort = Some(true);
            }
            if self.dedup {
                config.output.dedup = Some(true);
            }
            if self.only_valid {
                config.output.only_valid = Some(true);
            }
            if self.fail_on_invalid {
                config.policy.fail_on_invalid = Some(true);
            }
        }
    }

}

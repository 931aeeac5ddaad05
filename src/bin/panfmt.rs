//! CLI tool for IIN-range PAN formatting.
//!
//! # Usage
//!
//! ```bash
//! # Format a PAN against a configuration file
//! panfmt format 4444444444444444 --config conf.csv --delimiter ';'
//!
//! # Validate a configuration file and list every defect
//! panfmt check --config conf.csv
//!
//! # List the rules that survived validation
//! panfmt rules --config conf.csv
//!
//! # Mask a PAN (PCI-DSS compliant)
//! panfmt mask 4444444444444444
//! ```

use clap::{Args, Parser, Subcommand};
use pan_formatter::config::CsvFileSource;
use pan_formatter::defect::{DefectKind, DefectList};
use pan_formatter::{mask_pan, PanFormatter, RuleTable};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "panfmt")]
#[command(author, version, about = "IIN-range driven PAN formatting tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a PAN according to the configured rules
    Format {
        /// PAN to format (digits only)
        pan: String,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Validate a configuration file and report every defect
    Check {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// List the rules that survived validation
    Rules {
        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Mask a PAN (PCI-DSS compliant)
    Mask {
        /// PAN to mask
        pan: String,
    },
}

#[derive(Args)]
struct ConfigArgs {
    /// Path to the CSV configuration file
    #[arg(short, long)]
    config: PathBuf,

    /// Field delimiter of the configuration file
    #[arg(short, long, default_value = ",")]
    delimiter: char,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Format { pan, config } => cmd_format(&pan, &config),
        Commands::Check { config } => cmd_check(&config),
        Commands::Rules { config } => cmd_rules(&config),
        Commands::Mask { pan } => cmd_mask(&pan),
    }
}

fn source_for(args: &ConfigArgs) -> CsvFileSource {
    let delimiter = match u8::try_from(args.delimiter) {
        Ok(d) => d,
        Err(_) => {
            eprintln!("Error: delimiter must be a single ASCII character");
            process::exit(2);
        }
    };
    CsvFileSource::new(&args.config).with_delimiter(delimiter)
}

fn load_formatter(config: &ConfigArgs) -> PanFormatter {
    match PanFormatter::from_source(&source_for(config)) {
        Ok(formatter) => formatter,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn cmd_format(pan: &str, config: &ConfigArgs) {
    let formatter = load_formatter(config);

    match formatter.format(pan) {
        Ok(formatted) => {
            println!("{}", formatted);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn cmd_check(config: &ConfigArgs) {
    let source = source_for(config);
    let mut defects = DefectList::new();
    let result = PanFormatter::from_source_with_sink(&source, &mut defects);

    for defect in defects.defects() {
        let issuer = defect.issuer.as_deref().unwrap_or("<no issuer>");
        match &defect.kind {
            DefectKind::Malformed(err) => {
                println!("record {} ({}): malformed: {}", defect.record, issuer, err);
            }
            DefectKind::Rejected { issues } => {
                println!(
                    "record {} ({}): rejected: {}",
                    defect.record,
                    issuer,
                    issues.join("; ")
                );
            }
        }
    }

    match result {
        Ok(formatter) => {
            println!(
                "{} rules loaded, {} records discarded",
                formatter.table().len(),
                defects.len()
            );
            process::exit(if defects.is_empty() { 0 } else { 1 });
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn cmd_rules(config: &ConfigArgs) {
    let formatter = load_formatter(config);
    print_rules(formatter.table());
}

fn print_rules(table: &RuleTable) {
    for rule in table.iter() {
        println!(
            "{}: length {}, prefix {}..={} ({} digits), pattern \"{}\"",
            rule.issuer_name(),
            rule.supported_length(),
            rule.prefix_low(),
            rule.prefix_high(),
            rule.prefix_length(),
            rule.pattern()
        );
    }
}

fn cmd_mask(pan: &str) {
    println!("{}", mask_pan(pan));
}

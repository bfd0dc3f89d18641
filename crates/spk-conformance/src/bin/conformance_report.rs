#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::process::ExitCode;

use spk_conformance::{HarnessConfig, run_full_suite, write_report};

#[derive(Debug, Clone)]
struct CliArgs {
    config_path: Option<PathBuf>,
    signal_length: Option<usize>,
    seed: Option<u64>,
    output: Option<PathBuf>,
    fixture_root: Option<PathBuf>,
}

#[derive(Debug, Clone)]
enum CliParseError {
    Help,
    Message(String),
}

fn flag_value<'a>(args: &'a [String], index: usize, flag: &str) -> Result<&'a str, CliParseError> {
    args.get(index + 1)
        .map(String::as_str)
        .ok_or_else(|| CliParseError::Message(format!("missing value for {flag}")))
}

fn parse_cli_args(args: &[String]) -> Result<CliArgs, CliParseError> {
    let mut parsed = CliArgs {
        config_path: None,
        signal_length: None,
        seed: None,
        output: None,
        fixture_root: None,
    };

    let mut index = 0;
    while index < args.len() {
        match args[index].as_str() {
            "-h" | "--help" => return Err(CliParseError::Help),
            "--config" => {
                parsed.config_path = Some(PathBuf::from(flag_value(args, index, "--config")?));
                index += 2;
            }
            "--length" => {
                let value = flag_value(args, index, "--length")?;
                let length = value.parse::<usize>().map_err(|_| {
                    CliParseError::Message(format!("--length expects an integer, got `{value}`"))
                })?;
                parsed.signal_length = Some(length);
                index += 2;
            }
            "--seed" => {
                let value = flag_value(args, index, "--seed")?;
                let seed = parse_seed(value).ok_or_else(|| {
                    CliParseError::Message(format!("--seed expects an integer, got `{value}`"))
                })?;
                parsed.seed = Some(seed);
                index += 2;
            }
            "--output" => {
                parsed.output = Some(PathBuf::from(flag_value(args, index, "--output")?));
                index += 2;
            }
            "--fixture-root" => {
                parsed.fixture_root = Some(PathBuf::from(flag_value(args, index, "--fixture-root")?));
                index += 2;
            }
            unknown => {
                return Err(CliParseError::Message(format!(
                    "unrecognized argument `{unknown}`"
                )));
            }
        }
    }

    Ok(parsed)
}

/// Decimal, or hex with a `0x` prefix.
fn parse_seed(raw: &str) -> Option<u64> {
    let cleaned = raw.replace('_', "");
    match cleaned.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => cleaned.parse().ok(),
    }
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {program} [--config <path>] [--length <n>] [--seed <u64>] [--output <dir>] [--fixture-root <path>]"
    );
    eprintln!("  --config <path>        harness config json (missing fields use defaults)");
    eprintln!("  --length <n>           signal length for the property checks (default 1024)");
    eprintln!("  --seed <u64>           seed for the random signal, decimal or 0x-hex");
    eprintln!("  --output <dir>         directory for report.json and report.blake3");
    eprintln!("  --fixture-root <path>  directory containing golden_vectors.json");
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().collect();
    let program = argv
        .first()
        .cloned()
        .unwrap_or_else(|| String::from("conformance_report"));

    let args = match parse_cli_args(argv.get(1..).unwrap_or_default()) {
        Ok(args) => args,
        Err(CliParseError::Help) => {
            print_usage(&program);
            return ExitCode::SUCCESS;
        }
        Err(CliParseError::Message(message)) => {
            eprintln!("{message}");
            print_usage(&program);
            return ExitCode::from(2);
        }
    };

    let mut config = match &args.config_path {
        Some(path) => match HarnessConfig::from_json_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("config error: {error}");
                return ExitCode::from(2);
            }
        },
        None => HarnessConfig::default(),
    };
    if let Some(length) = args.signal_length {
        config.signal_length = length;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(fixture_root) = args.fixture_root {
        config.fixture_root = fixture_root;
    }
    let output = args.output.unwrap_or_else(|| config.artifact_root.clone());

    let report = match run_full_suite(&config) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("harness error: {error}");
            return ExitCode::from(2);
        }
    };

    for case in &report.cases {
        let status = if case.passed { "PASS" } else { "FAIL" };
        eprintln!(
            "{status} case={} backend={} max_error={:.3e} tolerance={:.1e}",
            case.case_id,
            case.backend.name(),
            case.max_error,
            case.tolerance
        );
    }
    eprintln!(
        "length={} seed={:#x} passed={} failed={}",
        report.signal_length, report.seed, report.passed, report.failed
    );

    match write_report(&report, &output) {
        Ok(artifacts) => {
            eprintln!(
                "report={} blake3={}",
                artifacts.report_path.display(),
                artifacts.digest
            );
        }
        Err(error) => {
            eprintln!("artifact error: {error}");
            return ExitCode::from(2);
        }
    }

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

//! Command-line interface for calc-parser
//! This binary is used to inspect how expressions are tokenized, checked and parsed.
//!
//! Usage:
//!   calc process `<expression>` [--format `<format>`] [--config `<file>`]  - Run the pipeline
//!   calc check `<expression>` [--config `<file>`]                        - Only run the validity checker
//!   calc list-formats                                                - List all available formats
//!
//! Set `RUST_LOG=debug` to see which rule rejected an expression.

use calc_config::{CalcConfig, Loader};
use calc_parser::calc::processor::{
    available_formats, check_expression, process_expression, ProcessingSpec,
};
use clap::{Arg, ArgMatches, Command};

fn main() {
    env_logger::init();

    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the built-in defaults");

    let matches = Command::new("calc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting how arithmetic expressions are checked and parsed")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("process")
                .about("Run an expression through the pipeline and print the result")
                .arg(
                    Arg::new("expression")
                        .help("The expression to process")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'token-simple', 'ast-treeviz'); defaults to the configured format"),
                )
                .arg(config_arg.clone()),
        )
        .subcommand(
            Command::new("check")
                .about("Run only the validity checker")
                .arg(
                    Arg::new("expression")
                        .help("The expression to check")
                        .required(true)
                        .index(1),
                )
                .arg(config_arg),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("process", process_matches)) => {
            let config = load_config(process_matches);
            let expression = required(process_matches, "expression");
            let format = process_matches
                .get_one::<String>("format")
                .cloned()
                .unwrap_or_else(|| config.output.format.clone());
            handle_process_command(expression, &format, &config);
        }
        Some(("check", check_matches)) => {
            let config = load_config(check_matches);
            let expression = required(check_matches, "expression");
            handle_check_command(expression, &config);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> &'a str {
    // clap enforces required arguments before we get here
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .unwrap_or_default()
}

fn load_config(matches: &ArgMatches) -> CalcConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

/// Handle the process command
fn handle_process_command(expression: &str, format: &str, config: &CalcConfig) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available formats: {}", available_formats().join(", "));
        std::process::exit(1);
    });

    let output = process_expression(expression, &spec, config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

/// Handle the check command
fn handle_check_command(expression: &str, config: &CalcConfig) {
    let report = check_expression(expression, config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if report.valid {
        println!("valid");
        return;
    }
    for error in &report.errors {
        eprintln!("invalid: {}", error.message);
    }
    std::process::exit(1);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}

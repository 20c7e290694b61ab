//! Expression processing API
//!
//! This module runs source text through the pipeline up to a chosen stage (token, check,
//! ast) and renders the result in a chosen format (simple, json, yaml, treeviz).
//!
//! ```rust,ignore
//! use calc_parser::calc::processor::{process_expression, ProcessingSpec};
//!
//! let config = calc_config::load_defaults()?;
//! let spec = ProcessingSpec::from_string("ast-treeviz")?;
//! let output = process_expression("(1+2)*3", &spec, &config)?;
//! ```

use crate::calc::ast::{Group, ParseError};
use crate::calc::formats::{to_treeviz_str, tokens_to_simple_str, tree_to_simple_str};
use crate::calc::lexing::tokenize_with_spans;
use crate::calc::parsing::Parser;
use crate::calc::token::{Token, TokenKind};
use crate::calc::validity::{ValidityChecker, ValidityError};
use calc_config::CalcConfig;
use log::debug;
use serde::Serialize;
use std::fmt;

/// Represents the processing stage (how far down the pipeline to go)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Check,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Treeviz,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage_str, format_str_rest) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage_str {
            "token" => ProcessingStage::Token,
            "check" => ProcessingStage::Check,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage_str.to_string())),
        };

        let format = match format_str_rest {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "treeviz" => OutputFormat::Treeviz,
            other => return Err(ProcessingError::InvalidFormatType(other.to_string())),
        };

        // Validate stage/format compatibility
        if format == OutputFormat::Treeviz && stage != ProcessingStage::Ast {
            return Err(ProcessingError::InvalidFormatType(
                "Format 'treeviz' only works with ast stage".to_string(),
            ));
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let stages = [
            (ProcessingStage::Token, OutputFormat::Simple),
            (ProcessingStage::Token, OutputFormat::Json),
            (ProcessingStage::Token, OutputFormat::Yaml),
            (ProcessingStage::Check, OutputFormat::Simple),
            (ProcessingStage::Check, OutputFormat::Json),
            (ProcessingStage::Check, OutputFormat::Yaml),
            (ProcessingStage::Ast, OutputFormat::Simple),
            (ProcessingStage::Ast, OutputFormat::Json),
            (ProcessingStage::Ast, OutputFormat::Yaml),
            (ProcessingStage::Ast, OutputFormat::Treeviz),
        ];
        stages
            .into_iter()
            .map(|(stage, format)| ProcessingSpec { stage, format })
            .collect()
    }
}

impl fmt::Display for ProcessingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Check => "check",
            ProcessingStage::Ast => "ast",
        };
        let format = match self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Treeviz => "treeviz",
        };
        write!(f, "{}-{}", stage, format)
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    /// A character the expression grammar has no token for.
    Lexical {
        kind: TokenKind,
        literal: String,
        offset: usize,
    },
    /// The validity checker rejected the token stream. Messages come from the configured
    /// message table.
    Invalid(Vec<ReportedError>),
    Parse(ParseError),
    Serialization(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::Lexical {
                kind,
                literal,
                offset,
            } => write!(f, "{} character '{}' at offset {}", kind, literal, offset),
            ProcessingError::Invalid(errors) => {
                let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
                write!(f, "Invalid expression: {}", messages.join("; "))
            }
            ProcessingError::Parse(err) => write!(f, "Parse error: {}", err),
            ProcessingError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl From<ParseError> for ProcessingError {
    fn from(err: ParseError) -> Self {
        ProcessingError::Parse(err)
    }
}

/// A validity error together with its configured message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedError {
    pub kind: ValidityError,
    pub message: String,
}

/// Outcome of the check stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub valid: bool,
    pub errors: Vec<ReportedError>,
}

impl CheckReport {
    fn from_result(result: Result<(), Vec<ValidityError>>, config: &CalcConfig) -> Self {
        match result {
            Ok(()) => CheckReport {
                valid: true,
                errors: Vec::new(),
            },
            Err(kinds) => CheckReport {
                valid: false,
                errors: kinds
                    .into_iter()
                    .map(|kind| ReportedError {
                        kind,
                        message: kind.message(&config.messages).to_string(),
                    })
                    .collect(),
            },
        }
    }
}

/// Tokenize and reject characters that are not part of the expression grammar.
fn lex_expression(source: &str) -> Result<Vec<Token>, ProcessingError> {
    let mut tokens = Vec::new();
    for (token, span) in tokenize_with_spans(source) {
        if token.kind.is_lexical_error() {
            debug!("rejecting {} token '{}' at {:?}", token.kind, token.literal, span);
            return Err(ProcessingError::Lexical {
                kind: token.kind,
                literal: token.literal,
                offset: span.start,
            });
        }
        tokens.push(token);
    }
    Ok(tokens)
}

/// Tokenize and run the validity checker, reporting failures with configured messages.
pub fn check_expression(source: &str, config: &CalcConfig) -> Result<CheckReport, ProcessingError> {
    let tokens = lex_expression(source)?;
    let result = ValidityChecker::new().check(&tokens);
    Ok(CheckReport::from_result(result, config))
}

/// Run the full pipeline and return the validated tree.
pub fn parse_expression(source: &str, config: &CalcConfig) -> Result<Group, ProcessingError> {
    let tokens = lex_expression(source)?;
    let report = CheckReport::from_result(ValidityChecker::new().check(&tokens), config);
    if !report.valid {
        return Err(ProcessingError::Invalid(report.errors));
    }

    let parser = Parser::new().with_max_depth(config.parser.max_depth);
    Ok(parser.parse(&tokens)?)
}

/// Process an expression according to the given specification
pub fn process_expression(
    source: &str,
    spec: &ProcessingSpec,
    config: &CalcConfig,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => {
            // raw tokens, unknown characters included
            let tokens: Vec<Token> = tokenize_with_spans(source)
                .into_iter()
                .map(|(token, _)| token)
                .collect();
            match spec.format {
                OutputFormat::Simple => Ok(tokens_to_simple_str(&tokens)),
                format => serialize(&tokens, format),
            }
        }
        ProcessingStage::Check => {
            let report = check_expression(source, config)?;
            match spec.format {
                OutputFormat::Simple => Ok(format_report(&report)),
                format => serialize(&report, format),
            }
        }
        ProcessingStage::Ast => {
            let root = parse_expression(source, config)?;
            match spec.format {
                OutputFormat::Simple => Ok(tree_to_simple_str(&root)),
                OutputFormat::Treeviz => Ok(to_treeviz_str(&root)),
                format => serialize(&root, format),
            }
        }
    }
}

fn format_report(report: &CheckReport) -> String {
    if report.valid {
        return "valid".to_string();
    }
    report
        .errors
        .iter()
        .map(|e| format!("invalid: {}", e.message))
        .collect::<Vec<_>>()
        .join("\n")
}

fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| ProcessingError::Serialization(e.to_string()))
        }
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{:?} is not a serialization format",
            other
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| spec.to_string())
        .collect()
}

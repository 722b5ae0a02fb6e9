//! CLI argument definitions for the column title generator.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use coltitles_core::render::{DEFAULT_DECLARATION, DEFAULT_VARIABLE_PREFIX, DEFAULT_WRAPPER};
use coltitles_core::{EscapeMode, MAX_INPUT_BYTES, OutputFormat};

#[derive(Parser)]
#[command(
    name = "gen-column-titles",
    version,
    about = "Generate localized column title declarations from column-types JSON",
    long_about = "Read a JSON object of column definitions and emit one C declaration per \
                  column that has a \"title\":\n\n    \
                  char *title<N> = _(\"<title>\");\n\n\
                  <N> is the column's 1-based position among all columns, titled or not.\n\
                  With no arguments, JSON is read from stdin and the header goes to stdout."
)]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Column-types JSON to read ("-" or omitted for stdin).
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Header file to write (stdout when omitted).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Compare the generated header with --output instead of writing it.
    ///
    /// Exits non-zero when the file is missing or differs.
    #[arg(long = "check", requires = "output")]
    pub check: bool,

    /// How title text is embedded in the string literal.
    #[arg(long = "escape", value_enum, default_value = "verbatim")]
    pub escape: EscapeArg,

    /// Localization function wrapping each title.
    #[arg(long = "wrapper", value_name = "NAME", default_value = DEFAULT_WRAPPER)]
    pub wrapper: String,

    /// Variable name prefix; the column index is appended.
    #[arg(long = "prefix", value_name = "NAME", default_value = DEFAULT_VARIABLE_PREFIX)]
    pub prefix: String,

    /// Declaration type written before each variable name.
    #[arg(long = "declaration", value_name = "TEXT", default_value = DEFAULT_DECLARATION)]
    pub declaration: String,

    /// Refuse inputs larger than this many bytes.
    #[arg(long = "max-input-bytes", value_name = "BYTES", default_value_t = MAX_INPUT_BYTES)]
    pub max_input_bytes: u64,
}

impl GenerateArgs {
    /// Output format described by these flags.
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::default()
            .with_declaration(self.declaration.as_str())
            .with_variable_prefix(self.prefix.as_str())
            .with_wrapper(self.wrapper.as_str())
            .with_escape(self.escape.into())
    }
}

/// CLI escape mode choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EscapeArg {
    /// Embed titles exactly as written in the JSON.
    Verbatim,
    /// Escape quotes, backslashes and control characters.
    CString,
}

impl From<EscapeArg> for EscapeMode {
    fn from(arg: EscapeArg) -> Self {
        match arg {
            EscapeArg::Verbatim => Self::Verbatim,
            EscapeArg::CString => Self::CString,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

use std::fs;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, error, info, info_span};

use coltitles_core::{generate, read_input};

use crate::cli::GenerateArgs;

/// What a generator run did with the rendered header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Header written to stdout.
    Stdout { titles: usize },
    /// Header written to a file.
    Written { path: PathBuf, titles: usize },
    /// File already held the rendered header; left untouched.
    Unchanged { path: PathBuf },
    /// `--check`: file matches the rendered header.
    UpToDate { path: PathBuf },
    /// `--check`: file is missing or differs from the rendered header.
    Drift { path: PathBuf },
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Drift { .. } => 1,
            _ => 0,
        }
    }
}

/// Read column definitions, render the header, and deliver it.
///
/// `stdin` is only read when no input path (or `-`) is given; `stdout` only
/// receives the header when no output path is given. Nothing is written
/// anywhere unless the whole input renders successfully.
pub fn run_generate<R: Read, W: Write>(
    args: &GenerateArgs,
    stdin: R,
    stdout: &mut W,
) -> Result<Outcome> {
    let input_path = args.input.as_deref().filter(|path| *path != Path::new("-"));
    let source = input_path.map_or_else(
        || "<stdin>".to_string(),
        |path| path.display().to_string(),
    );
    let span = info_span!("generate", source = %source);
    let _guard = span.enter();

    let format = args.output_format();
    format.validate().context("validate output format flags")?;

    let bytes = match input_path {
        Some(path) => {
            let file =
                fs::File::open(path).with_context(|| format!("open input {}", path.display()))?;
            read_input(file, args.max_input_bytes)
        }
        None => read_input(stdin, args.max_input_bytes),
    }
    .with_context(|| format!("read {source}"))?;

    let rendered =
        generate(&bytes, &format).with_context(|| format!("generate titles from {source}"))?;

    match (&args.output, args.check) {
        (Some(path), true) => check_output(path, &rendered.text),
        (Some(path), false) => write_output(path, &rendered.text, rendered.title_count),
        (None, true) => bail!("--check requires an output path"),
        (None, false) => {
            stdout
                .write_all(rendered.text.as_bytes())
                .context("write header to stdout")?;
            stdout.flush().context("flush stdout")?;
            Ok(Outcome::Stdout {
                titles: rendered.title_count,
            })
        }
    }
}

fn write_output(path: &Path, text: &str, titles: usize) -> Result<Outcome> {
    if existing_contents(path)?.as_deref() == Some(text.as_bytes()) {
        debug!(path = %path.display(), "header unchanged");
        return Ok(Outcome::Unchanged {
            path: path.to_path_buf(),
        });
    }
    fs::write(path, text).with_context(|| format!("write header {}", path.display()))?;
    info!(path = %path.display(), titles, "wrote header");
    Ok(Outcome::Written {
        path: path.to_path_buf(),
        titles,
    })
}

fn check_output(path: &Path, text: &str) -> Result<Outcome> {
    let path_buf = path.to_path_buf();
    match existing_contents(path)? {
        Some(existing) if existing == text.as_bytes() => {
            info!(path = %path.display(), "header up to date");
            Ok(Outcome::UpToDate { path: path_buf })
        }
        Some(_) => {
            error!(path = %path.display(), "header drift detected");
            Ok(Outcome::Drift { path: path_buf })
        }
        None => {
            error!(path = %path.display(), "header missing");
            Ok(Outcome::Drift { path: path_buf })
        }
    }
}

fn existing_contents(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err).with_context(|| format!("read existing header {}", path.display())),
    }
}

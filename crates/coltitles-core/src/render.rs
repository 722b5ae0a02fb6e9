//! Rendering title declarations.
//!
//! Each titled column becomes one C declaration:
//!
//! ```text
//! char *title3 = _("Extension");
//! ```
//!
//! The declaration type, variable prefix and localization wrapper all come
//! from [`OutputFormat`].

use std::fmt::Write;

use tracing::{debug, info};

use crate::error::{ColumnTitlesError, Result};
use crate::input::parse_columns;
use crate::model::{ColumnSet, TitleEntry};

/// Default declaration type preceding the variable name.
pub const DEFAULT_DECLARATION: &str = "char *";
/// Default variable name prefix; the column index is appended.
pub const DEFAULT_VARIABLE_PREFIX: &str = "title";
/// Default gettext-style localization function.
pub const DEFAULT_WRAPPER: &str = "_";

/// How title text is embedded in the string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeMode {
    /// Embed the title exactly as decoded. A title containing `"` or `\`
    /// produces a literal that will not compile.
    #[default]
    Verbatim,
    /// Escape the title so the literal is always valid C.
    CString,
}

/// Textual shape of the generated declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFormat {
    pub declaration: String,
    pub variable_prefix: String,
    pub wrapper: String,
    pub escape: EscapeMode,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            declaration: DEFAULT_DECLARATION.to_string(),
            variable_prefix: DEFAULT_VARIABLE_PREFIX.to_string(),
            wrapper: DEFAULT_WRAPPER.to_string(),
            escape: EscapeMode::default(),
        }
    }
}

impl OutputFormat {
    #[must_use]
    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = declaration.into();
        self
    }

    #[must_use]
    pub fn with_variable_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.variable_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.wrapper = wrapper.into();
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: EscapeMode) -> Self {
        self.escape = escape;
        self
    }

    /// Check that the format produces well-formed declarations.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnTitlesError::Config`] for an empty declaration or a
    /// prefix/wrapper that is not a C identifier.
    pub fn validate(&self) -> Result<()> {
        if self.declaration.trim().is_empty() {
            return Err(ColumnTitlesError::Config {
                message: "declaration must not be empty".to_string(),
            });
        }
        if !is_c_identifier(&self.variable_prefix) {
            return Err(ColumnTitlesError::Config {
                message: format!(
                    "variable prefix '{}' is not a C identifier",
                    self.variable_prefix
                ),
            });
        }
        if !is_c_identifier(&self.wrapper) {
            return Err(ColumnTitlesError::Config {
                message: format!("wrapper '{}' is not a C identifier", self.wrapper),
            });
        }
        Ok(())
    }

    /// Render one newline-terminated declaration.
    pub fn render_line(&self, entry: &TitleEntry) -> String {
        let mut line = String::new();
        self.push_line(&mut line, entry);
        line
    }

    fn push_line(&self, out: &mut String, entry: &TitleEntry) {
        out.push_str(&self.declaration);
        out.push_str(&self.variable_prefix);
        let _ = write!(out, "{}", entry.index);
        out.push_str(" = ");
        out.push_str(&self.wrapper);
        out.push_str("(\"");
        match self.escape {
            EscapeMode::Verbatim => out.push_str(&entry.title),
            EscapeMode::CString => push_c_escaped(out, &entry.title),
        }
        out.push_str("\");\n");
    }
}

/// Generated header text plus counts for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub column_count: usize,
    pub title_count: usize,
}

/// Render every titled column of `columns`, in document order.
///
/// Nothing is returned unless every column is valid.
pub fn render(columns: &ColumnSet, format: &OutputFormat) -> Result<String> {
    Ok(render_entries(&columns.titles()?, format))
}

/// Decode `bytes` and render the header in one step.
pub fn generate(bytes: &[u8], format: &OutputFormat) -> Result<Rendered> {
    format.validate()?;
    let columns = parse_columns(bytes)?;
    let titles = columns.titles()?;
    let text = render_entries(&titles, format);
    info!(
        columns = columns.len(),
        titles = titles.len(),
        "rendered column titles"
    );
    Ok(Rendered {
        text,
        column_count: columns.len(),
        title_count: titles.len(),
    })
}

fn render_entries(entries: &[TitleEntry], format: &OutputFormat) -> String {
    let mut text = String::new();
    for entry in entries {
        debug!(index = entry.index.get(), column = %entry.column, "rendering title");
        format.push_line(&mut text, entry);
    }
    text
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

fn push_c_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Octal keeps following hex digits out of the escape.
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\{:03o}", u32::from(c));
            }
            c => out.push(c),
        }
    }
}

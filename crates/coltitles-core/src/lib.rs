//! Localized column title declarations generated from column-types JSON.
//!
//! Input is a JSON object mapping column identifiers to definitions. Every
//! definition carrying a `title` yields one declaration whose index is the
//! column's 1-based position among *all* columns:
//!
//! ```
//! use coltitles_core::{OutputFormat, generate};
//!
//! let input = br#"{"name": {"title": "Name"}, "size": {}, "ext": {"title": "Extension"}}"#;
//! let rendered = generate(input, &OutputFormat::default()).unwrap();
//! assert_eq!(
//!     rendered.text,
//!     "char *title1 = _(\"Name\");\nchar *title3 = _(\"Extension\");\n"
//! );
//! ```

pub mod error;
pub mod input;
pub mod model;
pub mod render;

pub use error::{ColumnTitlesError, Result};
pub use input::{MAX_INPUT_BYTES, parse_columns, read_input};
pub use model::{ColumnDefinition, ColumnSet, TITLE_ATTRIBUTE, TitleEntry};
pub use render::{EscapeMode, OutputFormat, Rendered, generate, render};

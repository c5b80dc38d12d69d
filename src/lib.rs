mod config;
mod document;
mod error;
mod files;
mod markdown;

pub use config::{Config, DocumentConfig, ExtensionsConfig, PathsConfig};
pub use document::{STYLESHEET, compose};
pub use error::{Error, Result};
pub use files::{read_markdown, write_document};
pub use markdown::{Extensions, render_fragment, to_html};

use std::path::Path;

/// Convert markdown to a complete, styled HTML document.
pub fn render_document(markdown: &str, config: &Config) -> String {
    let fragment = render_fragment(markdown, &config.extensions);
    compose(STYLESHEET, &fragment, &config.document)
}

/// Read `input`, render it and write the document to `output`.
///
/// The input is fully read before `output` is touched, so a failed read
/// leaves any existing output file as it was.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<()> {
    let markdown = read_markdown(input)?;
    let html = render_document(&markdown, config);
    write_document(output, &html)
}

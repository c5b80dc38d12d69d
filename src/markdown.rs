use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};
use tracing::{debug, warn};

use crate::config::ExtensionsConfig;

/// Optional syntax on top of plain CommonMark rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Extensions {
    /// Pipe tables rendered as `<table>`.
    pub tables: bool,
    /// Fenced blocks rendered as `<pre><code>` with a `language-*` class.
    pub fenced_code: bool,
}

impl Extensions {
    pub const NONE: Extensions = Extensions {
        tables: false,
        fenced_code: false,
    };

    pub const ALL: Extensions = Extensions {
        tables: true,
        fenced_code: true,
    };

    /// Whether the extension mechanism was compiled in.
    pub fn available() -> bool {
        cfg!(feature = "extensions")
    }

    fn options(self) -> Options {
        let mut options = Options::empty();
        if self.tables {
            options.insert(Options::ENABLE_TABLES);
        }
        options
    }
}

impl From<&ExtensionsConfig> for Extensions {
    fn from(config: &ExtensionsConfig) -> Self {
        Self {
            tables: config.tables,
            fenced_code: config.fenced_code,
        }
    }
}

/// Render markdown to an HTML fragment with the configured extensions,
/// or plain when the extension mechanism is unavailable.
pub fn render_fragment(markdown: &str, config: &ExtensionsConfig) -> String {
    let extensions = if Extensions::available() {
        Extensions::from(config)
    } else {
        warn!("Markdown extensions unavailable, rendering without tables and fenced code");
        Extensions::NONE
    };
    to_html(markdown, extensions)
}

/// Render markdown to an HTML fragment (no `<html>`/`<body>` wrapper).
pub fn to_html(markdown: &str, extensions: Extensions) -> String {
    let parser = Parser::new_ext(markdown, extensions.options());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);

    if extensions.fenced_code {
        html::push_html(&mut out, parser);
    } else {
        html::push_html(&mut out, flatten_fenced_blocks(parser).into_iter());
    }

    debug!(
        "Rendered {} bytes of markdown into {} bytes of HTML ({:?})",
        markdown.len(),
        out.len(),
        extensions
    );
    out
}

/// Without fenced-code support a fence is just a backtick run: the block
/// collapses into an inline code span inside a paragraph, info string first.
fn flatten_fenced_blocks(parser: Parser<'_>) -> Vec<Event<'_>> {
    let mut events = Vec::new();
    let mut fence: Option<String> = None;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                let mut code = info.into_string();
                if !code.is_empty() {
                    code.push('\n');
                }
                fence = Some(code);
            }
            Event::Text(text) if fence.is_some() => {
                if let Some(code) = fence.as_mut() {
                    code.push_str(&text);
                }
            }
            // Indented blocks also end here, but never open a fence.
            Event::End(TagEnd::CodeBlock) if fence.is_some() => {
                if let Some(code) = fence.take() {
                    let code = code.trim_end_matches('\n').to_string();
                    events.push(Event::Start(Tag::Paragraph));
                    events.push(Event::Code(code.into()));
                    events.push(Event::End(TagEnd::Paragraph));
                }
            }
            other => events.push(other),
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_paragraph() {
        assert_eq!(
            to_html("# Title\n\nSome text.", Extensions::ALL),
            "<h1>Title</h1>\n<p>Some text.</p>\n"
        );
    }

    #[test]
    fn table_renders_with_extension() {
        let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |\n", Extensions::ALL);
        assert!(html.starts_with("<table>"), "got: {html}");
        assert!(html.contains("<th>a</th><th>b</th>"), "got: {html}");
        assert!(html.contains("<td>1</td><td>2</td>"), "got: {html}");
        assert_eq!(html.matches("<tr>").count(), 2);
    }

    #[test]
    fn table_is_a_paragraph_without_extension() {
        let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |\n", Extensions::NONE);
        assert!(!html.contains("<table>"), "got: {html}");
        assert!(html.starts_with("<p>| a | b |"), "got: {html}");
    }

    #[test]
    fn fenced_code_carries_language_class() {
        assert_eq!(
            to_html("```rust\nlet x = 1;\n```", Extensions::ALL),
            "<pre><code class=\"language-rust\">let x = 1;\n</code></pre>\n"
        );
    }

    #[test]
    fn fenced_code_without_language() {
        assert_eq!(
            to_html("```\nplain\n```", Extensions::ALL),
            "<pre><code>plain\n</code></pre>\n"
        );
    }

    #[test]
    fn fenced_code_flattens_without_extension() {
        assert_eq!(
            to_html("```rust\nlet x = 1;\n```", Extensions::NONE),
            "<p><code>rust\nlet x = 1;</code></p>\n"
        );
    }

    #[test]
    fn flattened_code_is_escaped() {
        assert_eq!(
            to_html("```\na < b && c\n```", Extensions::NONE),
            "<p><code>a &lt; b &amp;&amp; c</code></p>\n"
        );
    }

    #[test]
    fn indented_code_survives_without_extension() {
        assert_eq!(
            to_html("    indented\n", Extensions::NONE),
            "<pre><code>indented\n</code></pre>\n"
        );
    }

    #[test]
    fn plain_rendering_keeps_headings_and_emphasis() {
        assert_eq!(
            to_html("## Sub\n\nsome *text*", Extensions::NONE),
            "<h2>Sub</h2>\n<p>some <em>text</em></p>\n"
        );
    }

    #[test]
    fn tables_only() {
        let extensions = Extensions {
            tables: true,
            fenced_code: false,
        };
        let html = to_html("| a |\n|---|\n| 1 |\n\n```sh\nls\n```", extensions);
        assert!(html.contains("<table>"), "got: {html}");
        assert!(html.contains("<p><code>sh\nls</code></p>"), "got: {html}");
    }

    #[test]
    fn extensions_from_config() {
        let config = ExtensionsConfig {
            tables: false,
            fenced_code: true,
        };
        assert_eq!(
            Extensions::from(&config),
            Extensions {
                tables: false,
                fenced_code: true
            }
        );
    }

    #[cfg(feature = "extensions")]
    #[test]
    fn render_fragment_uses_configured_extensions() {
        let html = render_fragment("| a |\n|---|\n| 1 |\n", &ExtensionsConfig::default());
        assert!(html.contains("<table>"));
    }

    #[cfg(not(feature = "extensions"))]
    #[test]
    fn render_fragment_falls_back_to_plain() {
        let html = render_fragment("# Title\n\n| a |\n|---|\n| 1 |\n", &ExtensionsConfig::default());
        assert!(html.starts_with("<h1>Title</h1>"));
        assert!(!html.contains("<table>"));
    }
}

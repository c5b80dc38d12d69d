use crate::config::DocumentConfig;

/// Print-friendly stylesheet embedded in every generated page.
pub static STYLESHEET: &str = include_str!("style.css");

/// Wrap an HTML fragment in a complete HTML5 document.
///
/// The fragment and the `<head>` values are inserted as-is; nothing is escaped.
pub fn compose(css: &str, fragment: &str, meta: &DocumentConfig) -> String {
    let mut out = String::with_capacity(css.len() + fragment.len() + 512);

    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\">\n", meta.lang));

    out.push_str("<head>\n");
    out.push_str("    <meta charset=\"UTF-8\">\n");
    out.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    out.push_str(&format!("    <title>{}</title>\n", meta.title));
    out.push_str("    <style>\n");
    out.push_str(css);
    if !css.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("    </style>\n");
    out.push_str("</head>\n");

    out.push_str("<body>\n");
    out.push_str(fragment);
    if !fragment.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("</body>\n");
    out.push_str("</html>\n");

    out
}

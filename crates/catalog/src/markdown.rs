//! Markdown rendering for long-form record fields.

use comrak::{Options, markdown_to_html};

/// Render markdown to HTML with GitHub Flavored Markdown extensions.
///
/// Raw HTML in the source is escaped; record text comes from an external
/// editing surface.
pub fn render(content: &str) -> String {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.header_ids = Some(String::new());
    options.extension.footnotes = true;
    options.render.escape = true;

    markdown_to_html(content, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_paragraphs_and_lists() {
        let html = render("Step one.\n\n- chop\n- simmer");
        assert!(html.contains("<p>Step one.</p>"));
        assert!(html.contains("<li>chop</li>"));
    }

    #[test]
    fn escapes_raw_html() {
        let html = render("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }
}

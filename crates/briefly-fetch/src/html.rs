//! Paragraph text extraction from HTML.

use scraper::{Html, Selector};

/// Text of every `<p>` element, in document order, joined by one space.
///
/// Text nodes inside a paragraph are concatenated as-is, so inline markup
/// (`<b>`, `<a>`, ...) does not introduce extra spaces.
pub fn paragraph_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let Ok(sel) = Selector::parse("p") else {
        return String::new();
    };

    doc.select(&sel)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

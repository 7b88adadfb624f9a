// src/utils/html.rs

//! Visible-text extraction from HTML.

use scraper::{Html, Node};

const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Visible text of a full HTML document, one space between text runs.
pub fn visible_text(html: &str) -> String {
    collect_text(&Html::parse_document(html))
}

/// Visible text of an HTML fragment (e.g. a rich-text description field).
pub fn fragment_text(html: &str) -> String {
    collect_text(&Html::parse_fragment(html))
}

fn collect_text(document: &Html) -> String {
    let mut parts = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_text_skips_scripts_and_styles() {
        let html = r#"
            <html>
              <head><title>Job</title><style>.x { color: red }</style></head>
              <body>
                <h1>Protection Officer</h1>
                <script>var grade = "G-5";</script>
                <p>Grade:   <b>P-3</b></p>
              </body>
            </html>"#;
        assert_eq!(visible_text(html), "Job Protection Officer Grade: P-3");
    }

    #[test]
    fn test_fragment_text() {
        assert_eq!(
            fragment_text("<p>Duty station: <i>Geneva</i></p><ul><li>P4</li></ul>"),
            "Duty station: Geneva P4"
        );
    }

    #[test]
    fn test_visible_text_keeps_document_title() {
        let html = "<html><head><title>Senior Legal Officer (P4)</title>\
                    <noscript>Enable JavaScript</noscript></head><body></body></html>";
        assert_eq!(visible_text(html), "Senior Legal Officer (P4)");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(fragment_text("Fixed Term"), "Fixed Term");
    }
}

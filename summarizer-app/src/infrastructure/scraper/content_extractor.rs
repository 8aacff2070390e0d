use crate::domain::ExtractedPage;
use scraper::{ElementRef, Html, Selector};

/// Elements dropped with their whole subtree before any text is read.
pub const DENYLIST: &[&str] = &[
    "script", "style", "noscript", "iframe", "ad", "img", "form", "nav", "aside", "link",
    "button", "figure", "input",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ContentExtractor;

impl ContentExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, raw_html: &[u8]) -> ExtractedPage {
        let html = String::from_utf8_lossy(raw_html);
        // html5ever recovers from any malformed input, so parsing itself cannot fail.
        let mut document = Html::parse_document(&html);

        let title = self.extract_title(&document);
        let description = self.extract_meta_description(&document);

        let denied = self.remove_denylisted(&mut document);
        let emptied = self.remove_empty_elements(&mut document);
        let content = self.linearize_text(&document);

        tracing::debug!(
            denied,
            emptied,
            chars = content.len(),
            "Cleaned document"
        );

        ExtractedPage::new()
            .with_title(title)
            .with_description(description)
            .with_content(content)
    }

    fn extract_title(&self, document: &Html) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        document
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
    }

    fn extract_meta_description(&self, document: &Html) -> Option<String> {
        let selector = Selector::parse("meta[name='description']").ok()?;
        document
            .select(&selector)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn remove_denylisted(&self, document: &mut Html) -> usize {
        let doomed: Vec<_> = document
            .tree
            .root()
            .descendants()
            .filter(|node| {
                node.value()
                    .as_element()
                    .is_some_and(|el| DENYLIST.contains(&el.name()))
            })
            .map(|node| node.id())
            .collect();

        for id in &doomed {
            if let Some(mut node) = document.tree.get_mut(*id) {
                node.detach();
            }
        }
        doomed.len()
    }

    /// Detaching an element without visible text only drops whitespace, so no
    /// surviving ancestor changes its text. One sweep therefore reaches the
    /// fixed point: every element left afterwards has visible text.
    fn remove_empty_elements(&self, document: &mut Html) -> usize {
        let doomed: Vec<_> = document
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.text().all(|t| t.trim().is_empty()))
            .map(|el| el.id())
            .collect();

        for id in &doomed {
            if let Some(mut node) = document.tree.get_mut(*id) {
                node.detach();
            }
        }
        doomed.len()
    }

    /// Joins the trimmed text nodes under `<body>` with newlines, in document order.
    fn linearize_text(&self, document: &Html) -> String {
        // Walk from the tree root: `Html::select` would also visit detached nodes.
        let body = document
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "body");

        body.map(|body| {
            body.text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default()
    }
}

//! Page-level style collection.
//!
//! Several composite fields on one page all want the shared widget
//! stylesheet, but the page must carry it once. Instead of a global side
//! channel, callers thread an explicit [`PageContext`] through their
//! rendering pass; contributions are keyed, and repeats of a key are
//! dropped.

/// Collects named style blocks contributed while rendering one page.
#[derive(Debug, Default)]
pub struct PageContext {
    styles: Vec<(String, String)>,
}

impl PageContext {
    /// An empty context for a fresh page render.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `block` under `id` unless a block with that id was already
    /// contributed. Returns whether the block was added.
    pub fn contribute_style(&mut self, id: &str, block: &str) -> bool {
        if self.has_style(id) {
            return false;
        }
        self.styles.push((id.to_string(), block.to_string()));
        true
    }

    /// Whether a block with this id has been contributed.
    pub fn has_style(&self, id: &str) -> bool {
        self.styles.iter().any(|(key, _)| key == id)
    }

    /// All contributed blocks in first-contribution order, joined for
    /// embedding in the page head.
    pub fn styles_html(&self) -> String {
        self.styles
            .iter()
            .map(|(_, block)| block.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

//! Result-renderer: turns matched records into the `<ul>` fragment the
//! client widget inserts into the results container.

use crate::html::{content_tag, escape_html, highlight};

/// CSS class of the hidden span holding the value inserted on selection.
/// The binder's `append` option points the widget's `select` at this class.
pub const VALUES_CLASS: &str = "autocomplete_values";

/// Renders completion entries as an HTML `<ul>` fragment.
///
/// `field` projects each record to the text that is both displayed and,
/// prefixed with `prepend`, inserted on selection. When `phrase` is given,
/// matches in the display text are wrapped in an emphasis marker; all text
/// is escaped either way. Entries rendering to identical markup collapse to
/// one item, first occurrence first.
///
/// Returns `None` for an empty record set: the widget distinguishes "no
/// response body" (hide the dropdown) from an empty visible list, so absence
/// of entries must produce no output at all.
pub fn auto_complete_result<T, F>(
    entries: &[T],
    field: F,
    phrase: Option<&str>,
    prepend: &str,
) -> Option<String>
where
    F: Fn(&T) -> &str,
{
    if entries.is_empty() {
        return None;
    }

    let mut items: Vec<String> = Vec::with_capacity(entries.len());
    for entry in entries {
        let text = field(entry);
        let display = match phrase {
            Some(phrase) => highlight(text, phrase),
            None => escape_html(text),
        };
        let hidden = content_tag(
            "span",
            &format!("{prepend} {}", escape_html(text)),
            &[("class", VALUES_CLASS), ("style", "display: none")],
        );
        let item = content_tag("li", &format!("{display}{hidden}"), &[]);
        if !items.contains(&item) {
            items.push(item);
        }
    }

    Some(content_tag("ul", &items.concat(), &[]))
}

//! Composite field helper: text input, results container, and binder script
//! emitted as one unit.

use anyhow::Result;

use crate::html::{content_tag, tag};
use crate::options::{CompletionOptions, TagOptions};
use crate::page::PageContext;
use crate::script::auto_complete_field;
use crate::url::{Route, UrlResolver};
use crate::{stylesheet_tag, STYLE_KEY};

/// Renders a text input for `object.method` with autocompletion wired up.
///
/// Emits, in order: the `<input>` (id `<object>_<method>`, or
/// `<object>_<index>_<method>` when `tag_options.index` is set), an empty
/// results `<div id="<tag>_auto_complete" class="auto_complete">`, and the
/// binder script. Unless `completion_options.url` is set, the endpoint
/// route defaults to the action `auto_complete_for_<object>_<method>`; the
/// server side of that action is expected to answer with
/// [`crate::result::auto_complete_result`] output.
///
/// The shared widget stylesheet is contributed to `page` once per page,
/// unless `completion_options.skip_style` is set.
///
/// # Errors
///
/// Returns an error when the URL resolver cannot resolve the endpoint
/// route.
pub fn text_field_with_auto_complete(
    object: &str,
    method: &str,
    tag_options: &TagOptions,
    completion_options: &CompletionOptions,
    page: &mut PageContext,
    resolver: &dyn UrlResolver,
) -> Result<String> {
    let tag_name = match tag_options.index {
        Some(index) => format!("{object}_{index}_{method}"),
        None => format!("{object}_{method}"),
    };

    if !completion_options.skip_style {
        page.contribute_style(STYLE_KEY, &stylesheet_tag());
    }

    let input = text_field(object, method, &tag_name, tag_options);
    let container_id = format!("{tag_name}_auto_complete");
    let container = content_tag(
        "div",
        "",
        &[("class", "auto_complete"), ("id", container_id.as_str())],
    );

    let mut options = completion_options.clone();
    if options.url.is_none() {
        options.url = Some(Route::for_field(object, method));
    }
    let script = auto_complete_field(&tag_name, &options, resolver)?;

    Ok(format!("{input}{container}{script}"))
}

/// Renders the bare text input, browser autocompletion off so the widget's
/// dropdown is the only one showing.
fn text_field(object: &str, method: &str, tag_name: &str, tag_options: &TagOptions) -> String {
    let name = match tag_options.index {
        Some(index) => format!("{object}[{index}][{method}]"),
        None => format!("{object}[{method}]"),
    };

    let value = tag_options
        .value
        .as_deref()
        .or_else(|| tag_options.attrs.get("value").map(String::as_str));

    let mut attrs: Vec<(&str, &str)> = tag_options
        .attrs
        .iter()
        .filter(|(key, _)| {
            !matches!(key.as_str(), "id" | "name" | "type" | "autocomplete" | "value")
        })
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    attrs.push(("autocomplete", "off"));
    attrs.push(("id", tag_name));
    attrs.push(("name", &name));
    attrs.push(("type", "text"));
    if let Some(value) = value {
        attrs.push(("value", value));
    }

    tag("input", &attrs)
}

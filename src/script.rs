//! Field-binder: emits the script statement wiring one input field to a
//! client-side autocompleter instance.

use anyhow::{Context, Result};

use crate::html::{javascript_tag, js_string};
use crate::options::CompletionOptions;
use crate::url::UrlResolver;

/// Emits a `<script>` block instantiating an autocompleter for the input
/// field with DOM id `field_id`.
///
/// The autocompleter object is assigned to a JavaScript variable named
/// `<field_id>_auto_completer` and bound to the results container given by
/// `options.update` (default `<field_id>_auto_complete`) and to the endpoint
/// resolved from `options.url`. The endpoint is expected to answer with the
/// fragment produced by [`crate::result::auto_complete_result`], or nothing.
///
/// Browsers' built-in completion fights the widget, so the generated input
/// of the composite helper carries `autocomplete="off"`; callers wiring
/// their own input should do the same.
///
/// # Errors
///
/// Returns an error only when the URL resolver fails; option translation
/// itself has no failure modes.
pub fn auto_complete_field(
    field_id: &str,
    options: &CompletionOptions,
    resolver: &dyn UrlResolver,
) -> Result<String> {
    let route = options.url.clone().unwrap_or_default();
    let url = resolver
        .resolve(&route)
        .with_context(|| format!("cannot resolve completion endpoint for field: {field_id}"))?;

    let container = match &options.update {
        Some(update) => update.clone(),
        None => format!("{field_id}_auto_complete"),
    };

    let statement = format!(
        "var {field_id}_auto_completer = new Ajax.Autocompleter({}, {}, {}, {})",
        js_string(field_id),
        js_string(&container),
        js_string(&url),
        options_for_javascript(options),
    );

    Ok(javascript_tag(&statement))
}

/// Serializes the translated option bag as a JavaScript object literal with
/// keys in sorted order; `{}` when no options are present.
fn options_for_javascript(options: &CompletionOptions) -> String {
    let bag = options.to_js_options();
    let pairs: Vec<String> = bag.iter().map(|(k, v)| format!("{k}:{v}")).collect();
    format!("{{{}}}", pairs.join(", "))
}

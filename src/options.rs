//! Typed option schema for the autocompleter helpers.
//!
//! The client widget consumes a key/value option bag; this module models
//! that bag as an explicit struct with one optional field per supported key.
//! Absent fields are omitted from the emitted bag, never defaulted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::html::js_string;
use crate::url::Route;

/// Separator tokens for tokenized incremental completion.
///
/// A single separator and a list of separators both normalize to a
/// JavaScript array literal; a single separator becomes a one-element list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tokens {
    /// One separator, e.g. `","`.
    Single(String),
    /// Several separators, e.g. `[",", "\n"]`.
    List(Vec<String>),
}

impl Tokens {
    /// Renders the separators as a JavaScript array literal of
    /// single-quoted strings.
    pub fn to_js_array(&self) -> String {
        let items: Vec<String> = match self {
            Tokens::Single(s) => vec![js_string(s)],
            Tokens::List(list) => list.iter().map(|s| js_string(s)).collect(),
        };
        format!("[{}]", items.join(","))
    }
}

impl From<&str> for Tokens {
    fn from(s: &str) -> Self {
        Tokens::Single(s.to_string())
    }
}

impl From<Vec<String>> for Tokens {
    fn from(list: Vec<String>) -> Self {
        Tokens::List(list)
    }
}

/// Options controlling one autocompleter binding.
///
/// Every field is optional; only present fields reach the emitted option
/// bag. JavaScript-expression fields (`with`, `callback`, `on_show`,
/// `on_hide`, `update_element`, `after_update_element`) are copied into the
/// output verbatim, so their content is trusted caller code, not data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionOptions {
    /// Route of the endpoint answering completion queries. The composite
    /// field helper fills in `auto_complete_for_<object>_<method>` when this
    /// is absent.
    pub url: Option<Route>,
    /// DOM id of the element to update with returned entries. Defaults to
    /// `<field_id>_auto_complete`.
    pub update: Option<String>,
    /// Separator tokens for tokenized incremental completion.
    pub tokens: Option<Tokens>,
    /// JavaScript expression producing the request parameters. Overrides
    /// `callback`.
    pub with: Option<String>,
    /// JavaScript function called before the request is made, receiving the
    /// input field and the default query string.
    pub callback: Option<String>,
    /// DOM id of an element shown while a completion request is running.
    pub indicator: Option<String>,
    /// CSS class of the element holding the value to insert on selection.
    pub select: Option<String>,
    /// Name of the query parameter carrying the typed text.
    pub param_name: Option<String>,
    /// Seconds to wait after the last keystroke before firing the request.
    pub frequency: Option<f64>,
    /// HTTP verb for the completion request; emitted lower-cased.
    pub method: Option<String>,
    /// When `true`, forces `select` to the sentinel class
    /// `autocomplete_values` so the hidden value span is what gets inserted.
    pub append: bool,
    /// JavaScript expression run after the user picks an entry, receiving
    /// the field element and the selected value.
    pub after_update_element: Option<String>,
    /// JavaScript function replacing the built-in element-update behavior,
    /// receiving the selected list item.
    pub update_element: Option<String>,
    /// JavaScript expression run when the suggestion container is shown.
    pub on_show: Option<String>,
    /// JavaScript expression run when the suggestion container is hidden.
    pub on_hide: Option<String>,
    /// Minimum number of typed characters before a request is made.
    pub min_chars: Option<u32>,
    /// Suppresses the shared stylesheet contribution of the composite field
    /// helper.
    pub skip_style: bool,
}

impl CompletionOptions {
    /// Translates the present options into the client-side option bag.
    ///
    /// Keys are the client widget's camel-cased names; values are already
    /// rendered JavaScript tokens. Precedence rules: `with` wins over
    /// `callback`, and `append` forces `select` to `'autocomplete_values'`
    /// regardless of an explicit `select` value.
    pub fn to_js_options(&self) -> BTreeMap<&'static str, String> {
        let mut bag: BTreeMap<&'static str, String> = BTreeMap::new();

        if let Some(tokens) = &self.tokens {
            bag.insert("tokens", tokens.to_js_array());
        }
        if let Some(with) = &self.with {
            bag.insert(
                "callback",
                format!("function(element, value) {{ return {with} }}"),
            );
        } else if let Some(callback) = &self.callback {
            bag.insert("callback", callback.clone());
        }
        if let Some(indicator) = &self.indicator {
            bag.insert("indicator", js_string(indicator));
        }
        if let Some(select) = &self.select {
            bag.insert("select", js_string(select));
        }
        if let Some(param_name) = &self.param_name {
            bag.insert("paramName", js_string(param_name));
        }
        if let Some(frequency) = &self.frequency {
            bag.insert("frequency", frequency.to_string());
        }
        if let Some(method) = &self.method {
            bag.insert("method", js_string(&method.to_lowercase()));
        }

        // append wins over any explicit select value
        if self.append {
            bag.insert("select", js_string("autocomplete_values"));
        }

        if let Some(v) = &self.after_update_element {
            bag.insert("afterUpdateElement", v.clone());
        }
        if let Some(v) = &self.update_element {
            bag.insert("updateElement", v.clone());
        }
        if let Some(v) = &self.on_show {
            bag.insert("onShow", v.clone());
        }
        if let Some(v) = &self.on_hide {
            bag.insert("onHide", v.clone());
        }
        if let Some(v) = &self.min_chars {
            bag.insert("minChars", v.to_string());
        }

        bag
    }
}

/// Rendering attributes for the generated text input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagOptions {
    /// Index segment for array-backed fields; shifts the tag id to
    /// `<object>_<index>_<method>` and the name to `object[index][method]`.
    pub index: Option<u32>,
    /// Initial value of the input.
    pub value: Option<String>,
    /// Additional attributes merged into the input tag. Generated `id`,
    /// `name`, and `type` attributes take precedence on key collision.
    pub attrs: BTreeMap<String, String>,
}

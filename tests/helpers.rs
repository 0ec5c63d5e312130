//! End-to-end checks of the observable helper output: option translation,
//! fragment rendering, and composite-field assembly.

use auto_complete_markup::{
    auto_complete_field, auto_complete_result, text_field_with_auto_complete, CompletionOptions,
    PageContext, Route, StaticRoutes, TagOptions, Tokens,
};

struct Item {
    title: String,
}

fn items(titles: &[&str]) -> Vec<Item> {
    titles.iter().map(|t| Item { title: t.to_string() }).collect()
}

fn routes() -> StaticRoutes {
    StaticRoutes::with_base("/complete")
}

fn path_options() -> CompletionOptions {
    CompletionOptions {
        url: Some(Route::Path("/c".into())),
        ..Default::default()
    }
}

#[test]
fn no_tokens_option_no_tokens_key() {
    let html = auto_complete_field("q", &path_options(), &routes()).expect("path route");
    assert!(!html.contains("tokens"));
}

#[test]
fn single_token_emits_one_element_list() {
    let options = CompletionOptions {
        tokens: Some(Tokens::Single(",".into())),
        ..path_options()
    };
    let html = auto_complete_field("q", &options, &routes()).expect("path route");
    assert!(html.contains("tokens:[',']"));
}

#[test]
fn with_always_overrides_callback() {
    let options = CompletionOptions {
        with: Some("foo".into()),
        callback: Some("bar".into()),
        ..path_options()
    };
    let html = auto_complete_field("q", &options, &routes()).expect("path route");
    assert!(html.contains("callback:function(element, value) { return foo }"));
    assert!(!html.contains("bar"));
}

#[test]
fn append_beats_explicit_select() {
    let options = CompletionOptions {
        append: true,
        select: Some("entry".into()),
        ..path_options()
    };
    let html = auto_complete_field("q", &options, &routes()).expect("path route");
    assert!(html.contains("select:'autocomplete_values'"));
    assert!(!html.contains("select:'entry'"));
}

#[test]
fn empty_entries_render_nothing_at_all() {
    let empty: Vec<Item> = Vec::new();
    let body = auto_complete_result(&empty, |i| &i.title, None, "");
    assert_eq!(body, None);
    assert_ne!(body, Some("<ul></ul>".to_string()));
}

#[test]
fn identical_entries_collapse_to_one_item() {
    let entries = items(&["Apple", "Apple"]);
    let html = auto_complete_result(&entries, |i| &i.title, None, "").expect("entries given");
    assert_eq!(html.matches("<li>").count(), 1);
}

#[test]
fn phrase_highlights_only_matching_entries() {
    let entries = items(&["Apple", "Banana"]);
    let html = auto_complete_result(&entries, |i| &i.title, Some("an"), "").expect("entries given");
    assert_eq!(html.matches("<li>").count(), 2);
    assert!(html.contains("B<strong class=\"highlight\">an</strong>"));
    assert!(html.contains("<li>Apple<span"));
}

#[test]
fn composite_field_derives_ids_and_endpoint() {
    let mut page = PageContext::new();
    let html = text_field_with_auto_complete(
        "item",
        "title",
        &TagOptions::default(),
        &CompletionOptions::default(),
        &mut page,
        &routes(),
    )
    .expect("base route");
    assert!(html.contains("id=\"item_title_auto_complete\""));
    assert!(html.contains("'/complete/auto_complete_for_item_title'"));
}

#[test]
fn composite_field_with_index_shifts_tag_base() {
    let mut page = PageContext::new();
    let tag_options = TagOptions {
        index: Some(3),
        ..Default::default()
    };
    let html = text_field_with_auto_complete(
        "item",
        "title",
        &tag_options,
        &CompletionOptions::default(),
        &mut page,
        &routes(),
    )
    .expect("base route");
    assert!(html.contains("id=\"item_3_title\""));
}

#[test]
fn two_composite_fields_one_stylesheet() {
    let mut page = PageContext::new();
    for method in ["title", "description"] {
        text_field_with_auto_complete(
            "item",
            method,
            &TagOptions::default(),
            &CompletionOptions::default(),
            &mut page,
            &routes(),
        )
        .expect("base route");
    }
    assert_eq!(page.styles_html().matches("<style").count(), 1);
}

use search_thumbnails::{
    attach_image_search_data, ImageSearchData, Options, SearchContext, IMAGE_SEARCH_DATA_KEY,
};
use serde_json::{json, Map, Value};

const COOKED: &str = r#"<p><img src="/uploads/default/original/1X/photo.jpg"></p>"#;

fn post_stub() -> Map<String, Value> {
    let mut post = Map::new();
    post.insert("id".to_string(), json!(17));
    post.insert("blurb".to_string(), json!("a post about photos"));
    post
}

#[test]
fn payload_serializes_with_wire_field_names() {
    let data = ImageSearchData {
        urls: vec!["/a.jpg".to_string(), "/b.jpg".to_string()],
        total: 6,
    };

    let value = serde_json::to_value(&data).expect("expected Ok(_)");
    assert_eq!(value, json!({ "urls": ["/a.jpg", "/b.jpg"], "total": 6 }));
}

#[test]
fn payload_round_trips_through_json() {
    let data = ImageSearchData {
        urls: vec!["/a.jpg".to_string()],
        total: 3,
    };

    let text = serde_json::to_string(&data).expect("expected Ok(_)");
    let parsed: ImageSearchData = serde_json::from_str(&text).expect("expected Ok(_)");
    assert_eq!(parsed, data);
}

#[test]
fn attach_inserts_key_when_gate_passes() {
    let mut post = post_stub();
    let context = SearchContext {
        term: "with:images".to_string(),
        only_with_images_filter: true,
    };

    let attached =
        attach_image_search_data(&mut post, COOKED, Some(42), &context, &Options::default());

    assert!(attached);
    assert_eq!(
        post.get(IMAGE_SEARCH_DATA_KEY),
        Some(&json!({
            "urls": ["/uploads/default/original/1X/photo.jpg"],
            "total": 1
        }))
    );
    // existing fields untouched
    assert_eq!(post.get("id"), Some(&json!(17)));
}

#[test]
fn attach_omits_key_entirely_when_gate_excludes() {
    let context = SearchContext {
        term: "photos".to_string(),
        only_with_images_filter: true,
    };

    let mut post = post_stub();
    let attached =
        attach_image_search_data(&mut post, COOKED, Some(42), &context, &Options::default());
    assert!(!attached);
    // absent key, not a null value
    assert!(!post.contains_key(IMAGE_SEARCH_DATA_KEY));

    let mut post = post_stub();
    let attached =
        attach_image_search_data(&mut post, COOKED, None, &context, &Options::default());
    assert!(!attached);
    assert!(!post.contains_key(IMAGE_SEARCH_DATA_KEY));
}

#[test]
fn attach_includes_for_any_term_when_filter_only_disabled() {
    let mut post = post_stub();
    let context = SearchContext {
        term: "plain topic title".to_string(),
        only_with_images_filter: false,
    };

    let attached =
        attach_image_search_data(&mut post, COOKED, Some(42), &context, &Options::default());

    assert!(attached);
    assert!(post.contains_key(IMAGE_SEARCH_DATA_KEY));
}

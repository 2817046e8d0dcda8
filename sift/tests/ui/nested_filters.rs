//! Nested object filters and matchers built with `filter!`.

use serde_json::json;
use sift::{filter, sift};

fn main() {
    let source = json!({
        "user": { "name": "Alice", "password": "hunter2" },
        "userProfile": { "bio": "b", "avatarUrl": "u" },
        "settings": { "theme": "dark" }
    });
    let source = source.as_object().expect("fixture is an object");

    let result = sift(
        source,
        &[filter!({
            user: ["name"],
            settings: All,
        }), filter!(match("Profile$", match("Url$", All)))],
    );

    assert_eq!(
        serde_json::Value::Object(result),
        json!({
            "user": { "name": "Alice" },
            "settings": { "theme": "dark" },
            "userProfile": { "avatarUrl": "u" }
        })
    );
}

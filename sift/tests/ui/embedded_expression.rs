//! Runtime filters spliced into a `filter!` literal.

use sift::{filter, Filter, ObjectFilter};

fn shared() -> ObjectFilter {
    ObjectFilter::new().field("id", Filter::All)
}

fn main() {
    let built = filter!({ owner: (shared()), editor: (shared()) });
    let Filter::Object(object) = built else {
        panic!("expected an object filter");
    };
    assert_eq!(object.len(), 2);
    assert_eq!(object.get("owner"), Some(&Filter::Object(shared())));
}

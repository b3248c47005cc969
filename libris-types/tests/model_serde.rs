use libris_types::{Book, RecordId, User};
use serde_json::json;

#[test]
fn user_history_missing_null_or_scalar_is_empty() {
    for history in [None, Some(json!(null)), Some(json!("oops")), Some(json!({"a": 1}))] {
        let mut v = json!({"id": 1, "name": "Ada"});
        if let Some(h) = history {
            v["history"] = h;
        }
        let user: User = serde_json::from_value(v).expect("decode user");
        assert!(user.history.is_empty());
        assert_eq!(user.name, "Ada");
    }
}

#[test]
fn history_skips_non_object_items_and_defaults_missing_fields() {
    let user: User = serde_json::from_value(json!({
        "id": "7",
        "name": "Grace",
        "history": [
            42,
            {"book_name": "Dune"},
            {"book_id": 3, "language": 5, "borrow_date": "2024-01-05T10:00:00Z", "status": "borrowed"}
        ]
    }))
    .expect("decode user");

    assert_eq!(user.history.len(), 2);
    assert_eq!(user.history[0].book_name, "Dune");
    assert_eq!(user.history[0].borrow_date, "");
    assert_eq!(user.history[0].language(), None);
    assert_eq!(user.history[1].book_id, Some(RecordId::from("3")));
    assert_eq!(user.history[1].language(), Some("5"));
}

#[test]
fn empty_language_and_publisher_read_as_absent() {
    let user: User = serde_json::from_value(json!({
        "id": 1,
        "history": [{"language": "", "publishing_house": ""}]
    }))
    .expect("decode user");
    assert_eq!(user.history[0].language(), None);
    assert_eq!(user.history[0].publishing_house(), None);
}

#[test]
fn numeric_and_string_ids_compare_equal() {
    let a: User = serde_json::from_value(json!({"id": 12})).expect("numeric id");
    let b: User = serde_json::from_value(json!({"id": "12"})).expect("string id");
    assert_eq!(a.id, b.id);
    assert_eq!(a.id.to_string(), "12");
}

#[test]
fn currently_borrowed_keeps_open_loans_only() {
    let user: User = serde_json::from_value(json!({
        "id": 1,
        "name": "Ada",
        "history": [
            {"book_id": 1, "book_name": "A", "author": "X", "status": "borrowed", "borrow_date": "2024-01-01"},
            {"book_id": 2, "book_name": "B", "author": "Y", "status": "returned", "borrow_date": "2024-01-02"},
            {"book_id": 3, "book_name": "C", "author": "Z", "publishing_house": "Acme", "status": "borrowed", "borrow_date": "2024-01-03"}
        ]
    }))
    .expect("decode user");

    let open = user.currently_borrowed();
    assert_eq!(open.len(), 2);
    assert_eq!(open[0].name, "A");
    assert_eq!(open[1].id, Some(RecordId::from("3")));
    assert_eq!(open[1].publishing_house.as_deref(), Some("Acme"));
}

#[test]
fn book_status_is_available_only_for_literal_true() {
    let cases = [
        (json!(true), true),
        (json!(false), false),
        (json!("true"), false),
        (json!(1), false),
        (json!(null), false),
    ];
    for (status, expected) in cases {
        let book: Book =
            serde_json::from_value(json!({"id": 1, "name": "Dune", "status": status}))
                .expect("decode book");
        assert_eq!(book.is_available(), expected);
    }
}

#[test]
fn book_decodes_backend_payload() {
    let book: Book = serde_json::from_value(json!({
        "id": "5021",
        "name": "New Book Title",
        "image": "https://example.org/cover.jpg",
        "language": "English",
        "isbn": 48213,
        "user_id": 1,
        "price": 30,
        "status": false,
        "author": "Unknown Author",
        "publishing_house": "Publishing House",
        "createdAt": "2024-01-05T10:00:00.000Z",
        "updatedAt": "2024-01-05T10:00:00.000Z"
    }))
    .expect("decode book");

    assert_eq!(book.id, RecordId::from("5021"));
    assert_eq!(book.isbn.as_deref(), Some("48213"));
    assert_eq!(book.user_id, Some(RecordId::from(1u64)));
    assert_eq!(book.price.map(|p| p.to_string()).as_deref(), Some("30"));
    assert!(!book.is_available());
    assert!(book.created_at.is_some());
}

use serde_json::{Value, json};

/// Catalogue as the backend's list-books endpoint returns it.
pub fn books_json() -> Value {
    json!([
        {"id": "101", "name": "Dune", "author": "Frank Herbert", "language": "English",
         "publishing_house": "Penguin", "isbn": 44120, "user_id": 1, "price": 30, "status": false},
        {"id": "102", "name": "Neuromancer", "author": "William Gibson", "language": "English",
         "publishing_house": "Penguin", "isbn": 51977, "user_id": 1, "price": 24.5, "status": true},
        {"id": "104", "name": "Solaris", "author": "Stanisław Lem", "language": "Polish",
         "publishing_house": "Wydawnictwo Literackie", "isbn": 30211, "user_id": 1, "price": 19, "status": false},
        {"id": "106", "name": "Der Prozess", "author": "Franz Kafka", "language": "German",
         "publishing_house": "Suhrkamp", "isbn": 71544, "user_id": 2, "price": 15, "status": false},
        {"id": "107", "name": "Foundation", "author": "Isaac Asimov", "language": "English",
         "publishing_house": "Gollancz", "isbn": 60031, "user_id": 1, "price": 22, "status": true},
        {"id": "111", "name": "Ficciones", "author": "Jorge Luis Borges", "language": "Spanish",
         "publishing_house": "Sur", "isbn": 11873, "price": "18.90", "status": "true"}
    ])
}

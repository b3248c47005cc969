use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde_json::{Value, json};

fn at(now: DateTime<Utc>, back: TimeDelta) -> String {
    (now - back).to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn days(n: i64) -> TimeDelta {
    TimeDelta::days(n)
}

fn entry(
    book_id: u64,
    book_name: &str,
    author: &str,
    publishing_house: &str,
    language: &str,
    borrow_date: &str,
    status: &str,
) -> Value {
    json!({
        "book_id": book_id,
        "book_name": book_name,
        "author": author,
        "publishing_house": publishing_house,
        "language": language,
        "borrow_date": borrow_date,
        "status": status,
    })
}

/// Member list as the backend's list-users endpoint returns it, dated relative to `now`.
///
/// Covers: ids as numbers and strings, a null history, a missing history, a
/// malformed borrow date, an empty language, a future-dated borrow, and one
/// borrow outside the trailing week.
pub fn users_json(now: DateTime<Utc>) -> Value {
    json!([
        {
            "id": 1,
            "name": "Ada Lovelace",
            "email": "ada@example.org",
            "role": "member",
            "history": [
                entry(101, "Dune", "Frank Herbert", "Penguin", "English", &at(now, TimeDelta::hours(1)), "borrowed"),
                entry(102, "Neuromancer", "William Gibson", "Penguin", "English", &at(now, days(1)), "returned"),
                entry(103, "Hyperion", "Dan Simmons", "Penguin", "English", &at(now, days(1) + TimeDelta::hours(2)), "returned"),
                entry(104, "Solaris", "Stanisław Lem", "Wydawnictwo Literackie", "Polish", &at(now, days(3)), "borrowed"),
                entry(105, "L'Étranger", "Albert Camus", "Gallimard", "French", &at(now, days(10)), "returned"),
            ]
        },
        {
            "id": "2",
            "name": "Grace Hopper",
            "email": "grace@example.org",
            "role": "member",
            "history": [
                entry(101, "Dune", "Frank Herbert", "Penguin", "English", &at(now, days(2)), "returned"),
                entry(106, "Der Prozess", "Franz Kafka", "Suhrkamp", "German", &at(now, days(5)), "borrowed"),
                entry(107, "Foundation", "Isaac Asimov", "Gollancz", "English", "not-a-date", "returned"),
            ]
        },
        {
            "id": 3,
            "name": "Linus Torvalds",
            "role": "admin",
            "history": null
        },
        {
            "id": 4,
            "name": "Margaret Hamilton",
            "history": [
                entry(108, "Lalka", "Bolesław Prus", "Wydawnictwo Literackie", "Polish", &at(now, TimeDelta::minutes(5)), "borrowed"),
                entry(109, "Cien años de soledad", "Gabriel García Márquez", "Alfaguara", "Spanish", &at(now, days(20)), "returned"),
            ]
        },
        {
            "id": 5,
            "name": "Alan Turing"
        },
        {
            "id": 6,
            "name": "Barbara Liskov",
            "history": [
                entry(110, "Leviathan Wakes", "James S. A. Corey", "Orbit", "", &at(now, -days(2)), "borrowed"),
            ]
        }
    ])
}

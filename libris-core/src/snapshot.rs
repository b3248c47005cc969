//! Immutable input snapshot and read-only views over it.

use libris_types::{Book, BorrowRecord, LibrisError, RecordId, User};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Point-in-time copy of the member list and the catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Members, each with their borrow history.
    #[serde(default)]
    pub users: Vec<User>,
    /// Catalogue.
    #[serde(default)]
    pub books: Vec<Book>,
}

impl Snapshot {
    /// Bundle already-decoded collections.
    #[must_use]
    pub const fn new(users: Vec<User>, books: Vec<Book>) -> Self {
        Self { users, books }
    }

    /// Decode the raw list-users and list-books response bodies.
    ///
    /// # Errors
    /// Returns `LibrisError::Data` if either body is not valid JSON or its
    /// top-level value is not an array.
    pub fn from_json(users_json: &str, books_json: &str) -> Result<Self, LibrisError> {
        let users: Value = serde_json::from_str(users_json)?;
        let books: Value = serde_json::from_str(books_json)?;
        Self::from_values(users, books)
    }

    /// Decode already-parsed list-users and list-books payloads.
    ///
    /// # Errors
    /// Returns `LibrisError::Data` if either value is not an array.
    pub fn from_values(users: Value, books: Value) -> Result<Self, LibrisError> {
        Ok(Self {
            users: decode_list(users, "users")?,
            books: decode_list(books, "books")?,
        })
    }

    /// First member with the given id.
    #[must_use]
    pub fn find_user(&self, id: &RecordId) -> Option<&User> {
        find_user(&self.users, id)
    }

    /// Books currently available for lending.
    pub fn available_books(&self) -> impl Iterator<Item = &Book> {
        available_books(&self.books)
    }

    /// Every borrow record of every member.
    pub fn history_records(&self) -> impl Iterator<Item = &BorrowRecord> {
        history_records(&self.users)
    }
}

fn decode_list<T>(value: Value, what: &str) -> Result<Vec<T>, LibrisError>
where
    T: serde::de::DeserializeOwned,
{
    if !value.is_array() {
        return Err(LibrisError::Data(format!(
            "invalid response format from {what} API: expected an array"
        )));
    }
    Ok(serde_json::from_value(value)?)
}

/// Every borrow record of every member, member by member.
pub fn history_records(users: &[User]) -> impl Iterator<Item = &BorrowRecord> {
    users.iter().flat_map(|u| u.history.iter())
}

/// First member with the given id.
#[must_use]
pub fn find_user<'a>(users: &'a [User], id: &RecordId) -> Option<&'a User> {
    users.iter().find(|u| &u.id == id)
}

/// Display name for a member id, or `"User {id}"` if the id is unknown.
///
/// ```
/// use libris_core::{RecordId, User, user_name};
///
/// let users = vec![User { id: RecordId::from("7"), name: "Ada".into(), ..Default::default() }];
/// assert_eq!(user_name(&users, &RecordId::from(7u64)), "Ada");
/// assert_eq!(user_name(&users, &RecordId::from("9")), "User 9");
/// ```
#[must_use]
pub fn user_name(users: &[User], id: &RecordId) -> String {
    find_user(users, id).map_or_else(|| format!("User {id}"), |u| u.name.clone())
}

/// Books whose availability flag is set.
pub fn available_books(books: &[Book]) -> impl Iterator<Item = &Book> {
    books.iter().filter(|b| b.is_available())
}

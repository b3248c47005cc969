//! Members, their borrow history, and the book catalogue as the backend serves them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::lenient;

/// Status value marking a loan that has not been returned yet.
pub const STATUS_BORROWED: &str = "borrowed";
/// Status value marking a returned loan.
pub const STATUS_RETURNED: &str = "returned";

/// One entry of a member's borrow history.
///
/// Book fields are a denormalized copy taken at borrow time; they are not kept
/// in sync with the catalogue. `borrow_date` is kept exactly as received and
/// only parsed when a time window needs it, so a malformed date never prevents
/// the rest of the record from being counted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BorrowRecord {
    /// Catalogue id of the borrowed book.
    #[serde(default, deserialize_with = "lenient::id")]
    pub book_id: Option<RecordId>,
    /// Title at borrow time.
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub book_name: String,
    /// Author at borrow time.
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub author: String,
    /// Publisher at borrow time.
    #[serde(default, deserialize_with = "lenient::text")]
    pub publishing_house: Option<String>,
    /// Free-text language.
    #[serde(default, deserialize_with = "lenient::text")]
    pub language: Option<String>,
    /// Raw ISO-8601 timestamp.
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub borrow_date: String,
    /// Open enumeration; see [`STATUS_BORROWED`] and [`STATUS_RETURNED`].
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub status: String,
}

impl BorrowRecord {
    /// Returns `true` while the loan is still open.
    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        self.status == STATUS_BORROWED
    }

    /// Language if present and non-empty.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        non_empty(self.language.as_deref())
    }

    /// Publisher if present and non-empty.
    #[must_use]
    pub fn publishing_house(&self) -> Option<&str> {
        non_empty(self.publishing_house.as_deref())
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// A library member.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    /// Unique within a snapshot.
    #[serde(default, deserialize_with = "lenient::id_or_empty")]
    pub id: RecordId,
    /// Display name.
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    /// Contact address, if the backend exposes it.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role label, if the backend exposes it.
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Every borrow event of this member, in backend order.
    #[serde(default, deserialize_with = "lenient::history")]
    pub history: Vec<BorrowRecord>,
}

impl User {
    /// Loans this member has not returned yet.
    #[must_use]
    pub fn currently_borrowed(&self) -> Vec<BorrowedBook> {
        self.history
            .iter()
            .filter(|r| r.is_borrowed())
            .map(BorrowedBook::from)
            .collect()
    }
}

/// Projection of an open loan for the member profile view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowedBook {
    /// Catalogue id of the book.
    pub id: Option<RecordId>,
    /// Title.
    pub name: String,
    /// Author.
    pub author: String,
    /// Publisher.
    pub publishing_house: Option<String>,
    /// Raw borrow timestamp.
    pub borrow_date: String,
}

impl From<&BorrowRecord> for BorrowedBook {
    fn from(r: &BorrowRecord) -> Self {
        Self {
            id: r.book_id.clone(),
            name: r.book_name.clone(),
            author: r.author.clone(),
            publishing_house: r.publishing_house.clone(),
            borrow_date: r.borrow_date.clone(),
        }
    }
}

/// A catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Book {
    /// Catalogue id.
    #[serde(default, deserialize_with = "lenient::id_or_empty")]
    pub id: RecordId,
    /// Title.
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    /// Author.
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub author: String,
    /// Language.
    #[serde(default, deserialize_with = "lenient::text")]
    pub language: Option<String>,
    /// Publisher.
    #[serde(default, deserialize_with = "lenient::text")]
    pub publishing_house: Option<String>,
    /// ISBN; numeric values are kept in their decimal string form.
    #[serde(default, deserialize_with = "lenient::text")]
    pub isbn: Option<String>,
    /// Cover image URL.
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: Option<String>,
    /// Member currently associated with the book.
    #[serde(default, deserialize_with = "lenient::id")]
    pub user_id: Option<RecordId>,
    /// List price.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub price: Option<Decimal>,
    /// Availability; only a literal `true` from the backend marks a book available.
    #[serde(default, deserialize_with = "lenient::strict_true")]
    pub status: bool,
    /// Creation timestamp as received.
    #[serde(
        default,
        rename = "createdAt",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
    /// Last update timestamp as received.
    #[serde(
        default,
        rename = "updatedAt",
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

impl Book {
    /// Returns `true` if the book can be lent out.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.status
    }
}

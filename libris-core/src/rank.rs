//! Group, count and rank: the top borrowers, languages and publishers lists.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use libris_types::{
    DEFAULT_TOP_BORROWERS, DEFAULT_TOP_LANGUAGES, DEFAULT_TOP_PUBLISHERS, LanguageCount,
    PublisherCount, RecordId, TopBorrower, User,
};

use crate::snapshot::history_records;

/// One ranked group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<K> {
    /// Grouping key.
    pub key: K,
    /// Number of items that mapped to `key`.
    pub count: usize,
    /// Display label derived from `key`.
    pub label: String,
}

/// Group `items` by `key_of`, count each group, and keep the `limit` largest.
///
/// Items for which `key_of` returns `None` are left out. The result is sorted
/// by descending count. Among equal counts the sort is stable over the order
/// in which groups were first seen, but callers must not rely on any
/// particular order between ties. `label_of` runs only for surviving groups.
///
/// ```
/// use libris_core::rank::rank;
///
/// let words = ["b", "a", "b", "c", "b", "a"];
/// let top = rank(words, |w| Some(*w), |w| w.to_uppercase(), 2);
/// assert_eq!(top.len(), 2);
/// assert_eq!((top[0].key, top[0].count, top[0].label.as_str()), ("b", 3, "B"));
/// assert_eq!((top[1].key, top[1].count), ("a", 2));
/// ```
pub fn rank<T, K, I, KF, LF>(items: I, mut key_of: KF, mut label_of: LF, limit: usize) -> Vec<Ranked<K>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    KF: FnMut(&T) -> Option<K>,
    LF: FnMut(&K) -> String,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, usize)> = Vec::new();

    for item in items {
        let Some(key) = key_of(&item) else {
            continue;
        };
        match slots.entry(key) {
            Entry::Occupied(slot) => groups[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                groups.push((slot.key().clone(), 1));
                slot.insert(groups.len() - 1);
            }
        }
    }

    // Stable: ties keep first-seen order.
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups.truncate(limit);

    groups
        .into_iter()
        .map(|(key, count)| {
            let label = label_of(&key);
            Ranked { key, count, label }
        })
        .collect()
}

/// Members with the most borrow events, at most [`DEFAULT_TOP_BORROWERS`].
#[must_use]
pub fn top_borrowers(users: &[User]) -> Vec<TopBorrower> {
    top_borrowers_with_limit(users, DEFAULT_TOP_BORROWERS)
}

/// Members with the most borrow events.
///
/// Each history entry counts once for its member, so the count is the size of
/// the history (repeat borrows of one book included). Members with an empty
/// history do not appear.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "libris_core::rank::top_borrowers",
        skip(users),
        fields(users = users.len(), limit = limit),
    )
)]
#[must_use]
pub fn top_borrowers_with_limit(users: &[User], limit: usize) -> Vec<TopBorrower> {
    let mut names: HashMap<&RecordId, &str> = HashMap::with_capacity(users.len());
    for user in users {
        names.entry(&user.id).or_insert(user.name.as_str());
    }

    let events = users
        .iter()
        .flat_map(|user| user.history.iter().map(move |_| user));

    rank(
        events,
        |user| Some(user.id.clone()),
        |id| names.get(id).map(|n| (*n).to_string()).unwrap_or_default(),
        limit,
    )
    .into_iter()
    .map(|r| TopBorrower {
        id: r.key,
        count: r.count,
        name: r.label,
    })
    .collect()
}

/// Most borrowed languages, at most [`DEFAULT_TOP_LANGUAGES`].
#[must_use]
pub fn top_languages(users: &[User]) -> Vec<LanguageCount> {
    top_languages_with_limit(users, DEFAULT_TOP_LANGUAGES)
}

/// Most borrowed languages. Entries without a language are ignored.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "libris_core::rank::top_languages",
        skip(users),
        fields(users = users.len(), limit = limit),
    )
)]
#[must_use]
pub fn top_languages_with_limit(users: &[User], limit: usize) -> Vec<LanguageCount> {
    rank(
        history_records(users),
        |r| r.language().map(str::to_owned),
        String::clone,
        limit,
    )
    .into_iter()
    .map(|r| LanguageCount {
        language: r.key,
        count: r.count,
    })
    .collect()
}

/// Most borrowed publishers, at most [`DEFAULT_TOP_PUBLISHERS`].
#[must_use]
pub fn top_publishers(users: &[User]) -> Vec<PublisherCount> {
    top_publishers_with_limit(users, DEFAULT_TOP_PUBLISHERS)
}

/// Most borrowed publishers. Entries without a publisher are ignored.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "libris_core::rank::top_publishers",
        skip(users),
        fields(users = users.len(), limit = limit),
    )
)]
#[must_use]
pub fn top_publishers_with_limit(users: &[User], limit: usize) -> Vec<PublisherCount> {
    rank(
        history_records(users),
        |r| r.publishing_house().map(str::to_owned),
        String::clone,
        limit,
    )
    .into_iter()
    .map(|r| PublisherCount {
        name: r.key,
        count: r.count,
    })
    .collect()
}

use std::collections::HashSet;
use url::Url;

/// Insertion-ordered list of absolute URLs without duplicates
///
/// Membership is exact string match on the serialized URL.
#[derive(Debug, Clone, Default)]
pub struct LinkList {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl LinkList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `url` unless it is already present
    ///
    /// Returns true if the URL was new.
    pub fn insert(&mut self, url: &Url) -> bool {
        self.insert_str(url.as_str())
    }

    /// String form of [`LinkList::insert`]
    pub fn insert_str(&mut self, url: &str) -> bool {
        if self.seen.contains(url) {
            return false;
        }
        self.seen.insert(url.to_string());
        self.ordered.push(url.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// URLs in the order they were first inserted
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

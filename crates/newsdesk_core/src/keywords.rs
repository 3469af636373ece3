use std::collections::HashSet;

/// Ordered, duplicate-free collection of active search keywords.
///
/// Order follows first insertion. Removing a keyword leaves the remaining
/// ones where they were. Equality is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordSet {
    ordered: Vec<String>,
    members: HashSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `raw` on whitespace runs and appends every token not already
    /// present. Returns how many tokens were added.
    pub fn merge_typed(&mut self, raw: &str) -> usize {
        let mut added = 0;
        for token in raw.split_whitespace() {
            if self.insert(token) {
                added += 1;
            }
        }
        added
    }

    /// Removes `keyword` if present, otherwise appends it.
    ///
    /// Returns `true` when the keyword is present afterwards. Any string is
    /// accepted, including the empty one.
    pub fn toggle(&mut self, keyword: &str) -> bool {
        if self.members.remove(keyword) {
            self.ordered.retain(|existing| existing != keyword);
            false
        } else {
            self.members.insert(keyword.to_owned());
            self.ordered.push(keyword.to_owned());
            true
        }
    }

    pub fn clear(&mut self) {
        self.ordered.clear();
        self.members.clear();
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.members.contains(keyword)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    /// Search string sent to the fetch endpoint: keywords joined by a single space.
    pub fn query(&self) -> String {
        self.ordered.join(" ")
    }

    fn insert(&mut self, token: &str) -> bool {
        if self.members.contains(token) {
            return false;
        }
        self.members.insert(token.to_owned());
        self.ordered.push(token.to_owned());
        true
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for keyword in iter {
            set.insert(keyword.as_ref());
        }
        set
    }
}

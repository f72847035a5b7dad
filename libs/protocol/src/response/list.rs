//! Paginated list and delete envelopes.

use serde::Deserialize;

/// Paginated collection wrapper: `object` is always `"list"`, `count` is
/// the number of items returned.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseList<T> {
    pub object: String,
    #[serde(default)]
    pub count: i64,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> ResponseList<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for ResponseList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResponseList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Acknowledgement returned by delete endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse<Id> {
    pub id: Id,
    #[serde(default = "default_deleted")]
    pub deleted: bool,
}

fn default_deleted() -> bool {
    true
}

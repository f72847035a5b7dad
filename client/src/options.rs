//! Pagination options for list operations.

/// Optional `count`/`offset` pagination for list calls. The server
/// enforces its own maximum count and rejects requests above it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    count: Option<i64>,
    offset: Option<i64>,
}

impl ListOptions {
    /// No pagination parameters: the server's default page.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub(crate) fn to_query(self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(count) = self.count {
            query.push(("count".to_string(), count.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        query
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

use std::fmt;

/// A queryable collection of the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// `/blocks`
    Blocks,
    /// `/batches`
    Batches,
    /// `/transactions`
    Transactions,
    /// `/state`
    State,
}

impl Resource {
    /// Returns the path segment of the collection.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Resource::Blocks => "blocks",
            Resource::Batches => "batches",
            Resource::Transactions => "transactions",
            Resource::State => "state",
        }
    }

    /// Name of the query parameter selecting single items of the collection.
    pub fn id_param(&self) -> &'static str {
        match self {
            Resource::State => "address",
            _ => "id",
        }
    }

    /// Whether list queries of the collection honor the `count` parameter.
    pub fn supports_count(&self) -> bool {
        matches!(self, Resource::Transactions | Resource::State)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

/// Optional filter parameters of a list query.
///
/// At most one combination of the parameters is sent, see [`QueryFilter::query_pairs`].
///
/// ```rust
/// use ledger_rest_api::{QueryFilter, Resource};
///
/// let filter = QueryFilter::new().start("0x0002").limit(5).head("abc");
/// assert_eq!(
///     filter.query_pairs(Resource::Blocks),
///     vec![("start", Some("0x0002".to_string())), ("limit", Some("5".to_string()))]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    /// Chain head the query is evaluated against.
    pub head: Option<String>,
    /// Item identifier(s), or the address prefix for state queries.
    pub id: Option<String>,
    /// Paging cursor.
    pub start: Option<String>,
    /// Page size.
    pub limit: Option<u64>,
    /// Number of items, honored by transactions and state only.
    pub count: Option<u64>,
    /// Reverse the listing order.
    pub reverse: bool,
}

impl QueryFilter {
    /// Creates an empty filter, which fetches the unfiltered collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chain head.
    pub fn head(mut self, head: impl Into<String>) -> Self {
        self.head = Some(head.into());
        self
    }

    /// Sets the item identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the state address, an alias of [`QueryFilter::id`] for state queries.
    pub fn address(self, address: impl Into<String>) -> Self {
        self.id(address)
    }

    /// Sets the paging cursor.
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Sets the page size.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the item count.
    pub fn count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets the reverse flag.
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Selects the query parameters sent for `resource`.
    ///
    /// The first matching rule wins, so later combinations are never reached
    /// once an earlier one applies:
    ///
    /// 1. head and id
    /// 2. start and limit
    /// 3. limit
    /// 4. start
    /// 5. head
    /// 6. id (`address` for state)
    /// 7. count, for resources that [support it](Resource::supports_count)
    /// 8. reverse, sent as a key without value
    /// 9. nothing
    pub fn query_pairs(&self, resource: Resource) -> Vec<(&'static str, Option<String>)> {
        let id_param = resource.id_param();
        match self {
            QueryFilter {
                head: Some(head),
                id: Some(id),
                ..
            } => vec![("head", Some(head.clone())), (id_param, Some(id.clone()))],
            QueryFilter {
                start: Some(start),
                limit: Some(limit),
                ..
            } => vec![
                ("start", Some(start.clone())),
                ("limit", Some(limit.to_string())),
            ],
            QueryFilter {
                limit: Some(limit), ..
            } => vec![("limit", Some(limit.to_string()))],
            QueryFilter {
                start: Some(start), ..
            } => vec![("start", Some(start.clone()))],
            QueryFilter {
                head: Some(head), ..
            } => vec![("head", Some(head.clone()))],
            QueryFilter { id: Some(id), .. } => vec![(id_param, Some(id.clone()))],
            QueryFilter {
                count: Some(count),
                ..
            } if resource.supports_count() => vec![("count", Some(count.to_string()))],
            QueryFilter { reverse: true, .. } => vec![("reverse", None)],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &'static str, value: &str) -> (&'static str, Option<String>) {
        (key, Some(value.to_string()))
    }

    #[test]
    fn test_head_and_id_win_over_everything() {
        let filter = QueryFilter::new()
            .head("h1")
            .id("i1")
            .start("s1")
            .limit(3)
            .count(2)
            .reverse(true);
        assert_eq!(
            filter.query_pairs(Resource::Blocks),
            vec![pair("head", "h1"), pair("id", "i1")]
        );
        assert_eq!(
            filter.query_pairs(Resource::State),
            vec![pair("head", "h1"), pair("address", "i1")]
        );
    }

    #[test]
    fn test_start_and_limit_shadow_single_params() {
        let filter = QueryFilter::new().start("s1").limit(3).head("h1");
        assert_eq!(
            filter.query_pairs(Resource::Transactions),
            vec![pair("start", "s1"), pair("limit", "3")]
        );
    }

    #[test]
    fn test_limit_before_start_before_head() {
        let filter = QueryFilter::new().limit(7).head("h1").reverse(true);
        assert_eq!(
            filter.query_pairs(Resource::Batches),
            vec![pair("limit", "7")]
        );

        let filter = QueryFilter::new().start("s1").head("h1");
        assert_eq!(
            filter.query_pairs(Resource::Batches),
            vec![pair("start", "s1")]
        );

        let filter = QueryFilter::new().head("h1").count(4);
        assert_eq!(
            filter.query_pairs(Resource::State),
            vec![pair("head", "h1")]
        );
    }

    #[test]
    fn test_id_alone_uses_resource_param() {
        let filter = QueryFilter::new().address("1cf126");
        assert_eq!(
            filter.query_pairs(Resource::State),
            vec![pair("address", "1cf126")]
        );
        assert_eq!(
            filter.query_pairs(Resource::Blocks),
            vec![pair("id", "1cf126")]
        );
    }

    #[test]
    fn test_count_only_for_transactions_and_state() {
        let filter = QueryFilter::new().count(5);
        assert_eq!(
            filter.query_pairs(Resource::Transactions),
            vec![pair("count", "5")]
        );
        assert_eq!(
            filter.query_pairs(Resource::State),
            vec![pair("count", "5")]
        );
        assert!(filter.query_pairs(Resource::Blocks).is_empty());
        assert!(filter.query_pairs(Resource::Batches).is_empty());

        let filter = filter.reverse(true);
        assert_eq!(
            filter.query_pairs(Resource::Transactions),
            vec![pair("count", "5")]
        );
        assert_eq!(
            filter.query_pairs(Resource::Blocks),
            vec![("reverse", None)]
        );
    }

    #[test]
    fn test_reverse_and_empty() {
        assert_eq!(
            QueryFilter::new()
                .reverse(true)
                .query_pairs(Resource::Blocks),
            vec![("reverse", None)]
        );
        assert!(QueryFilter::new()
            .reverse(false)
            .query_pairs(Resource::Blocks)
            .is_empty());
    }
}

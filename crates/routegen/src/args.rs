//! Render-time value collections: placeholder arguments and query
//! parameters.
//!
//! Both are insertion-ordered lists of string pairs. Values are taken
//! via `ToString`, so numeric values coerce the way callers expect
//! (`123` substitutes as `"123"`).

use crate::PLACEHOLDER_MARKER;

/// Placeholder arguments for a single route node.
///
/// Substitution is scoped to the node the arguments are given to: a
/// node never substitutes its ancestors' or descendants' placeholders.
/// Arguments naming no placeholder in that node are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pairs: Vec<(String, String)>,
}

impl Args {
    /// An empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a placeholder value, replacing any previous value for the
    /// same name.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let name = name.into();
        let value = value.to_string();
        if let Some(pair) = self.pairs.iter_mut().find(|(n, _)| *n == name) {
            pair.1 = value;
        } else {
            self.pairs.push((name, value));
        }
        self
    }

    /// Look up a value by placeholder name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Substitute `segment` if it is a placeholder token naming one of
    /// these arguments; otherwise return it unchanged.
    ///
    /// Only whole-segment tokens match: `":postId"` substitutes,
    /// `"x:postId"` does not.
    pub(crate) fn apply(&self, segment: &str) -> String {
        segment
            .strip_prefix(PLACEHOLDER_MARKER)
            .and_then(|name| self.get(name))
            .map_or_else(|| segment.to_owned(), ToOwned::to_owned)
    }
}

/// Query parameters appended to a built route.
///
/// Encoding preserves the order keys were presented in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// An empty query. Passing it to
    /// [`RouteNode::build_with_query`](crate::RouteNode::build_with_query)
    /// still appends a `?`: providing a query and providing an empty
    /// one are distinct from providing none.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value for the same key.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        let value = value.to_string();
        if let Some(pair) = self.pairs.iter_mut().find(|(k, _)| *k == key) {
            pair.1 = value;
        } else {
            self.pairs.push((key, value));
        }
        self
    }

    /// The parameters in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_args_coerce_values_to_strings() {
        let args = Args::new().set("postId", 123).set("flag", true);
        assert_eq!(args.get("postId"), Some("123"));
        assert_eq!(args.get("flag"), Some("true"));
    }

    #[test]
    fn test_args_last_set_wins() {
        let args = Args::new().set("id", 1).set("id", 2);
        assert_eq!(args.get("id"), Some("2"));
    }

    #[test]
    fn test_apply_substitutes_whole_token_only() {
        let args = Args::new().set("postId", 123);
        assert_eq!(args.apply(":postId"), "123");
        assert_eq!(args.apply("posts"), "posts");
        assert_eq!(args.apply("x:postId"), "x:postId");
        assert_eq!(args.apply(":other"), ":other");
    }

    #[test]
    fn test_query_preserves_insertion_order() {
        let query = Query::new().set("b", 2).set("a", 1);
        let pairs: Vec<_> = query.pairs().collect();
        assert_eq!(pairs, [("b", "2"), ("a", "1")]);
    }

    #[test]
    fn test_query_set_replaces_in_place() {
        let query = Query::new().set("a", 1).set("b", 2).set("a", 3);
        let pairs: Vec<_> = query.pairs().collect();
        assert_eq!(pairs, [("a", "3"), ("b", "2")]);
    }
}

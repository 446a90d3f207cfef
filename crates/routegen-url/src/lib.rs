//! URL fragment utilities for routegen.
//!
//! Two stateless helpers sit underneath the route builder:
//!
//! - [`join`]: order-preserving path-fragment joining with separator
//!   normalization
//! - [`encode_query`]: percent-encoded query-string assembly
//!
//! Both are pure functions over their inputs. Neither touches a URL
//! scheme or authority; fragments are treated as opaque path text.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};

/// Characters left unescaped in query strings, per RFC 3986
/// unreserved: A-Z a-z 0-9 - . _ ~
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode one query-string key or value.
fn query_escape(input: &str) -> String {
    percent_encode(input.as_bytes(), QUERY_ENCODE_SET).to_string()
}

/// Join path fragments into one normalized path string.
///
/// Fragments are concatenated in order with exactly one `/` between
/// them. Empty fragments are dropped, runs of separators (whether
/// between fragments or inside one) collapse to a single `/`, and a
/// leading `/` on the first non-empty fragment is preserved so
/// absolute paths stay absolute.
///
/// # Example
///
/// ```
/// use routegen_url::join;
///
/// assert_eq!(join(["app.com", "posts"]), "app.com/posts");
/// assert_eq!(join(["", "app.com", ""]), "app.com");
/// assert_eq!(join(["/", "comments", ":commentId"]), "/comments/:commentId");
/// ```
pub fn join<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut raw = String::new();
    for fragment in fragments {
        let fragment = fragment.as_ref();
        if fragment.is_empty() {
            continue;
        }
        if raw.is_empty() {
            raw.push_str(fragment);
        } else {
            if !raw.ends_with('/') {
                raw.push('/');
            }
            raw.push_str(fragment.trim_start_matches('/'));
        }
    }

    // Collapse duplicate separators introduced by the fragments themselves.
    let mut path = String::with_capacity(raw.len());
    let mut prev_was_separator = false;
    for ch in raw.chars() {
        if ch == '/' {
            if !prev_was_separator {
                path.push(ch);
            }
            prev_was_separator = true;
        } else {
            path.push(ch);
            prev_was_separator = false;
        }
    }
    path
}

/// Encode key-value pairs as a query string.
///
/// Pairs are `=`-separated and `&`-joined in the order presented; keys
/// and values are percent-encoded. No leading `?` is added. An empty
/// pair sequence encodes to the empty string.
///
/// # Example
///
/// ```
/// use routegen_url::encode_query;
///
/// let encoded = encode_query([("page", "abc"), ("pageSize", "abc")]);
/// assert_eq!(encoded, "page=abc&pageSize=abc");
/// ```
pub fn encode_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", query_escape(key), query_escape(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_join_plain_fragments() {
        assert_eq!(join(["app.com", "posts"]), "app.com/posts");
        assert_eq!(join(["a", "b", "c"]), "a/b/c");
    }

    #[test]
    fn test_join_drops_empty_fragments() {
        assert_eq!(join(["", "app.com"]), "app.com");
        assert_eq!(join(["app.com", "", "posts", ""]), "app.com/posts");
        assert_eq!(join::<_, &str>([]), "");
        assert_eq!(join(["", "", ""]), "");
    }

    #[test]
    fn test_join_normalizes_separators() {
        assert_eq!(join(["app.com/", "/posts"]), "app.com/posts");
        assert_eq!(join(["app.com//posts", "123"]), "app.com/posts/123");
        assert_eq!(join(["a/", "/b/", "/c"]), "a/b/c");
    }

    #[test]
    fn test_join_preserves_leading_separator() {
        assert_eq!(join(["/", "comments"]), "/comments");
        assert_eq!(join(["/comments", ":commentId"]), "/comments/:commentId");
        assert_eq!(join(["/"]), "/");
    }

    #[test]
    fn test_join_does_not_invent_leading_separator() {
        // An empty first fragment must not leave a separator behind.
        assert_eq!(join(["", "posts", "123"]), "posts/123");
    }

    #[test]
    fn test_encode_query_preserves_order() {
        let encoded = encode_query([("page", "abc"), ("pageSize", "abc")]);
        assert_eq!(encoded, "page=abc&pageSize=abc");

        let reversed = encode_query([("pageSize", "abc"), ("page", "abc")]);
        assert_eq!(reversed, "pageSize=abc&page=abc");
    }

    #[test]
    fn test_encode_query_escapes_reserved() {
        assert_eq!(encode_query([("q", "a b")]), "q=a%20b");
        assert_eq!(encode_query([("k&", "v=")]), "k%26=v%3D");
        assert_eq!(encode_query([("path", "a/b")]), "path=a%2Fb");
    }

    #[test]
    fn test_encode_query_keeps_unreserved() {
        assert_eq!(encode_query([("k-._~", "v-._~")]), "k-._~=v-._~");
    }

    #[test]
    fn test_encode_query_empty() {
        assert_eq!(encode_query(std::iter::empty::<(&str, &str)>()), "");
    }
}

//! Declarative route-path builder for routegen.
//!
//! A route tree is declared once as an immutable [`RouteDef`] and then
//! traversed any number of times to render path strings. Each node is
//! declared independently of its position in the tree; the library
//! wires parent paths into children during traversal, so a node always
//! knows how to render its full ancestor chain on demand.
//!
//! Rendering happens in three steps:
//!
//! 1. **Define** the tree shape with [`RouteDef::new`] and
//!    [`RouteDef::child`]. Segments starting with `:` are placeholders
//!    substituted at render time.
//! 2. **Bind** the tree root with [`RouteDef::root`], which yields a
//!    [`Bound`] configurator. Child configurators are produced by the
//!    library as the traversal descends; callers never bind children
//!    themselves.
//! 3. **Configure** each level with [`Bound::node`] (or
//!    [`Bound::with_args`] / [`Bound::as_root`]) and finish with
//!    [`RouteNode::build`].
//!
//! # Example
//!
//! ```
//! use routegen::{Args, RouteDef};
//!
//! let routes = RouteDef::new(["app.com"]).child(
//!     "posts",
//!     RouteDef::new(["posts"]).child("get_by_id", RouteDef::new([":postId"])),
//! );
//!
//! let app = routes.root().node();
//! let posts = app.child("posts").unwrap().node();
//! let post = posts
//!     .child("get_by_id")
//!     .unwrap()
//!     .with_args(Args::new().set("postId", 123));
//!
//! assert_eq!(post.build(), "app.com/posts/123");
//! ```
//!
//! Definitions are plain data: they never mutate during rendering, are
//! `Send + Sync`, and can be deserialized from TOML or JSON via serde.

mod args;
mod error;
mod render;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use args::{Args, Query};
pub use error::RouteError;
pub use render::{Bound, RenderOptions, RouteNode};

/// Marker character introducing a placeholder segment.
pub(crate) const PLACEHOLDER_MARKER: char = ':';

/// An immutable route definition: one node of the route tree.
///
/// Holds an ordered segment list and a mapping of child name to nested
/// definition. Segment syntax is not validated; a placeholder that is
/// never given an argument simply renders as its literal token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteDef {
    segments: Vec<String>,
    children: BTreeMap<String, RouteDef>,
}

impl Default for RouteDef {
    /// A pass-through node: a single empty segment and no children.
    fn default() -> Self {
        Self {
            segments: vec![String::new()],
            children: BTreeMap::new(),
        }
    }
}

impl RouteDef {
    /// Define a route node from its path segments.
    ///
    /// Segments prefixed with `:` are placeholders, e.g. `":postId"`.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            children: BTreeMap::new(),
        }
    }

    /// Define a node that contributes no path component of its own.
    ///
    /// Useful for grouping children under a name without lengthening
    /// the rendered path.
    #[must_use]
    pub fn passthrough() -> Self {
        Self::default()
    }

    /// Attach a named child definition, replacing any previous child
    /// of the same name.
    #[must_use]
    pub fn child(mut self, name: impl Into<String>, def: RouteDef) -> Self {
        self.children.insert(name.into(), def);
        self
    }

    /// Bind this definition as the root of a render traversal.
    ///
    /// The returned configurator has an empty ancestor prefix. The
    /// definition is borrowed, not consumed: the same tree can root
    /// arbitrarily many independent traversals.
    #[must_use]
    pub fn root(&self) -> Bound<'_> {
        Bound::bind(self, String::new())
    }

    /// The node's own segments, in declaration order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Look up a child definition by name.
    #[must_use]
    pub fn get_child(&self, name: &str) -> Option<&RouteDef> {
        self.children.get(name)
    }

    /// Names of the declared children.
    pub fn child_names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }
}

//! Render-time traversal: bound configurators and route nodes.
//!
//! A [`Bound`] pairs a borrowed [`RouteDef`] with the rendered path of
//! its parent. The parent path is captured once, when the parent node
//! is configured, and never changes afterwards; there is no
//! re-parenting. Configuring a `Bound` produces a [`RouteNode`] whose
//! path already reflects this level's root-override flag and
//! placeholder arguments, so `build` is a plain read.

use crate::{Args, PLACEHOLDER_MARKER, Query, RouteDef, RouteError};

/// Render-time options for one level of the traversal.
///
/// Choices made at one node do not propagate to its children or
/// siblings; each level decides its own options.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Treat this node as the new root: exclude its own segments and
    /// every ancestor segment from the output, but still mark the
    /// result as absolute with a single leading `/`.
    pub root_override: bool,
    /// Values for this node's own placeholder segments.
    pub args: Args,
}

/// A route definition bound to its parent's rendered path, awaiting
/// render-time options.
///
/// Produced by [`RouteDef::root`] for tree roots and by
/// [`RouteNode::child`] during descent.
#[derive(Debug, Clone)]
pub struct Bound<'d> {
    def: &'d RouteDef,
    parent_path: String,
}

impl<'d> Bound<'d> {
    pub(crate) fn bind(def: &'d RouteDef, parent_path: String) -> Self {
        Self { def, parent_path }
    }

    /// Configure this level with explicit options.
    #[must_use]
    pub fn configure(&self, opts: &RenderOptions) -> RouteNode<'d> {
        let path = if opts.root_override {
            // The node and its ancestors contribute nothing, but the
            // output is still marked absolute.
            String::from('/')
        } else {
            let mut fragments = Vec::with_capacity(self.def.segments().len() + 1);
            fragments.push(self.parent_path.clone());
            for segment in self.def.segments() {
                fragments.push(opts.args.apply(segment));
            }
            routegen_url::join(fragments)
        };
        tracing::trace!(path = %path, root_override = opts.root_override, "configured route node");
        RouteNode {
            def: self.def,
            path,
        }
    }

    /// Configure with default options: no root-override, no arguments.
    #[must_use]
    pub fn node(&self) -> RouteNode<'d> {
        self.configure(&RenderOptions::default())
    }

    /// Configure with placeholder arguments for this level.
    #[must_use]
    pub fn with_args(&self, args: Args) -> RouteNode<'d> {
        self.configure(&RenderOptions {
            root_override: false,
            args,
        })
    }

    /// Configure with the root-override flag set.
    #[must_use]
    pub fn as_root(&self) -> RouteNode<'d> {
        self.configure(&RenderOptions {
            root_override: true,
            args: Args::new(),
        })
    }
}

/// A renderable route node: the result of configuring a [`Bound`].
///
/// Exposes the rendered path, query-string appending, and bound
/// configurators for the node's declared children. Nodes are cheap,
/// short-lived values; create one per traversal and discard it after
/// building.
#[derive(Debug, Clone)]
pub struct RouteNode<'d> {
    def: &'d RouteDef,
    path: String,
}

impl<'d> RouteNode<'d> {
    /// The rendered path for this node, without any query string.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Materialize the route string.
    ///
    /// Never appends a `?`; use [`build_with_query`](Self::build_with_query)
    /// to attach query parameters.
    #[must_use]
    pub fn build(&self) -> String {
        self.path.clone()
    }

    /// Materialize the route string with a query string appended.
    ///
    /// The result is `build()` plus `?` plus the encoding of `query`.
    /// An empty `query` still produces a trailing `?`.
    #[must_use]
    pub fn build_with_query(&self, query: &Query) -> String {
        format!("{}?{}", self.path, routegen_url::encode_query(query.pairs()))
    }

    /// Materialize the route string, failing on unresolved placeholders.
    ///
    /// The lenient [`build`](Self::build) passes unresolved tokens
    /// through verbatim, which suits template routes but can mask a
    /// typo in an argument name. This variant returns
    /// [`RouteError::UnresolvedPlaceholder`] for the first placeholder
    /// token remaining in the output.
    pub fn build_strict(&self) -> Result<String, RouteError> {
        if let Some(name) = self
            .path
            .split('/')
            .find_map(|segment| segment.strip_prefix(PLACEHOLDER_MARKER))
        {
            return Err(RouteError::UnresolvedPlaceholder {
                name: name.to_owned(),
            });
        }
        Ok(self.path.clone())
    }

    /// The bound configurator for a declared child.
    ///
    /// The child's ancestor prefix is this node's rendered path, so it
    /// reflects this level's arguments and root-override. Returns
    /// `None` for a name the definition does not declare.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<Bound<'d>> {
        self.def
            .get_child(name)
            .map(|def| Bound::bind(def, self.path.clone()))
    }
}

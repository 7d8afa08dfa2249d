//! Navigation table mapping request paths to views.
//!
//! Three views are registered: Home (`/`), Domain (`/domain`) and Domains
//! (`/domains`). The Domains view is resolved lazily on first use. The whole
//! table can live under a base path such as `/app`.

use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Logical view selected by a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    Home,
    Domain,
    Domains,
}

impl View {
    pub fn name(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Domain => "Domain",
            View::Domains => "Domains",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

enum Loader {
    Eager(View),
    Lazy(fn() -> View),
}

/// A registered path and the view it resolves to.
pub struct Route {
    path: &'static str,
    loader: Loader,
    resolved: OnceLock<View>,
}

impl Route {
    fn eager(path: &'static str, view: View) -> Self {
        Self {
            path,
            loader: Loader::Eager(view),
            resolved: OnceLock::new(),
        }
    }

    fn lazy(path: &'static str, load: fn() -> View) -> Self {
        Self {
            path,
            loader: Loader::Lazy(load),
            resolved: OnceLock::new(),
        }
    }

    /// Path relative to the table's base.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Returns the view, loading it first if the route is lazy.
    pub fn view(&self) -> View {
        match self.loader {
            Loader::Eager(view) => view,
            Loader::Lazy(load) => *self.resolved.get_or_init(|| {
                tracing::debug!(path = self.path, "loading lazy view");
                load()
            }),
        }
    }

    /// Whether the view is available without loading.
    pub fn is_loaded(&self) -> bool {
        match self.loader {
            Loader::Eager(_) => true,
            Loader::Lazy(_) => self.resolved.get().is_some(),
        }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

/// Path-to-view table.
#[derive(Debug)]
pub struct NavigationTable {
    base: String,
    routes: Vec<Route>,
}

impl NavigationTable {
    /// Builds the table under `base` (`/` for none).
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize(base).to_string(),
            routes: vec![
                Route::eager("/", View::Home),
                Route::eager("/domain", View::Domain),
                Route::lazy("/domains", load_domains_view),
            ],
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolves a request path to its route.
    ///
    /// Trailing slashes are ignored. Paths outside the base, or not
    /// registered, resolve to `None`.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let path = normalize(path);

        let relative = if self.base == "/" {
            path
        } else {
            match path.strip_prefix(self.base.as_str())? {
                "" => "/",
                rest if rest.starts_with('/') => rest,
                _ => return None,
            }
        };

        self.routes.iter().find(|route| route.path == relative)
    }

    /// Full path of `route`, including the base.
    pub fn full_path(&self, route: &Route) -> String {
        match (self.base.as_str(), route.path()) {
            ("/", path) => path.to_string(),
            (base, "/") => base.to_string(),
            (base, path) => format!("{base}{path}"),
        }
    }
}

impl Default for NavigationTable {
    fn default() -> Self {
        Self::new("/")
    }
}

fn load_domains_view() -> View {
    View::Domains
}

/// Strips trailing slashes, keeping a lone `/`.
fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

//! Declarative route table with document-title derivation. Mirrors the
//! single-page navigation model: one live router per session, starting at
//! `/`, transitions driven by navigation events. The title hook never
//! redirects or cancels a transition.

use std::collections::HashMap;

/// Page a route renders. The views themselves live outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Portraits,
    Documentary,
    Albums,
    Blog,
    ArticleDetail,
}

#[derive(Debug, Clone)]
pub struct Route {
    /// Path pattern; segments starting with `:` capture a parameter.
    pub path: &'static str,
    pub name: &'static str,
    /// Title metadata; routes without it fall back to the bare brand title.
    pub title: Option<&'static str>,
    pub page: Page,
}

#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    pub params: HashMap<String, String>,
}

#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    brand: String,
    current_path: String,
    document_title: String,
}

fn default_routes() -> Vec<Route> {
    vec![
        Route {
            path: "/",
            name: "Home",
            title: None,
            page: Page::Home,
        },
        Route {
            path: "/about",
            name: "About",
            title: Some("About"),
            page: Page::About,
        },
        Route {
            path: "/portraits",
            name: "Portraits",
            title: Some("Portraits"),
            page: Page::Portraits,
        },
        Route {
            path: "/documentary",
            name: "Documentary",
            title: Some("Documentary"),
            page: Page::Documentary,
        },
        Route {
            path: "/albums",
            name: "Albums",
            title: Some("Albums"),
            page: Page::Albums,
        },
        Route {
            path: "/blog",
            name: "Blog",
            title: Some("Blog"),
            page: Page::Blog,
        },
        Route {
            path: "/article/:slug",
            name: "ArticleDetail",
            title: None,
            page: Page::ArticleDetail,
        },
    ]
}

/// Matches `path` against `pattern` segment by segment; `:name` segments
/// capture into the returned map. Trailing slashes are not significant.
fn match_path(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let pattern_segments: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (pattern_seg, path_seg) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = pattern_seg.strip_prefix(':') {
            params.insert(name.to_string(), (*path_seg).to_string());
        } else if pattern_seg != path_seg {
            return None;
        }
    }
    Some(params)
}

impl Router {
    /// Registers the default route table and applies the initial transition
    /// to `/`.
    pub fn new(brand: impl Into<String>) -> Self {
        Self::with_routes(brand, default_routes())
    }

    pub fn with_routes(brand: impl Into<String>, routes: Vec<Route>) -> Self {
        let brand = brand.into();
        let mut router = Self {
            routes,
            document_title: brand.clone(),
            brand,
            current_path: "/".to_string(),
        };
        router.navigate("/");
        router
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Title currently applied to the document.
    pub fn document_title(&self) -> &str {
        &self.document_title
    }

    /// Derives the document title for a route: `"<title> | <brand>"`, or the
    /// bare brand when the route carries no title metadata.
    pub fn title_for(&self, route: &Route) -> String {
        match route.title {
            Some(title) => format!("{} | {}", title, self.brand),
            None => self.brand.clone(),
        }
    }

    /// Finds the first registered route matching `path`.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            match_path(route.path, path).map(|params| RouteMatch { route, params })
        })
    }

    /// Performs a navigation transition. On a match the document title is
    /// derived and applied, then the transition completes unconditionally.
    /// An unknown path changes nothing and returns `None`.
    pub fn navigate(&mut self, path: &str) -> Option<&Route> {
        let index = self
            .routes
            .iter()
            .position(|route| match_path(route.path, path).is_some());

        let Some(index) = index else {
            tracing::debug!("No route matches '{}', staying on '{}'", path, self.current_path);
            return None;
        };

        let title = self.title_for(&self.routes[index]);
        tracing::debug!(
            "Navigating '{}' -> '{}' ({})",
            self.current_path,
            path,
            self.routes[index].name
        );
        self.document_title = title;
        self.current_path = path.to_string();
        Some(&self.routes[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_home() {
        let router = Router::new("Aperture Studio");
        assert_eq!(router.current_path(), "/");
        assert_eq!(router.document_title(), "Aperture Studio");
    }

    #[test]
    fn test_match_path_captures_params() {
        let params = match_path("/article/:slug", "/article/first-light").unwrap();
        assert_eq!(params["slug"], "first-light");
        assert!(match_path("/article/:slug", "/about").is_none());
        assert!(match_path("/about", "/about/").is_some());
    }
}

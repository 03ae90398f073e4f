//! Route table and navigation guard
//!
//! Each navigation attempt is evaluated on its own, synchronously, against
//! the logged-in signal at that moment. Nothing carries over between
//! navigations.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteName {
    Home,
    Login,
    CreateBusiness,
    ThankYou,
    Admin,
    Funnel,
    Feedback,
}

#[derive(Debug, Clone)]
pub struct Route {
    pub path: &'static str,
    pub name: RouteName,
    pub requires_auth: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    RedirectToLogin,
}

pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// The application's routes. Static paths are declared before the
    /// business-scoped parameter routes so `/create` never resolves as a
    /// business id.
    pub fn app_routes() -> Self {
        Self {
            routes: vec![
                Route {
                    path: "/",
                    name: RouteName::Home,
                    requires_auth: false,
                },
                Route {
                    path: "/login",
                    name: RouteName::Login,
                    requires_auth: false,
                },
                Route {
                    path: "/create",
                    name: RouteName::CreateBusiness,
                    requires_auth: true,
                },
                Route {
                    path: "/thank-you",
                    name: RouteName::ThankYou,
                    requires_auth: false,
                },
                Route {
                    path: "/admin",
                    name: RouteName::Admin,
                    requires_auth: true,
                },
                Route {
                    path: "/:businessId",
                    name: RouteName::Funnel,
                    requires_auth: false,
                },
                Route {
                    path: "/:businessId/feedback",
                    name: RouteName::Feedback,
                    requires_auth: false,
                },
            ],
        }
    }

    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| matches(route.path, path))
    }

    /// Decide one navigation attempt. A guarded target with the logged-in
    /// signal false redirects to Login; everything else proceeds,
    /// unresolved paths included (the page layer owns its 404 handling).
    pub fn evaluate(&self, path: &str, logged_in: bool) -> NavigationDecision {
        match self.resolve(path) {
            Some(route) if route.requires_auth && !logged_in => {
                NavigationDecision::RedirectToLogin
            }
            _ => NavigationDecision::Allow,
        }
    }
}

/// Pattern match one path against a route pattern; `:param` segments match
/// any single non-empty segment.
fn matches(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = pattern.trim_matches('/').split('/').collect();
    let path_segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return false;
    }
    pattern_segments
        .iter()
        .zip(&path_segments)
        .all(|(pat, seg)| {
            if pat.starts_with(':') {
                !seg.is_empty()
            } else {
                pat == seg
            }
        })
}

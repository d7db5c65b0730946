//! Client route table with the sign-in guard

use strum::{AsRefStr, Display};

pub const LOGIN_PATH: &str = "/login";

#[derive(Display, AsRefStr, Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Home,
    EventDetail(String),
    CheckIn(String),
    Scanner(String),
    Tickets,
    IconicNetwork,
    Profile,
}

impl Page {
    pub fn is_private(&self) -> bool {
        !matches!(self, Page::Login)
    }

    /// Matches a path against the route table
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let page = match segments.as_slice() {
            [] => Page::Home,
            ["login"] => Page::Login,
            ["tickets"] => Page::Tickets,
            ["iconic-network"] => Page::IconicNetwork,
            ["profile"] => Page::Profile,
            ["events", id] => Page::EventDetail((*id).to_owned()),
            ["events", id, "checkin"] => Page::CheckIn((*id).to_owned()),
            // `bip` is an alias kept for printed QR codes
            ["events", id, "scan" | "bip"] => Page::Scanner((*id).to_owned()),
            _ => return None,
        };

        Some(page)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    Render(Page),
    Redirect(&'static str),
    NotFound,
}

/// Private pages redirect to the login page when no token is held
pub fn resolve(path: &str, has_token: bool) -> Resolved {
    match Page::from_path(path) {
        Some(page) if page.is_private() && !has_token => {
            tracing::debug!(path, "Redirecting to login");
            Resolved::Redirect(LOGIN_PATH)
        }
        Some(page) => Resolved::Render(page),
        None => Resolved::NotFound,
    }
}

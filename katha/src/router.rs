//! Screen routing for the dashboard.
//!
//! The router is the host side of the navigation contract: the dispatcher
//! hands it a path and it decides which screen that means. It knows nothing
//! about the catalog; a path naming a story nobody wrote still resolves to a
//! story screen, and the renderer deals with the empty destination.

use katha_core::Navigator;
use tracing::{info, warn};

/// Which view fills the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The card grid.
    Dashboard,
    /// A story's dedicated experience.
    Story { route: String },
    /// Fallback for paths no view claims.
    NotFound { path: String },
}

/// Maps dispatched paths to screens.
#[derive(Debug)]
pub struct ScreenRouter {
    screen: Screen,
}

impl ScreenRouter {
    pub fn new() -> Self {
        Self {
            screen: Screen::Dashboard,
        }
    }

    /// The screen currently on display.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Return to the card grid.
    pub fn go_dashboard(&mut self) {
        self.screen = Screen::Dashboard;
    }

    /// Resolve a path to a screen.
    ///
    /// `/{token}` opens the story view for `token`. Anything else (no
    /// leading slash, empty token, nested segments) falls back to
    /// [`Screen::NotFound`] instead of erroring.
    fn resolve(path: &str) -> Screen {
        match path.strip_prefix('/') {
            Some(route) if !route.is_empty() && !route.contains('/') => Screen::Story {
                route: route.to_string(),
            },
            _ => Screen::NotFound {
                path: path.to_string(),
            },
        }
    }
}

impl Default for ScreenRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for ScreenRouter {
    fn navigate_to(&mut self, path: &str) {
        let screen = Self::resolve(path);
        match &screen {
            Screen::Story { route } => info!(%route, "opening story screen"),
            Screen::NotFound { path } => warn!(%path, "no screen claims this path"),
            Screen::Dashboard => info!("returning to dashboard"),
        }
        self.screen = screen;
    }
}

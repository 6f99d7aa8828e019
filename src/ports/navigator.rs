//! Navigator outbound port. The navigation stack itself lives elsewhere.

/// Top-level tab owning a navigation stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Movies,
    TvShows,
    Favorites,
}

/// Destination pushed onto a tab's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    MovieDetail { movie_id: i64 },
    Search,
}

/// Modal sheet presented over the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sheet {
    Search,
}

/// Navigation abstraction consumed by the screen services.
///
/// Synchronous: implementations only record or forward the intent.
pub trait NavigatorPort: Send + Sync {
    /// Push `route` onto `tab`'s stack. `hide_tab_bar` hides the tab bar while it is shown.
    fn navigate(&self, route: Route, tab: Tab, hide_tab_bar: bool);

    /// Pop the top route of `tab`'s stack.
    fn pop(&self, tab: Tab);

    fn present_sheet(&self, sheet: Sheet);
}

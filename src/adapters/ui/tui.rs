//! Implements InputPort. Inquire-based list and detail screens.
//!
//! Screen services own all state; this adapter only renders snapshots, forwards
//! user choices and follows navigation intents from the ChannelNavigator.

use super::navigator::NavigationEvent;
use super::progress::SpinnerObserver;
use crate::domain::{FetchError, MovieDetail, MovieSummary};
use crate::ports::{FavoritePort, InputPort, MovieDetailPort, NavigatorPort, Route};
use crate::usecases::{FeedState, MovieDetailService, MovieListService};
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Select, Text};
use std::fmt;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::debug;

/// Apply the prompt theme for all inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("▶").with_fg(Color::LightYellow))
        .with_highlighted_option_prefix(Styled::new("➤").with_fg(Color::LightRed));
    inquire::set_global_render_config(config);
}

/// One-line label used in menus: favorite marker, title, year, rating.
fn movie_label(movie: &MovieSummary) -> String {
    let star = if movie.is_favorite { "★" } else { "☆" };
    match movie.release_year() {
        Some(year) => format!("{} {} ({}) {:.1}", star, movie.title, year, movie.vote_average),
        None => format!("{} {} {:.1}", star, movie.title, movie.vote_average),
    }
}

/// Entries of the list screen menu.
enum ListEntry {
    Movie { id: i64, label: String },
    LoadMore,
    Retry,
    Search,
    Quit,
}

impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListEntry::Movie { label, .. } => f.write_str(label),
            ListEntry::LoadMore => f.write_str("↓ Load more"),
            ListEntry::Retry => f.write_str("↻ Retry"),
            ListEntry::Search => f.write_str("🔍 Search loaded movies"),
            ListEntry::Quit => f.write_str("✕ Quit"),
        }
    }
}

fn list_entries(state: &FeedState) -> Vec<ListEntry> {
    let mut entries: Vec<ListEntry> = state
        .items
        .iter()
        .map(|m| ListEntry::Movie {
            id: m.id,
            label: movie_label(m),
        })
        .collect();
    if state.has_more {
        entries.push(ListEntry::LoadMore);
    }
    if state.last_error.is_some() {
        entries.push(ListEntry::Retry);
    }
    entries.push(ListEntry::Search);
    entries.push(ListEntry::Quit);
    entries
}

/// Cancel (Esc) and interrupt (Ctrl-C) both mean "leave this screen".
fn prompt_closed(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

fn prompt_error(e: InquireError) -> FetchError {
    FetchError::new(format!("prompt failed: {}", e))
}

/// TUI adapter. Inquire prompts over the list and detail services.
pub struct TuiInputPort {
    list: Arc<MovieListService>,
    details: Arc<dyn MovieDetailPort>,
    favorites: Arc<dyn FavoritePort>,
    navigator: Arc<dyn NavigatorPort>,
    nav_rx: Mutex<mpsc::UnboundedReceiver<NavigationEvent>>,
    spinner: Arc<SpinnerObserver>,
}

impl TuiInputPort {
    pub fn new(
        list: Arc<MovieListService>,
        details: Arc<dyn MovieDetailPort>,
        favorites: Arc<dyn FavoritePort>,
        navigator: Arc<dyn NavigatorPort>,
        nav_rx: mpsc::UnboundedReceiver<NavigationEvent>,
        spinner: Arc<SpinnerObserver>,
    ) -> Self {
        Self {
            list,
            details,
            favorites,
            navigator,
            nav_rx: Mutex::new(nav_rx),
            spinner,
        }
    }

    /// Follow every queued navigation intent. Screens only emit intents; this is
    /// the single place that acts on them.
    async fn follow_navigation(&self) -> Result<(), FetchError> {
        loop {
            let event = self.nav_rx.lock().await.try_recv();
            let Ok(event) = event else {
                return Ok(());
            };
            debug!(?event, "following navigation");
            match event {
                NavigationEvent::Navigate {
                    route: Route::MovieDetail { movie_id },
                    ..
                } => {
                    self.run_detail(movie_id).await?;
                    // The detail screen may have toggled the favorite.
                    if let Err(e) = self.list.refresh_favorite(movie_id).await {
                        print_error(&e.to_string());
                    }
                }
                NavigationEvent::Navigate {
                    route: Route::Search,
                    ..
                }
                | NavigationEvent::PresentSheet(_) => {
                    if let Some(movie_id) = self.run_search().await? {
                        self.movie_menu(movie_id).await?;
                    }
                }
                // The list is the root of the movies tab.
                NavigationEvent::Pop(_) => {}
            }
        }
    }

    /// Per-movie actions. "Open details" only emits the intent.
    async fn movie_menu(&self, movie_id: i64) -> Result<(), FetchError> {
        let options = vec!["Open details", "Toggle favorite", "Back"];
        let choice = match Select::new("Movie", options).prompt() {
            Ok(choice) => choice,
            Err(e) if prompt_closed(&e) => return Ok(()),
            Err(e) => return Err(prompt_error(e)),
        };
        match choice {
            "Open details" => self.list.navigate_to_movie_detail(movie_id),
            "Toggle favorite" => {
                if let Err(e) = self.list.toggle_favorite(movie_id).await {
                    print_error(&e.to_string());
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Filter the loaded movies by title. Returns the picked movie, if any.
    async fn run_search(&self) -> Result<Option<i64>, FetchError> {
        let query = match Text::new("Search title:").prompt() {
            Ok(q) => q.trim().to_lowercase(),
            Err(e) if prompt_closed(&e) => return Ok(None),
            Err(e) => return Err(prompt_error(e)),
        };
        let state = self.list.state().await;
        let matches: Vec<ListEntry> = state
            .items
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&query))
            .map(|m| ListEntry::Movie {
                id: m.id,
                label: movie_label(m),
            })
            .collect();
        if matches.is_empty() {
            print_error(&format!("No loaded movie matches \"{}\"", query));
            return Ok(None);
        }
        match Select::new("Results", matches).prompt() {
            Ok(ListEntry::Movie { id, .. }) => Ok(Some(id)),
            Ok(_) => Ok(None),
            Err(e) if prompt_closed(&e) => Ok(None),
            Err(e) => Err(prompt_error(e)),
        }
    }

    /// Detail screen loop for one movie.
    async fn run_detail(&self, movie_id: i64) -> Result<(), FetchError> {
        let screen = MovieDetailService::new(
            movie_id,
            Arc::clone(&self.details),
            Arc::clone(&self.favorites),
            Arc::clone(&self.navigator),
        )
        .with_observer(self.spinner.clone());

        let _ = screen.load().await;
        loop {
            let state = screen.state().await;
            if let Some(movie) = &state.movie {
                print_detail(movie);
            }
            if let Some(err) = &state.last_error {
                print_error(err);
            }

            let mut options = Vec::new();
            if state.movie.is_some() {
                options.push("Toggle favorite");
            }
            if state.last_error.is_some() {
                options.push("Retry");
            }
            options.push("Back");

            let choice = match Select::new("Details", options).prompt() {
                Ok(choice) => choice,
                Err(e) if prompt_closed(&e) => "Back",
                Err(e) => return Err(prompt_error(e)),
            };
            match choice {
                "Toggle favorite" => {
                    let _ = screen.toggle_favorite().await;
                }
                "Retry" => {
                    let _ = screen.retry().await;
                }
                _ => {
                    screen.navigate_back();
                    return Ok(());
                }
            }
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), FetchError> {
        if let Err(e) = self.list.open().await {
            print_error(&e.to_string());
        }

        loop {
            let state = self.list.state().await;
            if let Some(err) = &state.last_error {
                print_error(err);
            }
            let title = format!("Movies ({} loaded)", state.items.len());
            let choice = match Select::new(&title, list_entries(&state))
                .with_page_size(15)
                .prompt()
            {
                Ok(choice) => choice,
                Err(e) if prompt_closed(&e) => return Ok(()),
                Err(e) => return Err(prompt_error(e)),
            };

            match choice {
                ListEntry::Movie { id, .. } => {
                    self.movie_menu(id).await?;
                    self.follow_navigation().await?;
                }
                ListEntry::LoadMore => {
                    // Failure is recorded in the state and shown on the next render.
                    let _ = self.list.load_next_page().await;
                }
                ListEntry::Retry => {
                    let _ = self.list.retry().await;
                }
                ListEntry::Search => {
                    self.list.present_global_search();
                    self.follow_navigation().await?;
                }
                ListEntry::Quit => return Ok(()),
            }
        }
    }
}

fn print_detail(movie: &MovieDetail) {
    let summary = &movie.summary;
    println!();
    println!("{}", movie_label(summary).bold().yellow());
    if let Some(tagline) = &movie.tagline {
        println!("  {}", tagline.as_str().italic());
    }
    let mut facts = Vec::new();
    if let Some(runtime) = movie.runtime {
        facts.push(format!("{}h {:02}m", runtime / 60, runtime % 60));
    }
    if !movie.genres.is_empty() {
        facts.push(movie.genres.join(", "));
    }
    if let Some(status) = &movie.status {
        facts.push(status.clone());
    }
    if !facts.is_empty() {
        println!("  {}", facts.join(" · ").dark_grey());
    }
    if !summary.overview.is_empty() {
        println!("  {}", summary.overview);
    }
    println!();
}

fn print_error(message: &str) {
    println!("{}", message.red());
}

//! Spinner shown while a screen service has a fetch in flight.
//!
//! Implements StateObserver for both screens; driven purely by the loading flags.

use crate::ports::StateObserver;
use crate::usecases::{DetailState, FeedState};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Terminal spinner observer.
#[derive(Default)]
pub struct SpinnerObserver {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the spinner with `message`, or hide it when `message` is None.
    fn update(&self, message: Option<&'static str>) {
        let Ok(mut bar) = self.bar.lock() else {
            return;
        };
        match message {
            Some(message) => {
                let spinner = bar.get_or_insert_with(|| {
                    let pb = ProgressBar::new_spinner();
                    pb.set_style(ProgressStyle::default_spinner());
                    pb.enable_steady_tick(Duration::from_millis(80));
                    pb
                });
                spinner.set_message(message);
            }
            None => {
                if let Some(spinner) = bar.take() {
                    spinner.finish_and_clear();
                }
            }
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.bar.lock().map(|bar| bar.is_some()).unwrap_or(false)
    }
}

impl StateObserver<FeedState> for SpinnerObserver {
    fn state_changed(&self, state: &FeedState) {
        let message = if state.is_loading_initial {
            Some("Loading movies...")
        } else if state.is_loading_more {
            Some("Loading more movies...")
        } else {
            None
        };
        self.update(message);
    }
}

impl StateObserver<DetailState> for SpinnerObserver {
    fn state_changed(&self, state: &DetailState) {
        self.update(state.is_loading.then_some("Loading movie details..."));
    }
}

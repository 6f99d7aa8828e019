//! Implements NavigatorPort by forwarding intents to the front-end over an mpsc channel.

use crate::ports::{NavigatorPort, Route, Sheet, Tab};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Navigation intent as seen by the front-end loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    Navigate {
        route: Route,
        tab: Tab,
        hide_tab_bar: bool,
    },
    Pop(Tab),
    PresentSheet(Sheet),
}

/// Navigator that never blocks: intents are queued for the UI to consume.
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<NavigationEvent>,
}

impl ChannelNavigator {
    pub fn new(tx: mpsc::UnboundedSender<NavigationEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: NavigationEvent) {
        debug!(?event, "navigation");
        if self.tx.send(event).is_err() {
            warn!(?event, "navigation channel closed, dropping intent");
        }
    }
}

impl NavigatorPort for ChannelNavigator {
    fn navigate(&self, route: Route, tab: Tab, hide_tab_bar: bool) {
        self.send(NavigationEvent::Navigate {
            route,
            tab,
            hide_tab_bar,
        });
    }

    fn pop(&self, tab: Tab) {
        self.send(NavigationEvent::Pop(tab));
    }

    fn present_sheet(&self, sheet: Sheet) {
        self.send(NavigationEvent::PresentSheet(sheet));
    }
}

//! Inbound ports. UI (adapter) calls into the application and observes its state.

use crate::domain::FetchError;

/// Input port: the interactive front-end drives the screen services from here.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive loop until the user quits.
    async fn run(&self) -> Result<(), FetchError>;
}

/// Receives a snapshot of `S` after every mutation of a service's state.
///
/// Called outside the service's lock, from whichever task performed the mutation.
pub trait StateObserver<S>: Send + Sync {
    fn state_changed(&self, state: &S);
}

use crate::domain::CartState;
use crate::observe::{Observable, Subscription};

use super::{events::CartEvent, reducer::reduce};

/// Shared handle to the single cart instance. Constructed once at startup
/// and cloned into every consumer; mutation only happens through `apply`,
/// so observers never see a half-applied event.
#[derive(Clone)]
pub struct CartStore {
    inner: Observable<CartState>,
}

impl CartStore {
    pub fn new(state: CartState) -> Self {
        Self {
            inner: Observable::new(state),
        }
    }

    pub fn state(&self) -> CartState {
        self.inner.get()
    }

    /// Reduce the event into the state, then notify every subscriber with
    /// the settled snapshot.
    pub fn apply(&self, ev: CartEvent) {
        self.inner.update(|state| reduce(state, ev));
    }

    pub fn subscribe(
        &self,
        f: impl Fn(&CartState) + Send + Sync + 'static,
    ) -> Subscription<CartState> {
        self.inner.subscribe(f)
    }
}

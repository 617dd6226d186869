//! State container for a single reducer.

use super::traits::Reducer;

type Listener<S> = Box<dyn FnMut(&S) + Send>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the state of one reducer.
///
/// `dispatch` is the only way to change the state. Listeners run
/// synchronously, in registration order, after the new state is committed,
/// so a listener never observes a stale value.
pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
    next_id: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current committed state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Read a projection of the current state.
    pub fn read<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        selector(&self.state)
    }

    /// Run the reducer and commit the result.
    ///
    /// Returns `true` when the state changed. Listeners are only notified
    /// in that case.
    pub fn dispatch(&mut self, intent: R::Intent) -> bool {
        tracing::debug!(?intent, "dispatch");
        let previous = self.state.clone();
        self.state = R::reduce(std::mem::take(&mut self.state), intent);
        if self.state == previous {
            return false;
        }

        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        true
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

use super::memory::TicketStore;
use super::repository::TicketRepository;
use crate::core::{Ticket, TicketId};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A [`TicketStore`] that can be shared between threads
///
/// One lock guards the collection and the id sequence together. Clones share
/// the same underlying store, so each thread holds its own handle.
#[derive(Debug, Clone, Default)]
pub struct SharedTicketStore {
    inner: Arc<Mutex<TicketStore>>,
}

impl SharedTicketStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing store
    #[must_use]
    pub fn from_store(store: TicketStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run a closure with exclusive access to the whole store
    ///
    /// The lock is not reentrant: the closure must not call back into this
    /// store or any of its clones.
    pub fn with_lock<T>(&self, f: impl FnOnce(&mut TicketStore) -> T) -> T {
        f(&mut self.lock())
    }

    // A panic mid-operation cannot leave the Vec or counter half-written,
    // so the data behind a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, TicketStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TicketRepository for SharedTicketStore {
    fn create(&mut self, ticket: Ticket) {
        self.lock().create(ticket);
    }

    fn next_id(&mut self) -> TicketId {
        self.lock().next_id()
    }

    fn get(&self, id: TicketId) -> Option<Ticket> {
        self.lock().get(id)
    }

    fn get_all(&self) -> Vec<Ticket> {
        self.lock().get_all()
    }

    fn update(&mut self, ticket: Ticket) -> bool {
        self.lock().update(ticket)
    }

    fn delete(&mut self, id: TicketId) -> bool {
        self.lock().delete(id)
    }

    // The predicate runs after the lock is released, so it may query the
    // store itself.
    fn find<F>(&self, predicate: F) -> Vec<Ticket>
    where
        F: Fn(&Ticket) -> bool,
    {
        let snapshot = self.lock().get_all();
        snapshot.into_iter().filter(|ticket| predicate(ticket)).collect()
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn create_next<F>(&mut self, build: F) -> Ticket
    where
        F: FnOnce(TicketId) -> Ticket,
    {
        self.lock().create_next(build)
    }
}

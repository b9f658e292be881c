//! Operation facade
//!
//! Each service borrows the repository for exactly one capability and
//! forwards to it. [`TicketDesk`] owns the repository and hands the services
//! out, so the borrow checker keeps writers exclusive.

mod create;
mod delete;
mod read;
mod search;
mod update;

pub use create::CreateService;
pub use delete::DeleteService;
pub use read::ReadService;
pub use search::SearchService;
pub use update::UpdateService;

use crate::storage::{TicketRepository, TicketStore};

/// Owner of one ticket repository and entry point to the services
#[derive(Debug, Clone, Default)]
pub struct TicketDesk<R = TicketStore> {
    repository: R,
}

impl<R: TicketRepository> TicketDesk<R> {
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn creator(&mut self) -> CreateService<'_, R> {
        CreateService::new(&mut self.repository)
    }

    pub fn reader(&self) -> ReadService<'_, R> {
        ReadService::new(&self.repository)
    }

    pub fn updater(&mut self) -> UpdateService<'_, R> {
        UpdateService::new(&mut self.repository)
    }

    pub fn remover(&mut self) -> DeleteService<'_, R> {
        DeleteService::new(&mut self.repository)
    }

    pub fn searcher(&self) -> SearchService<'_, R> {
        SearchService::new(&self.repository)
    }

    pub const fn repository(&self) -> &R {
        &self.repository
    }

    pub fn into_inner(self) -> R {
        self.repository
    }
}

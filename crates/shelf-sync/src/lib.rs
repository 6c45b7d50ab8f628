//! shelf-sync - Keeps a paginated view of the catalog consistent with the server.
//!
//! [`ListSynchronizer`] is the only writer of the committed
//! [`PaginationState`](shelf_core::PaginationState). Every list request is
//! stamped with an epoch when it is issued; a reply is committed only if no
//! later-issued request has been committed already, so overlapping requests
//! can finish in any order.
//!
//! [`MutationCoordinator`] runs creates and deletes through the catalog and
//! then re-fetches the visible page.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use shelf_core::{Catalog, Notifier};
//! use shelf_sync::{ListSynchronizer, MutationCoordinator};
//!
//! # async fn example<C: Catalog, N: Notifier>(catalog: C, notifier: N) -> shelf_core::Result<()> {
//! let sync = Arc::new(ListSynchronizer::new(catalog, notifier, 5)?);
//! sync.refresh().await;
//! sync.next_page().await;
//!
//! let mutations = MutationCoordinator::new(sync.clone());
//! let id = sync.snapshot().items()[0].id.clone();
//! mutations.submit_delete(&id).await;
//! # Ok(())
//! # }
//! ```

mod coordinator;
mod synchronizer;

pub use coordinator::{CreateOutcome, DeleteOutcome, MutationCoordinator};
pub use synchronizer::{ListSynchronizer, PageOutcome};

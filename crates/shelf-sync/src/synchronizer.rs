//! Epoch-guarded list synchronization.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, instrument, warn};

use shelf_core::{BookPage, Catalog, ErrorKind, Notifier, PageFit, PaginationState, Result};

/// What became of one page request.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// The reply was accepted and is now the committed state.
    Committed(PaginationState),
    /// A later-issued request was committed first; the reply was dropped.
    Discarded,
    /// The server answered for a page past its last one. Nothing was
    /// committed, but older in-flight replies are now stale.
    ///
    /// No notification is sent; the caller decides how to recover, e.g. by
    /// requesting `total_pages`. [`MutationCoordinator::submit_delete`]
    /// does this itself.
    ///
    /// [`MutationCoordinator::submit_delete`]: crate::MutationCoordinator::submit_delete
    OutOfRange { total_pages: u32, total_items: u64 },
    /// The request was refused before reaching the network.
    Rejected,
    /// The target page is already shown or does not exist.
    Unchanged,
    /// The request failed and the user was notified.
    Failed(ErrorKind),
}

impl PageOutcome {
    /// The newly committed state, if this request produced one.
    pub fn committed(&self) -> Option<&PaginationState> {
        match self {
            PageOutcome::Committed(state) => Some(state),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Committed {
    /// Epoch of the request that produced `state`; 0 before the first commit.
    epoch: u64,
    state: PaginationState,
}

/// The single path through which the visible page changes.
#[derive(Debug)]
pub struct ListSynchronizer<C, N> {
    catalog: C,
    notifier: N,
    issued: AtomicU64,
    committed: RwLock<Committed>,
}

impl<C: Catalog, N: Notifier> ListSynchronizer<C, N> {
    /// Start on page 1 of an empty catalog with the given page size.
    ///
    /// Nothing is fetched until a request is made.
    pub fn new(catalog: C, notifier: N, page_size: u32) -> Result<Self> {
        Ok(Self {
            catalog,
            notifier,
            issued: AtomicU64::new(0),
            committed: RwLock::new(Committed {
                epoch: 0,
                state: PaginationState::initial(page_size)?,
            }),
        })
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// The currently committed state.
    pub fn snapshot(&self) -> PaginationState {
        self.read().state.clone()
    }

    /// Fetch `page` at `page_size` and commit the reply unless it went stale.
    ///
    /// Only the lower bound of `page` is checked; the upper bound is not
    /// known until the server answers.
    #[instrument(skip(self))]
    pub async fn request_page(&self, page: u32, page_size: u32) -> PageOutcome {
        if page < 1 || page_size < 1 {
            warn!("Refusing page request below 1");
            return PageOutcome::Rejected;
        }

        let epoch = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(epoch, "Requesting page");

        match self.catalog.list(page, page_size).await {
            Ok(reply) => self.commit(epoch, reply, page_size),
            Err(err) => {
                warn!(epoch, error = %err, "Page request failed");
                self.notifier.error(&format!("Failed to fetch books: {}", err));
                PageOutcome::Failed(err.kind())
            }
        }
    }

    /// Go to page `n` of the committed state.
    pub async fn go_to_page(&self, n: u32) -> PageOutcome {
        let state = self.snapshot();
        if n == state.current_page() || !state.contains_page(n) {
            return PageOutcome::Unchanged;
        }
        self.request_page(n, state.page_size()).await
    }

    pub async fn next_page(&self) -> PageOutcome {
        let current = self.snapshot().current_page();
        self.go_to_page(current.saturating_add(1)).await
    }

    pub async fn prev_page(&self) -> PageOutcome {
        let current = self.snapshot().current_page();
        self.go_to_page(current.saturating_sub(1)).await
    }

    /// Switch page size. Always lands on page 1, since positions under the
    /// old size mean nothing under the new one.
    pub async fn change_page_size(&self, page_size: u32) -> PageOutcome {
        self.request_page(1, page_size).await
    }

    /// Re-fetch the committed page at the committed size.
    pub async fn refresh(&self) -> PageOutcome {
        let state = self.snapshot();
        self.request_page(state.current_page(), state.page_size()).await
    }

    fn commit(&self, epoch: u64, reply: BookPage, page_size: u32) -> PageOutcome {
        let mut committed = self.write();

        if epoch <= committed.epoch {
            debug!(epoch, committed = committed.epoch, "Discarding stale page reply");
            return PageOutcome::Discarded;
        }

        match PaginationState::from_page(reply, page_size) {
            Ok(state) => {
                debug!(
                    epoch,
                    page = state.current_page(),
                    total_pages = state.total_pages(),
                    "Committing page"
                );
                committed.epoch = epoch;
                committed.state = state.clone();
                PageOutcome::Committed(state)
            }
            Err(PageFit::OutOfRange {
                requested,
                total_pages,
                total_items,
            }) => {
                debug!(epoch, requested, total_pages, "Reply is past the last page");
                committed.epoch = epoch;
                PageOutcome::OutOfRange {
                    total_pages,
                    total_items,
                }
            }
            Err(PageFit::Invalid(reason)) => {
                drop(committed);
                warn!(epoch, %reason, "Inconsistent page reply");
                self.notifier.error(&format!("Failed to fetch books: {}", reason));
                PageOutcome::Failed(ErrorKind::Protocol)
            }
        }
    }

    // The committed state is only ever replaced whole, so a poisoned lock
    // still holds a consistent value.
    fn read(&self) -> RwLockReadGuard<'_, Committed> {
        self.committed.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Committed> {
        self.committed.write().unwrap_or_else(PoisonError::into_inner)
    }
}

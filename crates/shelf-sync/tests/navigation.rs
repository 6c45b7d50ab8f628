//! Page navigation over an in-memory catalog.

mod common;

use shelf_sync::{ListSynchronizer, PageOutcome};

use common::{MemoryCatalog, OverflowPolicy, RecordingNotifier};

fn synchronizer(books: usize) -> (ListSynchronizer<MemoryCatalog, RecordingNotifier>, MemoryCatalog) {
    let catalog = MemoryCatalog::with_books(books, OverflowPolicy::Echo);
    let sync = ListSynchronizer::new(catalog.clone(), RecordingNotifier::default(), 5).unwrap();
    (sync, catalog)
}

#[tokio::test]
async fn test_initial_state_before_any_fetch() {
    let (sync, catalog) = synchronizer(3);

    let state = sync.snapshot();
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.page_size(), 5);
    assert_eq!(state.total_pages(), 1);
    assert_eq!(state.total_items(), 0);
    assert!(catalog.list_calls().is_empty());
}

#[tokio::test]
async fn test_refresh_loads_first_page() {
    let (sync, _) = synchronizer(12);

    let outcome = sync.refresh().await;
    let state = outcome.committed().unwrap();

    assert_eq!(state.total_items(), 12);
    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.items().len(), 5);
    assert_eq!(state.items()[0].id.as_str(), "m1");
}

#[tokio::test]
async fn test_next_and_prev_move_one_page() {
    let (sync, _) = synchronizer(12);
    sync.refresh().await;

    sync.next_page().await;
    assert_eq!(sync.snapshot().current_page(), 2);
    assert_eq!(sync.snapshot().items()[0].id.as_str(), "m6");

    sync.next_page().await;
    let last = sync.snapshot();
    assert_eq!(last.current_page(), 3);
    assert_eq!(last.items().len(), 2);

    assert_eq!(sync.next_page().await, PageOutcome::Unchanged);

    sync.prev_page().await;
    assert_eq!(sync.snapshot().current_page(), 2);
}

#[tokio::test]
async fn test_prev_on_first_page_is_noop() {
    let (sync, catalog) = synchronizer(12);
    sync.refresh().await;

    assert_eq!(sync.prev_page().await, PageOutcome::Unchanged);
    assert_eq!(catalog.list_calls().len(), 1);
}

#[tokio::test]
async fn test_go_to_page_ignores_current_and_out_of_range() {
    let (sync, catalog) = synchronizer(12);
    sync.refresh().await;

    assert_eq!(sync.go_to_page(1).await, PageOutcome::Unchanged);
    assert_eq!(sync.go_to_page(0).await, PageOutcome::Unchanged);
    assert_eq!(sync.go_to_page(4).await, PageOutcome::Unchanged);
    assert_eq!(catalog.list_calls(), vec![(1, 5)]);

    let outcome = sync.go_to_page(3).await;
    assert_eq!(outcome.committed().unwrap().current_page(), 3);
}

#[tokio::test]
async fn test_change_page_size_returns_to_first_page() {
    let (sync, catalog) = synchronizer(12);
    sync.refresh().await;
    sync.go_to_page(3).await;

    let outcome = sync.change_page_size(4).await;
    let state = outcome.committed().unwrap();

    assert_eq!(state.current_page(), 1);
    assert_eq!(state.page_size(), 4);
    assert_eq!(state.total_pages(), 3);
    assert_eq!(catalog.list_calls().last(), Some(&(1, 4)));
}

#[tokio::test]
async fn test_change_page_size_to_zero_is_rejected() {
    let (sync, _) = synchronizer(12);
    sync.refresh().await;

    assert_eq!(sync.change_page_size(0).await, PageOutcome::Rejected);
    assert_eq!(sync.snapshot().page_size(), 5);
}

#[tokio::test]
async fn test_request_past_last_page_is_not_committed() {
    let (sync, _) = synchronizer(7);
    sync.refresh().await;

    let outcome = sync.request_page(5, 5).await;

    assert_eq!(
        outcome,
        PageOutcome::OutOfRange {
            total_pages: 2,
            total_items: 7
        }
    );
    assert_eq!(sync.snapshot().current_page(), 1);
}

#[tokio::test]
async fn test_empty_catalog_is_one_empty_page() {
    let (sync, _) = synchronizer(0);

    let outcome = sync.refresh().await;
    let state = outcome.committed().unwrap();

    assert_eq!(state.current_page(), 1);
    assert_eq!(state.total_pages(), 1);
    assert!(state.items().is_empty());
}

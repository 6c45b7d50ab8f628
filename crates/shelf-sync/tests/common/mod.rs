#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::{mpsc, oneshot};

use shelf_core::error::{ServerError, TransportError};
use shelf_core::{Book, BookId, BookPage, Catalog, DraftBook, DraftField, FormState, Notifier, Price, Result};

// ============================================================================
// Notifier
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Notifier that keeps every message for later inspection.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Error(m) => Some(m),
                Notice::Success(_) => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Success(m) => Some(m),
                Notice::Error(_) => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Error(message.to_string()));
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn book(id: &str) -> Book {
    Book {
        id: BookId::new(id).unwrap(),
        name: format!("Name {}", id),
        title: format!("Title {}", id),
        author: "Author".to_string(),
        price: Price::new(100.0).unwrap(),
        published_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        attachment_url: None,
    }
}

/// A page holding books with the given ids and totals.
pub fn page(current_page: u32, total_pages: u32, total_items: u64, ids: &[&str]) -> BookPage {
    BookPage {
        items: ids.iter().map(|id| book(id)).collect(),
        total_items,
        total_pages,
        current_page,
    }
}

pub fn filled_form(name: &str) -> FormState {
    let mut form = FormState::new();
    form.set(DraftField::Name, name).unwrap();
    form.set(DraftField::Title, "A Title").unwrap();
    form.set(DraftField::Author, "An Author").unwrap();
    form.set(DraftField::Price, "250").unwrap();
    form.set(DraftField::PublishedDate, "2001-09-11").unwrap();
    form
}

// ============================================================================
// Gated catalog
// ============================================================================

/// A list request waiting for the test to answer it.
pub struct PendingList {
    pub page: u32,
    pub page_size: u32,
    reply: oneshot::Sender<Result<BookPage>>,
}

impl PendingList {
    pub fn respond(self, reply: Result<BookPage>) {
        let _ = self.reply.send(reply);
    }
}

/// Catalog whose list replies are released by the test, in any order.
///
/// Creates and deletes go straight to the backing catalog, if there is one.
#[derive(Clone)]
pub struct GatedCatalog {
    requests: mpsc::UnboundedSender<PendingList>,
    backing: Option<MemoryCatalog>,
}

pub struct Gate {
    requests: mpsc::UnboundedReceiver<PendingList>,
}

impl Gate {
    /// Wait for the next list request to reach the catalog.
    pub async fn next(&mut self) -> PendingList {
        self.requests.recv().await.expect("catalog dropped")
    }

    /// A list request that has already arrived, if any.
    pub fn try_next(&mut self) -> Option<PendingList> {
        self.requests.try_recv().ok()
    }
}

pub fn gated() -> (GatedCatalog, Gate) {
    gate_over(None)
}

/// A gated catalog that applies mutations to `backing`.
pub fn gated_with(backing: MemoryCatalog) -> (GatedCatalog, Gate) {
    gate_over(Some(backing))
}

fn gate_over(backing: Option<MemoryCatalog>) -> (GatedCatalog, Gate) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        GatedCatalog {
            requests: tx,
            backing,
        },
        Gate { requests: rx },
    )
}

fn no_backing() -> shelf_core::Error {
    TransportError::Connection {
        message: "gated catalog has no backing store".to_string(),
    }
    .into()
}

#[async_trait]
impl Catalog for GatedCatalog {
    async fn list(&self, page: u32, page_size: u32) -> Result<BookPage> {
        let (tx, rx) = oneshot::channel();
        let pending = PendingList {
            page,
            page_size,
            reply: tx,
        };
        if self.requests.send(pending).is_err() {
            return Err(TransportError::Connection {
                message: "gate closed".to_string(),
            }
            .into());
        }
        rx.await.unwrap_or_else(|_| {
            Err(TransportError::Connection {
                message: "request abandoned".to_string(),
            }
            .into())
        })
    }

    async fn create(&self, draft: &DraftBook) -> Result<Book> {
        match &self.backing {
            Some(backing) => backing.create(draft).await,
            None => Err(no_backing()),
        }
    }

    async fn delete(&self, id: &BookId) -> Result<()> {
        match &self.backing {
            Some(backing) => backing.delete(id).await,
            None => Err(no_backing()),
        }
    }
}

// ============================================================================
// In-memory catalog
// ============================================================================

/// How the fake server answers a page past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Echo the requested page with no items.
    Echo,
    /// Answer with the last page instead.
    Clamp,
}

#[derive(Debug)]
struct Inner {
    books: Vec<Book>,
    next_id: u64,
    overflow: OverflowPolicy,
    list_calls: Vec<(u32, u32)>,
    create_calls: usize,
    fail_next: Option<ServerError>,
}

/// Insertion-ordered catalog held in memory.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryCatalog {
    pub fn new(overflow: OverflowPolicy) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                books: Vec::new(),
                next_id: 1,
                overflow,
                list_calls: Vec::new(),
                create_calls: 0,
                fail_next: None,
            })),
        }
    }

    /// A catalog pre-filled with `count` books, ids `m1..`.
    pub fn with_books(count: usize, overflow: OverflowPolicy) -> Self {
        let catalog = Self::new(overflow);
        {
            let mut inner = catalog.inner.lock().unwrap();
            for _ in 0..count {
                let id = format!("m{}", inner.next_id);
                inner.next_id += 1;
                inner.books.push(book(&id));
            }
        }
        catalog
    }

    /// Make the next create or delete fail with this server error.
    pub fn fail_next(&self, status: u16, message: Option<&str>) {
        self.inner.lock().unwrap().fail_next =
            Some(ServerError::new(status, message.map(str::to_string)));
    }

    pub fn ids(&self) -> Vec<String> {
        self.inner
            .lock()
            .unwrap()
            .books
            .iter()
            .map(|b| b.id.to_string())
            .collect()
    }

    pub fn list_calls(&self) -> Vec<(u32, u32)> {
        self.inner.lock().unwrap().list_calls.clone()
    }

    pub fn create_calls(&self) -> usize {
        self.inner.lock().unwrap().create_calls
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn list(&self, page: u32, page_size: u32) -> Result<BookPage> {
        let mut inner = self.inner.lock().unwrap();
        inner.list_calls.push((page, page_size));

        let total_items = inner.books.len() as u64;
        let total_pages = (total_items.div_ceil(page_size as u64)).max(1) as u32;
        let current_page = match inner.overflow {
            OverflowPolicy::Clamp => page.min(total_pages),
            OverflowPolicy::Echo => page,
        };

        let start = ((current_page - 1) * page_size) as usize;
        let items = inner
            .books
            .iter()
            .skip(start)
            .take(page_size as usize)
            .cloned()
            .collect();

        Ok(BookPage {
            items,
            total_items,
            total_pages,
            current_page,
        })
    }

    async fn create(&self, draft: &DraftBook) -> Result<Book> {
        let mut inner = self.inner.lock().unwrap();
        inner.create_calls += 1;
        if let Some(err) = inner.fail_next.take() {
            return Err(err.into());
        }

        let id = BookId::new(format!("m{}", inner.next_id))?;
        inner.next_id += 1;

        let book = Book {
            id,
            name: draft.name.clone(),
            title: draft.title.clone(),
            author: draft.author.clone(),
            price: draft.price,
            published_date: draft.published_date,
            attachment_url: draft
                .attachment
                .as_ref()
                .map(|a| format!("/uploads/{}", a.file_name())),
        };
        inner.books.push(book.clone());
        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(err) = inner.fail_next.take() {
            return Err(err.into());
        }

        let before = inner.books.len();
        inner.books.retain(|b| &b.id != id);
        if inner.books.len() == before {
            return Err(ServerError::new(404, Some("Book not found".to_string())).into());
        }
        Ok(())
    }
}

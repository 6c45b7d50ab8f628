//! Committed pagination state.

use crate::book::{Book, BookPage};
use crate::error::{Error, InvalidInputError};

/// Page size used before the user picks one.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// The page of the catalog the user is looking at.
///
/// Values are only ever replaced as a whole. Every constructed state
/// satisfies `1 <= current_page <= total_pages` and
/// `items.len() <= page_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    current_page: u32,
    page_size: u32,
    total_items: u64,
    total_pages: u32,
    items: Vec<Book>,
}

impl PaginationState {
    /// The state before anything has been fetched: page 1 of an empty catalog.
    pub fn initial(page_size: u32) -> Result<Self, Error> {
        check_page_size(page_size)?;
        Ok(Self {
            current_page: 1,
            page_size,
            total_items: 0,
            total_pages: 1,
            items: Vec::new(),
        })
    }

    /// Build the state for a page the server returned for `page_size`.
    ///
    /// Fails with [`PageFit::OutOfRange`] when the server answered for a page
    /// past its own last page, and with [`PageFit::Invalid`] when the numbers
    /// cannot describe a real page.
    pub fn from_page(page: BookPage, page_size: u32) -> Result<Self, PageFit> {
        if page_size == 0 {
            return Err(PageFit::Invalid("page size must be at least 1".to_string()));
        }
        if page.current_page == 0 {
            return Err(PageFit::Invalid("current page must be at least 1".to_string()));
        }
        if page.total_pages == 0 {
            return Err(PageFit::Invalid("total pages must be at least 1".to_string()));
        }
        if page.items.len() > page_size as usize {
            return Err(PageFit::Invalid(format!(
                "{} items exceed page size {}",
                page.items.len(),
                page_size
            )));
        }
        if page.current_page > page.total_pages {
            return Err(PageFit::OutOfRange {
                requested: page.current_page,
                total_pages: page.total_pages,
                total_items: page.total_items,
            });
        }

        Ok(Self {
            current_page: page.current_page,
            page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            items: page.items,
        })
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn items(&self) -> &[Book] {
        &self.items
    }

    /// Whether `page` is a page number this state knows to exist.
    pub fn contains_page(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

/// Why a server page could not become a [`PaginationState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageFit {
    /// The server answered for a page beyond its last one.
    OutOfRange {
        requested: u32,
        total_pages: u32,
        total_items: u64,
    },
    /// The numbers are self-contradictory.
    Invalid(String),
}

pub(crate) fn check_page_size(page_size: u32) -> Result<(), Error> {
    if page_size == 0 {
        return Err(InvalidInputError::Page {
            reason: "page size must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}

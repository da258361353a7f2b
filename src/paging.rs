pub const PAGE_SIZE: usize = 50;
pub const SINGLE_PAGE_LIMIT: usize = 100;

// ---

/// View over an ordered list of search results.
///
/// Short lists are shown whole; lists longer than [`SINGLE_PAGE_LIMIT`] are
/// split into pages of [`PAGE_SIZE`] items with 1-based page indices.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ResultView<T> {
    SinglePage { items: Vec<T> },
    Paginated { items: Vec<T>, page: usize },
}

impl<T> ResultView<T> {
    pub fn new(items: Vec<T>) -> Self {
        if items.len() > SINGLE_PAGE_LIMIT {
            Self::Paginated { items, page: 1 }
        } else {
            Self::SinglePage { items }
        }
    }

    /// Returns the currently visible slice with navigation state.
    pub fn page(&self) -> PageView<'_, T> {
        match self {
            Self::SinglePage { items } => PageView {
                items,
                index: 1,
                total: 1,
                has_prev: false,
                has_next: false,
            },
            Self::Paginated { items, page } => {
                let total = items.len().div_ceil(PAGE_SIZE);
                let start = (page - 1) * PAGE_SIZE;
                let end = (start + PAGE_SIZE).min(items.len());
                PageView {
                    items: &items[start..end],
                    index: *page,
                    total,
                    has_prev: *page > 1,
                    has_next: *page < total,
                }
            }
        }
    }

    /// Moves to the next page, if there is one.
    pub fn next(&mut self) -> bool {
        match self {
            Self::Paginated { items, page } if *page * PAGE_SIZE < items.len() => {
                *page += 1;
                true
            }
            _ => false,
        }
    }

    /// Moves to the previous page, if there is one.
    pub fn prev(&mut self) -> bool {
        match self {
            Self::Paginated { page, .. } if *page > 1 => {
                *page -= 1;
                true
            }
            _ => false,
        }
    }

    /// Jumps to the given 1-based page, if it exists.
    pub fn goto(&mut self, target: usize) -> bool {
        match self {
            Self::SinglePage { .. } => target == 1,
            Self::Paginated { items, page } => {
                if target >= 1 && (target - 1) * PAGE_SIZE < items.len() {
                    *page = target;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::SinglePage { items } | Self::Paginated { items, .. } => items,
        }
    }

    pub fn paginated(&self) -> bool {
        matches!(self, Self::Paginated { .. })
    }
}

// ---

/// Slice of results visible on the current page.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub index: usize,
    pub total: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

// ---

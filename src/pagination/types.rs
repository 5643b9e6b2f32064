//! Pagination types

/// Response header carrying the cursor for the next page
pub const CURSOR_HEADER: &str = "CB-AFTER";

/// Query parameter the cursor is sent back in
pub const CURSOR_PARAM: &str = "after";

/// How a collection is paged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageMode {
    /// Forward pagination: follow the `CB-AFTER` cursor until it is absent
    #[default]
    CursorHeader,
    /// The whole result arrives in one response (DELETE-style calls)
    SinglePage,
}

impl PageMode {
    /// Whether cursors are read from responses and sent back on requests
    pub fn uses_cursor(&self) -> bool {
        matches!(self, Self::CursorHeader)
    }
}

/// Lifecycle of a pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    /// No page fetched yet
    NotStarted,
    /// A page is buffered and the server returned a cursor for the next one
    Buffered,
    /// The final page is buffered; no further fetches will happen
    LastPage,
    /// Every item has been yielded
    Exhausted,
    /// A fetch failed; absorbing
    Failed,
}

//! Lazy cursor pager
//!
//! State machine:
//!
//! ```text
//! NotStarted ──fetch──▶ Buffered ◀──fetch──┐
//!      │                   │  └────────────┘
//!      │                   ▼
//!      └──────fetch──▶ LastPage ──drain──▶ Exhausted
//!
//! any fetch ──error──▶ Failed
//! ```

use super::types::{PageMode, PagerState, CURSOR_HEADER, CURSOR_PARAM};
use crate::decode::PageDecoder;
use crate::error::{Error, Result};
use crate::http::{Request, RequestExecutor};
use crate::types::OptionStringExt;
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, trace};

/// Lazy iterator over a paginated collection of `T`.
///
/// Not safe to share between concurrent callers: every call takes `&mut self`.
/// Independent pagers over the same resource may run concurrently.
pub struct Pager<T> {
    executor: Arc<dyn RequestExecutor>,
    template: Request,
    decoder: Box<dyn PageDecoder<T>>,
    mode: PageMode,
    state: PagerState,
    cursor: Option<String>,
    buffer: VecDeque<T>,
    error: Option<Arc<Error>>,
    requests: usize,
}

impl<T> Pager<T> {
    /// Create a pager bound to a request template and a page decoder.
    ///
    /// The template's path, query and body are reused for every page; with
    /// [`PageMode::CursorHeader`] the current cursor is appended as `after=`.
    pub fn new(
        executor: Arc<dyn RequestExecutor>,
        template: Request,
        decoder: impl PageDecoder<T> + 'static,
        mode: PageMode,
    ) -> Self {
        Self {
            executor,
            template,
            decoder: Box::new(decoder),
            mode,
            state: PagerState::NotStarted,
            cursor: None,
            buffer: VecDeque::new(),
            error: None,
            requests: 0,
        }
    }

    /// Resume from a cursor saved from an earlier pager.
    ///
    /// Only meaningful before the first fetch and for cursor-paged collections.
    #[must_use]
    pub fn starting_after(mut self, cursor: impl Into<String>) -> Self {
        if self.state == PagerState::NotStarted && self.mode.uses_cursor() {
            self.cursor = cursor.into().none_if_empty();
        }
        self
    }

    /// Check whether another item is available, fetching pages as needed.
    ///
    /// Returns `true` immediately when the buffer holds an item. Otherwise
    /// fetches the next page, skipping over empty pages that still carry a
    /// cursor, and reports whether anything was buffered. A failed fetch is
    /// stored for [`Pager::take_next`] and `false` is returned, now and on
    /// every later call.
    ///
    /// Dropping the returned future while the request is in flight leaves the
    /// pager as it was before the fetch.
    pub async fn has_more(&mut self) -> bool {
        loop {
            if !self.buffer.is_empty() {
                return true;
            }

            match self.state {
                PagerState::Exhausted | PagerState::Failed => return false,
                PagerState::LastPage => {
                    self.state = PagerState::Exhausted;
                    return false;
                }
                PagerState::NotStarted | PagerState::Buffered => {}
            }

            if let Err(err) = self.fetch_page().await {
                self.state = PagerState::Failed;
                self.error = Some(Arc::new(err));
                return false;
            }
        }
    }

    /// Pop the next buffered item.
    ///
    /// Never performs I/O. With nothing buffered this returns
    /// [`Error::PagerFailed`] wrapping the captured fetch error if the pager
    /// failed, on every call, otherwise [`Error::Exhausted`].
    pub fn take_next(&mut self) -> Result<T> {
        if let Some(item) = self.buffer.pop_front() {
            return Ok(item);
        }

        match self.failure() {
            Some(err) => Err(err),
            None => Err(Error::Exhausted),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Cursor the next page will be requested with, if any.
    ///
    /// Save it to resume later with [`Pager::starting_after`].
    pub fn current_cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Number of page requests issued so far
    pub fn requests_made(&self) -> usize {
        self.requests
    }

    /// Number of items buffered and not yet taken
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// The captured fetch error, if the pager failed
    pub fn error(&self) -> Option<&Error> {
        self.error.as_deref()
    }

    /// Drain the collection into a `Vec`, stopping at the first error
    pub async fn collect_all(mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while self.has_more().await {
            items.push(self.take_next()?);
        }
        match self.failure() {
            Some(err) => Err(err),
            None => Ok(items),
        }
    }

    /// Adapt the pull protocol into a `Stream`.
    ///
    /// Yields every item, then the fetch error if one occurred, then ends.
    pub fn into_stream(self) -> impl Stream<Item = Result<T>> + Send
    where
        T: Send + 'static,
    {
        stream::unfold(Some(self), |pager| async move {
            let mut pager = pager?;
            if pager.has_more().await {
                return match pager.take_next() {
                    Ok(item) => Some((Ok(item), Some(pager))),
                    Err(err) => Some((Err(err), None)),
                };
            }
            pager.failure().map(|err| (Err(err), None))
        })
    }

    /// Build the request for the next page from the template and cursor
    fn page_request(&self) -> Request {
        let request = self.template.clone();
        match (&self.cursor, self.mode.uses_cursor()) {
            (Some(cursor), true) => request.query(CURSOR_PARAM, cursor.as_str()),
            _ => request,
        }
    }

    async fn fetch_page(&mut self) -> Result<()> {
        let request = self.page_request();

        let result = self.executor.execute(&request).await;
        self.requests += 1;
        let response = result?;
        let items = self.decoder.decode(&response.body)?;

        let next = if self.mode.uses_cursor() {
            response
                .try_header(CURSOR_HEADER)?
                .map(str::to_string)
                .none_if_empty()
        } else {
            None
        };

        debug!(
            "Fetched page {} of {}: {} items",
            self.requests,
            request.path,
            items.len()
        );
        trace!("Cursor {:?} -> {:?}", self.cursor, next);

        self.buffer.extend(items);
        self.state = if next.is_some() {
            PagerState::Buffered
        } else {
            PagerState::LastPage
        };
        self.cursor = next;
        Ok(())
    }

    fn failure(&self) -> Option<Error> {
        let source = Arc::clone(self.error.as_ref()?);
        Some(Error::PagerFailed { source })
    }
}

impl<T> std::fmt::Debug for Pager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("template", &self.template)
            .field("mode", &self.mode)
            .field("state", &self.state)
            .field("cursor", &self.cursor)
            .field("buffered", &self.buffer.len())
            .field("requests", &self.requests)
            .finish_non_exhaustive()
    }
}

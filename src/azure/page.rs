/// Upper bound on items requested per page. Large enough to fetch a whole
/// repository's window in one page for most projects.
pub const PAGE_SIZE: usize = 10_000;

/// A lazy, finite, non-restartable walk over 1-based page numbers.
///
/// The continuation test is `returned == PAGE_SIZE`: another page is
/// requested only while the last page came back full. This approximates
/// exhaustive pagination; when the total item count is an exact multiple of
/// the page size, one extra trailing request is issued and comes back empty.
/// A short page that is not actually the last (which a well-behaved server
/// never returns) silently truncates the walk.
///
/// The caller must `record` the size of every fetched page before asking for
/// the next one.
#[derive(Debug)]
pub struct PageCursor {
    page: u32,
    done: bool,
}

impl PageCursor {
    pub fn new() -> Self {
        Self {
            page: 1,
            done: false,
        }
    }

    /// The page number to request next, or `None` once a short page was seen.
    pub fn next_page(&mut self) -> Option<u32> {
        if self.done {
            return None;
        }
        let page = self.page;
        self.page += 1;
        Some(page)
    }

    /// Records the item count of the page just fetched.
    pub fn record(&mut self, returned: usize) {
        if returned < PAGE_SIZE {
            self.done = true;
        }
    }
}

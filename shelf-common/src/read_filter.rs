/// Read-status filter for the library list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadFilter {
    All,
    Read,
    Unread,
}

#[allow(clippy::derivable_impls)]
impl Default for ReadFilter {
    fn default() -> Self {
        ReadFilter::All
    }
}

impl ReadFilter {
    /// Whether a book with the given read flag passes this filter.
    pub fn matches(self, read: bool) -> bool {
        match self {
            ReadFilter::All => true,
            ReadFilter::Read => read,
            ReadFilter::Unread => !read,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReadFilter::All => "All",
            ReadFilter::Read => "Read",
            ReadFilter::Unread => "Unread",
        }
    }

    /// Next filter in All -> Read -> Unread -> All order.
    pub fn next(self) -> Self {
        match self {
            ReadFilter::All => ReadFilter::Read,
            ReadFilter::Read => ReadFilter::Unread,
            ReadFilter::Unread => ReadFilter::All,
        }
    }
}

//! Defines a [`Span`] which is used to locate a position in the text notation
//! source.

/// A position in the text notation source.
///
/// The line and column are 1-based. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// The byte offset into the source.
    pub offset: usize,
    /// The line number.
    pub line: usize,
    /// The column number.
    pub column: usize,
}

impl Span {
    pub(crate) const START: Self = Self {
        offset: 0,
        line: 1,
        column: 1,
    };
}

/// Converts byte offsets into line and column numbers.
///
/// The lexer asks for positions in increasing order so the tracker only
/// ever scans forward, falling back to a rescan from the start otherwise.
#[derive(Debug, Clone)]
pub(crate) struct Tracker<'source> {
    source: &'source str,
    last: Span,
}

impl<'source> Tracker<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            last: Span::START,
        }
    }

    /// Returns the span for the given byte offset, which must lie on a
    /// character boundary.
    pub fn locate(&mut self, offset: usize) -> Span {
        if offset < self.last.offset {
            self.last = Span::START;
        }
        let Span {
            offset: from,
            mut line,
            mut column,
        } = self.last;
        for c in self.source[from..offset].chars() {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        self.last = Span {
            offset,
            line,
            column,
        };
        self.last
    }
}

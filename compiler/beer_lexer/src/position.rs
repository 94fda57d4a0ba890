use std::fmt;

/// A cursor into a named source text.
///
/// `index` and `column` start at `-1` for a cursor that has not loaded its
/// first character yet. Lines and columns are 0-based internally and shown
/// 1-based by the `Display` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Position<'src> {
    /// Character offset of the next unconsumed character
    pub index: isize,
    /// 0-based line number
    pub line: usize,
    /// 0-based column within the current line
    pub column: isize,
    /// Name the source was loaded under (`<stdin>`, a file path, ...)
    #[cfg_attr(feature = "serde", serde(skip))]
    pub source_name: &'src str,
    /// The full source text
    #[cfg_attr(feature = "serde", serde(skip))]
    pub source_text: &'src str,
}

impl<'src> Position<'src> {
    pub fn new(
        index: isize,
        line: usize,
        column: isize,
        source_name: &'src str,
        source_text: &'src str,
    ) -> Self {
        Self {
            index,
            line,
            column,
            source_name,
            source_text,
        }
    }

    /// A cursor sitting just before the first character of `source_text`.
    pub fn before_start(source_name: &'src str, source_text: &'src str) -> Self {
        Self::new(-1, 0, -1, source_name, source_text)
    }

    /// Steps over `current`. Crossing a newline moves to column 0 of the next line.
    pub fn advance(&mut self, current: Option<char>) -> &mut Self {
        self.index += 1;
        self.column += 1;

        if current == Some('\n') {
            self.line += 1;
            self.column = 0;
        }

        self
    }

    /// An independent copy, unaffected by later `advance` calls on `self`.
    pub fn snapshot(&self) -> Self {
        *self
    }
}

impl Default for Position<'_> {
    fn default() -> Self {
        Self::new(0, 0, 0, "", "")
    }
}

impl fmt::Display for Position<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.source_name,
            self.line + 1,
            self.column.max(0) + 1
        )
    }
}

/// The source range a token, node or error refers to. `end` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span<'src> {
    pub start: Position<'src>,
    pub end: Position<'src>,
}

impl<'src> Span<'src> {
    pub fn new(start: Position<'src>, end: Position<'src>) -> Self {
        Self { start, end }
    }

    /// A span covering exactly the character at `start`.
    pub fn single(start: Position<'src>) -> Self {
        let mut end = start.snapshot();
        end.advance(None);
        Self { start, end }
    }

    /// A zero-width marker, used for end of input.
    pub fn point(at: Position<'src>) -> Self {
        Self { start: at, end: at }
    }

    /// The smallest span covering both `self` and `other`.
    pub fn to(&self, other: &Span<'src>) -> Self {
        let start = if other.start.index < self.start.index {
            other.start
        } else {
            self.start
        };
        let end = if other.end.index > self.end.index {
            other.end
        } else {
            self.end
        };
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start.index == self.end.index
    }

    pub fn len(&self) -> usize {
        (self.end.index - self.start.index).max(0) as usize
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}

//! Case-folding character stream

use sqlparser::tokenizer::{Location, Span};

/// Character stream that presents an upper-cased view of its source while
/// keeping the original text addressable by position.
///
/// The grammar parses the folded view, which makes keyword and identifier
/// matching case-insensitive; anything that needs literal fidelity (the
/// inside of a quoted identifier, a string literal) is recovered from the
/// raw view with [`slice`](Self::slice). Folding is pure and per-character,
/// so a backtracking consumer can `mark`/`seek` freely without ever
/// observing a different fold for the same position.
#[derive(Debug, Clone)]
pub struct CaseFoldingStream {
    /// Original characters, unmodified.
    chars: Vec<char>,
    /// Char offset of the first character of each line, for translating
    /// line/column token locations back into the raw view.
    line_starts: Vec<usize>,
    position: usize,
    source_name: String,
}

/// ASCII upper-case fold. One-to-one per character and locale-invariant:
/// multi-character Unicode upper-casings would shift every later position
/// and break backtracking, and locale-sensitive mappings (Turkish dotless i)
/// would make the same input fold differently across environments.
fn fold(ch: char) -> char {
    ch.to_ascii_uppercase()
}

impl CaseFoldingStream {
    pub fn new(source: &str) -> Self {
        Self::with_source_name(source, "<sql>")
    }

    /// Create a stream with a label identifying where the text came from.
    pub fn with_source_name(source: &str, name: impl Into<String>) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let mut line_starts = vec![0];
        for (offset, ch) in chars.iter().enumerate() {
            if *ch == '\n' {
                line_starts.push(offset + 1);
            }
        }
        Self {
            chars,
            line_starts,
            position: 0,
            source_name: name.into(),
        }
    }

    /// Total stream extent in characters.
    pub fn size(&self) -> usize {
        self.chars.len()
    }

    /// Current read position.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Folded character at `position + offset`, or `None` past the end of
    /// the stream. Out-of-range reads are an end-of-input signal, never a
    /// panic.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied().map(fold)
    }

    /// Move forward one character. Safe to call at the end boundary, where
    /// it has no effect.
    pub fn advance(&mut self) {
        if self.position < self.chars.len() {
            self.position += 1;
        }
    }

    /// Record the current position so a backtracking consumer can return to
    /// it with [`seek`](Self::seek).
    pub fn mark(&self) -> usize {
        self.position
    }

    /// Release a marker obtained from [`mark`](Self::mark). The source is
    /// fully buffered, so there is no lookahead state to free.
    pub fn release(&mut self, _marker: usize) {}

    /// Reposition the stream, clamped to the stream extent.
    pub fn seek(&mut self, position: usize) {
        self.position = position.min(self.chars.len());
    }

    /// Original, unfolded text for a char range. The range is clamped to
    /// the stream extent; an inverted range yields an empty string.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        if start >= end {
            return String::new();
        }
        self.chars[start..end].iter().collect()
    }

    /// Materialize the folded view for a grammar that consumes a string
    /// rather than a character stream. The read position is restored
    /// afterwards, so folding remains a read-time projection.
    pub fn folded_text(&mut self) -> String {
        let marker = self.mark();
        let mut folded = String::with_capacity(self.size());
        while let Some(ch) = self.peek(0) {
            folded.push(ch);
            self.advance();
        }
        self.release(marker);
        self.seek(marker);
        folded
    }

    /// Original text behind a token span reported by the grammar, or `None`
    /// for an empty or synthesized span. Folding never changes character
    /// count, so positions in the folded view address the raw view
    /// directly.
    pub fn slice_span(&self, span: &Span) -> Option<String> {
        let start = self.offset_at(span.start)?;
        let end = self.offset_at(span.end)?;
        if start >= end {
            return None;
        }
        Some(self.slice(start, end))
    }

    /// Translate a 1-based line/column location into a char offset.
    fn offset_at(&self, location: Location) -> Option<usize> {
        if location.line == 0 || location.column == 0 {
            // Span::empty() sentinel on synthesized tokens
            return None;
        }
        let line_start = self.line_starts.get(location.line as usize - 1)?;
        Some(line_start + location.column as usize - 1)
    }
}

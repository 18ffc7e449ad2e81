use std::ops::Range;

use crate::grammar::{find_close, is_escaped};
use crate::unit::CodeUnit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a, U> {
    Literal(&'a [U]),
    /// A closed `${...}` span; `body` is everything between the braces, untrimmed.
    Reference { body: &'a [U] },
    /// A `${` that is never closed before the end of the text.
    Unclosed(&'a [U]),
}

/// Splits a complete text into literal runs and `${...}` spans.
#[derive(Debug)]
pub struct Scanner<'a, U> {
    source: &'a [U],
    idx: usize,
}

impl<'a, U: CodeUnit> Scanner<'a, U> {
    pub fn new(source: &'a [U]) -> Self {
        Self { source, idx: 0 }
    }

    pub fn scan_next(&mut self) -> Option<(Token<'a, U>, Range<usize>)> {
        let source = self.source;
        let start = self.idx;
        if start >= source.len() {
            return None;
        }

        let mut current = start;
        while let Some(p) = U::find(U::MARKER, &source[current..]).map(|p| current + p) {
            // `\$` and a `$` not followed by `{` are ordinary text.
            if is_escaped(source, p) || source.get(p + 1) != Some(&U::OPEN) {
                current = p + 1;
                continue;
            }

            if p > start {
                self.idx = p;
                return Some((Token::Literal(&source[start..p]), start..p));
            }

            return Some(match find_close(source, p + 2) {
                Some(end) => {
                    self.idx = end + 1;
                    let body = &source[p + 2..end];
                    (Token::Reference { body }, p..end + 1)
                }
                None => {
                    // Without an unescaped `}` ahead nothing later can close either.
                    self.idx = source.len();
                    (Token::Unclosed(&source[p..]), p..source.len())
                }
            });
        }

        self.idx = source.len();
        Some((Token::Literal(&source[start..]), start..source.len()))
    }
}

impl<'a, U: CodeUnit> Iterator for Scanner<'a, U> {
    type Item = (Token<'a, U>, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        self.scan_next()
    }
}

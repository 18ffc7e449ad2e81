//! Incremental interpolation of input that arrives in pieces.
//!
//! [`StreamInterpolator`] scans its input one code unit at a time with a small
//! state machine. Literal text goes to the sink as soon as it is seen; a
//! possible reference is held in a lookahead buffer until it closes, is ruled
//! out, or outgrows [`Config::max_lookahead`]. Output never depends on how the
//! input was split across [`feed`](StreamInterpolator::feed) calls, and matches
//! [`interpolate_units`](crate::interpolate_units) on the concatenated input
//! for every reference within the lookahead limit.

use std::io;

use crate::config::{Config, UnclosedPolicy};
use crate::context::Resolver;
use crate::error::Error;
use crate::grammar::{is_escaped, parse_name};
use crate::unit::CodeUnit;

/// Append-only destination for interpolated output.
pub trait Sink<U> {
    fn append(&mut self, units: &[U]) -> io::Result<()>;

    fn sync(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<W: io::Write + ?Sized> Sink<u8> for W {
    fn append(&mut self, units: &[u8]) -> io::Result<()> {
        self.write_all(units)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl Sink<char> for String {
    fn append(&mut self, units: &[char]) -> io::Result<()> {
        self.extend(units);
        Ok(())
    }
}

impl Sink<char> for &mut String {
    fn append(&mut self, units: &[char]) -> io::Result<()> {
        self.extend(units);
        Ok(())
    }
}

macro_rules! vec_sinks {
    ($($unit:ty),*) => {$(
        impl Sink<$unit> for Vec<$unit> {
            fn append(&mut self, units: &[$unit]) -> io::Result<()> {
                self.extend_from_slice(units);
                Ok(())
            }
        }

        impl Sink<$unit> for &mut Vec<$unit> {
            fn append(&mut self, units: &[$unit]) -> io::Result<()> {
                self.extend_from_slice(units);
                Ok(())
            }
        }
    )*};
}

vec_sinks!(u16, u32, char);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Literal,
    Candidate,
}

/// Outcome of appending one unit to the lookahead.
enum Step {
    Pending,
    /// The marker isn't followed by `{`.
    NotOpened,
    Overflow,
    Closed,
}

/// Interpolates input fed in arbitrary chunks, writing the result to a sink.
///
/// ```
/// use std::collections::HashMap;
/// use curly::StreamInterpolator;
///
/// let vars = HashMap::from([("color", "brown")]);
/// let mut out: Vec<u8> = Vec::new();
/// let mut stream = StreamInterpolator::new(&mut out, &vars);
/// stream.feed(b"The quick ${col").unwrap();
/// stream.feed(b"or} fox.").unwrap();
/// stream.finalize().unwrap();
/// assert_eq!(out, b"The quick brown fox.");
/// ```
pub struct StreamInterpolator<U, S, R> {
    sink: S,
    resolver: R,
    config: Config,
    mode: Mode,
    lookahead: Vec<U>,
    /// Last unit of the previous `feed` call.
    prev: Option<U>,
}

impl<U, S, R> StreamInterpolator<U, S, R>
where
    U: CodeUnit,
    S: Sink<U>,
    R: Resolver<U>,
{
    pub fn new(sink: S, resolver: R) -> Self {
        Self::with_config(sink, resolver, Config::default())
    }

    pub fn with_config(sink: S, resolver: R, config: Config) -> Self {
        Self {
            sink,
            resolver,
            config,
            mode: Mode::Literal,
            lookahead: Vec::new(),
            prev: None,
        }
    }

    /// Units currently held back while a possible reference is being read.
    pub fn pending(&self) -> &[U] {
        &self.lookahead
    }

    /// Scans `chunk`, writing everything that can be decided so far.
    ///
    /// If the sink fails, the text of the failed write is lost and the rest of
    /// `chunk` is skipped. The interpolator is left in literal mode with nothing
    /// pending, so later feeds carry on normally.
    pub fn feed(&mut self, chunk: &[U]) -> Result<(), Error> {
        let result = self.scan(chunk);
        if let Some(&last) = chunk.last() {
            self.prev = Some(last);
        }
        result
    }

    /// Ends the input, writing out whatever is still pending, and returns the sink.
    pub fn finalize(mut self) -> Result<S, Error> {
        if self.mode == Mode::Candidate {
            let len = self.lookahead.len();
            // A lone `$` never opened a reference, so it is always kept.
            if self.config.unclosed == UnclosedPolicy::Drop && len > 1 {
                tracing::debug!(len, "dropping unclosed reference at end of input");
                self.lookahead.clear();
                self.mode = Mode::Literal;
            } else {
                tracing::debug!(len, "flushing unclosed reference at end of input");
                self.emit_pending()?;
            }
        }
        self.sink.sync()?;
        Ok(self.sink)
    }

    fn scan(&mut self, chunk: &[U]) -> Result<(), Error> {
        // Start of the literal run not yet written to the sink.
        let mut run = 0;
        let mut i = 0;

        while i < chunk.len() {
            match self.mode {
                Mode::Literal => {
                    let Some(p) = U::find(U::MARKER, &chunk[i..]).map(|p| i + p) else {
                        break;
                    };
                    i = p + 1;
                    let escaped = if p == 0 {
                        self.prev == Some(U::ESCAPE)
                    } else {
                        is_escaped(chunk, p)
                    };
                    if escaped {
                        continue;
                    }
                    self.sink.append(&chunk[run..p])?;
                    self.lookahead.clear();
                    self.lookahead.push(U::MARKER);
                    self.mode = Mode::Candidate;
                }
                Mode::Candidate => {
                    self.lookahead.push(chunk[i]);
                    match self.step() {
                        Step::Pending => {
                            i += 1;
                            continue;
                        }
                        Step::NotOpened => {
                            // Emit the lone marker and rescan this unit as text;
                            // it may itself be a marker.
                            self.lookahead.clear();
                            self.mode = Mode::Literal;
                            self.sink.append(&[U::MARKER])?;
                        }
                        Step::Overflow => {
                            tracing::debug!(
                                len = self.lookahead.len(),
                                "lookahead limit exceeded; emitting candidate as text"
                            );
                            i += 1;
                            self.emit_pending()?;
                        }
                        Step::Closed => {
                            i += 1;
                            self.close_candidate()?;
                        }
                    }
                    run = i;
                }
            }
        }

        if self.mode == Mode::Literal && run < chunk.len() {
            self.sink.append(&chunk[run..])?;
        }
        Ok(())
    }

    fn step(&self) -> Step {
        let buf = &self.lookahead;
        let n = buf.len();
        if n == 2 && buf[1] != U::OPEN {
            return Step::NotOpened;
        }
        if n >= 3 && buf[n - 1] == U::CLOSE && buf[n - 2] != U::ESCAPE {
            return Step::Closed;
        }
        if self.config.max_lookahead.is_some_and(|max| n > max) {
            return Step::Overflow;
        }
        Step::Pending
    }

    /// Writes the lookahead out verbatim. The state is reset before the write,
    /// so a sink failure still leaves the interpolator in literal mode.
    fn emit_pending(&mut self) -> Result<(), Error> {
        let mut pending = std::mem::take(&mut self.lookahead);
        self.mode = Mode::Literal;
        let written = self.sink.append(&pending);
        pending.clear();
        self.lookahead = pending;
        Ok(written?)
    }

    fn close_candidate(&mut self) -> Result<(), Error> {
        self.mode = Mode::Literal;
        let n = self.lookahead.len();
        let body = &self.lookahead[2..n - 1];
        let written = match parse_name(body) {
            Some(name) => match self.resolver.resolve(name) {
                Some(value) => {
                    tracing::trace!(?name, "reference resolved");
                    self.sink.append(&value)
                }
                None => {
                    tracing::trace!(?name, "reference unresolved; removing");
                    Ok(())
                }
            },
            None => {
                tracing::trace!(?body, "reference has no valid name; removing");
                Ok(())
            }
        };
        self.lookahead.clear();
        Ok(written?)
    }
}

/// Each `write` consumes the whole buffer or fails. On failure, part of the
/// buffer may already have reached the sink, unlike the usual `io::Write`
/// guarantee; see [`StreamInterpolator::feed`] for the state left behind.
impl<S, R> io::Write for StreamInterpolator<u8, S, R>
where
    S: Sink<u8>,
    R: Resolver<u8>,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.feed(buf)?;
        Ok(buf.len())
    }

    /// Flushes the sink. A reference still being read stays pending.
    fn flush(&mut self) -> io::Result<()> {
        self.sink.sync()
    }
}

use std::borrow::Cow;

use crate::config::{Config, UnclosedPolicy};
use crate::context::Resolver;
use crate::grammar::parse_name;
use crate::scanner::{Scanner, Token};
use crate::unit::CodeUnit;

/// Single-pass interpolation over a complete text.
pub struct Interpolator<'a, R: ?Sized> {
    resolver: &'a R,
    config: &'a Config,
}

impl<'a, R: ?Sized> Interpolator<'a, R> {
    pub fn new(resolver: &'a R, config: &'a Config) -> Self {
        Self { resolver, config }
    }

    /// Interpolate UTF-8 text.
    ///
    /// Returns `Cow::Borrowed` if nothing was substituted or removed. Spans are
    /// only cut at ASCII delimiters, so the output is valid UTF-8 whenever every
    /// replacement is; invalid replacement bytes are replaced with U+FFFD.
    pub fn interpolate<'b>(&self, input: &'b str) -> Cow<'b, str>
    where
        R: Resolver<u8>,
    {
        match self.interpolate_units(input.as_bytes()) {
            Cow::Borrowed(_) => Cow::Borrowed(input),
            Cow::Owned(bytes) => Cow::Owned(
                String::from_utf8(bytes)
                    .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()),
            ),
        }
    }

    /// Interpolate a sequence of code units of any width.
    pub fn interpolate_units<'b, U>(&self, input: &'b [U]) -> Cow<'b, [U]>
    where
        U: CodeUnit,
        R: Resolver<U>,
    {
        let mut result: Option<Vec<U>> = None;

        for (token, range) in Scanner::new(input) {
            let replacement = match token {
                Token::Literal(text) => {
                    if let Some(res) = &mut result {
                        res.extend_from_slice(text);
                    }
                    continue;
                }
                Token::Unclosed(text) => match self.config.unclosed {
                    UnclosedPolicy::Flush => {
                        if let Some(res) = &mut result {
                            res.extend_from_slice(text);
                        }
                        continue;
                    }
                    UnclosedPolicy::Drop => None,
                },
                Token::Reference { body } => self.resolve(body),
            };

            // First modification: copy everything scanned so far.
            let res = result.get_or_insert_with(|| {
                let mut s = Vec::with_capacity(input.len() + 32);
                s.extend_from_slice(&input[..range.start]);
                s
            });
            if let Some(value) = replacement {
                res.extend_from_slice(&value);
            }
        }

        match result {
            Some(res) => Cow::Owned(res),
            None => Cow::Borrowed(input),
        }
    }

    fn resolve<U>(&self, body: &[U]) -> Option<Cow<'a, [U]>>
    where
        U: CodeUnit,
        R: Resolver<U>,
    {
        let Some(name) = parse_name(body) else {
            tracing::trace!(?body, "reference has no valid name; removing");
            return None;
        };
        let value = self.resolver.resolve(name);
        if value.is_none() {
            tracing::trace!(?name, "reference unresolved; removing");
        }
        value
    }
}

/// Interpolate UTF-8 text with the default configuration.
pub fn interpolate<'b, R>(input: &'b str, resolver: &R) -> Cow<'b, str>
where
    R: Resolver<u8> + ?Sized,
{
    Interpolator::new(resolver, &Config::default()).interpolate(input)
}

/// Interpolate code units of any width with the default configuration.
pub fn interpolate_units<'b, U, R>(input: &'b [U], resolver: &R) -> Cow<'b, [U]>
where
    U: CodeUnit,
    R: Resolver<U> + ?Sized,
{
    Interpolator::new(resolver, &Config::default()).interpolate_units(input)
}

mod config;
mod context;
mod error;
pub mod grammar;
mod interpolator;
pub mod scanner;
mod stream;
mod unit;

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::io;

pub use config::{Config, UnclosedPolicy};
pub use context::{from_fn, parse_index, FnResolver, Overlay, Resolver, SimpleContext};
pub use error::Error;
pub use interpolator::{interpolate, interpolate_units, Interpolator};
pub use stream::{Sink, StreamInterpolator};
pub use unit::CodeUnit;

/// Main entry point: a set of variables plus the configuration to apply them with.
#[derive(Debug, Clone)]
pub struct Curly {
    config: Config,
    context: SimpleContext,
}

impl Default for Curly {
    fn default() -> Self {
        Self::new()
    }
}

impl Curly {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            context: SimpleContext::new(),
        }
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            context: SimpleContext::new(),
        }
    }

    /// Add a variable to the internal context.
    pub fn add_variable(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.context.insert(key, value);
    }

    /// Interpolate a string using variables from the context.
    pub fn interpolate<'b>(&self, input: &'b str) -> Cow<'b, str> {
        Interpolator::new(&self.context, &self.config).interpolate(input)
    }

    /// Interpolate a string using temporary additional variables.
    ///
    /// `extra_vars` shadow context variables of the same name.
    pub fn interpolate_with<'b>(
        &self,
        input: &'b str,
        extra_vars: &HashMap<String, String>,
    ) -> Cow<'b, str> {
        let overlay = Overlay::new(&self.context, extra_vars);
        Interpolator::new(&overlay, &self.config).interpolate(input)
    }

    /// Start a streaming interpolation into `sink` using variables from the context.
    ///
    /// The returned value implements [`io::Write`], so it can be the target of
    /// [`io::copy`] or any other byte producer.
    pub fn stream<W: io::Write>(&self, sink: W) -> StreamInterpolator<u8, W, &SimpleContext> {
        StreamInterpolator::with_config(sink, &self.context, self.config.clone())
    }
}

/// Names of all well-formed references in `input`, sorted and without duplicates.
///
/// Escaped references and spans whose name doesn't validate are skipped.
pub fn find_references(input: &str) -> Vec<String> {
    scanner::Scanner::new(input.as_bytes())
        .filter_map(|(token, _)| match token {
            scanner::Token::Reference { body } => grammar::parse_name(body),
            _ => None,
        })
        .map(|name| String::from_utf8_lossy(name).into_owned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

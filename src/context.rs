use std::borrow::{Borrow, Cow};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::unit::CodeUnit;

/// Supplies replacement text for reference names.
///
/// `None` means the name is unknown; the reference is then removed from the
/// output without an error.
pub trait Resolver<U: CodeUnit> {
    fn resolve(&self, name: &[U]) -> Option<Cow<'_, [U]>>;
}

impl<U: CodeUnit, R: Resolver<U> + ?Sized> Resolver<U> for &R {
    fn resolve(&self, name: &[U]) -> Option<Cow<'_, [U]>> {
        (**self).resolve(name)
    }
}

// Keyed lookup over UTF-8 text. A name that isn't valid UTF-8 can't match a key.

impl<K, V, S> Resolver<u8> for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn resolve(&self, name: &[u8]) -> Option<Cow<'_, [u8]>> {
        let key = std::str::from_utf8(name).ok()?;
        self.get(key).map(|v| Cow::Borrowed(v.as_ref().as_bytes()))
    }
}

impl<K, V> Resolver<u8> for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn resolve(&self, name: &[u8]) -> Option<Cow<'_, [u8]>> {
        let key = std::str::from_utf8(name).ok()?;
        self.get(key).map(|v| Cow::Borrowed(v.as_ref().as_bytes()))
    }
}

// Positional lookup: the name is a decimal index into the list.

impl<V: AsRef<str>> Resolver<u8> for [V] {
    fn resolve(&self, name: &[u8]) -> Option<Cow<'_, [u8]>> {
        let value = self.get(parse_index(name)?)?;
        Some(Cow::Borrowed(value.as_ref().as_bytes()))
    }
}

impl<V: AsRef<str>> Resolver<u8> for Vec<V> {
    fn resolve(&self, name: &[u8]) -> Option<Cow<'_, [u8]>> {
        self.as_slice().resolve(name)
    }
}

impl<V: AsRef<str>, const N: usize> Resolver<u8> for [V; N] {
    fn resolve(&self, name: &[u8]) -> Option<Cow<'_, [u8]>> {
        self.as_slice().resolve(name)
    }
}

macro_rules! wide_resolvers {
    ($($unit:ty),*) => {$(
        impl<K, V, S> Resolver<$unit> for HashMap<K, V, S>
        where
            K: Borrow<[$unit]> + Hash + Eq,
            V: AsRef<[$unit]>,
            S: BuildHasher,
        {
            fn resolve(&self, name: &[$unit]) -> Option<Cow<'_, [$unit]>> {
                self.get(name).map(|v| Cow::Borrowed(v.as_ref()))
            }
        }

        impl<K, V> Resolver<$unit> for BTreeMap<K, V>
        where
            K: Borrow<[$unit]> + Ord,
            V: AsRef<[$unit]>,
        {
            fn resolve(&self, name: &[$unit]) -> Option<Cow<'_, [$unit]>> {
                self.get(name).map(|v| Cow::Borrowed(v.as_ref()))
            }
        }

        impl<V: AsRef<[$unit]>> Resolver<$unit> for [V] {
            fn resolve(&self, name: &[$unit]) -> Option<Cow<'_, [$unit]>> {
                let value = self.get(parse_index(name)?)?;
                Some(Cow::Borrowed(value.as_ref()))
            }
        }

        impl<V: AsRef<[$unit]>> Resolver<$unit> for Vec<V> {
            fn resolve(&self, name: &[$unit]) -> Option<Cow<'_, [$unit]>> {
                self.as_slice().resolve(name)
            }
        }

        impl<V: AsRef<[$unit]>, const N: usize> Resolver<$unit> for [V; N] {
            fn resolve(&self, name: &[$unit]) -> Option<Cow<'_, [$unit]>> {
                self.as_slice().resolve(name)
            }
        }
    )*};
}

wide_resolvers!(u16, u32, char);

/// Parses a reference name as a base-10 index.
///
/// Anything other than ASCII digits, or a value that overflows `usize`, yields `None`.
pub fn parse_index<U: CodeUnit>(name: &[U]) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    name.iter().try_fold(0usize, |acc, &unit| {
        let digit = char::from_u32(unit.value())?.to_digit(10)?;
        acc.checked_mul(10)?.checked_add(digit as usize)
    })
}

/// Resolver backed by a closure.
#[derive(Debug, Clone, Copy)]
pub struct FnResolver<F>(F);

/// Wraps `f` so it can be used wherever a [`Resolver`] is expected.
pub fn from_fn<U, F>(f: F) -> FnResolver<F>
where
    U: CodeUnit,
    F: Fn(&[U]) -> Option<Vec<U>>,
{
    FnResolver(f)
}

impl<U, F> Resolver<U> for FnResolver<F>
where
    U: CodeUnit,
    F: Fn(&[U]) -> Option<Vec<U>>,
{
    fn resolve(&self, name: &[U]) -> Option<Cow<'_, [U]>> {
        (self.0)(name).map(Cow::Owned)
    }
}

/// Consults `overlay` first and falls back to `base`.
pub struct Overlay<'a, R: ?Sized> {
    base: &'a R,
    overlay: &'a HashMap<String, String>,
}

impl<'a, R: ?Sized> Overlay<'a, R> {
    pub fn new(base: &'a R, overlay: &'a HashMap<String, String>) -> Self {
        Self { base, overlay }
    }
}

impl<R: Resolver<u8> + ?Sized> Resolver<u8> for Overlay<'_, R> {
    fn resolve(&self, name: &[u8]) -> Option<Cow<'_, [u8]>> {
        self.overlay.resolve(name).or_else(|| self.base.resolve(name))
    }
}

/// A simple in-memory context.
#[derive(Debug, Clone, Default)]
pub struct SimpleContext {
    vars: HashMap<String, String>,
}

impl SimpleContext {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(|s| s.as_str())
    }
}

impl Resolver<u8> for SimpleContext {
    fn resolve(&self, name: &[u8]) -> Option<Cow<'_, [u8]>> {
        self.vars.resolve(name)
    }
}

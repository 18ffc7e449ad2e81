use std::fmt::Debug;
use std::hash::Hash;

/// A fixed-width element of the text being interpolated.
///
/// The interpolators never decode or transcode units; they only compare them
/// against the grammar constants and classify their numeric value.
pub trait CodeUnit: Copy + Eq + Hash + Debug + 'static {
    /// `$`
    const MARKER: Self;
    /// `{`
    const OPEN: Self;
    /// `}`
    const CLOSE: Self;
    /// `\`
    const ESCAPE: Self;

    /// Numeric value of the unit, used for character-class checks.
    fn value(self) -> u32;

    /// Position of the first `needle` in `haystack`.
    fn find(needle: Self, haystack: &[Self]) -> Option<usize> {
        haystack.iter().position(|&u| u == needle)
    }
}

impl CodeUnit for u8 {
    const MARKER: Self = b'$';
    const OPEN: Self = b'{';
    const CLOSE: Self = b'}';
    const ESCAPE: Self = b'\\';

    fn value(self) -> u32 {
        u32::from(self)
    }

    fn find(needle: Self, haystack: &[Self]) -> Option<usize> {
        memchr::memchr(needle, haystack)
    }
}

impl CodeUnit for u16 {
    const MARKER: Self = b'$' as u16;
    const OPEN: Self = b'{' as u16;
    const CLOSE: Self = b'}' as u16;
    const ESCAPE: Self = b'\\' as u16;

    fn value(self) -> u32 {
        u32::from(self)
    }
}

impl CodeUnit for u32 {
    const MARKER: Self = b'$' as u32;
    const OPEN: Self = b'{' as u32;
    const CLOSE: Self = b'}' as u32;
    const ESCAPE: Self = b'\\' as u32;

    fn value(self) -> u32 {
        self
    }
}

impl CodeUnit for char {
    const MARKER: Self = '$';
    const OPEN: Self = '{';
    const CLOSE: Self = '}';
    const ESCAPE: Self = '\\';

    fn value(self) -> u32 {
        u32::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_find_matches_generic_search() {
        let hay = b"abc${x}";
        assert_eq!(<u8 as CodeUnit>::find(b'$', hay), Some(3));
        assert_eq!(<u8 as CodeUnit>::find(b'}', hay), Some(6));
        assert_eq!(<u8 as CodeUnit>::find(b'#', hay), None);
    }

    #[test]
    fn wide_constants_agree() {
        assert_eq!(<u16 as CodeUnit>::MARKER.value(), '$' as u32);
        assert_eq!(<u32 as CodeUnit>::CLOSE.value(), '}' as u32);
        assert_eq!(<char as CodeUnit>::ESCAPE.value(), 0x5C);
        let wide: Vec<u32> = "a$b".chars().map(u32::from).collect();
        assert_eq!(<u32 as CodeUnit>::find(<u32 as CodeUnit>::MARKER, &wide), Some(1));
    }
}

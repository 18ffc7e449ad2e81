use std::collections::HashMap;

use curly::{Config, Curly};

#[allow(dead_code)]
pub fn create_curly() -> Curly {
    let mut curly = Curly::default();
    curly.add_variable("color", "brown");
    curly.add_variable("nested", "${color}");
    curly.add_variable("empty", "");
    curly
}

#[allow(dead_code)]
pub fn create_curly_with_config(config: Config) -> Curly {
    let mut curly = Curly::with_config(config);
    curly.add_variable("color", "brown");
    curly.add_variable("nested", "${color}");
    curly.add_variable("empty", "");
    curly
}

#[allow(dead_code)]
pub fn fox_vars() -> HashMap<&'static str, &'static str> {
    HashMap::from([("color", "brown")])
}

/// Runs `input` through a streaming interpolator in chunks of `size` units.
#[allow(dead_code)]
pub fn stream_in_chunks<R>(input: &[u8], size: usize, resolver: R) -> Vec<u8>
where
    R: curly::Resolver<u8>,
{
    let mut stream = curly::StreamInterpolator::new(Vec::<u8>::new(), resolver);
    for chunk in input.chunks(size.max(1)) {
        stream.feed(chunk).unwrap();
    }
    stream.finalize().unwrap()
}

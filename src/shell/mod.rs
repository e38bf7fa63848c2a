//! Shell dialect helpers: quoting, command joining, env prefixes, and tee.

mod dialect;

pub use dialect::{Dialect, ReturnCommand};

/// Join the non-empty words of a command line with single spaces.
pub fn words<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter_map(|p| {
            let p = p.as_ref().trim().to_string();
            (!p.is_empty()).then_some(p)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

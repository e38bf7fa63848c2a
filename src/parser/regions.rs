use super::matchers::{ExampleBlockMatcher, LineMatcher, TestMethodMatcher};
use super::types::{LineRange, TestRegion};

/// Scans document text for test regions using an ordered set of matchers.
/// The first matcher that accepts a line wins.
pub struct RegionLocator {
    matchers: Vec<Box<dyn LineMatcher + Send + Sync>>,
}

impl std::fmt::Debug for RegionLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionLocator")
            .field("matchers", &self.matchers.len())
            .finish()
    }
}

impl Default for RegionLocator {
    fn default() -> Self {
        Self::new()
            .with_matcher(ExampleBlockMatcher)
            .with_matcher(TestMethodMatcher)
    }
}

impl RegionLocator {
    /// A locator with no matchers; it yields nothing until one is added.
    pub fn new() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    pub fn with_matcher(mut self, matcher: impl LineMatcher + Send + Sync + 'static) -> Self {
        self.matchers.push(Box::new(matcher));
        self
    }

    /// Lazily yields one region per matching line, in document order.
    pub fn regions<'a>(&'a self, text: &'a str) -> impl Iterator<Item = TestRegion> + 'a {
        text.split('\n')
            .enumerate()
            .filter_map(move |(line_no, line)| {
                self.matchers
                    .iter()
                    .find_map(|m| m.match_line(line))
                    .map(|found| TestRegion {
                        line_range: LineRange::single(line_no),
                        display_name: found.name,
                    })
            })
    }
}

/// Scan with the default matchers (spec-style examples and `def test_*`).
pub fn scan_regions(text: &str) -> Vec<TestRegion> {
    RegionLocator::default().regions(text).collect()
}

mod matchers;
mod regions;
mod types;

pub use matchers::{ExampleBlockMatcher, LineMatch, LineMatcher, TestMethodMatcher};
pub use regions::{scan_regions, RegionLocator};
pub use types::{Framework, LineRange, TestRegion};

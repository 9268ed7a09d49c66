/// Placeholder token replaced with the decimal day number
pub(crate) const DAY_TOKEN: &str = "{{day_number}}";

/// Placeholder token replaced with the decimal year
pub(crate) const YEAR_TOKEN: &str = "{{year}}";

/// Package directory template shared by every generated year
pub(crate) const PACKAGE_ROOT_TEMPLATE: &str = "net/navatwo/adventofcode{{year}}";

/// Per-day package directory, nested one level under the package root
pub(crate) const DAY_PACKAGE_TEMPLATE: &str = "net/navatwo/adventofcode{{year}}/day{{day_number}}";

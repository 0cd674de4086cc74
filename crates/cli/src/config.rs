//! Process configuration: defaults, then environment, then CLI flags.

use storefront_observability::LogFormat;
use storefront_products::{DEFAULT_PAGE_SIZE, SortOrder};

pub const PAGE_SIZE_VAR: &str = "STOREFRONT_PAGE_SIZE";
pub const SORT_VAR: &str = "STOREFRONT_SORT";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub page_size: u32,
    pub sort: SortOrder,
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortOrder::Asc,
            log_format: LogFormat::Compact,
        }
    }
}

/// An environment value that could not be used; the default was kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredSetting {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

impl core::fmt::Display for IgnoredSetting {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}={:?} ignored: {}", self.var, self.value, self.reason)
    }
}

impl StorefrontConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> (Self, Vec<IgnoredSetting>) {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read overrides through `lookup`.
    ///
    /// Invalid values are reported back instead of logged: this runs before
    /// the tracing subscriber exists.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<IgnoredSetting>) {
        let mut config = Self::default();
        let mut ignored = Vec::new();

        if let Some(value) = lookup(PAGE_SIZE_VAR) {
            match value.trim().parse::<u32>() {
                Ok(size) if size > 0 => config.page_size = size,
                Ok(_) => ignored.push(IgnoredSetting {
                    var: PAGE_SIZE_VAR,
                    value,
                    reason: "page size must be positive".to_string(),
                }),
                Err(e) => ignored.push(IgnoredSetting {
                    var: PAGE_SIZE_VAR,
                    value,
                    reason: e.to_string(),
                }),
            }
        }

        if let Some(value) = lookup(SORT_VAR) {
            match value.parse::<SortOrder>() {
                Ok(sort) => config.sort = sort,
                Err(e) => ignored.push(IgnoredSetting {
                    var: SORT_VAR,
                    value,
                    reason: e.to_string(),
                }),
            }
        }

        if let Some(value) = lookup(LOG_FORMAT_VAR) {
            match value.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(reason) => ignored.push(IgnoredSetting {
                    var: LOG_FORMAT_VAR,
                    value,
                    reason,
                }),
            }
        }

        (config, ignored)
    }
}

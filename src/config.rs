//! Pagination configuration
//!
//! Framework-level pagination defaults and limits, loadable from YAML or
//! JSON the same way operation metadata is.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default page size applied when the client does not request one
fn default_items_per_page() -> f64 {
    30.0
}

/// Pagination options for a resource or the whole framework
///
/// Resolved once at configuration time; the policy resolver consults these
/// when turning client arguments into an effective offset/limit window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct PaginationOptions {
    /// Page size used when the client does not specify one
    pub items_per_page: f64,

    /// Upper bound on the client-requested page size, if any
    pub maximum_items_per_page: Option<f64>,

    /// Whether clients may override the page size
    pub client_items_per_page: bool,

    /// Whether the query engine produces partial paginators (no count query)
    pub partial: bool,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            maximum_items_per_page: None,
            client_items_per_page: false,
            partial: false,
        }
    }
}

impl PaginationOptions {
    /// Create options with the framework defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default page size
    #[must_use]
    pub fn with_items_per_page(mut self, items_per_page: f64) -> Self {
        self.items_per_page = items_per_page;
        self
    }

    /// Set the maximum client-requested page size
    #[must_use]
    pub fn with_maximum_items_per_page(mut self, maximum: f64) -> Self {
        self.maximum_items_per_page = Some(maximum);
        self
    }

    /// Allow clients to override the page size
    #[must_use]
    pub fn with_client_items_per_page(mut self, enabled: bool) -> Self {
        self.client_items_per_page = enabled;
        self
    }

    /// Mark the query engine as producing partial paginators
    #[must_use]
    pub fn with_partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    /// Load options from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: Self = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a JSON value
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let options: Self = serde_json::from_value(value)?;
        options.validate()?;
        Ok(options)
    }

    /// Validate option values
    pub fn validate(&self) -> Result<()> {
        if self.items_per_page < 0.0 {
            return Err(Error::config("items_per_page must be >= 0"));
        }
        if let Some(maximum) = self.maximum_items_per_page {
            if maximum < 0.0 {
                return Err(Error::config("maximum_items_per_page must be >= 0"));
            }
        }
        Ok(())
    }

    /// Clamp a requested page size to the configured maximum
    pub fn clamp(&self, requested: f64) -> f64 {
        match self.maximum_items_per_page {
            Some(maximum) => requested.min(maximum),
            None => requested,
        }
    }
}

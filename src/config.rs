//! Configuration types and defaults for the tag cloud
//!
//! Every field has a default matching the stock documentation theme, so a
//! JS caller can pass `{}` (or nothing) and override single keys.

use serde::{Deserialize, Serialize};

use crate::error::TagCloudError;

/// Height (layout px) below which the cloud fits in one collapsed row.
pub const DEFAULT_COLLAPSE_THRESHOLD: f64 = 49.0;

// =============================================================================
// Main Configuration
// =============================================================================

/// Tag cloud configuration: aggregation, labels, class names, selectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagCloudConfig {
    /// Minimum occurrences for a tag to be shown. Default: 2
    pub min_count: u32,
    /// Container height at or below which the toggle is hidden. Default: 49.0
    pub collapse_threshold: f64,
    /// Trim whitespace around tokens before counting. Default: false
    pub trim_tokens: bool,
    /// Break count ties alphabetically instead of by first appearance. Default: false
    pub alphabetical_ties: bool,
    /// Separator inside `data-tags`. Default: ','
    pub separator: char,
    /// Prefix written into the search bar before the tag. Default: "#"
    pub query_prefix: String,

    // ===== LABELS =====
    pub show_more_label: String,
    pub show_less_label: String,

    // ===== CLASS NAMES =====
    pub wrapper_class: String,
    pub collapsed_class: String,
    pub container_class: String,
    pub tag_class: String,
    pub toggle_class: String,

    // ===== PAGE LOOKUPS =====
    /// Selector for resource link elements carrying `data-tags`
    pub links_selector: String,
    /// Selector for the container the cloud is appended to
    pub search_box_selector: String,
    /// Selector for the search `<input>`
    pub search_bar_selector: String,
}

impl Default for TagCloudConfig {
    fn default() -> Self {
        Self {
            min_count: 2,
            collapse_threshold: DEFAULT_COLLAPSE_THRESHOLD,
            trim_tokens: false,
            alphabetical_ties: false,
            separator: ',',
            query_prefix: "#".to_string(),
            show_more_label: "Show more".to_string(),
            show_less_label: "Show less".to_string(),
            wrapper_class: "tags-wrapper".to_string(),
            collapsed_class: "collapsed".to_string(),
            container_class: "tags-container".to_string(),
            tag_class: "tag-button".to_string(),
            toggle_class: "toggle-tags-btn".to_string(),
            links_selector: ".resource-link".to_string(),
            search_box_selector: "#search-box".to_string(),
            search_bar_selector: "#search-bar".to_string(),
        }
    }
}

impl TagCloudConfig {
    /// Stock configuration used by the docs theme
    pub fn production() -> Self {
        Self::default()
    }

    /// Same as default but with a total order on the output
    /// (count desc, then tag asc), useful for snapshot comparisons
    pub fn deterministic() -> Self {
        Self {
            alphabetical_ties: true,
            ..Self::default()
        }
    }

    /// Lenient parsing for hand-written markup (`data-tags="a, b"`)
    pub fn lenient() -> Self {
        Self {
            trim_tokens: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), TagCloudError> {
        if self.min_count == 0 {
            return Err(TagCloudError::InvalidConfig(
                "minCount must be at least 1".to_string(),
            ));
        }
        if !self.collapse_threshold.is_finite() || self.collapse_threshold < 0.0 {
            return Err(TagCloudError::InvalidConfig(format!(
                "collapseThreshold must be a non-negative number, got {}",
                self.collapse_threshold
            )));
        }

        let classes = [
            ("wrapperClass", &self.wrapper_class),
            ("collapsedClass", &self.collapsed_class),
            ("containerClass", &self.container_class),
            ("tagClass", &self.tag_class),
            ("toggleClass", &self.toggle_class),
        ];
        for (name, value) in classes {
            if value.trim().is_empty() || value.contains(char::is_whitespace) {
                return Err(TagCloudError::InvalidConfig(format!(
                    "{} must be a single non-empty class name",
                    name
                )));
            }
        }
        // Expanding removes the collapsed class, so it must not double as the wrapper's own
        if self.collapsed_class == self.wrapper_class {
            return Err(TagCloudError::InvalidConfig(
                "collapsedClass must differ from wrapperClass".to_string(),
            ));
        }

        Ok(())
    }
}

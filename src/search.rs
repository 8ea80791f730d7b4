//! Tag click -> search bar
//!
//! Clicking a tag writes `#<tag>` into the search bar and fires an `input`
//! event so the page's own filtering reacts as if the user typed it.

use crate::config::TagCloudConfig;
use crate::error::TagCloudError;

/// A search input that can be written to and notified
pub trait SearchTarget {
    fn set_query(&self, value: &str);

    /// Dispatch an `input` event so listeners re-run
    fn notify_input(&self) -> Result<(), TagCloudError>;
}

/// Query string written for a tag, e.g. `#rust`
pub fn query_for_tag(tag: &str, config: &TagCloudConfig) -> String {
    format!("{}{}", config.query_prefix, tag)
}

/// Write the tag query into `target` and fire its input event
///
/// Returns the query that was written.
pub fn apply_tag<T: SearchTarget + ?Sized>(
    target: &T,
    tag: &str,
    config: &TagCloudConfig,
) -> Result<String, TagCloudError> {
    let query = query_for_tag(tag, config);
    target.set_query(&query);
    target.notify_input()?;
    Ok(query)
}

impl SearchTarget for web_sys::HtmlInputElement {
    fn set_query(&self, value: &str) {
        self.set_value(value);
    }

    fn notify_input(&self) -> Result<(), TagCloudError> {
        let event = web_sys::Event::new("input").map_err(TagCloudError::from_js)?;
        self.dispatch_event(&event).map_err(TagCloudError::from_js)?;
        Ok(())
    }
}

//! Core data structures: tag counts and tag sources

use serde::{Deserialize, Serialize};

// =============================================================================
// Tag Count
// =============================================================================

/// A tag and how many links carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u32,
}

impl TagCount {
    pub fn new(tag: impl Into<String>, count: u32) -> Self {
        Self {
            tag: tag.into(),
            count,
        }
    }

    /// Button text, e.g. `rust (3)`
    pub fn label(&self) -> String {
        format!("{} ({})", self.tag, self.count)
    }
}

// =============================================================================
// Tag Counts
// =============================================================================

/// Ordered tag -> count mapping
///
/// Order is significant: it is the order buttons are rendered in.
/// Serializes as an array of `{ tag, count }` so JS keeps the order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCounts {
    entries: Vec<TagCount>,
}

impl TagCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tag: &str) -> Option<u32> {
        self.entries.iter().find(|e| e.tag == tag).map(|e| e.count)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TagCount> {
        self.entries.iter()
    }

    /// Tag names in order
    pub fn tags(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.tag.as_str()).collect()
    }

    /// Sum of all counts
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn as_slice(&self) -> &[TagCount] {
        &self.entries
    }
}

impl From<Vec<TagCount>> for TagCounts {
    fn from(entries: Vec<TagCount>) -> Self {
        Self { entries }
    }
}

impl FromIterator<TagCount> for TagCounts {
    fn from_iter<I: IntoIterator<Item = TagCount>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TagCounts {
    type Item = TagCount;
    type IntoIter = std::vec::IntoIter<TagCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a TagCounts {
    type Item = &'a TagCount;
    type IntoIter = std::slice::Iter<'a, TagCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Tag Source
// =============================================================================

/// Anything that may carry a raw `data-tags` string
///
/// `None` means the attribute is absent, which contributes no tags.
pub trait TagSource {
    fn raw_tags(&self) -> Option<String>;
}

impl TagSource for str {
    fn raw_tags(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl TagSource for String {
    fn raw_tags(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl<T: TagSource + ?Sized> TagSource for &T {
    fn raw_tags(&self) -> Option<String> {
        (**self).raw_tags()
    }
}

impl<T: TagSource> TagSource for Option<T> {
    fn raw_tags(&self) -> Option<String> {
        self.as_ref().and_then(TagSource::raw_tags)
    }
}

/// Resource link element: reads `element.dataset.tags`
impl TagSource for web_sys::HtmlElement {
    fn raw_tags(&self) -> Option<String> {
        self.dataset().get("tags")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_format() {
        assert_eq!(TagCount::new("rust", 3).label(), "rust (3)");
        assert_eq!(TagCount::new("c++", 12).label(), "c++ (12)");
    }

    #[test]
    fn test_lookup_and_order() {
        let counts: TagCounts = vec![TagCount::new("a", 3), TagCount::new("b", 2)].into();
        assert_eq!(counts.get("a"), Some(3));
        assert_eq!(counts.get("c"), None);
        assert!(counts.contains("b"));
        assert_eq!(counts.tags(), vec!["a", "b"]);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_serializes_as_ordered_array() {
        let counts: TagCounts = vec![TagCount::new("z", 4), TagCount::new("a", 2)].into();
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"[{"tag":"z","count":4},{"tag":"a","count":2}]"#);
    }

    #[test]
    fn test_option_source_absent() {
        let absent: Option<&str> = None;
        assert_eq!(absent.raw_tags(), None);
        assert_eq!(Some("a,b").raw_tags(), Some("a,b".to_string()));
    }
}

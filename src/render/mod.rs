//! Tag cloud renderer
//!
//! Two phases:
//! 1. [`build_tag_cloud`] turns a [`TagCounts`] into a detached [`TagCloud`]
//!    tree. Pure data, nothing touches the page.
//! 2. [`TagCloud::measure_and_adjust`] reads the laid-out height of the tag
//!    container through a [`Measure`] and hides the toggle when everything
//!    fits in one collapsed row.
//!
//! Attaching the tree to the document is a separate step, see `dom::mount`.
//!
//! Tree shape:
//! ```text
//! div.tags-wrapper.collapsed
//! ├── div.tags-container
//! │   ├── span.tag-button  "rust (4)"   -> SearchTag("rust")
//! │   └── span.tag-button  "wasm (3)"   -> SearchTag("wasm")
//! └── button.toggle-tags-btn "Show more" -> ToggleCollapse
//! ```

mod html;
mod measure;

pub use html::html_escape;
pub use measure::*;

use serde::Serialize;

use crate::config::TagCloudConfig;
use crate::error::TagCloudError;
use crate::search::{apply_tag, SearchTarget};
use crate::toggle::CollapseState;
use crate::types::TagCounts;

const CONTAINER_INDEX: usize = 0;
const TOGGLE_INDEX: usize = 1;

// =============================================================================
// Nodes
// =============================================================================

/// What happens when a node is clicked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Action {
    /// Write `#<tag>` into the search bar
    SearchTag(String),
    /// Flip collapsed/expanded
    ToggleCollapse,
}

/// Detached element
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementNode {
    pub tag_name: &'static str,
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Rendered with `display: none`
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementNode>,
}

impl ElementNode {
    pub fn new(tag_name: &'static str) -> Self {
        Self {
            tag_name,
            classes: Vec::new(),
            text: None,
            hidden: false,
            action: None,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn append_child(&mut self, child: ElementNode) {
        self.children.push(child);
    }
}

// =============================================================================
// Tag Cloud
// =============================================================================

/// Detached tag cloud plus its collapse state
#[derive(Debug, Clone, Serialize)]
pub struct TagCloud {
    root: ElementNode,
    state: CollapseState,
    #[serde(skip)]
    config: TagCloudConfig,
}

/// Phase 1: build the detached tree
pub fn build_tag_cloud(tags: &TagCounts, config: &TagCloudConfig) -> TagCloud {
    let mut wrapper = ElementNode::new("div")
        .with_class(&config.wrapper_class)
        .with_class(&config.collapsed_class);

    let mut tag_section = ElementNode::new("div").with_class(&config.container_class);
    for entry in tags {
        tag_section.append_child(
            ElementNode::new("span")
                .with_class(&config.tag_class)
                .with_text(entry.label())
                .with_action(Action::SearchTag(entry.tag.clone())),
        );
    }
    wrapper.append_child(tag_section);

    let state = CollapseState::default();
    wrapper.append_child(
        ElementNode::new("button")
            .with_class(&config.toggle_class)
            .with_text(state.label(config))
            .with_action(Action::ToggleCollapse),
    );

    TagCloud {
        root: wrapper,
        state,
        config: config.clone(),
    }
}

impl TagCloud {
    pub fn root(&self) -> &ElementNode {
        &self.root
    }

    pub fn state(&self) -> CollapseState {
        self.state
    }

    pub fn config(&self) -> &TagCloudConfig {
        &self.config
    }

    /// `div.tags-container`
    pub fn container(&self) -> &ElementNode {
        &self.root.children[CONTAINER_INDEX]
    }

    /// `button.toggle-tags-btn`
    pub fn toggle_button(&self) -> &ElementNode {
        &self.root.children[TOGGLE_INDEX]
    }

    pub fn tag_buttons(&self) -> &[ElementNode] {
        &self.container().children
    }

    pub fn is_toggle_hidden(&self) -> bool {
        self.toggle_button().hidden
    }

    /// Flip collapsed/expanded, keeping the wrapper class and button label in sync
    pub fn toggle(&mut self) -> CollapseState {
        let state = self.state.toggle();
        let collapsed_class = self.config.collapsed_class.clone();
        if state.is_collapsed() {
            self.root.add_class(&collapsed_class);
        } else {
            self.root.remove_class(&collapsed_class);
        }
        let label = state.label(&self.config).to_string();
        self.root.children[TOGGLE_INDEX].text = Some(label);
        state
    }

    /// Phase 2: hide the toggle if the container fits in one row
    ///
    /// Returns true if the toggle is now hidden.
    pub fn measure_and_adjust<M: Measure + ?Sized>(&mut self, measure: &M) -> bool {
        let height = measure.container_height(self.container());
        let hide = toggle_unneeded(height, self.config.collapse_threshold);
        if hide {
            self.root.children[TOGGLE_INDEX].hidden = true;
        }
        hide
    }

    /// Simulate a click on the button for `tag`
    ///
    /// Returns the written query, or `None` if no button carries that tag.
    pub fn click_tag<T: SearchTarget + ?Sized>(
        &self,
        tag: &str,
        target: &T,
    ) -> Result<Option<String>, TagCloudError> {
        let found = self
            .tag_buttons()
            .iter()
            .any(|node| matches!(&node.action, Some(Action::SearchTag(t)) if t == tag));
        if !found {
            return Ok(None);
        }
        apply_tag(target, tag, &self.config).map(Some)
    }

    /// Render to an HTML string (no event handlers)
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        html::write_node(&self.root, &mut out);
        out
    }
}

/// Toggle is pointless when the container is no taller than one collapsed row
pub fn toggle_unneeded(container_height: f64, threshold: f64) -> bool {
    container_height <= threshold
}

#[cfg(test)]
mod tests;

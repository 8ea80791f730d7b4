//! JavaScript surface
//!
//! ```javascript,ignore
//! import init, { setupTags, TagCloudWidget } from 'doc-tags';
//!
//! await init();
//! setupTags();                              // stock selectors
//! setupTags({ searchBoxSelector: '#find' }); // override any config key
//!
//! const widget = new TagCloudWidget({ alphabeticalTies: true });
//! widget.sortedTags(document.querySelectorAll('.resource-link'));
//! // -> [{ tag: 'rust', count: 4 }, { tag: 'wasm', count: 2 }]
//! ```

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::aggregate::{count_tags, rank_tags, sorted_tags_with, split_tags};
use crate::config::TagCloudConfig;
use crate::dom;
use crate::render::{build_tag_cloud, FixedHeight};
use crate::types::{TagCounts, TagSource};

/// A link handed over from JS: either an element or its raw `data-tags` string
enum JsLink {
    Element(HtmlElement),
    Raw(String),
}

impl TagSource for JsLink {
    fn raw_tags(&self) -> Option<String> {
        match self {
            JsLink::Element(el) => el.raw_tags(),
            JsLink::Raw(raw) => Some(raw.clone()),
        }
    }
}

/// Accepts arrays, `NodeList`s and anything else `Array.from` understands
fn links_from_js(links: &JsValue) -> Vec<JsLink> {
    if links.is_undefined() || links.is_null() {
        return Vec::new();
    }
    Array::from(links)
        .iter()
        .filter_map(|value| {
            if let Some(raw) = value.as_string() {
                return Some(JsLink::Raw(raw));
            }
            match value.dyn_into::<HtmlElement>() {
                Ok(el) => Some(JsLink::Element(el)),
                // Anything else has no tags to contribute
                Err(_) => None,
            }
        })
        .collect()
}

fn config_from_js(value: JsValue) -> Result<TagCloudConfig, JsValue> {
    let config: TagCloudConfig = if value.is_undefined() || value.is_null() {
        TagCloudConfig::default()
    } else {
        serde_wasm_bindgen::from_value(value)?
    };
    config.validate()?;
    Ok(config)
}

fn tags_to_js(tags: &TagCounts) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(tags)?)
}

// =============================================================================
// Widget
// =============================================================================

#[wasm_bindgen]
pub struct TagCloudWidget {
    config: TagCloudConfig,
}

#[wasm_bindgen]
impl TagCloudWidget {
    /// `config` is optional; missing keys take their defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TagCloudWidget, JsValue> {
        Ok(TagCloudWidget {
            config: config_from_js(config)?,
        })
    }

    /// Current configuration as a plain object
    #[wasm_bindgen(js_name = getConfig)]
    pub fn config(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.config)?)
    }

    /// Returns `[{ tag, count }]`, highest count first
    #[wasm_bindgen(js_name = sortedTags)]
    pub fn sorted_tags(&self, links: JsValue) -> Result<JsValue, JsValue> {
        let tags = sorted_tags_with(links_from_js(&links), &self.config);
        tags_to_js(&tags)
    }

    /// Static markup for the cloud; pass the container height to apply the
    /// toggle adjustment, omit it to leave the toggle visible
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self, links: JsValue, container_height: Option<f64>) -> String {
        let tags = sorted_tags_with(links_from_js(&links), &self.config);
        let mut cloud = build_tag_cloud(&tags, &self.config);
        if let Some(height) = container_height {
            cloud.measure_and_adjust(&FixedHeight(height));
        }
        cloud.to_html()
    }

    /// Build the cloud from `links` and append it to `search_box`
    ///
    /// Returns the number of tag buttons rendered.
    pub fn mount(
        &self,
        links: JsValue,
        search_box: Element,
        search_bar: HtmlInputElement,
    ) -> Result<usize, JsValue> {
        let tags = sorted_tags_with(links_from_js(&links), &self.config);
        let cloud = build_tag_cloud(&tags, &self.config);
        dom::mount(&cloud, &search_box, &search_bar)?;
        Ok(tags.len())
    }

    /// Look up links, search box and search bar by the configured selectors
    /// and mount the cloud
    pub fn setup(&self) -> Result<usize, JsValue> {
        let doc = dom::document()?;
        let links = dom::resource_links(&doc, &self.config)?;
        let search_box = dom::search_box(&doc, &self.config)?;
        let search_bar = dom::search_bar(&doc, &self.config)?;

        let tags = sorted_tags_with(&links, &self.config);
        let cloud = build_tag_cloud(&tags, &self.config);
        dom::mount(&cloud, &search_box, &search_bar)?;

        web_sys::console::log_1(
            &format!(
                "[TagCloud] Mounted {} tags from {} links",
                tags.len(),
                links.len()
            )
            .into(),
        );
        Ok(tags.len())
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// Page setup entry point: find the links, build the cloud, mount it
#[wasm_bindgen(js_name = setupTags)]
pub fn setup_tags(config: JsValue) -> Result<usize, JsValue> {
    let widget = TagCloudWidget::new(config)?;
    widget.setup().map_err(|e| {
        web_sys::console::error_1(&e);
        e
    })
}

/// Count raw `data-tags` strings without touching the DOM
#[wasm_bindgen(js_name = countTags)]
pub fn count_tags_js(tag_strings: Vec<String>, config: JsValue) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let tokens = tag_strings
        .iter()
        .flat_map(|raw| split_tags(raw, &config));
    tags_to_js(&rank_tags(count_tags(tokens), &config))
}

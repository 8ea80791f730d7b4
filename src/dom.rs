//! Page bindings: look up the page elements and mount a detached cloud
//!
//! Everything here calls into `web_sys`, so it only runs on wasm32 in a
//! browser. The pure pieces live in `aggregate` and `render`.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::config::TagCloudConfig;
use crate::error::TagCloudError;
use crate::render::{toggle_unneeded, Action, ElementNode, TagCloud};
use crate::search::apply_tag;
use crate::toggle::CollapseState;

// =============================================================================
// Lookups
// =============================================================================

pub fn document() -> Result<Document, TagCloudError> {
    let window = web_sys::window().ok_or(TagCloudError::NoWindow)?;
    window.document().ok_or(TagCloudError::NoDocument)
}

/// All resource link elements, in document order
pub fn resource_links(
    doc: &Document,
    config: &TagCloudConfig,
) -> Result<Vec<HtmlElement>, TagCloudError> {
    let nodes = doc
        .query_selector_all(&config.links_selector)
        .map_err(TagCloudError::from_js)?;

    let links = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    Ok(links)
}

/// Container the cloud is appended to
pub fn search_box(doc: &Document, config: &TagCloudConfig) -> Result<Element, TagCloudError> {
    doc.query_selector(&config.search_box_selector)
        .map_err(TagCloudError::from_js)?
        .ok_or_else(|| TagCloudError::MissingElement(config.search_box_selector.clone()))
}

pub fn search_bar(
    doc: &Document,
    config: &TagCloudConfig,
) -> Result<HtmlInputElement, TagCloudError> {
    let element = doc
        .query_selector(&config.search_bar_selector)
        .map_err(TagCloudError::from_js)?
        .ok_or_else(|| TagCloudError::MissingElement(config.search_bar_selector.clone()))?;

    element
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| TagCloudError::WrongElementType {
            selector: config.search_bar_selector.clone(),
            expected: "HTMLInputElement",
        })
}

// =============================================================================
// Mounting
// =============================================================================

/// Live handles to a mounted cloud
pub struct MountedCloud {
    pub wrapper: HtmlElement,
    pub container: HtmlElement,
    pub toggle: HtmlElement,
    state: Rc<Cell<CollapseState>>,
}

impl MountedCloud {
    pub fn state(&self) -> CollapseState {
        self.state.get()
    }
}

/// Materialize `cloud` in `search_box`'s document, wire its handlers and
/// append it to `search_box`
///
/// The height check runs on the next task-queue turn so the container has
/// been laid out by then.
pub fn mount(
    cloud: &TagCloud,
    search_box: &Element,
    search_bar: &HtmlInputElement,
) -> Result<MountedCloud, TagCloudError> {
    let doc = search_box.owner_document().ok_or(TagCloudError::NoDocument)?;
    let config = cloud.config();

    let mut actions: Vec<(HtmlElement, Action)> = Vec::new();
    let wrapper = materialize(&doc, cloud.root(), &mut actions)?;

    let container = child_at(&wrapper, 0)?;
    let toggle = child_at(&wrapper, 1)?;
    let state = Rc::new(Cell::new(cloud.state()));

    for (element, action) in actions {
        match action {
            Action::SearchTag(tag) => {
                on_click_search(&element, tag, search_bar.clone(), config.clone())?
            }
            Action::ToggleCollapse => on_click_toggle(
                &element,
                wrapper.clone(),
                Rc::clone(&state),
                config.clone(),
            )?,
        }
    }

    // Schedule before attaching: a failure must leave the page untouched
    if !cloud.is_toggle_hidden() {
        schedule_height_check(container.clone(), toggle.clone(), config.collapse_threshold)?;
    }

    search_box
        .append_child(&wrapper)
        .map_err(TagCloudError::from_js)?;

    Ok(MountedCloud {
        wrapper,
        container,
        toggle,
        state,
    })
}

fn materialize(
    doc: &Document,
    node: &ElementNode,
    actions: &mut Vec<(HtmlElement, Action)>,
) -> Result<HtmlElement, TagCloudError> {
    let element = doc
        .create_element(node.tag_name)
        .map_err(TagCloudError::from_js)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| TagCloudError::Dom(format!("<{}> is not an HTMLElement", node.tag_name)))?;

    let class_list = element.class_list();
    for class in &node.classes {
        class_list.add_1(class).map_err(TagCloudError::from_js)?;
    }
    if let Some(text) = &node.text {
        element.set_text_content(Some(text.as_str()));
    }
    if node.hidden {
        hide(&element)?;
    }
    if let Some(action) = &node.action {
        actions.push((element.clone(), action.clone()));
    }

    for child in &node.children {
        let child_el = materialize(doc, child, actions)?;
        element
            .append_child(&child_el)
            .map_err(TagCloudError::from_js)?;
    }

    Ok(element)
}

fn child_at(parent: &HtmlElement, index: u32) -> Result<HtmlElement, TagCloudError> {
    parent
        .children()
        .item(index)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| TagCloudError::Dom(format!("tag cloud has no child {}", index)))
}

fn hide(element: &HtmlElement) -> Result<(), TagCloudError> {
    element
        .style()
        .set_property("display", "none")
        .map_err(TagCloudError::from_js)
}

// =============================================================================
// Handlers
// =============================================================================

fn on_click_search(
    element: &HtmlElement,
    tag: String,
    search_bar: HtmlInputElement,
    config: TagCloudConfig,
) -> Result<(), TagCloudError> {
    let closure = Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = apply_tag(&search_bar, &tag, &config) {
            web_sys::console::error_1(&format!("[TagCloud] Tag click failed: {}", e).into());
        }
    });
    element
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(TagCloudError::from_js)?;
    // Handlers live as long as the page
    closure.forget();
    Ok(())
}

fn on_click_toggle(
    button: &HtmlElement,
    wrapper: HtmlElement,
    state: Rc<Cell<CollapseState>>,
    config: TagCloudConfig,
) -> Result<(), TagCloudError> {
    let label_target = button.clone();
    let closure = Closure::<dyn FnMut()>::new(move || {
        let mut current = state.get();
        let next = current.toggle();
        state.set(next);

        let class_list = wrapper.class_list();
        let result = if next.is_collapsed() {
            class_list.add_1(&config.collapsed_class)
        } else {
            class_list.remove_1(&config.collapsed_class)
        };
        if let Err(e) = result {
            web_sys::console::error_1(&e);
        }
        label_target.set_text_content(Some(next.label(&config)));
    });
    button
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(TagCloudError::from_js)?;
    closure.forget();
    Ok(())
}

fn schedule_height_check(
    container: HtmlElement,
    toggle: HtmlElement,
    threshold: f64,
) -> Result<(), TagCloudError> {
    let window = web_sys::window().ok_or(TagCloudError::NoWindow)?;
    let closure = Closure::once(move || {
        let height = container.offset_height() as f64;
        if toggle_unneeded(height, threshold) {
            if let Err(e) = hide(&toggle) {
                web_sys::console::warn_1(&format!("[TagCloud] Could not hide toggle: {}", e).into());
            }
        }
    });
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), 0)
        .map_err(TagCloudError::from_js)?;
    closure.forget();
    Ok(())
}

//! DocTags: Collapsible tag cloud for static documentation sites
//!
//! Scans resource links for their comma-separated `data-tags`, counts how
//! often each tag appears and renders the repeated ones as clickable buttons
//! above the search bar. Clicking a tag searches for `#<tag>`.
//!
//! # Architecture
//! - `config.rs` - Configuration types and defaults
//! - `types.rs` - TagCount / TagCounts and the TagSource trait
//! - `aggregate.rs` - Split, count, rank and filter tags
//! - `render/` - Detached tree builder, measurement phase, HTML output
//! - `toggle.rs` - Collapsed/expanded state machine
//! - `search.rs` - Tag click -> search bar query + input event
//! - `dom.rs` - Page lookups and mounting (web-sys)
//! - `wasm.rs` - JS bindings
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { setupTags } from 'doc-tags';
//!
//! await init();
//! setupTags();
//! ```
//!
//! # Usage (Rust)
//! ```
//! use doc_tags::{build_tag_cloud, sorted_tags, FixedHeight, TagCloudConfig};
//!
//! let tags = sorted_tags(["a,b", "a,c", "a,b"]);
//! assert_eq!(tags.get("a"), Some(3));
//! assert_eq!(tags.get("b"), Some(2));
//! assert!(!tags.contains("c"));
//!
//! let mut cloud = build_tag_cloud(&tags, &TagCloudConfig::default());
//! cloud.measure_and_adjust(&FixedHeight(24.0));
//! assert!(cloud.is_toggle_hidden());
//! ```

mod aggregate;
mod config;
mod error;
mod render;
mod search;
mod toggle;
mod types;

pub mod dom;
pub mod wasm;

pub use aggregate::*;
pub use config::*;
pub use error::*;
pub use render::*;
pub use search::*;
pub use toggle::*;
pub use types::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("doc-tags v{}", env!("CARGO_PKG_VERSION"))
}

//! Layout measurement for the post-render adjustment
//!
//! In the browser this is `offsetHeight` of the mounted container. Without a
//! layout engine (tests, prerendering) a fixed value or a row estimate
//! stands in.

use super::ElementNode;

/// Rendered height of the tag container
pub trait Measure {
    fn container_height(&self, container: &ElementNode) -> f64;
}

/// Always reports the same height
#[derive(Debug, Clone, Copy)]
pub struct FixedHeight(pub f64);

impl Measure for FixedHeight {
    fn container_height(&self, _container: &ElementNode) -> f64 {
        self.0
    }
}

/// Rough layout: `per_row` buttons fit on a line of `row_height`
#[derive(Debug, Clone, Copy)]
pub struct RowEstimate {
    pub row_height: f64,
    pub per_row: usize,
}

impl Default for RowEstimate {
    fn default() -> Self {
        Self {
            row_height: 36.0,
            per_row: 8,
        }
    }
}

impl Measure for RowEstimate {
    fn container_height(&self, container: &ElementNode) -> f64 {
        let buttons = container.children.len();
        if buttons == 0 || self.per_row == 0 {
            return 0.0;
        }
        let rows = buttons.div_ceil(self.per_row);
        rows as f64 * self.row_height
    }
}

impl<F> Measure for F
where
    F: Fn(&ElementNode) -> f64,
{
    fn container_height(&self, container: &ElementNode) -> f64 {
        self(container)
    }
}

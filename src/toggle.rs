//! Collapse toggle: the two visual density states of the cloud

use serde::{Deserialize, Serialize};

use crate::config::TagCloudConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CollapseState {
    #[default]
    Collapsed,
    Expanded,
}

impl CollapseState {
    /// Flip to the other state and return it
    pub fn toggle(&mut self) -> CollapseState {
        *self = match self {
            CollapseState::Collapsed => CollapseState::Expanded,
            CollapseState::Expanded => CollapseState::Collapsed,
        };
        *self
    }

    pub fn is_collapsed(self) -> bool {
        self == CollapseState::Collapsed
    }

    /// Toggle button text for this state
    pub fn label(self, config: &TagCloudConfig) -> &str {
        match self {
            CollapseState::Collapsed => &config.show_more_label,
            CollapseState::Expanded => &config.show_less_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let state = CollapseState::default();
        assert!(state.is_collapsed());
        assert_eq!(state.label(&TagCloudConfig::default()), "Show more");
    }

    #[test]
    fn test_toggle_flips_label() {
        let config = TagCloudConfig::default();
        let mut state = CollapseState::default();
        assert_eq!(state.toggle(), CollapseState::Expanded);
        assert_eq!(state.label(&config), "Show less");
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let config = TagCloudConfig::default();
        let mut state = CollapseState::default();
        let original = state.label(&config).to_string();
        state.toggle();
        state.toggle();
        assert!(state.is_collapsed());
        assert_eq!(state.label(&config), original);
    }
}

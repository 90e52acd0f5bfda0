//! HUD panel visibility state management.

/// Panel visibility toggles
#[derive(Debug, Clone)]
pub struct HudState {
    /// View selector and frame stats (top-left)
    pub show_view_panel: bool,
    /// Microscope or scan controls (top-right)
    pub show_controls_panel: bool,
    /// Help overlay (center, toggle with H key)
    pub show_help: bool,
    /// HUD enabled at all (toggle with Tab)
    pub hud_enabled: bool,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            show_view_panel: true,
            show_controls_panel: true,
            show_help: false,
            hud_enabled: true,
        }
    }
}

impl HudState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_hud(&mut self) {
        self.hud_enabled = !self.hud_enabled;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles() {
        let mut state = HudState::new();
        assert!(state.hud_enabled && !state.show_help);
        state.toggle_help();
        state.toggle_hud();
        assert!(state.show_help);
        assert!(!state.hud_enabled);
        assert!(state.show_view_panel && state.show_controls_panel);
    }
}

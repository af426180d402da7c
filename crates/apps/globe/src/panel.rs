use routing::Algorithm;

/// Result/loading display surface.
pub trait ResultPanel {
    /// Replaces the result area with `html`.
    fn show_result(&mut self, html: &str);

    fn clear_result(&mut self);

    fn set_loading(&mut self, visible: bool);

    /// Shows `mode`'s input controls and hides every other mode's.
    fn activate_controls(&mut self, mode: Algorithm);
}

/// Panel that just keeps the latest state; used by the CLI and tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryPanel {
    pub result: String,
    pub loading: bool,
    pub active_controls: Algorithm,
    pub loading_shown: usize,
}

impl MemoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controls_visible(&self, mode: Algorithm) -> bool {
        self.active_controls == mode
    }
}

impl ResultPanel for MemoryPanel {
    fn show_result(&mut self, html: &str) {
        self.result = html.to_string();
    }

    fn clear_result(&mut self) {
        self.result.clear();
    }

    fn set_loading(&mut self, visible: bool) {
        if visible {
            self.loading_shown += 1;
        }
        self.loading = visible;
    }

    fn activate_controls(&mut self, mode: Algorithm) {
        self.active_controls = mode;
    }
}

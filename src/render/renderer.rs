use crate::analysis::AnalysisResult;
use crate::geometry::ViewportPoint;

use super::panel::{build_panel, ResultPanel};

/// Window-side owner of result panels.
pub trait PanelHost {
    type Handle;

    fn install(&mut self, panel: &ResultPanel) -> Self::Handle;
    fn remove(&mut self, handle: Self::Handle);
}

/// Keeps at most one result panel on screen.
#[derive(Debug)]
pub struct ResultRenderer<H: PanelHost> {
    host: H,
    current: Option<H::Handle>,
}

impl<H: PanelHost> ResultRenderer<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            current: None,
        }
    }

    pub fn has_view(&self) -> bool {
        self.current.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Replaces whatever panel is showing with one built from `result`.
    pub fn render(&mut self, result: &AnalysisResult, anchor: ViewportPoint) {
        self.dismiss();
        let panel = build_panel(result, anchor);
        tracing::debug!(
            rows = panel.rows.len(),
            x = panel.position.x,
            y = panel.position.y,
            "rendering analysis results"
        );
        self.current = Some(self.host.install(&panel));
    }

    pub fn dismiss(&mut self) {
        if let Some(handle) = self.current.take() {
            self.host.remove(handle);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records live panels by id, the way a window tracks child widgets.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingHost {
        next_id: u64,
        pub(crate) live: Vec<(u64, ResultPanel)>,
        pub(crate) installs: usize,
    }

    impl PanelHost for RecordingHost {
        type Handle = u64;

        fn install(&mut self, panel: &ResultPanel) -> u64 {
            self.next_id += 1;
            self.installs += 1;
            self.live.push((self.next_id, panel.clone()));
            self.next_id
        }

        fn remove(&mut self, handle: u64) {
            self.live.retain(|(id, _)| *id != handle);
        }
    }
}

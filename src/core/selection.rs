use crate::models::game::DesktopView;
use uuid::Uuid;

/// Remembers the last selection so it can be put back when switching desktop
/// views clears it.
#[derive(Clone, Debug, Default)]
pub struct SelectionTracker {
    last_selected: Vec<Uuid>,
    last_view: Option<DesktopView>,
}

impl SelectionTracker {
    pub fn new(view: Option<DesktopView>) -> Self {
        Self {
            last_selected: Vec::new(),
            last_view: view,
        }
    }

    pub fn set_view(&mut self, view: DesktopView) {
        self.last_view = Some(view);
    }

    pub fn view(&self) -> Option<DesktopView> {
        self.last_view
    }

    /// Records the new selection. Returns the ids to re-select when the view
    /// changed, the selection came back empty, and preservation is enabled.
    pub fn on_selected(&mut self, selected: &[Uuid], view: DesktopView, preserve: bool) -> Option<Vec<Uuid>> {
        let previous = std::mem::replace(&mut self.last_selected, selected.to_vec());
        let previous_view = self.last_view.replace(view);

        let view_changed = previous_view != Some(view);
        if preserve && view_changed && selected.is_empty() && !previous.is_empty() {
            return Some(previous);
        }
        None
    }
}

use egui::Pos2;

use crate::services::schedule::SlotAddress;

/// An in-flight drag of an occupied slot
#[derive(Clone, Debug, PartialEq)]
pub struct DragContext {
    pub source: SlotAddress,
    /// Slot under the pointer during the latest frame
    pub hovered: Option<SlotAddress>,
    pub pointer_pos: Option<Pos2>,
}

impl DragContext {
    pub fn new(source: SlotAddress) -> Self {
        Self {
            source,
            hovered: None,
            pointer_pos: None,
        }
    }

    pub fn is_hovering(&self, slot: &SlotAddress) -> bool {
        self.hovered.as_ref() == Some(slot)
    }
}

/// Idle when no context is held, dragging otherwise
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragManager {
    active: Option<DragContext>,
}

impl DragManager {
    /// Start dragging from `source`, replacing any unfinished drag
    pub fn begin(&mut self, source: SlotAddress) {
        self.active = Some(DragContext::new(source));
    }

    pub fn active(&self) -> Option<&DragContext> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn source(&self) -> Option<&SlotAddress> {
        self.active.as_ref().map(|ctx| &ctx.source)
    }

    /// Record the slot under the pointer. `None` means the pointer left the grid.
    pub fn update_hover(&mut self, hovered: Option<SlotAddress>, pointer_pos: Option<Pos2>) {
        if let Some(state) = self.active.as_mut() {
            state.hovered = hovered;
            state.pointer_pos = pointer_pos;
        }
    }

    /// End the drag and hand back its context
    pub fn finish(&mut self) -> Option<DragContext> {
        self.active.take()
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_by_default() {
        let drag = DragManager::default();
        assert!(!drag.is_active());
        assert!(drag.source().is_none());
    }

    #[test]
    fn test_hover_ignored_while_idle() {
        let mut drag = DragManager::default();
        drag.update_hover(Some(SlotAddress::new("Amy Jones", "8:00")), None);
        assert_eq!(drag, DragManager::default());
    }

    #[test]
    fn test_finish_returns_context_and_goes_idle() {
        let mut drag = DragManager::default();
        drag.begin(SlotAddress::new("James Herwitz", "14:00"));
        drag.update_hover(
            Some(SlotAddress::new("Amy Jones", "8:00")),
            Some(Pos2::new(10.0, 20.0)),
        );

        let context = drag.finish().unwrap();
        assert_eq!(context.source, SlotAddress::new("James Herwitz", "14:00"));
        assert!(context.is_hovering(&SlotAddress::new("Amy Jones", "8:00")));
        assert!(!drag.is_active());
    }

    #[test]
    fn test_cancel_goes_idle() {
        let mut drag = DragManager::default();
        drag.begin(SlotAddress::new("Amy Jones", "8:00"));
        drag.cancel();
        assert!(drag.finish().is_none());
    }
}

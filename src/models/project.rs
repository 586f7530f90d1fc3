use super::event::LaborEvent;

/// A named container of labor events. Slots are created once at store
/// initialization and never added or removed; name and host stay editable,
/// the event collection is append-only.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub host: String,
    events: Vec<LaborEvent>,
}

impl Project {
    pub(crate) fn new(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Rows in insertion order.
    pub fn events(&self) -> &[LaborEvent] {
        &self.events
    }

    /// Rows ordered by date for display and aggregation. The sort is
    /// stable, so same-day rows keep their insertion order.
    pub fn sorted_events(&self) -> Vec<LaborEvent> {
        let mut rows = self.events.clone();
        rows.sort_by_key(|e| e.date);
        rows
    }

    pub(crate) fn push_event(&mut self, event: LaborEvent) {
        self.events.push(event);
    }

    /// Tab-style label: the project name, or a placeholder built from the
    /// slot id while the name is still blank.
    pub fn display_label(&self) -> String {
        if self.name.is_empty() {
            format!("新專案 ({})", self.id)
        } else {
            self.name.clone()
        }
    }
}

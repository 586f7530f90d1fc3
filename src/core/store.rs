use crate::errors::{AppError, AppResult};
use crate::models::{LaborEvent, Project};

/// In-memory store holding a fixed set of project slots for the lifetime of
/// one session. Nothing is persisted; closing the session discards it all.
#[derive(Debug, Clone)]
pub struct ProjectLedger {
    projects: Vec<Project>,
}

impl ProjectLedger {
    /// Creates `slot_count` empty projects with ids `proj_1` .. `proj_N`.
    pub fn initialize(slot_count: usize) -> Self {
        let projects = (1..=slot_count)
            .map(|n| Project::new(format!("proj_{}", n)))
            .collect();
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> AppResult<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::ProjectNotFound(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> AppResult<&mut Project> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::ProjectNotFound(id.to_string()))
    }

    pub fn rename(&mut self, id: &str, name: &str) -> AppResult<()> {
        self.get_mut(id)?.name = name.to_string();
        Ok(())
    }

    pub fn set_host(&mut self, id: &str, host: &str) -> AppResult<()> {
        self.get_mut(id)?.host = host.to_string();
        Ok(())
    }

    /// Validates the event and appends it to the given project. A rejected
    /// event leaves the ledger untouched.
    pub fn append_event(&mut self, id: &str, event: LaborEvent) -> AppResult<()> {
        let project = self.get_mut(id)?;
        event.validate()?;
        project.push_event(event);
        Ok(())
    }

    pub fn sorted_events(&self, id: &str) -> AppResult<Vec<LaborEvent>> {
        Ok(self.get(id)?.sorted_events())
    }
}

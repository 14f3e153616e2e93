//! Project record.

use super::{ProjectId, ProjectName};
use serde::{Deserialize, Serialize};

/// A named grouping of tasks.
///
/// Projects are created once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: ProjectName,
}

impl Project {
    /// Creates a project record.
    #[must_use]
    pub const fn new(id: ProjectId, name: ProjectName) -> Self {
        Self { id, name }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }
}

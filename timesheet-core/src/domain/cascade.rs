//! Four-level project catalog: project → sub-project → task → category.
//!
//! The candidates at every level are computed from the selections above it,
//! so there is no separate candidate state that could go stale. Selecting a
//! value clears every deeper level in the same call.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::CascadeError;

/// Static nested catalog, usually read from a JSON or TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CascadeCatalog {
    #[serde(default)]
    pub projects: Vec<CatalogProject>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogProject {
    pub name: String,
    #[serde(default)]
    pub sub_projects: Vec<String>,
    #[serde(default)]
    pub tasks: Vec<CatalogTask>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogTask {
    pub name: String,
    /// Sub-project this task belongs to.
    pub sub_project: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl CascadeCatalog {
    fn project(&self, name: &str) -> Option<&CatalogProject> {
        self.projects.iter().find(|p| p.name == name)
    }
}

impl CatalogProject {
    fn task(&self, sub_project: &str, name: &str) -> Option<&CatalogTask> {
        self.tasks
            .iter()
            .find(|t| t.sub_project == sub_project && t.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum CascadeLevel {
    Project,
    #[strum(serialize = "Sub-project")]
    SubProject,
    Task,
    Category,
}

impl CascadeLevel {
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Project => Some(Self::SubProject),
            Self::SubProject => Some(Self::Task),
            Self::Task => Some(Self::Category),
            Self::Category => None,
        }
    }
}

/// The selections of one row along the catalog chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeSelection {
    project: Option<String>,
    sub_project: Option<String>,
    task: Option<String>,
    category: Option<String>,
}

impl CascadeSelection {
    pub fn get(&self, level: CascadeLevel) -> Option<&str> {
        match level {
            CascadeLevel::Project => self.project.as_deref(),
            CascadeLevel::SubProject => self.sub_project.as_deref(),
            CascadeLevel::Task => self.task.as_deref(),
            CascadeLevel::Category => self.category.as_deref(),
        }
    }

    fn slot_mut(&mut self, level: CascadeLevel) -> &mut Option<String> {
        match level {
            CascadeLevel::Project => &mut self.project,
            CascadeLevel::SubProject => &mut self.sub_project,
            CascadeLevel::Task => &mut self.task,
            CascadeLevel::Category => &mut self.category,
        }
    }

    /// Candidates for `level` given the current upstream selections.
    /// Empty when an upstream level is unselected.
    pub fn options<'a>(&self, level: CascadeLevel, catalog: &'a CascadeCatalog) -> Vec<&'a str> {
        match level {
            CascadeLevel::Project => catalog.projects.iter().map(|p| p.name.as_str()).collect(),
            CascadeLevel::SubProject => self
                .project
                .as_deref()
                .and_then(|name| catalog.project(name))
                .map(|p| p.sub_projects.iter().map(String::as_str).collect())
                .unwrap_or_default(),
            CascadeLevel::Task => {
                let (Some(project), Some(sub_project)) = (
                    self.project.as_deref().and_then(|name| catalog.project(name)),
                    self.sub_project.as_deref(),
                ) else {
                    return Vec::new();
                };
                project
                    .tasks
                    .iter()
                    .filter(|t| t.sub_project == sub_project)
                    .map(|t| t.name.as_str())
                    .collect()
            }
            CascadeLevel::Category => {
                let (Some(project), Some(sub_project), Some(task)) = (
                    self.project.as_deref().and_then(|name| catalog.project(name)),
                    self.sub_project.as_deref(),
                    self.task.as_deref(),
                ) else {
                    return Vec::new();
                };
                project
                    .task(sub_project, task)
                    .map(|t| t.categories.iter().map(String::as_str).collect())
                    .unwrap_or_default()
            }
        }
    }

    /// Select `value` at `level` and clear every deeper level.
    ///
    /// Fails without changing anything when `value` is not a candidate for
    /// the current upstream selection.
    pub fn select(
        &mut self,
        level: CascadeLevel,
        value: &str,
        catalog: &CascadeCatalog,
    ) -> Result<(), CascadeError> {
        if !self.options(level, catalog).contains(&value) {
            return Err(CascadeError::NotACandidate {
                level,
                value: value.to_string(),
            });
        }
        *self.slot_mut(level) = Some(value.to_string());
        if let Some(deeper) = level.next() {
            self.clear(deeper);
        }
        Ok(())
    }

    /// Clear `level` and everything below it.
    pub fn clear(&mut self, level: CascadeLevel) {
        let mut current = Some(level);
        while let Some(l) = current {
            *self.slot_mut(l) = None;
            current = l.next();
        }
    }

    /// The shallowest level without a selection.
    pub fn first_missing(&self) -> Option<CascadeLevel> {
        let mut current = Some(CascadeLevel::Project);
        while let Some(level) = current {
            if self.get(level).is_none() {
                return Some(level);
            }
            current = level.next();
        }
        None
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.project.is_none()
    }
}

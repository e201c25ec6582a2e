//! Validated text values for projects and tasks.

use super::{WorkspaceDomainError, WorkspaceLimits};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trims `raw` and checks it against a character limit.
///
/// Returns `None` when the trimmed value is empty.
fn normalize(raw: &str, max_chars: usize) -> Result<Option<String>, usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > max_chars {
        return Err(max_chars);
    }
    Ok(Some(trimmed.to_owned()))
}

/// Non-empty, trimmed project name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a validated project name.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::EmptyProjectName`] when the value is
    /// blank, or [`WorkspaceDomainError::ProjectNameTooLong`] when it exceeds
    /// `limits.max_name_chars`.
    pub fn new(
        value: impl AsRef<str>,
        limits: &WorkspaceLimits,
    ) -> Result<Self, WorkspaceDomainError> {
        match normalize(value.as_ref(), limits.max_name_chars) {
            Ok(Some(name)) => Ok(Self(name)),
            Ok(None) => Err(WorkspaceDomainError::EmptyProjectName),
            Err(max) => Err(WorkspaceDomainError::ProjectNameTooLong { max }),
        }
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-empty, trimmed task title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::EmptyTaskTitle`] when the value is
    /// blank, or [`WorkspaceDomainError::TaskTitleTooLong`] when it exceeds
    /// `limits.max_title_chars`.
    pub fn new(
        value: impl AsRef<str>,
        limits: &WorkspaceLimits,
    ) -> Result<Self, WorkspaceDomainError> {
        match normalize(value.as_ref(), limits.max_title_chars) {
            Ok(Some(title)) => Ok(Self(title)),
            Ok(None) => Err(WorkspaceDomainError::EmptyTaskTitle),
            Err(max) => Err(WorkspaceDomainError::TaskTitleTooLong { max }),
        }
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional free-form description attached to a project or task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Parses an optional description.
    ///
    /// Blank input collapses to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::DescriptionTooLong`] when the trimmed
    /// value exceeds `limits.max_description_chars`.
    pub fn parse(
        value: Option<&str>,
        limits: &WorkspaceLimits,
    ) -> Result<Option<Self>, WorkspaceDomainError> {
        let Some(raw) = value else {
            return Ok(None);
        };
        normalize(raw, limits.max_description_chars)
            .map(|text| text.map(Self))
            .map_err(|max| WorkspaceDomainError::DescriptionTooLong { max })
    }

    /// Returns the description as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

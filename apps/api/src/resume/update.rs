//! Section-scoped edits to a `ResumeData`.
//!
//! One variant per section, so an edit can only touch a field that exists.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resume::models::{EducationItem, ExperienceItem, ResumeData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalInfoField {
    FullName,
    Email,
    Phone,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    Company,
    Position,
    Duration,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Institution,
    Degree,
    Year,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum ResumeUpdate {
    Photo {
        value: String,
    },
    PersonalInfo {
        field: PersonalInfoField,
        value: String,
    },
    Summary {
        value: String,
    },
    Experience {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    Education {
        index: usize,
        field: EducationField,
        value: String,
    },
    /// Comma-separated skill list; entries are trimmed and empties dropped.
    Skills {
        list: String,
    },
    AddExperience,
    AddEducation,
    RemoveExperience {
        index: usize,
    },
    RemoveEducation {
        index: usize,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum ResumeError {
    #[error("{section} entry {index} does not exist ({len} entries)")]
    IndexOutOfRange {
        section: &'static str,
        index: usize,
        len: usize,
    },
}

impl ResumeData {
    pub fn apply(&mut self, update: ResumeUpdate) -> Result<(), ResumeError> {
        match update {
            ResumeUpdate::Photo { value } => self.photo = value,
            ResumeUpdate::PersonalInfo { field, value } => {
                let info = &mut self.personal_info;
                match field {
                    PersonalInfoField::FullName => info.full_name = value,
                    PersonalInfoField::Email => info.email = value,
                    PersonalInfoField::Phone => info.phone = value,
                    PersonalInfoField::Location => info.location = value,
                }
            }
            ResumeUpdate::Summary { value } => self.summary = value,
            ResumeUpdate::Experience {
                index,
                field,
                value,
            } => {
                let item = entry_mut(&mut self.experience, "experience", index)?;
                match field {
                    ExperienceField::Company => item.company = value,
                    ExperienceField::Position => item.position = value,
                    ExperienceField::Duration => item.duration = value,
                    ExperienceField::Description => item.description = value,
                }
            }
            ResumeUpdate::Education {
                index,
                field,
                value,
            } => {
                let item = entry_mut(&mut self.education, "education", index)?;
                match field {
                    EducationField::Institution => item.institution = value,
                    EducationField::Degree => item.degree = value,
                    EducationField::Year => item.year = value,
                }
            }
            ResumeUpdate::Skills { list } => {
                self.skills = list
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
            }
            ResumeUpdate::AddExperience => self.experience.push(ExperienceItem::default()),
            ResumeUpdate::AddEducation => self.education.push(EducationItem::default()),
            ResumeUpdate::RemoveExperience { index } => {
                entry_mut(&mut self.experience, "experience", index)?;
                self.experience.remove(index);
            }
            ResumeUpdate::RemoveEducation { index } => {
                entry_mut(&mut self.education, "education", index)?;
                self.education.remove(index);
            }
        }
        Ok(())
    }
}

fn entry_mut<'a, T>(
    items: &'a mut [T],
    section: &'static str,
    index: usize,
) -> Result<&'a mut T, ResumeError> {
    let len = items.len();
    items.get_mut(index).ok_or(ResumeError::IndexOutOfRange {
        section,
        index,
        len,
    })
}

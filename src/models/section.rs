//! Page sections and their fixed order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// One of the seven anchorable sections of the page, in document order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Blog,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Blog,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Blog => "blog",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Blog => "Blog",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in the document, starting at 0 for `Home`.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Intersection threshold used when no override is configured.
    /// Hero and skills need a larger share on screen than the rest.
    pub fn default_threshold(&self) -> f32 {
        match self {
            SectionId::Home | SectionId::Skills => 0.3,
            _ => 0.2,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FolioError::UnknownSection(s.to_string()))
    }
}

/// Per-section intersection thresholds, indexed by `SectionId::index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds([f32; 7]);

impl Thresholds {
    pub fn get(&self, id: SectionId) -> f32 {
        self.0[id.index()]
    }

    pub fn set(&mut self, id: SectionId, value: f32) {
        self.0[id.index()] = value;
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        let mut values = [0.0; 7];
        for id in SectionId::ALL {
            values[id.index()] = id.default_threshold();
        }
        Self(values)
    }
}

/// A section as mounted on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub label: &'static str,
    pub order: usize,
    pub threshold: f32,
}

/// The fixed, ordered set of sections built once at startup.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(thresholds: &Thresholds) -> Self {
        let sections = SectionId::ALL
            .iter()
            .enumerate()
            .map(|(order, &id)| Section {
                id,
                label: id.label(),
                order,
                threshold: thresholds.get(id),
            })
            .collect();
        Self { sections }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    #[cfg(test)]
    pub fn get(&self, id: SectionId) -> &Section {
        &self.sections[id.index()]
    }

    pub fn first(&self) -> SectionId {
        self.sections[0].id
    }
}

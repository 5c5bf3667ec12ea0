//! Portfolio content registry.
//!
//! Everything the section renderers show lives here as plain data, loaded
//! once at startup either from the built-in defaults or from a JSON file.
//! Lists keep their declaration order; renderers rely on it.

mod defaults;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub education: String,
    pub certifications_blurb: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, 0..=100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub date: String,
    pub category: String,
    pub excerpt: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub nav: Vec<NavItem>,
    pub profile: Profile,
    pub about: About,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub blog_intro: String,
    pub blog: Vec<BlogPost>,
    pub contact_intro: String,
    pub contact: ContactInfo,
    pub footer: String,
}

impl Content {
    /// Load content from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| FolioError::ContentRead {
            path: path.to_path_buf(),
            source,
        })?;
        let content: Content =
            serde_json::from_str(&raw).map_err(|source| FolioError::ContentParse {
                path: path.to_path_buf(),
                source,
            })?;
        info!(path = %path.display(), projects = content.projects.len(), "loaded content file");
        Ok(content)
    }

    /// Featured projects followed by the rest, each in declaration order.
    pub fn projects_partitioned(&self) -> (Vec<&ProjectEntry>, Vec<&ProjectEntry>) {
        self.projects.iter().partition(|p| p.featured)
    }
}

impl Default for Content {
    fn default() -> Self {
        defaults::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_experience_declaration_order() {
        let content = Content::default();
        let companies: Vec<&str> = content
            .experience
            .iter()
            .map(|e| e.company.as_str())
            .collect();
        assert_eq!(
            companies,
            vec![
                "GULF AFRICAN BANK",
                "VOI WINNERS HOUSING COOPERATIVE SOCIETY LIMITED",
                "NUMERAL IOT LIMITED",
            ]
        );
    }

    #[test]
    fn test_nav_items_match_sections() {
        let content = Content::default();
        let ids: Vec<&str> = content.nav.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["home", "about", "experience", "projects", "skills", "blog", "contact"]
        );
    }

    #[test]
    fn test_projects_partitioned_keeps_order() {
        let content = Content::default();
        let (featured, other) = content.projects_partitioned();
        assert_eq!(featured.len(), 3);
        assert_eq!(other.len(), 5);
        assert_eq!(featured[0].title, "Personal Automation Dashboard");
        assert_eq!(other[0].title, "SHOP YETU3D - 3D Printing Platform");
        assert_eq!(other[4].title, "Catch the Falling Squares Online");
    }

    #[test]
    fn test_skill_levels_in_range() {
        let content = Content::default();
        for category in &content.skill_categories {
            for skill in &category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_load_roundtrips_builtin() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");
        let json = serde_json::to_string_pretty(&Content::default()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = Content::load(&path).unwrap();
        assert_eq!(loaded, Content::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Content::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, FolioError::ContentRead { .. }));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(&path, "{ \"nav\": 3 }").unwrap();
        let err = Content::load(&path).unwrap_err();
        assert!(matches!(err, FolioError::ContentParse { .. }));
    }
}

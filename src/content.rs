use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr, sync::LazyLock};
use thiserror::Error;

use crate::motion::MotionConfig;

static SITE_JSON: &str = include_str!("../content/site.json");

/// Site content compiled into the binary. Parsed and validated on first access.
pub static SITE: LazyLock<SiteContent> = LazyLock::new(|| {
    SiteContent::from_json(SITE_JSON).expect("Embedded site content should be valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Couldn't parse site content: {0}")]
    Parse(String),
    #[error("Project id must not be empty")]
    EmptyId,
    #[error("Duplicate project id: {0}")]
    DuplicateId(String),
    #[error("Project {0} must have a concrete category, not All")]
    UncategorizedProject(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown anchor: {0}")]
pub struct AnchorError(String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[default]
    All,
    YouTube,
    Reels,
    Shorts,
}

impl ProjectCategory {
    /// Every category, in the order the filter bar shows them.
    pub const ALL: [ProjectCategory; 4] = [Self::All, Self::YouTube, Self::Reels, Self::Shorts];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::YouTube => "YouTube",
            Self::Reels => "Reels",
            Self::Shorts => "Shorts",
        }
    }

    /// Vertical video. Rendered as a tall card and a narrow modal column.
    pub fn is_portrait(&self) -> bool {
        matches!(self, Self::Reels | Self::Shorts)
    }

    /// Whether a project tagged `tag` passes this category as a filter.
    pub fn admits(&self, tag: ProjectCategory) -> bool {
        *self == Self::All || *self == tag
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-page section the navigation can scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Home,
    Work,
    About,
}

impl Anchor {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::About => "about",
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            Self::Home => "#home",
            Self::Work => "#work",
            Self::About => "#about",
        }
    }
}

impl FromStr for Anchor {
    type Err = AnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('#').unwrap_or(s) {
            "home" => Ok(Self::Home),
            "work" => Ok(Self::Work),
            "about" => Ok(Self::About),
            _ => Err(AnchorError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub client: String,
    pub category: ProjectCategory,
    pub thumbnail: String,
    pub description: String,
    #[serde(default)]
    pub stats: Option<String>,
}

impl Project {
    pub fn stats_or_default(&self) -> &str {
        self.stats.as_deref().unwrap_or("High Retention")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
}

impl Skill {
    pub fn glyph(&self) -> &'static str {
        match self.icon.as_str() {
            "layers" => "▤",
            "video" => "🎬",
            "zap" => "⚡",
            "trending-up" => "📈",
            _ => "✦",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub anchor: Anchor,
    pub index: u8,
}

impl NavItem {
    pub fn badge(&self) -> String {
        format!("{:02}", self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroCopy {
    pub tagline: String,
    pub subtext: String,
}

/// The read-only list of projects, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    projects: Vec<Project>,
}

impl Registry {
    pub fn new(projects: Vec<Project>) -> Result<Self, ContentError> {
        Self::validate(&projects)?;
        Ok(Self { projects })
    }

    fn validate(projects: &[Project]) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for p in projects {
            if p.id.is_empty() {
                return Err(ContentError::EmptyId);
            }
            if p.category == ProjectCategory::All {
                return Err(ContentError::UncategorizedProject(p.id.clone()));
            }
            if !seen.insert(p.id.as_str()) {
                return Err(ContentError::DuplicateId(p.id.clone()));
            }
        }
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn filtered(&self, category: ProjectCategory) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| category.admits(p.category))
            .collect()
    }
}

#[derive(Deserialize)]
struct RawSite {
    hero: HeroCopy,
    projects: Vec<Project>,
    skills: Vec<Skill>,
    nav: Vec<NavItem>,
    #[serde(default)]
    motion: MotionConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub hero: HeroCopy,
    pub registry: Registry,
    pub skills: Vec<Skill>,
    pub nav: Vec<NavItem>,
    pub motion: MotionConfig,
}

impl SiteContent {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let raw: RawSite =
            serde_json::from_str(json).map_err(|e| ContentError::Parse(e.to_string()))?;
        let mut nav = raw.nav;
        nav.sort_by_key(|n| n.index);
        Ok(Self {
            hero: raw.hero,
            registry: Registry::new(raw.projects)?,
            skills: raw.skills,
            nav,
            motion: raw.motion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: ProjectCategory) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            client: "Client".to_string(),
            category,
            thumbnail: "https://example.com/thumb.jpg".to_string(),
            description: String::new(),
            stats: None,
        }
    }

    #[test]
    fn test_embedded_content_loads() {
        let site = SiteContent::from_json(SITE_JSON).expect("embedded content should parse");
        assert_eq!(site.registry.len(), 6);
        assert_eq!(site.skills.len(), 4);
        let anchors: Vec<Anchor> = site.nav.iter().map(|n| n.anchor).collect();
        assert_eq!(anchors, vec![Anchor::Home, Anchor::Work, Anchor::About]);
        assert_eq!(site.hero.tagline, "EDITING THAT GROWS BRANDS.");
        assert_eq!(site.motion.contact_entrance_ms, 2000);
        assert_eq!(site.motion.menu_close_ms, 500);
    }

    #[test]
    fn test_filtered_preserves_order() {
        let registry = &SITE.registry;
        assert_eq!(registry.filtered(ProjectCategory::All).len(), registry.len());

        for category in ProjectCategory::ALL {
            let filtered = registry.filtered(category);
            let expected: Vec<&Project> = registry
                .projects()
                .iter()
                .filter(|p| category == ProjectCategory::All || p.category == category)
                .collect();
            assert_eq!(filtered, expected, "category {category}");
        }

        let youtube: Vec<&str> = registry
            .filtered(ProjectCategory::YouTube)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(youtube, vec!["1", "3", "6"]);
    }

    #[test]
    fn test_registry_rejects_bad_content() {
        let dup = Registry::new(vec![
            project("1", ProjectCategory::Reels),
            project("1", ProjectCategory::Shorts),
        ]);
        assert_eq!(dup, Err(ContentError::DuplicateId("1".to_string())));

        let empty = Registry::new(vec![project("", ProjectCategory::Reels)]);
        assert_eq!(empty, Err(ContentError::EmptyId));

        let all = Registry::new(vec![project("7", ProjectCategory::All)]);
        assert_eq!(
            all,
            Err(ContentError::UncategorizedProject("7".to_string()))
        );

        let broken = SiteContent::from_json("{\"hero\": 1}");
        assert!(matches!(broken, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_category_traits() {
        assert_eq!(ProjectCategory::default(), ProjectCategory::All);
        assert_eq!(ProjectCategory::YouTube.to_string(), "YouTube");
        assert!(ProjectCategory::All.admits(ProjectCategory::Reels));
        assert!(!ProjectCategory::Shorts.admits(ProjectCategory::Reels));
        assert!(ProjectCategory::Shorts.is_portrait());
        assert!(!ProjectCategory::YouTube.is_portrait());
    }

    #[test]
    fn test_anchor_parsing() {
        assert_eq!("#about".parse::<Anchor>(), Ok(Anchor::About));
        assert_eq!("work".parse::<Anchor>(), Ok(Anchor::Work));
        assert!("#contact".parse::<Anchor>().is_err());
        assert_eq!(Anchor::Home.selector(), "#home");
    }

    #[test]
    fn test_stats_fallback() {
        let mut p = project("9", ProjectCategory::YouTube);
        assert_eq!(p.stats_or_default(), "High Retention");
        p.stats = Some("2M Views".to_string());
        assert_eq!(p.stats_or_default(), "2M Views");
    }
}

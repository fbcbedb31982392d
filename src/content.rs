use std::fmt;
use std::str::FromStr;

use leptos::prelude::AnyView;
use serde::Serialize;
use thiserror::Error;

/// Every static asset the site references, in one place.
///
/// Paths are relative to the `public/` assets dir served by cargo-leptos.
#[derive(Debug, Clone, Copy)]
pub struct Assets {
    pub planetary_diagram: &'static str,
    pub bofa_cloud: &'static str,
    pub bofa_workplace: &'static str,
    pub pawpaw_story: &'static str,
    pub ionboard: &'static str,
    pub portrait: &'static str,
    pub stones: [&'static str; 5],
    pub resume_pdf: &'static str,
    pub resume_download_name: &'static str,
}

pub const ASSETS: Assets = Assets {
    planetary_diagram: "/planetary-diagram.png",
    bofa_cloud: "/bofa-cloud.png",
    bofa_workplace: "/bofa-workplace.png",
    pawpaw_story: "/pawpaw-story.png",
    ionboard: "/ionboard.png",
    portrait: "/kate-xu.png",
    stones: [
        "/stone-1.png",
        "/stone-2.png",
        "/stone-3.png",
        "/stone-4.png",
        "/stone-5.png",
    ],
    resume_pdf: "/resume.pdf",
    resume_download_name: "KateXu_Resume.pdf",
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("unknown project slug: {0}")]
    UnknownProject(String),
}

/// A tabbed sub-section of a case-study page.
///
/// `body` is a plain fn so registries stay `'static` data; the page calls it
/// each time the section is (re)mounted.
pub struct SectionEntry {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub body: fn() -> AnyView,
}

/// Closed, ordered key set for one case-study page.
///
/// Each page defines its own enum; exhaustive matches make the registry a
/// total mapping, so there is no fallible lookup anywhere downstream.
pub trait SectionKey:
    Copy + PartialEq + Eq + fmt::Debug + Send + Sync + 'static
{
    const ALL: &'static [Self];
    const DEFAULT: Self;

    /// Tab label shown next to the stone icon.
    fn label(self) -> &'static str;

    /// Stone icon for this tab, by position in the rail.
    fn stone(self) -> &'static str {
        let idx = Self::ALL
            .iter()
            .position(|k| *k == self)
            .unwrap_or_default();
        ASSETS.stones[idx]
    }
}

/// Configuration for one case-study page: identity line plus the section
/// registry. Passing this into the generic page component is what keeps the
/// four project pages from being four copies of the same markup.
pub struct CaseStudy<K: SectionKey> {
    pub name: &'static str,
    pub tagline: &'static str,
    pub entry: fn(K) -> SectionEntry,
}

impl<K: SectionKey> Clone for CaseStudy<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: SectionKey> Copy for CaseStudy<K> {}

/// The four projects featured on the home hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectKey {
    BofaCloud,
    BofaWorkplace,
    PawpawStory,
    Ionboard,
}

/// Summary data shown on a project's hover card.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub timeline: &'static str,
    pub role: &'static str,
    pub highlights: &'static [&'static str],
    pub image: &'static str,
}

impl ProjectKey {
    pub const ALL: [ProjectKey; 4] = [
        ProjectKey::BofaCloud,
        ProjectKey::BofaWorkplace,
        ProjectKey::PawpawStory,
        ProjectKey::Ionboard,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ProjectKey::BofaCloud => "bofa-cloud",
            ProjectKey::BofaWorkplace => "workit",
            ProjectKey::PawpawStory => "pawpaw-story",
            ProjectKey::Ionboard => "ionboard",
        }
    }

    pub fn route(self) -> String {
        format!("/work/{}", self.slug())
    }

    pub fn entry(self) -> ProjectEntry {
        match self {
            ProjectKey::BofaCloud => ProjectEntry {
                title: "BOFA CLOUD",
                category: "WEB APP",
                description: "An enterprise cloud management platform designed to streamline infrastructure provisioning and monitoring for global banking operations.",
                timeline: "2023 – Present",
                role: "Lead Product Designer",
                highlights: &[
                    "Reduced provisioning time by 40%",
                    "Unified dashboard analytics",
                    "Design System adoption",
                ],
                image: ASSETS.bofa_cloud,
            },
            ProjectKey::BofaWorkplace => ProjectEntry {
                title: "BOFA WORKPLACE",
                category: "MOBILE APP",
                description: "Mobile application for employee resources, workspace booking, and internal communications.",
                timeline: "2022 – 2023",
                role: "UI/UX Designer",
                highlights: &[
                    "Mobile-first approach",
                    "Accessibility WCAG 2.1",
                    "Internal beta launch",
                ],
                image: ASSETS.bofa_workplace,
            },
            ProjectKey::PawpawStory => ProjectEntry {
                title: "PAWPAWSTORY",
                category: "SIDE PROJECT",
                description: "A community-driven platform for pet adoption stories and connecting shelter animals with forever homes.",
                timeline: "2021 – 2022",
                role: "Solo Founder & Designer",
                highlights: &[
                    "0 to 1 Product Design",
                    "Brand Identity System",
                    "React Native Prototype",
                ],
                image: ASSETS.pawpaw_story,
            },
            ProjectKey::Ionboard => ProjectEntry {
                title: "IONBOARD",
                category: "E-SKATEBOARD",
                description: "Companion app for electric skateboards providing real-time telemetry, ride tracking, and configuration.",
                timeline: "2020 – 2021",
                role: "Industrial & Digital Designer",
                highlights: &[
                    "Hardware-software sync",
                    "Real-time data viz",
                    "Bluetooth interface",
                ],
                image: ASSETS.ionboard,
            },
        }
    }
}

impl FromStr for ProjectKey {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectKey::ALL
            .into_iter()
            .find(|k| k.slug() == s)
            .ok_or_else(|| ContentError::UnknownProject(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_slugs_round_trip() {
        for key in ProjectKey::ALL {
            assert_eq!(key.slug().parse::<ProjectKey>(), Ok(key));
        }
    }

    #[test]
    fn test_unknown_slug_is_an_error() {
        let err = "not-a-project".parse::<ProjectKey>().unwrap_err();
        assert_eq!(
            err,
            ContentError::UnknownProject("not-a-project".to_string())
        );
        assert!(err.to_string().contains("not-a-project"));
    }

    #[test]
    fn test_every_project_has_card_data() {
        for key in ProjectKey::ALL {
            let entry = key.entry();
            assert!(!entry.title.is_empty());
            assert!(!entry.category.is_empty());
            assert!(!entry.highlights.is_empty());
            assert!(entry.image.starts_with('/'));
        }
    }

    #[test]
    fn test_project_routes_are_under_work() {
        for key in ProjectKey::ALL {
            assert!(key.route().starts_with("/work/"));
        }
    }

    #[test]
    fn test_card_data_serializes() {
        let json = serde_json::to_string(&ProjectKey::BofaCloud.entry())
            .expect("card data should serialize");
        assert!(json.contains("BOFA CLOUD"));
        assert!(json.contains("WEB APP"));
    }

    #[test]
    fn test_stone_assets_are_distinct() {
        for (i, a) in ASSETS.stones.iter().enumerate() {
            for b in &ASSETS.stones[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

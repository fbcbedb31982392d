//! BofA Cloud case study: private cloud management platform.

use leptos::prelude::*;

use super::blocks::{BulletRow, Callout, Lead, QuoteBlock};
use super::case_study::CaseStudyPage;
use crate::content::{CaseStudy, ProjectKey, SectionEntry, SectionKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BofaCloudSection {
    Highlights,
    Mission,
    Strategy,
    Success,
    Reflections,
}

impl SectionKey for BofaCloudSection {
    const ALL: &'static [Self] = &[
        BofaCloudSection::Highlights,
        BofaCloudSection::Mission,
        BofaCloudSection::Strategy,
        BofaCloudSection::Success,
        BofaCloudSection::Reflections,
    ];
    const DEFAULT: Self = BofaCloudSection::Highlights;

    fn label(self) -> &'static str {
        match self {
            BofaCloudSection::Highlights => "Highlights",
            BofaCloudSection::Mission => "Mission",
            BofaCloudSection::Strategy => "Strategy",
            BofaCloudSection::Success => "Success",
            BofaCloudSection::Reflections => "Reflections",
        }
    }
}

pub const BOFA_CLOUD: CaseStudy<BofaCloudSection> = CaseStudy {
    name: "BofA Cloud",
    tagline: "Lead Product Designer | Timeline: 2023 – Present",
    entry,
};

#[component]
pub fn BofaCloudPage() -> impl IntoView {
    view! { <CaseStudyPage study=BOFA_CLOUD /> }
}

fn entry(key: BofaCloudSection) -> SectionEntry {
    match key {
        BofaCloudSection::Highlights => SectionEntry {
            title: "Project Highlights",
            subtitle: None,
            body: highlights,
        },
        BofaCloudSection::Mission => SectionEntry {
            title: "The Mission",
            subtitle: Some("Project Detail: 001 — Mission Parameters"),
            body: mission,
        },
        BofaCloudSection::Strategy => SectionEntry {
            title: "The Strategy: Data-Driven Design Leadership",
            subtitle: Some("Project Detail: 001 — Strategy"),
            body: strategy,
        },
        BofaCloudSection::Success => SectionEntry {
            title: "Measuring Success with Glassbox",
            subtitle: None,
            body: success,
        },
        BofaCloudSection::Reflections => SectionEntry {
            title: "Reflections: Beyond the Interface",
            subtitle: None,
            body: reflections,
        },
    }
}

fn highlights() -> AnyView {
    view! {
        <div class="flex flex-col gap-4">
            {ProjectKey::BofaCloud
                .entry()
                .highlights
                .iter()
                .map(|h| view! { <BulletRow text=*h /> })
                .collect_view()}
        </div>
    }
    .into_any()
}

fn mission() -> AnyView {
    view! {
        <Lead>
            "Transforming BofA's hosting infrastructure from fragmented public cloud dependencies to a robust, cost-effective private solution. My role was to bridge the gap between complex backend engineering and a seamless, user-centered management experience."
        </Lead>
    }
    .into_any()
}

fn strategy() -> AnyView {
    view! {
        <div class="space-y-6">
            <Lead>
                "Beyond high-fidelity prototyping, I established a "
                <span class="font-semibold text-gray-900">"Product Intelligence Framework"</span>
                " to move the design team from \"reactive\" to \"proactive\"."
            </Lead>
            <div>
                <h3 class="text-2xl font-semibold text-gray-900 mb-4">
                    "Automated Executive Reporting"
                </h3>
                <p class="text-base text-gray-600 leading-relaxed">
                    "I developed and maintained daily automated intelligence reports sent directly to product leadership to maintain a pulse on the ecosystem's health."
                </p>
            </div>
            <div class="grid grid-cols-2 gap-8">
                <Callout
                    heading="Operational Vitality"
                    text="Tracking fundamental product stats including Unique Logins, Session Counts, and Build Failure Rates to identify systemic friction before users report it."
                />
                <Callout
                    heading="Feature Impact Analysis"
                    text="Measuring the \"success delta\" by collecting specific baseline data before a release and comparing it with Post-Launch Click Rates to quantify the positive impact of new design implementations."
                />
            </div>
        </div>
    }
    .into_any()
}

fn success() -> AnyView {
    view! {
        <div class="space-y-8">
            <Lead>
                "To gain granular visibility into the user journey, I integrated Glassbox session analytics into our success metrics."
            </Lead>
            <div class="grid grid-cols-2 gap-12">
                <div>
                    <h3 class="text-2xl font-semibold text-gray-900 mb-3">
                        "Conversion Optimization"
                    </h3>
                    <p class="text-base text-gray-600 leading-relaxed">
                        "Identified and resolved \"Day-2\" request friction by analyzing real-time session replays and bounce rates."
                    </p>
                </div>
                <div>
                    <h3 class="text-2xl font-semibold text-gray-900 mb-3">"A Seat at the Table"</h3>
                    <p class="text-base text-gray-600 leading-relaxed">
                        "This data-led approach empowered me to lead discussions during Quarterly PI Planning, directly influencing the product roadmap."
                    </p>
                </div>
            </div>
            <div>
                <h2 class="text-3xl font-bold text-gray-900 mb-8">
                    "The Process: User-Centered Foundation"
                </h2>
                <div class="grid grid-cols-2 gap-6 mb-6">
                    <Callout
                        tag="Phase 01"
                        heading="Research"
                        text="Conducted \"Think Aloud\" qualitative interviews with 15 internal stakeholders (AWS vs. BofA Cloud users)."
                    />
                    <Callout
                        tag="Phase 02"
                        heading="Persona Mapping"
                        text="Defined three core archetypes: System Architects, Software Engineers, and Product Managers."
                    />
                </div>
                <Callout
                    tag="Phase 03"
                    heading="Rapid Iteration"
                    text="Leveraged Sketch, InVision, and Git to maintain a \"living design library\" that engineers could reference in real-time."
                />
            </div>
        </div>
    }
    .into_any()
}

fn reflections() -> AnyView {
    view! {
        <div class="space-y-8">
            <Lead>
                "Looking back on 3+ years of steering the UX for BofA Cloud, I've distilled several key insights."
            </Lead>
            <div class="grid grid-cols-2 gap-x-8 gap-y-6">
                <Callout
                    heading="Design as Product Intelligence"
                    text="Moving from \"static designs\" to \"daily automated reports\" fundamentally changed my relationship with leadership. By tracking metrics, I shifted the conversation from subjective aesthetics to objective product health."
                />
                <Callout
                    heading="The Power of \"Before & After\" Data"
                    text="Establishing a baseline before every release allowed me to quantify the ROI of my design decisions. Proving a positive shift in Feature Click Rates was the most effective tool for gaining stakeholder buy-in."
                />
                <Callout
                    heading="Complexity Requires Technical Empathy"
                    text="Working on a private cloud infrastructure taught me that a \"good\" design is only as good as its implementation. Using Git and HTML to sync with engineers ensured complex flows remained functional in production."
                />
                <Callout
                    heading="User Friction as a Strategic Roadmap"
                    text="I learned that user complaints, whether gathered through analytics or direct feedback, are invaluable strategic assets that can drive product direction."
                />
            </div>
            <QuoteBlock text="\"In an enterprise ecosystem as massive as Bank of America, the designer's role isn't just to simplify the user's path, but to clarify the product's value to the business through data.\"" />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section_is_highlights() {
        assert_eq!(BofaCloudSection::DEFAULT, BofaCloudSection::Highlights);
    }

    #[test]
    fn test_registry_is_total_with_titles() {
        for key in BofaCloudSection::ALL {
            assert!(!entry(*key).title.is_empty());
        }
    }

    #[test]
    fn test_stones_follow_rail_order() {
        let stones: Vec<_> = BofaCloudSection::ALL.iter().map(|k| k.stone()).collect();
        assert_eq!(stones[0], "/stone-1.png");
        assert_eq!(stones[4], "/stone-5.png");
    }
}

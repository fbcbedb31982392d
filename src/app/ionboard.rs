//! ionboard case study: electric skateboard startup, from student project
//! to Kickstarter launch.

use leptos::prelude::*;

use super::blocks::{Callout, Lead, QuoteBlock, StatTile};
use super::case_study::CaseStudyPage;
use crate::content::{CaseStudy, SectionEntry, SectionKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IonboardSection {
    Vision,
    Strategy,
    Execution,
    Success,
    Reflections,
}

impl SectionKey for IonboardSection {
    const ALL: &'static [Self] = &[
        IonboardSection::Vision,
        IonboardSection::Strategy,
        IonboardSection::Execution,
        IonboardSection::Success,
        IonboardSection::Reflections,
    ];
    const DEFAULT: Self = IonboardSection::Vision;

    fn label(self) -> &'static str {
        match self {
            IonboardSection::Vision => "Vision",
            IonboardSection::Strategy => "Strategy",
            IonboardSection::Execution => "Execution",
            IonboardSection::Success => "Success",
            IonboardSection::Reflections => "Reflections",
        }
    }
}

pub const IONBOARD: CaseStudy<IonboardSection> = CaseStudy {
    name: "ionboard",
    tagline: "Industrial & Digital Designer | Timeline: 2020 – 2021",
    entry,
};

#[component]
pub fn IonboardPage() -> impl IntoView {
    view! { <CaseStudyPage study=IONBOARD /> }
}

fn entry(key: IonboardSection) -> SectionEntry {
    match key {
        IonboardSection::Vision => SectionEntry {
            title: "The Vision: Disrupting the Commuter Market",
            subtitle: Some("Project Detail: 01 — Market Disruption"),
            body: vision,
        },
        IonboardSection::Strategy => SectionEntry {
            title: "The Strategy: Data-Driven Growth & Discovery",
            subtitle: Some("Project Detail: 02 — User-Centered Design Approach"),
            body: strategy,
        },
        IonboardSection::Execution => SectionEntry {
            title: "The Execution: Full-Stack Brand Ecosystem",
            subtitle: Some("Project Detail: 03 — End-to-End Ownership"),
            body: execution,
        },
        IonboardSection::Success => SectionEntry {
            title: "Success Metrics",
            subtitle: Some("Project Detail: 04 — Measurable Impact"),
            body: success,
        },
        IonboardSection::Reflections => SectionEntry {
            title: "Reflections: From Product to Community",
            subtitle: None,
            body: reflections,
        },
    }
}

fn vision() -> AnyView {
    view! {
        <div class="space-y-8">
            <a
                href="https://www.kickstarter.com/projects/1728725377/ionboard"
                target="_blank"
                rel="noopener noreferrer"
                class="group inline-flex items-center gap-2"
            >
                <p class="text-sm font-semibold text-emerald-500 group-hover:underline">
                    "View our Kickstarter Campaign"
                </p>
            </a>
            <Lead>
                "The electric travel market was polarized: users needed fast, portable solutions, but high-end boards cost over $1,000. As the Design Lead, I helped disrupt this space by positioning ionboard as a "
                <span class="font-semibold text-gray-900">
                    "high-performance, customizable solution for under $500"
                </span>
                ", targeting the \"last-mile\" needs of students and urban commuters."
            </Lead>
            <div class="grid grid-cols-3 gap-6">
                <StatTile value="$57k+" caption="Kickstarter Launch" />
                <StatTile value="$499" caption="Launch Price" />
                <StatTile value="50%" caption="Below Market Price" />
            </div>
        </div>
    }
    .into_any()
}

fn strategy() -> AnyView {
    view! {
        <div class="space-y-8">
            <Lead>
                "I utilized a "
                <span class="font-semibold text-gray-900">"User-Centered Design (UCD)"</span>
                " approach to bridge the gap between a student project and a global e-commerce brand."
            </Lead>
            <div class="space-y-6">
                <Callout
                    heading="User Research"
                    text="Identified three core personas: Students, City Walkers, and Skateboard Lovers (ages 16-25), focusing on their need for addictive fun combined with rigid commuter utility."
                />
                <Callout
                    heading="Heuristic Analysis"
                    text="Evaluated competitors like bike-sharing and Segway, identifying that portability and \"DIY\" potential were the key differentiators for our audience."
                />
                <Callout
                    heading="Performance vs. Price"
                    text="We engineered a 100% profit margin while selling at 50% of the price of mainstream brands, launching the Model X (25 mph / 15.5-mile range) for just $499."
                />
            </div>
        </div>
    }
    .into_any()
}

fn execution() -> AnyView {
    view! {
        <div class="space-y-8">
            <Lead>"I owned the end-to-end visual and strategic touchpoints:"</Lead>
            <div class="grid grid-cols-2 gap-6">
                <Callout
                    tag="Crowdfunding"
                    heading="Kickstarter Architecture"
                    text="I designed and edited the Kickstarter campaign. We reached our $10k goal within 24 hours and finished with $57,132 in total pledges."
                />
                <Callout
                    tag="Marketing"
                    heading="Performance Marketing"
                    text="I worked daily with engineers to analyze Google, Facebook, and Instagram Ads data, iterating on creative content based on conversion metrics and SEO backlinks."
                />
                <Callout
                    tag="Global Presence"
                    heading="CES 2018"
                    text="Led the booth design and media strategy for the Consumer Electronics Show, successfully negotiating margins with international distributors and buyers."
                />
                <Callout
                    tag="Funding"
                    heading="Institutional Backing"
                    text="Authored the business plan that secured Incubator Funding from UC San Diego's \"The Basement,\" placing us in a high-growth accelerator program."
                />
            </div>
        </div>
    }
    .into_any()
}

fn success() -> AnyView {
    view! {
        <div class="space-y-8">
            <div class="grid grid-cols-3 gap-6">
                <StatTile value="570%" caption="of original Kickstarter goal achieved in 34 days" />
                <StatTile value="110%" caption="of monthly sales targets after launch" />
                <StatTile value="KOL" caption="YouTube partnerships across three continents" />
            </div>
            <Callout
                heading="From Product to Platform"
                text="Transformed a product into a platform, leveraging KOL (YouTube) partnerships and referral programs to build a self-sustaining fan base across three continents."
            />
        </div>
    }
    .into_any()
}

fn reflections() -> AnyView {
    view! {
        <div class="space-y-8">
            <div class="space-y-6">
                <div>
                    <h3 class="text-xl font-bold text-gray-900 mb-3">
                        "The \"Designer-Entrepreneur\" Hybrid"
                    </h3>
                    <p class="text-base text-gray-600 leading-relaxed">
                        "This project taught me that great design must be grounded in business law, manufacturing risks, and market timing."
                    </p>
                </div>
                <div>
                    <h3 class="text-xl font-bold text-gray-900 mb-3">"Timing the Value"</h3>
                    <p class="text-base text-gray-600 leading-relaxed">
                        "I learned that once a brand reaches the \"majority,\" its value shifts from just a \"product\" to a connection between people and resources."
                    </p>
                </div>
                <div>
                    <h3 class="text-xl font-bold text-gray-900 mb-3">"Data-Driven Iteration"</h3>
                    <p class="text-base text-gray-600 leading-relaxed">
                        "Analyzing ad performance daily with engineers sharpened my ability to make proactive design decisions based on user behavior, a skill I now apply to enterprise-scale systems."
                    </p>
                </div>
            </div>
            <QuoteBlock text="\"Great design must be grounded in business law, manufacturing risks, and market timing. The 'Designer-Entrepreneur' hybrid is the future.\"" />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section_is_vision() {
        assert_eq!(IonboardSection::DEFAULT, IonboardSection::Vision);
    }

    #[test]
    fn test_registry_is_total_with_titles() {
        for key in IonboardSection::ALL {
            assert!(!entry(*key).title.is_empty());
        }
    }
}

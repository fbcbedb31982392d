//! BofA WorkIT case study: the internal "command center" for technicians
//! and managers.

use leptos::prelude::*;

use super::blocks::{Callout, Lead, QuoteBlock, StatTile};
use super::case_study::CaseStudyPage;
use crate::content::{CaseStudy, SectionEntry, SectionKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkItSection {
    Challenge,
    Research,
    Design,
    Success,
    Reflections,
}

impl SectionKey for WorkItSection {
    const ALL: &'static [Self] = &[
        WorkItSection::Challenge,
        WorkItSection::Research,
        WorkItSection::Design,
        WorkItSection::Success,
        WorkItSection::Reflections,
    ];
    const DEFAULT: Self = WorkItSection::Challenge;

    fn label(self) -> &'static str {
        match self {
            WorkItSection::Challenge => "Challenge",
            WorkItSection::Research => "Research",
            WorkItSection::Design => "Design",
            WorkItSection::Success => "Success",
            WorkItSection::Reflections => "Reflections",
        }
    }
}

pub const WORKIT: CaseStudy<WorkItSection> = CaseStudy {
    name: "BofA WorkIT",
    tagline: "UX Researcher & Product Designer | Timeline: 1.5 Years",
    entry,
};

#[component]
pub fn WorkItPage() -> impl IntoView {
    view! { <CaseStudyPage study=WORKIT /> }
}

fn entry(key: WorkItSection) -> SectionEntry {
    match key {
        WorkItSection::Challenge => SectionEntry {
            title: "The Challenge: The \"Context-Switching\" Tax",
            subtitle: Some("Project Detail: 01 — Problem Discovery"),
            body: challenge,
        },
        WorkItSection::Research => SectionEntry {
            title: "Research & Empathize: Finding the Scenario",
            subtitle: Some("Project Detail: 02 — User-Centered Discovery"),
            body: research,
        },
        WorkItSection::Design => SectionEntry {
            title: "Design Evolution: Rational Iteration",
            subtitle: Some("Project Detail: 03 — Strategic Design Process"),
            body: design,
        },
        WorkItSection::Success => SectionEntry {
            title: "Measuring Success: The Continuous Roadmap",
            subtitle: Some("Project Detail: 04 — Data-Driven Validation"),
            body: success,
        },
        WorkItSection::Reflections => SectionEntry {
            title: "Reflections: The Art of Strategic Design",
            subtitle: None,
            body: reflections,
        },
    }
}

fn challenge() -> AnyView {
    view! {
        <div class="space-y-8">
            <Lead>
                "Bank of America technicians and managers were suffering from "
                <span class="font-semibold text-gray-900">"massive cognitive load"</span>
                ". To track a single day of work, 91% of users had to navigate over three different websites (Jira, ARM, EMS, Wiki)."
            </Lead>
            <div class="bg-gray-50 border border-gray-100 rounded-2xl p-8">
                <p class="text-xs font-semibold text-emerald-500 tracking-wider uppercase mb-3">
                    "The Pain Point"
                </p>
                <p class="text-base text-gray-700 leading-relaxed">
                    "Managers spent excessive time logging into multiple platforms just to approve a request or check a ticket status."
                </p>
                <div class="mt-6 bg-white rounded-xl p-6 border border-gray-200">
                    <p class="text-base text-gray-600 italic leading-relaxed">
                        "\"I have to open up over 3 websites to catch up with what's going on at my workplace to track all my related work.\""
                    </p>
                    <p class="text-sm text-gray-400 mt-3">"— Field Technician"</p>
                </div>
            </div>
            <div class="grid grid-cols-3 gap-6">
                <StatTile value="91%" caption="Users navigating 3+ websites daily" />
                <StatTile value="3+" caption="Platforms per workflow" />
                <StatTile value="NPS 10" caption="Final achievement" />
            </div>
        </div>
    }
    .into_any()
}

fn research() -> AnyView {
    view! {
        <div class="space-y-8">
            <Lead>
                "I conducted "
                <span class="font-semibold text-gray-900">
                    "qualitative interviews with 20 existing users"
                </span> " to synthesize actionable insights."
            </Lead>
            <Callout
                tag="User Persona"
                heading="Tim Doe (Product Owner)"
                text="Needs a clear \"skeleton view\" of his to-do list the moment he wakes up to be efficient during a busy day."
            />
            <Callout
                tag="The Opportunity Loop"
                heading="\"Between Office and Home\""
                text="I identified a critical gap: on public transit, users have the motivation to preview their day but lack the mobile tools to do so effectively without a laptop and VPN."
            />
            <div class="grid grid-cols-2 gap-6">
                <StatTile value="20" caption="User interviews conducted" />
                <StatTile value="1.5yr" caption="Project timeline" />
            </div>
        </div>
    }
    .into_any()
}

fn design() -> AnyView {
    view! {
        <div class="space-y-8">
            <Lead>
                "With limited budget and tight deadlines, I used a "
                <span class="font-semibold text-gray-900">"\"Rationally Push Forward\""</span>
                " strategy, leveraging existing internal resources to prioritize high-value features."
            </Lead>
            <div>
                <h3 class="text-2xl font-bold text-gray-900 mb-6">
                    "A. Dashboard Transformation (The 80/20 Rule)"
                </h3>
                <p class="text-base text-gray-600 leading-relaxed mb-6">
                    "Applying the 80/20 rule, I mapped out the 20% of vital features that drove 80% of user returns."
                </p>
                <div class="grid grid-cols-2 gap-6">
                    <Callout
                        tag="Old vs. New"
                        text="The original dashboard required excessive scrolling to see tasks. I evolved it into a card-based UI that provides a 360-degree view of all tickets in a single screen."
                    />
                    <Callout
                        tag="Quick Action"
                        text="I introduced a Quick Action section with color-coded categories, allowing users to \"Permit or Reject\" tickets instantly while avoiding accidental slips."
                    />
                </div>
            </div>
            <div>
                <h3 class="text-2xl font-bold text-gray-900 mb-6">
                    "B. The Support Dashboard (Data-Led Pivot)"
                </h3>
                <p class="text-base text-gray-600 leading-relaxed mb-6">
                    "Initial data showed that users frequently clicked \"My Approval\" and \"Assigned to me\" but ignored other sections."
                </p>
                <div class="space-y-4">
                    <Callout
                        tag="Version 2"
                        text="I pulled \"Recently Viewed\" into an independent section, but data showed it wasn't the primary driver."
                    />
                    <Callout
                        tag="Version 3 — The Breakthrough"
                        text="I replaced it with the Quick Action section and added a \"Plan for Day-Off\" feature after detecting a frequent user need for easy leave-management. This version achieved a perfect NPS of 10."
                    />
                </div>
            </div>
        </div>
    }
    .into_any()
}

fn success() -> AnyView {
    view! {
        <div class="space-y-8">
            <Lead>
                "Testing wasn't a one-time event; it was a "
                <span class="font-semibold text-gray-900">
                    "cycle integrated into every release"
                </span> "."
            </Lead>
            <div class="grid grid-cols-2 gap-6">
                <Callout
                    tag="Quantitative Success"
                    heading="Metrics Tracking"
                    text="Using Qualtrics and Matomo, we tracked NPS and Conversion Rate (defined as users logging in at least once daily)."
                />
                <Callout
                    tag="Qualitative Insights"
                    heading="Continuous Feedback"
                    text="Continuous feedback loops with the tech support team provided inspiring insights to improve designs based on real-time user struggles."
                />
            </div>
            <div class="bg-gradient-to-r from-[#f0fdf4] to-[#ecfdf5] border border-emerald-500/20 rounded-2xl p-8 text-center">
                <p class="text-xs font-semibold text-emerald-500 tracking-wider uppercase mb-4">
                    "Final Result"
                </p>
                <p class="text-7xl font-bold text-emerald-500 leading-none">"NPS 10"</p>
                <p class="text-base text-gray-600 mt-4">
                    "Unified fragmented workflows into a high-performance \"Command Center\""
                </p>
            </div>
        </div>
    }
    .into_any()
}

fn reflections() -> AnyView {
    view! {
        <div class="space-y-8">
            <Lead>
                "Over 1.5 years on the WorkIT team, I learned that a designer's most powerful tools aren't just pixels, but "
                <span class="font-semibold text-gray-900">"observation, empathy, and data"</span>
                "."
            </Lead>
            <div class="space-y-6">
                <Callout
                    heading="Information Structure is an Observational Craft"
                    text="Building a truly effective Information Architecture takes time and deep immersion in the user's daily life. You must ask users what they care about most to identify the \"20% vital features\" that drive 80% of the value."
                />
                <Callout
                    heading="Complaints as a Strategic Roadmap"
                    text="I learned to view user complaints not as setbacks, but as the most meaningful context for product thinking. A complaint today is a signal for the product's direction tomorrow."
                />
                <Callout
                    heading="Data vs. Expectation"
                    text="In enterprise design, user needs and user behavior data do not always match initial expectations. I learned to stay open-minded and \"think out of the box\" when the data challenged my assumptions."
                />
                <Callout
                    heading="The Bridge to Product Strategy"
                    text="Bringing these insights, gathered from technical support teams and raw analytics, to meetings with Product Managers allowed me to influence the product roadmap directly."
                />
            </div>
            <QuoteBlock text="\"A designer's most powerful tools aren't just pixels, but observation, empathy, and data — balancing business value with true UX happiness.\"" />
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section_is_challenge() {
        assert_eq!(WorkItSection::DEFAULT, WorkItSection::Challenge);
    }

    #[test]
    fn test_registry_is_total_with_titles() {
        for key in WorkItSection::ALL {
            let e = entry(*key);
            assert!(!e.title.is_empty());
        }
    }

    #[test]
    fn test_success_entry_title() {
        assert_eq!(
            entry(WorkItSection::Success).title,
            "Measuring Success: The Continuous Roadmap"
        );
    }

    #[test]
    fn test_only_reflections_lacks_subtitle() {
        for key in WorkItSection::ALL {
            let e = entry(*key);
            assert_eq!(e.subtitle.is_none(), *key == WorkItSection::Reflections);
        }
    }
}

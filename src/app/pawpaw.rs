//! PawpawStory case study: AI-assisted solo build of a pet-story app.

use leptos::prelude::*;

use super::blocks::{Callout, Lead, QuoteBlock, StatTile};
use super::case_study::CaseStudyPage;
use crate::content::{CaseStudy, SectionEntry, SectionKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawpawSection {
    Philosophy,
    Process,
    Build,
    Takeaways,
    TechStack,
}

impl SectionKey for PawpawSection {
    const ALL: &'static [Self] = &[
        PawpawSection::Philosophy,
        PawpawSection::Process,
        PawpawSection::Build,
        PawpawSection::Takeaways,
        PawpawSection::TechStack,
    ];
    const DEFAULT: Self = PawpawSection::Philosophy;

    fn label(self) -> &'static str {
        match self {
            PawpawSection::Philosophy => "Philosophy",
            PawpawSection::Process => "Process",
            PawpawSection::Build => "Build",
            PawpawSection::Takeaways => "Takeaways",
            PawpawSection::TechStack => "Tech Stack",
        }
    }
}

pub const PAWPAW: CaseStudy<PawpawSection> = CaseStudy {
    name: "PawpawStory",
    tagline: "Solo Founder & Designer | Timeline: 2021 – 2022",
    entry,
};

#[component]
pub fn PawpawStoryPage() -> impl IntoView {
    view! { <CaseStudyPage study=PAWPAW /> }
}

fn entry(key: PawpawSection) -> SectionEntry {
    match key {
        PawpawSection::Philosophy => SectionEntry {
            title: "The Core Philosophy: How I \"Vibe Coding\"",
            subtitle: Some("Project Detail: 01 — Methodology"),
            body: philosophy,
        },
        PawpawSection::Process => SectionEntry {
            title: "The Process: From Logic to Pixels",
            subtitle: Some("Project Detail: 02 — Case Study Breakdown"),
            body: process,
        },
        PawpawSection::Build => SectionEntry {
            title: "The Build & Polish",
            subtitle: Some("Project Detail: 03 — Production Implementation"),
            body: build,
        },
        PawpawSection::Takeaways => SectionEntry {
            title: "Key Takeaways",
            subtitle: Some("Project Detail: 04 — Why This Matters"),
            body: takeaways,
        },
        PawpawSection::TechStack => SectionEntry {
            title: "Tech Stack",
            subtitle: None,
            body: tech_stack,
        },
    }
}

fn philosophy() -> AnyView {
    view! {
        <div class="space-y-8">
            <div class="bg-gradient-to-r from-[#f0fdf4] to-[#ecfdf5] border border-emerald-500/20 rounded-2xl p-8">
                <p class="text-2xl text-gray-900 font-bold leading-snug">
                    "My Workflow is a "
                    <span class="text-emerald-500">"\"Multi-Agent System Orchestrating\""</span>
                </p>
                <p class="text-sm text-gray-500 mt-3">
                    "My methodology solves the biggest problem with AI today: "
                    <span class="font-medium text-gray-700">"\"Chaos\""</span> " and "
                    <span class="font-medium text-gray-700">"\"too much freedom\""</span>
                </p>
            </div>
            <div>
                <h3 class="text-xl font-bold text-gray-900 mb-6">"Inside of my agent box"</h3>
                <div class="space-y-4">
                    <Callout
                        tag="Structured Thinking"
                        text="Fed raw feature ideas to Gemini acting as a Senior CTO. Broke the app into clean, isolated modules (Auth, Recorder Service, Story Player)."
                    />
                    <Callout
                        tag="The \"Context\" Strategy"
                        text="Used Gemini to generate a .cursorrules file, a master instruction set keeping the codebase clean and preventing hallucinations."
                    />
                </div>
            </div>
        </div>
    }
    .into_any()
}

fn process() -> AnyView {
    view! {
        <div class="space-y-10">
            <div>
                <div class="flex items-center gap-4 mb-5">
                    <div class="w-8 h-8 bg-emerald-500 rounded-full flex items-center justify-center text-white font-bold text-sm">
                        "1"
                    </div>
                    <h3 class="text-2xl font-bold text-gray-900">"Logic & Architecture"</h3>
                    <span class="text-sm text-gray-400 ml-auto">"Tool: Google Gemini"</span>
                </div>
                <p class="text-base text-gray-600 leading-relaxed mb-5">
                    "Before touching any visual tool, the app's skeleton was negotiated in plain language."
                </p>
            </div>
            <div>
                <div class="flex items-center gap-4 mb-5">
                    <div class="w-8 h-8 bg-emerald-500 rounded-full flex items-center justify-center text-white font-bold text-sm">
                        "2"
                    </div>
                    <h3 class="text-2xl font-bold text-gray-900">"Design-to-Code"</h3>
                    <span class="text-sm text-gray-400 ml-auto">"Tools: Figma, Cursor, MCP"</span>
                </div>
                <p class="text-base text-gray-600 leading-relaxed mb-5">
                    "Connected Cursor directly to Figma via MCP. The AI \"reads\" design tokens (colors, spacing, typography) directly from the canvas."
                </p>
                <div class="bg-gray-50 border border-gray-100 rounded-2xl p-6">
                    <p class="text-sm text-gray-700 font-medium">
                        <span class="text-emerald-500">"Result: "</span>
                        "Pixel-to-Pixel identical implementation of high-fidelity prototypes, achieved in "
                        <span class="font-bold">"minutes rather than days"</span> "."
                    </p>
                </div>
            </div>
        </div>
    }
    .into_any()
}

fn build() -> AnyView {
    view! {
        <div class="space-y-8">
            <Lead>
                "Shipping a production app solo meant the polish pass had to be as systematic as the build itself."
            </Lead>
            <div class="grid grid-cols-3 gap-6">
                <StatTile value="4" caption="Weeks to Launch" />
                <StatTile value="v1.0" caption="App Store Release" />
                <StatTile value="70%" caption="Dev Time Saved" />
            </div>
        </div>
    }
    .into_any()
}

fn takeaways() -> AnyView {
    view! {
        <div class="space-y-6">
            <Callout
                heading="Design Integrity Survives Automation"
                text="Handing code generation to tools did not dilute the design; the MCP bridge kept every token faithful to the Figma source of truth."
            />
            <Callout
                heading="Orchestration Over Generation"
                text="By using Gemini to \"manage\" Cursor, I cut development time by ~70%, allowing more time for User Testing and Iteration."
            />
            <Callout
                heading="The Designer as System Architect"
                text="The craft shifts from drawing every screen to specifying the rules that let agents draw them consistently."
            />
            <QuoteBlock text="\"The fastest path from idea to App Store was not typing faster. It was teaching the tools to respect the design.\"" />
        </div>
    }
    .into_any()
}

fn tech_stack() -> AnyView {
    let design = [
        ("Figma", "Variables, Auto-layout"),
        ("Google Gemini", "Logic/Prompting"),
        ("Cursor", "Code Generation"),
        ("Figma MCP", "Context Bridge"),
    ];
    let engineering = [
        ("React Native", "Cross-platform UI"),
        ("Expo", "Build & distribution"),
        ("TypeScript", "Type safety"),
        ("Supabase", "Auth & storage"),
        ("ElevenLabs API", "Story narration"),
    ];
    view! {
        <div class="grid grid-cols-2 gap-12">
            <div>
                <h3 class="text-xl font-bold text-gray-900 mb-6">"Design & Orchestration"</h3>
                <div class="space-y-4">
                    {design
                        .into_iter()
                        .map(|(name, role)| {
                            view! {
                                <div>
                                    <span class="text-base text-gray-800 font-medium">{name}</span>
                                    <p class="text-sm text-gray-500">{role}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div>
                <h3 class="text-xl font-bold text-gray-900 mb-6">"Engineering"</h3>
                <div class="space-y-4">
                    {engineering
                        .into_iter()
                        .map(|(name, role)| {
                            view! {
                                <div>
                                    <span class="text-base text-gray-800 font-medium">{name}</span>
                                    <p class="text-sm text-gray-500">{role}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_section_is_philosophy() {
        assert_eq!(PawpawSection::DEFAULT, PawpawSection::Philosophy);
    }

    #[test]
    fn test_registry_is_total_with_titles() {
        for key in PawpawSection::ALL {
            assert!(!entry(*key).title.is_empty());
        }
    }

    #[test]
    fn test_tab_labels_are_unique() {
        for (i, a) in PawpawSection::ALL.iter().enumerate() {
            for b in &PawpawSection::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}

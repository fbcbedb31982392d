use leptos::prelude::*;
use leptos_meta::Title;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::backdrop::{BackButton, DriftingShips, IdentityChip, OrbitBackdrop};
use super::nav::{SectionNav, StoneBar, StoneRail};
use crate::content::{CaseStudy, SectionKey};

/// How long the section cross-fade runs before the outgoing entry is
/// dropped. Matches the CSS animation duration in input.css.
const TRANSITION_MS: f64 = 300.0;

/// One project's detail view: stone navigation plus the content panel for
/// the selected section. All four case studies render through this, each
/// with its own key enum and registry.
#[component]
pub fn CaseStudyPage<K: SectionKey>(study: CaseStudy<K>) -> impl IntoView {
    let nav = RwSignal::new(SectionNav::<K>::new());

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            nav.update(|n| n.settle());
        },
        TRANSITION_MS,
    );
    let on_select = Callback::new(move |key: K| {
        log::debug!("section -> {key:?}");
        nav.update(|n| n.select(key));
        start(());
    });
    let current = Signal::derive(move || nav.get().current());

    view! {
        <Title text=study.name />
        <div class="h-screen w-screen overflow-hidden bg-[#fffbf2] relative">
            // faded home-hub scenery behind the panels
            <div class="absolute inset-0 opacity-40 pointer-events-none">
                <OrbitBackdrop />
                <DriftingShips />
            </div>

            // desktop layout
            <div class="hidden md:flex absolute inset-0 bg-[#fdfbf7]">
                <div class="w-[280px] h-full flex flex-col">
                    <div class="p-8">
                        <BackButton />
                    </div>
                    <div class="flex-1 flex flex-col justify-center pl-8">
                        <StoneRail current on_select />
                    </div>
                </div>
                <div class="flex-1 h-full py-6 pr-0">
                    <div class="h-full bg-white rounded-l-[40px] shadow-sm overflow-hidden flex flex-col">
                        <div class="h-[99px] flex items-center justify-center bg-white/80 border-b border-gray-50">
                            <IdentityChip />
                        </div>
                        <div class="flex-1 overflow-y-auto px-24 pt-16 pb-12">
                            <div class="mb-8">
                                <h1 class="text-7xl font-bold text-[#1a1a1a] tracking-tight leading-none">
                                    {study.name}
                                </h1>
                                <p class="text-base text-gray-500 mt-4">{study.tagline}</p>
                                <div class="w-20 h-1 bg-emerald-500 mt-6" />
                            </div>
                            <SectionSurface nav study />
                        </div>
                    </div>
                </div>
            </div>

            // mobile layout
            <div class="md:hidden absolute inset-0 flex flex-col">
                <div class="h-20 bg-white/80 backdrop-blur-md border-b border-gray-200/50 flex items-center justify-between px-4">
                    <BackButton />
                    <IdentityChip />
                    <div class="w-10" />
                </div>
                <div class="flex-1 overflow-y-auto pb-24">
                    <div class="bg-white/85 backdrop-blur-lg m-4 rounded-xl p-6 min-h-[calc(100vh-180px)]">
                        <h1 class="text-4xl font-bold text-[#1a365d] tracking-tight leading-tight">
                            {study.name}
                        </h1>
                        <p class="text-xs text-gray-500 mt-2">{study.tagline}</p>
                        <div class="w-[60px] h-[3px] bg-emerald-500 mt-4 mb-8" />
                        <SectionSurface nav study />
                    </div>
                </div>
                <StoneBar current on_select />
            </div>
        </div>
    }
}

/// Renders the entry for the current key and replays an exit/enter fade on
/// every selection. While a transition is in flight the outgoing entry
/// cross-fades out above the incoming one; after it settles only the
/// current entry remains mounted.
#[component]
fn SectionSurface<K: SectionKey>(
    nav: RwSignal<SectionNav<K>>,
    study: CaseStudy<K>,
) -> impl IntoView {
    view! {
        <div class="relative">
            {move || {
                let state = nav.get();
                let entry = (study.entry)(state.current());
                // keyed on the epoch so a reselect remounts the node and
                // restarts the enter animation
                let epoch = state.epoch();
                let leaving = state.leaving().map(|prev| {
                    let prev = (study.entry)(prev);
                    view! {
                        <div class="absolute inset-0 section-exit pointer-events-none">
                            <SectionBody
                                title=prev.title
                                subtitle=prev.subtitle
                                body=(prev.body)()
                            />
                        </div>
                    }
                });
                view! {
                    <div>
                        {leaving}
                        <div class="section-enter" data-epoch=epoch.to_string()>
                            <SectionBody
                                title=entry.title
                                subtitle=entry.subtitle
                                body=(entry.body)()
                            />
                        </div>
                    </div>
                }
            }}
        </div>
    }
}

#[component]
fn SectionBody(
    title: &'static str,
    subtitle: Option<&'static str>,
    body: AnyView,
) -> impl IntoView {
    view! {
        <h2 class="text-4xl font-bold text-[#1a1a1a] leading-tight">{title}</h2>
        {subtitle
            .map(|s| {
                view! { <p class="text-sm text-gray-400 tracking-wide mt-4">{s}</p> }
            })}
        <div class="mt-8">{body}</div>
    }
}

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{hooks::use_navigate, NavigateOptions};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::backdrop::OrbitBackdrop;
use super::hover::{detect_modality, HoverCard, InteractionPolicy, PrimaryOutcome};
use super::typewriter::TypewriterLine;
use crate::content::{ProjectKey, ASSETS};

const FOOTER_LINE: &str = "DRAG BADGE TO SWITCH • CLICK BACKGROUND TO ENTER";

/// How long a deactivated card stays mounted, so the cursor can travel
/// from the ship to the card without dismissing it.
const CARD_LINGER_MS: f64 = 200.0;

/// Fixed spot where each project's spec card appears. The cards do not
/// float with the ships.
fn card_position(key: ProjectKey) -> &'static str {
    match key {
        ProjectKey::BofaCloud => "left-[22%] top-[5%]",
        ProjectKey::BofaWorkplace => "right-[22%] top-[18%]",
        ProjectKey::PawpawStory => "left-[28%] top-[38%]",
        ProjectKey::Ionboard => "right-[28%] top-[48%]",
    }
}

fn ship_position(key: ProjectKey) -> &'static str {
    match key {
        ProjectKey::BofaCloud => "left-[8%] top-[18%] float-slow",
        ProjectKey::BofaWorkplace => "left-[72%] top-[18%] float-slower",
        ProjectKey::PawpawStory => "left-[8%] top-[30%] float-fast",
        ProjectKey::Ionboard => "left-[72%] top-[30%] float-slow",
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    // modality is fixed for the lifetime of the view
    let policy: &'static dyn InteractionPolicy = detect_modality().policy();
    let card = RwSignal::new(HoverCard::new());

    // closes the linger window after a deactivation; re-activation in the
    // meantime makes the expiry a no-op
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            card.update(|c| c.expire());
        },
        CARD_LINGER_MS,
    );
    let linger = Callback::new(move |_: ()| start(()));

    view! {
        <Title text="Home" />
        <div class="h-screen w-screen overflow-hidden bg-[#fffbf2] relative">
            <OrbitBackdrop />

            {ProjectKey::ALL
                .iter()
                .map(|key| {
                    let key = *key;
                    view! { <ProjectShip key_id=key card policy linger /> }
                })
                .collect_view()}

            // rendered from `visible`, which outlives `active` by the
            // linger window so the card's own hover handlers can fire
            {move || {
                card.get()
                    .visible()
                    .map(|key| {
                        view! { <SpecCard key_id=key card policy linger /> }
                    })
            }}

            <BadgeCard />

            <div class="absolute bottom-12 left-0 right-0 text-center">
                <TypewriterLine text=FOOTER_LINE />
            </div>
            <p class="absolute bottom-3 right-4 text-[9px] text-black/20 tracking-wider uppercase">
                "Last updated " {&env!("BUILD_TIME")[..10]}
            </p>
        </div>
    }
}

/// One floating project visual. All pointer and tap events route through
/// the interaction policy picked at mount.
#[component]
fn ProjectShip(
    key_id: ProjectKey,
    card: RwSignal<HoverCard>,
    policy: &'static dyn InteractionPolicy,
    linger: Callback<()>,
) -> impl IntoView {
    let entry = key_id.entry();
    let is_active = Signal::derive(move || card.get().is_active(key_id));

    view! {
        <div
            class=move || {
                let glow = if is_active.get() { " ship-glow" } else { "" };
                format!(
                    "absolute w-48 opacity-80 cursor-pointer z-10 transition-transform hover:scale-105 {}{}",
                    ship_position(key_id),
                    glow,
                )
            }
            on:mouseenter=move |_| {
                card.update(|c| policy.hover_start(c, key_id));
            }
            on:mouseleave=move |_| {
                card.update(|c| policy.hover_end(c, key_id));
                linger.run(());
            }
            on:click=move |_| {
                log::debug!("project pressed: {key_id:?}");
                card.update(|c| policy.press(c, key_id));
            }
        >
            <img
                src=entry.image
                alt=entry.title
                class="relative w-full h-full object-contain pointer-events-none"
            />
        </div>
    }
}

/// Glassmorphism summary overlay for the visible project. Hovering the
/// card itself keeps it active, so READ MORE is reachable on pointer
/// devices.
#[component]
fn SpecCard(
    key_id: ProjectKey,
    card: RwSignal<HoverCard>,
    policy: &'static dyn InteractionPolicy,
    linger: Callback<()>,
) -> impl IntoView {
    let entry = key_id.entry();
    let navigate = use_navigate();

    view! {
        <div
            class=format!(
                "absolute w-[280px] rounded-xl shadow-2xl border border-white/40 overflow-hidden z-50 backdrop-blur-xl card-enter {}",
                card_position(key_id),
            )
            on:mouseenter=move |_| {
                card.update(|c| policy.hover_start(c, key_id));
            }
            on:mouseleave=move |_| {
                card.update(|c| policy.hover_end(c, key_id));
                linger.run(());
            }
        >
            <div class="absolute left-0 top-4 bottom-4 w-1 bg-emerald-500 rounded-r" />
            <div class="relative px-5 pt-5 pb-3 pl-6 bg-white/15 backdrop-blur-md">
                <h3 class="text-lg font-bold text-gray-900 tracking-wide">{entry.title}</h3>
                <p class="text-xs font-semibold text-emerald-600 tracking-wider mt-0.5">
                    {entry.category}
                </p>
            </div>
            <div class="relative px-5 pt-4 pb-5 pl-6 bg-white/85">
                <p class="text-sm text-gray-600 leading-relaxed">{entry.description}</p>
                <div class="flex gap-6 mt-4">
                    <div>
                        <p class="text-[10px] font-bold text-gray-400 tracking-wider uppercase">
                            "Timeline"
                        </p>
                        <p class="text-sm font-semibold text-gray-800 mt-0.5">{entry.timeline}</p>
                    </div>
                    <div>
                        <p class="text-[10px] font-bold text-gray-400 tracking-wider uppercase">
                            "Role"
                        </p>
                        <p class="text-sm font-semibold text-gray-800 mt-0.5">{entry.role}</p>
                    </div>
                </div>
                <div class="mt-4">
                    <p class="text-[10px] font-bold text-gray-400 tracking-wider uppercase">
                        "Highlights"
                    </p>
                    <ul class="mt-1.5 space-y-1">
                        {entry
                            .highlights
                            .iter()
                            .map(|h| {
                                view! {
                                    <li class="flex items-center gap-2 text-sm text-gray-700">
                                        <span class="w-1.5 h-1.5 rounded-full bg-emerald-500 flex-shrink-0" />
                                        {*h}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <button
                    class="mt-4 w-full py-2.5 bg-white/50 border border-white/60 rounded-lg text-sm font-semibold text-emerald-600 hover:bg-white/70 transition-colors flex items-center justify-center gap-1"
                    on:click=move |_| {
                        let mut outcome = PrimaryOutcome::Navigate;
                        card.update(|c| outcome = policy.primary_action(c, key_id));
                        if outcome == PrimaryOutcome::Navigate {
                            navigate(&key_id.route(), NavigateOptions::default());
                        }
                    }
                >
                    "READ MORE"
                    <span class="text-lg">"›"</span>
                </button>
            </div>
        </div>
    }
}

/// Center badge: the designer's hanging name tag.
#[component]
fn BadgeCard() -> impl IntoView {
    view! {
        <div class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2">
            <div class="relative w-[300px] bg-white border border-gray-200 rounded-2xl shadow-xl overflow-hidden">
                <div class="relative h-16 flex items-start justify-center pt-0">
                    <div class="absolute -top-5 w-6 h-12 border-[6px] border-[#333] rounded-full z-0" />
                    <div class="relative z-10 mt-4 w-20 h-6 bg-gray-100 border border-black/10 rounded-lg flex items-center justify-center shadow-sm">
                        <div class="w-12 h-1 bg-black/30 rounded-full" />
                    </div>
                </div>
                <div class="flex justify-center -mt-2">
                    <div class="w-40 h-[117px] rounded-full bg-gray-100 border-[6px] border-white shadow-lg overflow-hidden">
                        <img
                            src=ASSETS.portrait
                            alt="Kate Xu"
                            class="w-full h-full object-cover"
                        />
                    </div>
                </div>
                <div class="text-center mt-4">
                    <h1 class="text-4xl font-bold text-[#1a1a1a] tracking-tight">"Kate Xu"</h1>
                </div>
                <div class="flex items-center justify-center gap-2 mt-2">
                    <div class="w-2 h-2 rounded-full bg-[#1e2939] opacity-60" />
                    <p class="text-xs font-bold text-[#6a7282] tracking-[3px] uppercase">
                        "Product Designer"
                    </p>
                </div>
                <div class="px-6 pb-6 mt-6">
                    <div class="flex items-end justify-between gap-4 opacity-80">
                        <div class="flex-1">
                            <p class="text-[9px] font-bold text-gray-400 tracking-wider uppercase mb-1">
                                "Mission"
                            </p>
                            <div class="bg-gray-50 border border-gray-300 rounded p-2">
                                <p class="text-[10px] text-gray-700 tracking-wider uppercase leading-5">
                                    "Creating things fun and beautiful"
                                </p>
                            </div>
                        </div>
                        <a
                            href="/resume"
                            class="bg-black text-white px-5 py-2.5 rounded-[10px] text-xs font-bold tracking-wider uppercase hover:bg-black/80 transition-colors"
                        >
                            "Resume"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

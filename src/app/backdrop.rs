use leptos::prelude::*;

use crate::content::ASSETS;

/// Planetary diagram, orbit ring, and a planet marker circling it. Sits
/// behind everything else on the home hub and, faded, behind the case-study
/// panels.
#[component]
pub fn OrbitBackdrop() -> impl IntoView {
    view! {
        <div class="absolute inset-0 flex items-center justify-center opacity-60">
            <img
                src=ASSETS.planetary_diagram
                alt=""
                class="w-full h-full object-cover pointer-events-none"
            />
        </div>
        <div class="absolute inset-0 pointer-events-none">
            <div class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 w-[800px] h-[800px] rounded-full border border-black/10" />
            <div class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 w-[500px] h-[500px]">
                <div class="w-full h-full orbit-spin">
                    <div class="absolute right-0 top-1/2 -translate-y-1/2 w-4 h-4 rounded-full bg-black shadow-[0_0_15px_rgba(0,0,0,0.4)]" />
                </div>
            </div>
        </div>
    }
}

/// The four project visuals drifting in the background of a case-study
/// page. Decorative only; the interactive versions live on the home hub.
#[component]
pub fn DriftingShips() -> impl IntoView {
    view! {
        <img
            src=ASSETS.bofa_cloud
            alt=""
            class="absolute left-[10%] top-[14%] w-48 h-auto opacity-60 float-slow"
        />
        <img
            src=ASSETS.bofa_workplace
            alt=""
            class="absolute right-[5%] top-[35%] w-56 h-auto opacity-60 float-slower"
        />
        <img
            src=ASSETS.pawpaw_story
            alt=""
            class="absolute left-[15%] top-[58%] w-52 h-auto opacity-60 float-fast"
        />
        <img
            src=ASSETS.ionboard
            alt=""
            class="absolute right-[5%] bottom-[10%] w-48 h-auto opacity-60 float-slow"
        />
    }
}

/// Round back-to-home button used by every non-home route.
#[component]
pub fn BackButton() -> impl IntoView {
    view! {
        <a
            href="/"
            aria-label="Go back to home"
            class="w-12 h-12 bg-white rounded-full shadow-md flex items-center justify-center border border-gray-100 hover:border-emerald-500 transition-colors"
        >
            <svg
                width="22"
                height="22"
                viewBox="0 0 24 24"
                fill="none"
                stroke="#00bc7d"
                stroke-width="2.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <path d="M9 14L4 9l5-5" />
                <path d="M4 9h10.5a5.5 5.5 0 0 1 5.5 5.5v0a5.5 5.5 0 0 1-5.5 5.5H11" />
            </svg>
        </a>
    }
}

/// Small identity chip: avatar, name, title.
#[component]
pub fn IdentityChip() -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 bg-white rounded-full px-4 py-2 shadow-sm border border-gray-100">
            <div class="w-8 h-8 rounded-full overflow-hidden bg-gray-100">
                <img src=ASSETS.portrait alt="Kate Xu" class="w-full h-full object-cover" />
            </div>
            <div>
                <p class="text-[10px] font-bold text-gray-900 leading-tight tracking-[2.1px] uppercase">
                    "Kate Xu"
                </p>
                <p class="text-[8px] text-gray-400 uppercase tracking-[1px]">"Designer"</p>
            </div>
        </div>
    }
}

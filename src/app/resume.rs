use leptos::prelude::*;
use leptos_meta::Title;

use super::backdrop::BackButton;
use crate::content::ASSETS;

#[component]
pub fn ResumePage() -> impl IntoView {
    view! {
        <Title text="Resume" />
        <div class="h-screen w-screen flex flex-col bg-[#fffbf2]">
            <header class="flex items-center gap-4 px-6 py-4 border-b border-gray-200 bg-white/70 backdrop-blur">
                <BackButton />
                <h1 class="text-lg font-bold text-gray-900 tracking-tight">
                    "Kate Xu — Resume"
                </h1>
                <a
                    href=ASSETS.resume_pdf
                    download=ASSETS.resume_download_name
                    class="ml-auto flex items-center gap-2 bg-black text-white px-4 py-2 rounded-lg text-xs font-bold tracking-wider uppercase hover:bg-black/80 transition-colors"
                >
                    <svg
                        class="w-4 h-4"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        viewBox="0 0 24 24"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            d="M4 16v2a2 2 0 002 2h12a2 2 0 002-2v-2M7 10l5 5 5-5M12 15V3"
                        />
                    </svg>
                    "Download"
                </a>
            </header>
            <iframe
                src=ASSETS.resume_pdf
                title="Kate Xu resume"
                class="flex-1 w-full border-0"
            />
        </div>
    }
}

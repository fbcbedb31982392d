//! Small presentational pieces shared by the case-study section bodies.

use leptos::prelude::*;

/// Soft gray callout card with an optional uppercase tag line.
#[component]
pub fn Callout(
    #[prop(optional)] tag: Option<&'static str>,
    #[prop(optional)] heading: Option<&'static str>,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-50 border border-gray-100 rounded-2xl p-6">
            {tag
                .map(|t| {
                    view! {
                        <p class="text-xs font-semibold text-emerald-500 tracking-wider uppercase mb-3">
                            {t}
                        </p>
                    }
                })}
            {heading
                .map(|h| {
                    view! { <h4 class="text-xl font-semibold text-gray-900 mb-3">{h}</h4> }
                })}
            <p class="text-sm text-gray-600 leading-relaxed">{text}</p>
        </div>
    }
}

/// Big green number with a caption underneath.
#[component]
pub fn StatTile(value: &'static str, caption: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gray-50 border border-gray-100 rounded-2xl p-6 text-center">
            <p class="text-4xl font-bold text-emerald-500 leading-none">{value}</p>
            <p class="text-sm text-gray-500 mt-3">{caption}</p>
        </div>
    }
}

#[component]
pub fn QuoteBlock(text: &'static str) -> impl IntoView {
    view! {
        <div class="bg-gradient-to-br from-[#f0fdf4] to-[#ecfdf5] border border-emerald-500/20 rounded-2xl p-8">
            <blockquote class="text-lg text-gray-700 italic leading-relaxed">{text}</blockquote>
        </div>
    }
}

/// Single highlight row with a green bullet dot.
#[component]
pub fn BulletRow(text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center bg-gray-50 border border-gray-100 rounded-2xl h-20 px-6">
            <span class="text-2xl text-emerald-500 leading-none mr-6">"•"</span>
            <span class="text-xl text-gray-700">{text}</span>
        </div>
    }
}

/// Lead paragraph at the top of a section body.
#[component]
pub fn Lead(children: Children) -> impl IntoView {
    view! { <p class="text-lg text-gray-700 leading-relaxed">{children()}</p> }
}

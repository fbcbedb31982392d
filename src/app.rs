mod backdrop;
mod blocks;
mod bofa_cloud;
mod case_study;
mod homepage;
mod hover;
mod ionboard;
mod nav;
mod pawpaw;
mod resume;
mod typewriter;
mod workit;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use bofa_cloud::BofaCloudPage;
use homepage::HomePage;
use ionboard::IonboardPage;
use pawpaw::PawpawStoryPage;
use resume::ResumePage;
use workit::WorkItPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Kate Xu - {title}") />

        <Router>
            <main class="min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/work/workit") view=WorkItPage />
                    <Route path=path!("/work/bofa-cloud") view=BofaCloudPage />
                    <Route path=path!("/work/pawpaw-story") view=PawpawStoryPage />
                    <Route path=path!("/work/ionboard") view=IonboardPage />
                    <Route path=path!("/resume") view=ResumePage />
                </Routes>
            </main>
        </Router>
    }
}

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::layout::RootLayout;
use crate::pages::feed::FeedPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/libris-web.css" />
        <Title text="Libris" />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <ParentRoute path=path!("/") view=RootLayout>
                    <Route path=path!("") view=FeedPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen">
            <div class="text-center">
                <h1 class="text-4xl font-bold text-foreground mb-2">"404"</h1>
                <p class="text-muted-foreground">"Page not found"</p>
                <a href="/" class="text-primary hover:underline mt-4 inline-block">
                    "Back to the feed"
                </a>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::components::update_stream::UpdateStream;

#[component]
pub fn FeedPage() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-semibold tracking-tight text-foreground">"Updates"</h1>
                <p class="mt-1 text-sm text-muted-foreground">
                    "Live stream of catalog changes via SSE"
                </p>
            </div>
            <UpdateStream />
        </div>
    }
}

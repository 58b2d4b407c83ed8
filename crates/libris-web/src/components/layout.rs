use leptos::prelude::*;
use leptos_router::components::*;

#[component]
pub fn RootLayout() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col bg-background">
            <header class="flex h-16 shrink-0 items-center gap-3 border-b border-border px-8">
                <a href="/" class="flex items-center gap-3">
                    <img src="/libris.svg" alt="Libris" class="h-7 w-7" />
                    <span class="text-lg font-semibold text-foreground tracking-tight">
                        "Libris"
                    </span>
                </a>
                <span class="text-sm text-muted-foreground">"Library update feed"</span>
            </header>
            <main class="flex-1 overflow-auto p-8">
                <Outlet />
            </main>
        </div>
    }
}

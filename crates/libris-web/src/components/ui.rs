use leptos::ev;
use leptos::prelude::*;

// ─── Card ────────────────────────────────────────────────────────────

#[component]
pub fn Card(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let cls = format!("rounded-lg border border-border bg-card text-card-foreground p-6 {class}");
    view! { <div class=cls>{children()}</div> }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="flex flex-col space-y-1.5 pb-4">{children()}</div> }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div>{children()}</div> }
}

// ─── Button ──────────────────────────────────────────────────────────

#[derive(Clone, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Ghost,
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional)] disabled: Option<Signal<bool>>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let base = "inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium \
                transition-colors focus-visible:outline-none focus-visible:ring-2 \
                focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50 \
                px-4 py-2";
    let variant_cls = match variant {
        ButtonVariant::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
        ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
    };
    let cls = format!("{base} {variant_cls} {class}");
    let is_disabled = disabled.unwrap_or_else(|| Signal::derive(|| false));

    let click_handler = move |e: ev::MouseEvent| {
        if let Some(ref cb) = on_click {
            Callback::run(cb, e);
        }
    };

    view! {
        <button class=cls disabled=move || is_disabled.get() on:click=click_handler>
            {children()}
        </button>
    }
}

// ─── Input ───────────────────────────────────────────────────────────

#[component]
pub fn Input(
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] value: String,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let cls = format!(
        "flex h-9 w-full rounded-md border border-input bg-transparent px-3 py-1 text-sm \
         text-foreground placeholder:text-muted-foreground focus-visible:outline-none \
         focus-visible:ring-2 focus-visible:ring-ring {class}"
    );
    view! {
        <input
            type="text"
            class=cls
            placeholder=placeholder
            value=value
            on:input=move |e| {
                if let Some(cb) = &on_input {
                    cb.run(event_target_value(&e));
                }
            }
        />
    }
}

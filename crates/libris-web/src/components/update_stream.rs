use leptos::prelude::*;

use libris_core::{ConnectionState, LogEntry};

use crate::components::ui::*;
use crate::utils::{category_color, category_dot_color, format_time};

/// The one live stream handle. Listeners stay alive exactly as long as the
/// source; dropping this closes the connection.
#[cfg(feature = "hydrate")]
struct ActiveSource {
    source: web_sys::EventSource,
    _on_open: wasm_bindgen::closure::Closure<dyn Fn()>,
    _on_operation: wasm_bindgen::closure::Closure<dyn Fn(web_sys::MessageEvent)>,
    _on_message: wasm_bindgen::closure::Closure<dyn Fn(web_sys::MessageEvent)>,
    _on_error: wasm_bindgen::closure::Closure<dyn Fn()>,
}

#[cfg(feature = "hydrate")]
impl ActiveSource {
    fn close(&self) {
        self.source.close();
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ActiveSource {
    fn drop(&mut self) {
        self.source.close();
    }
}

#[cfg(feature = "hydrate")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
fn ConnectionIndicator(state: ReadSignal<ConnectionState>) -> impl IntoView {
    let dot_cls = move || match state.get() {
        ConnectionState::Open => "relative inline-flex h-2 w-2 rounded-full bg-emerald-400",
        ConnectionState::Connecting => "relative inline-flex h-2 w-2 rounded-full bg-amber-400",
        ConnectionState::Errored => "relative inline-flex h-2 w-2 rounded-full bg-red-400",
        _ => "relative inline-flex h-2 w-2 rounded-full bg-zinc-500",
    };
    let label_cls = move || {
        if state.get() == ConnectionState::Open {
            "text-xs font-medium text-emerald-400"
        } else {
            "text-xs font-medium text-muted-foreground"
        }
    };
    let label = move || match state.get() {
        ConnectionState::Idle => "Offline",
        ConnectionState::Connecting => "Connecting",
        ConnectionState::Open => "Live",
        ConnectionState::Closed => "Closed",
        ConnectionState::Errored => "Error",
    };

    view! {
        <div class="flex items-center gap-2">
            <span class="relative flex h-2 w-2">
                <Show when=move || state.get() == ConnectionState::Open>
                    <span class="absolute inline-flex h-full w-full animate-ping rounded-full bg-emerald-400 opacity-75" />
                </Show>
                <span class=dot_cls />
            </span>
            <span class=label_cls>{label}</span>
        </div>
    }
}

#[component]
fn EntryRow(entry: LogEntry) -> impl IntoView {
    let dot = category_dot_color(&entry.category);
    let accent = category_color(&entry.category);
    let time_str = format_time(&entry.timestamp);
    let category = entry.category.to_uppercase();
    let detail = entry.pretty_detail();
    let message = entry.message.clone();

    view! {
        <div class="flex flex-col gap-1 px-4 py-2.5 text-sm transition-colors hover:bg-accent/50">
            <div class="flex items-center gap-3">
                <span class=format!("h-2 w-2 shrink-0 rounded-full {dot}") />
                <span class="w-20 shrink-0 font-mono text-xs text-muted-foreground">
                    {time_str}
                </span>
                <span class=format!(
                    "inline-flex shrink-0 items-center rounded-full border px-2 py-0.5 text-[10px] font-semibold {accent}"
                )>
                    {category}
                </span>
                <span class="text-foreground">{message}</span>
            </div>
            {detail.map(|text| view! {
                <pre class="ml-5 overflow-auto rounded-md bg-muted/50 p-2 font-mono text-xs text-muted-foreground">
                    {text}
                </pre>
            })}
        </div>
    }
}

#[component]
pub fn UpdateStream() -> impl IntoView {
    let (token, set_token) = signal(String::new());
    let (entries, set_entries) = signal(Vec::<LogEntry>::new());
    let (state, _set_state) = signal(ConnectionState::Idle);
    let (_connect_seq, set_connect_seq) = signal(0u64);

    // Open the stream on client only
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use leptos::logging;
        use libris_core::{OPERATION_EVENT, UpdateFeed};
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let set_state = _set_state;
        let connect_seq = _connect_seq;

        let api_url = Resource::new(
            || (),
            |_| async { crate::server_fns::config::get_api_url().await.unwrap_or_default() },
        );

        let feed = Rc::new(RefCell::new(UpdateFeed::new()));
        let active: Rc<RefCell<Option<ActiveSource>>> = Rc::new(RefCell::new(None));

        Effect::new(move |handled: Option<u64>| {
            let seq = connect_seq.get();
            if seq == 0 || Some(seq) == handled {
                return seq;
            }

            let base = api_url.get().unwrap_or_default();
            let attempt = match feed.borrow_mut().connect(&base, &token.get_untracked()) {
                Ok(attempt) => attempt,
                Err(err) => {
                    alert(&err.to_string());
                    return seq;
                }
            };
            if attempt.closed_previous {
                // Dropping the previous handle closes it and its listeners.
                active.borrow_mut().take();
            }
            set_state.set(feed.borrow().state());

            let source = match web_sys::EventSource::new(&attempt.url) {
                Ok(source) => source,
                Err(_) => {
                    let entry = {
                        let mut feed = feed.borrow_mut();
                        feed.session_mut().map(|session| session.on_transport_error())
                    };
                    if let Some(entry) = entry {
                        set_entries.update(|entries| entries.insert(0, entry));
                    }
                    set_state.set(feed.borrow().state());
                    return seq;
                }
            };

            let on_open = {
                let feed = Rc::clone(&feed);
                Closure::<dyn Fn()>::new(move || {
                    let entry = {
                        let mut feed = feed.borrow_mut();
                        feed.session_mut().map(|session| session.on_open())
                    };
                    if let Some(entry) = entry {
                        set_entries.update(|entries| entries.insert(0, entry));
                    }
                    set_state.set(feed.borrow().state());
                })
            };
            source.set_onopen(Some(on_open.as_ref().unchecked_ref()));

            let on_operation = {
                let feed = Rc::clone(&feed);
                Closure::<dyn Fn(web_sys::MessageEvent)>::new(move |e: web_sys::MessageEvent| {
                    let Some(data) = e.data().as_string() else {
                        return;
                    };
                    let parsed = {
                        let mut feed = feed.borrow_mut();
                        feed.session_mut().map(|session| session.on_operation(&data))
                    };
                    let entry = match parsed {
                        Some(Ok(entry)) => entry,
                        Some(Err(err)) => {
                            logging::warn!("malformed bookOperation payload: {err}");
                            LogEntry::parse_failure(&err)
                        }
                        None => return,
                    };
                    set_entries.update(|entries| entries.insert(0, entry));
                })
            };
            let _ = source.add_event_listener_with_callback(
                OPERATION_EVENT,
                on_operation.as_ref().unchecked_ref(),
            );

            let on_message = {
                let feed = Rc::clone(&feed);
                Closure::<dyn Fn(web_sys::MessageEvent)>::new(move |e: web_sys::MessageEvent| {
                    let Some(data) = e.data().as_string() else {
                        return;
                    };
                    let parsed = {
                        let mut feed = feed.borrow_mut();
                        feed.session_mut().map(|session| session.on_message(&data))
                    };
                    match parsed {
                        Some(Ok(entry)) => {
                            set_entries.update(|entries| entries.insert(0, entry));
                        }
                        // Default-channel parse failures are logged, never rendered.
                        Some(Err(err)) => logging::warn!("ignoring malformed payload: {err}"),
                        None => {}
                    }
                })
            };
            source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

            let on_error = {
                let feed = Rc::clone(&feed);
                let active = Rc::clone(&active);
                Closure::<dyn Fn()>::new(move || {
                    let entry = {
                        let mut feed = feed.borrow_mut();
                        feed.session_mut()
                            .filter(|session| session.state().is_active())
                            .map(|session| session.on_transport_error())
                    };
                    if let Some(entry) = entry {
                        set_entries.update(|entries| entries.insert(0, entry));
                    }
                    if let Some(current) = active.borrow().as_ref() {
                        current.close();
                    }
                    set_state.set(feed.borrow().state());
                })
            };
            source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

            *active.borrow_mut() = Some(ActiveSource {
                source,
                _on_open: on_open,
                _on_operation: on_operation,
                _on_message: on_message,
                _on_error: on_error,
            });

            seq
        });
    }

    let request_connect = move |_: leptos::ev::MouseEvent| {
        set_connect_seq.update(|seq| *seq += 1);
    };

    let clear = move |_: leptos::ev::MouseEvent| {
        set_entries.set(Vec::new());
    };

    let connecting = Signal::derive(move || state.get().is_active());

    view! {
        <Card class="gap-0 py-0">
            <CardHeader>
                <div class="flex items-center justify-between w-full pt-4">
                    <div class="flex items-center gap-3">
                        <h3 class="text-base font-medium text-muted-foreground">
                            "Update Stream"
                        </h3>
                        <ConnectionIndicator state />
                        <span class="text-xs tabular-nums text-muted-foreground">
                            {move || {
                                let count = entries.get().len();
                                if count == 1 { "1 entry".to_string() }
                                else { format!("{count} entries") }
                            }}
                        </span>
                    </div>
                    <Button variant=ButtonVariant::Ghost on_click=Callback::new(clear)>
                        "Clear"
                    </Button>
                </div>
                <div class="flex items-end gap-3 py-4">
                    <div class="flex-1">
                        <label class="text-sm text-muted-foreground block mb-1">
                            "Access token"
                        </label>
                        <Input
                            placeholder="Paste your stream token"
                            value=token.get_untracked()
                            on_input=Callback::new(move |v| set_token.set(v))
                        />
                    </div>
                    <Button disabled=connecting on_click=Callback::new(request_connect)>
                        "Connect"
                    </Button>
                </div>
            </CardHeader>
            <CardContent>
                <div class="max-h-[calc(100vh-360px)] overflow-auto">
                    {move || {
                        let entries = entries.get();
                        if entries.is_empty() {
                            view! {
                                <div class="flex h-48 flex-col items-center justify-center gap-2 text-sm text-muted-foreground">
                                    <svg xmlns="http://www.w3.org/2000/svg" class="h-5 w-5 opacity-40" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                        <path d="M4 19.5A2.5 2.5 0 0 1 6.5 17H20" />
                                        <path d="M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z" />
                                    </svg>
                                    "Waiting for updates..."
                                </div>
                            }.into_any()
                        } else {
                            view! {
                                <div class="divide-y divide-border">
                                    {entries.into_iter().map(|entry| {
                                        view! {
                                            <EntryRow entry />
                                        }
                                    }).collect_view()}
                                </div>
                            }.into_any()
                        }
                    }}
                </div>
            </CardContent>
        </Card>
    }
}

//! Shared list widgets
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Delay between the last keystroke and the search callback
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (initial text of the box)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new text once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search stores...".to_string()
    } else {
        placeholder
    };

    // Local text of the input, ahead of the debounced callback
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Every keystroke bumps the counter; only the latest timer fires.
    let keystroke = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        keystroke.update_value(|n| *n += 1);
        let mine = keystroke.get_value();

        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if keystroke.try_get_value() == Some(mine) {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        keystroke.update_value(|n| *n += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter title="Clear">
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

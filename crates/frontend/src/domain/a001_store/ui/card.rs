use crate::shared::icons::icon;
use contracts::domain::a001_store::Store;
use leptos::prelude::*;

fn open_in_new_tab(url: &str) {
    if url.is_empty() {
        return;
    }
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::warn!("Failed to open {}: {:?}", url, e);
        }
    }
}

/// Карточка магазина: логотип, название, условия кэшбэка и кнопка избранного
///
/// Clicking the card opens the store site in a new tab; the heart only
/// toggles the favorite.
#[component]
pub fn StoreCard(
    store: Store,
    #[prop(into)] is_favorite: Signal<bool>,
    on_favorite: Callback<Store>,
) -> impl IntoView {
    let url = store.url.clone();
    let logo = store.logo.clone();
    let logo_alt = format!("{} logo", store.name);
    let name = store.name.clone();
    let cashback = store.cashback_text();
    let promoted = store.is_promoted;

    let heart_class = move || {
        if is_favorite.get() {
            "store-card__favorite store-card__favorite--active"
        } else {
            "store-card__favorite"
        }
    };

    view! {
        <div class="store-card" on:click=move |_| open_in_new_tab(&url)>
            <button
                class=heart_class
                title=move || if is_favorite.get() { "Remove from favorites" } else { "Add to favorites" }
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_favorite.run(store.clone());
                }
            >
                {icon("heart")}
            </button>

            <div class="store-card__body">
                <img src=logo alt=logo_alt class="store-card__logo" />
                <h3 class="store-card__name">{name}</h3>
                {promoted.then(|| view! { <span class="badge badge--primary">"Featured"</span> })}
                <p class="store-card__cashback">{cashback}</p>
            </div>
        </div>
    }
}

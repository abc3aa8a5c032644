use super::favorites_storage::LocalFavoritesStorage;
use super::scroll_observer::on_scroll_near_bottom;
use super::url_sync;
use crate::domain::a001_store::api::fetch_stores;
use crate::domain::a001_store::ui::StoreCard;
use crate::domain::a002_category::ui::CategorySelector;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_store::Store;
use contracts::usecases::u001_browse_stores::{
    tri_state_code, tri_state_from_code, FavoritesSet, FetchTicket, PageOutcome, SortBy,
    StoreBrowserState,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Каталог магазинов: фильтры, бесконечная прокрутка, избранное
///
/// Filters are hydrated from the URL once on mount; afterwards the URL is
/// only written, never read.
#[component]
pub fn StoreBrowser() -> impl IntoView {
    let (initial, first_ticket) = StoreBrowserState::hydrate(&url_sync::current_query_string());
    let state = RwSignal::new(initial);
    let favorites = RwSignal::new(FavoritesSet::load(&LocalFavoritesStorage));

    let run_fetch = move |ticket: FetchTicket| {
        spawn_local(async move {
            let result = fetch_stores(&ticket.query).await;
            let outcome = state.try_update(|s| match result {
                Ok(stores) => s.apply_page(&ticket, stores),
                Err(e) => {
                    log::error!("Error fetching stores: {}", e);
                    s.apply_failure(&ticket, e.to_string())
                }
            });
            match outcome {
                Some(PageOutcome::Stale) => log::debug!(
                    "Dropped stale page {} (generation {})",
                    ticket.page,
                    ticket.generation
                ),
                Some(PageOutcome::Exhausted) => log::debug!("No more stores after page {}", ticket.page),
                _ => {}
            }
        });
    };

    // Filter change: project filters into the URL, then reload from page 1
    let on_filters_changed = move |ticket: Option<FetchTicket>| {
        let Some(ticket) = ticket else { return };
        let query = state.with_untracked(|s| s.filters.to_query_string());
        url_sync::replace_query_string(&query);
        run_fetch(ticket);
    };

    let initial_query = state.with_untracked(|s| s.filters.to_query_string());
    url_sync::replace_query_string(&initial_query);
    run_fetch(first_ticket);

    on_scroll_near_bottom(move || {
        if let Some(ticket) = state.try_update(|s| s.request_next_page()).flatten() {
            run_fetch(ticket);
        }
    });

    let retry = move |_: leptos::ev::MouseEvent| {
        if let Some(ticket) = state.try_update(|s| s.retry()).flatten() {
            run_fetch(ticket);
        }
    };

    let toggle_favorite = Callback::new(move |store: Store| {
        favorites.update(|f| {
            let now_favorite = f.toggle_and_persist(&store, &LocalFavoritesStorage);
            log::debug!("Store {} favorite: {}", store.id, now_favorite);
        });
    });

    let select_category = Callback::new(move |category: Option<i64>| {
        on_filters_changed(state.try_update(|s| s.set_category(category)).flatten());
    });

    let search_value = Signal::derive(move || state.with(|s| s.filters.search_query.clone()));
    let change_search = Callback::new(move |query: String| {
        on_filters_changed(state.try_update(|s| s.set_search_query(query)).flatten());
    });

    // Select widgets hold string codes; each effect maps its code back into the filters.
    let sort_select = RwSignal::new(state.with_untracked(|s| s.filters.sort_by.as_str().to_string()));
    Effect::new(move || {
        let code = sort_select.get();
        untrack(move || {
            if let Some(sort_by) = SortBy::from_code(&code) {
                on_filters_changed(state.try_update(|s| s.set_sort_by(sort_by)).flatten());
            }
        });
    });

    let cashback_select = RwSignal::new(
        state.with_untracked(|s| tri_state_code(s.filters.cashback_enabled).to_string()),
    );
    Effect::new(move || {
        let value = tri_state_from_code(&cashback_select.get());
        untrack(move || {
            on_filters_changed(state.try_update(|s| s.set_cashback_enabled(value)).flatten());
        });
    });

    let promoted_select =
        RwSignal::new(state.with_untracked(|s| tri_state_code(s.filters.is_promoted).to_string()));
    Effect::new(move || {
        let value = tri_state_from_code(&promoted_select.get());
        untrack(move || {
            on_filters_changed(state.try_update(|s| s.set_promoted(value)).flatten());
        });
    });

    let selected_category = Signal::derive(move || state.with(|s| s.filters.category));
    let loading = Signal::derive(move || state.with(|s| s.page.loading));
    let has_more = Signal::derive(move || state.with(|s| s.page.has_more));
    let last_error = Signal::derive(move || state.with(|s| s.page.last_error.clone()));

    view! {
        <div class="store-browser">
            <aside class="store-browser__sidebar">
                <CategorySelector selected=selected_category on_select=select_category />
            </aside>

            <section class="store-browser__main">
                <div class="store-browser__toolbar">
                    <SearchInput value=search_value on_change=change_search />
                    <Select value=sort_select>
                        {SortBy::all()
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.display_name()}</option> })
                            .collect_view()}
                    </Select>
                    <Select value=cashback_select>
                        <option value="">"Cashback: any"</option>
                        <option value="1">"With cashback"</option>
                        <option value="0">"Without cashback"</option>
                    </Select>
                    <Select value=promoted_select>
                        <option value="">"All stores"</option>
                        <option value="1">"Promoted only"</option>
                        <option value="0">"Not promoted"</option>
                    </Select>
                </div>

                <div class="store-grid">
                    <For
                        each=move || state.with(|s| s.stores.clone())
                        key=|store| store.id
                        children=move |store: Store| {
                            let id = store.id;
                            let is_favorite = Signal::derive(move || favorites.with(|f| f.contains(id)));
                            view! {
                                <StoreCard store=store is_favorite=is_favorite on_favorite=toggle_favorite />
                            }
                        }
                    />
                </div>

                <div class="store-browser__status">
                    <Show when=move || loading.get()>
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center;">
                            <Spinner size=SpinnerSize::Small />
                            <span>"Loading more stores..."</span>
                        </Flex>
                    </Show>
                    {move || last_error.get().map(|err| view! {
                        <div class="store-browser__error">
                            <span>{format!("Failed to load stores: {}", err)}</span>
                            <Button appearance=ButtonAppearance::Secondary on_click=retry>
                                {icon("refresh")}
                                " Retry"
                            </Button>
                        </div>
                    })}
                    <Show when=move || !has_more.get()>
                        <div class="store-browser__end">"No more stores to load"</div>
                    </Show>
                </div>
            </section>
        </div>
    }
}

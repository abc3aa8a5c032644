use crate::domain::a002_category::api::fetch_categories;
use contracts::domain::a002_category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Сайдбар категорий
///
/// Loads the category list once on mount. A failed load shows a static
/// message; there is no retry. Selection is reported through `on_select`
/// (`None` for "All Stores"); the component never owns the filter.
#[component]
pub fn CategorySelector(
    #[prop(into)] selected: Signal<Option<i64>>,
    on_select: Callback<Option<i64>>,
) -> impl IntoView {
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match fetch_categories().await {
            Ok(list) => {
                log::debug!("Loaded {} categories", list.len());
                set_categories.set(list);
            }
            Err(e) => {
                log::error!("Failed to fetch categories: {}", e);
                set_error.set(Some("Failed to fetch categories".to_string()));
            }
        }
        set_loading.set(false);
    });

    let item_class = move |id: Option<i64>| {
        if selected.get() == id {
            "categories-sidebar__item categories-sidebar__item--active"
        } else {
            "categories-sidebar__item"
        }
    };

    view! {
        {move || {
            if loading.get() {
                return view! { <div class="categories-sidebar">"Loading categories..."</div> }.into_any();
            }
            if let Some(err) = error.get() {
                return view! { <div class="categories-sidebar categories-sidebar--error">{err}</div> }.into_any();
            }

            view! {
                <div class="categories-sidebar">
                    <h2 class="categories-sidebar__title">"Categories"</h2>
                    <ul>
                        <li class=move || item_class(None) on:click=move |_| on_select.run(None)>
                            "All Stores"
                        </li>
                        <For
                            each=move || categories.get()
                            key=|c| c.id
                            children=move |c: Category| {
                                let id = c.id;
                                view! {
                                    <li
                                        class=move || item_class(Some(id))
                                        on:click=move |_| on_select.run(Some(id))
                                    >
                                        {c.name}
                                    </li>
                                }
                            }
                        />
                    </ul>
                </div>
            }
            .into_any()
        }}
    }
}

//! TopHeader component - application top bar with the brand title.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("store")}
                <span class="top-header__title">"Cashback Stores"</span>
            </div>
        </div>
    }
}

use crate::layout::Shell;
use crate::usecases::u001_browse_stores::StoreBrowser;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <Shell>
                <StoreBrowser />
            </Shell>
        </ConfigProvider>
    }
}

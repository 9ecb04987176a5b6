//! Sticky navigation bar with one button per tab.

use leptos::prelude::*;

use crate::state::ui::{Tab, UiState};

/// Tab buttons. Writes the selected tab into the shared `UiState`.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_select = move |tab: Tab| {
        if ui.with_untracked(|u| u.active_tab == tab) {
            return;
        }
        ui.update(|u| {
            u.select_tab(tab);
        });
        #[cfg(feature = "hydrate")]
        log::debug!("tab selected: {}", tab.label());
    };

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__tabs" role="tablist">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        let is_active = move || ui.with(|u| u.active_tab == tab);
                        view! {
                            <button
                                class="nav-bar__tab"
                                class:nav-bar__tab--active=is_active
                                role="tab"
                                aria-selected=move || if is_active() { "true" } else { "false" }
                                aria-controls="tab-panel"
                                data-tab=tab.key()
                                on:click=move |_| on_select(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </nav>
    }
}

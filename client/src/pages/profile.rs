//! Profile page: banner, navigation, sidebar and the animated tab area.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the root view of the site. It reads the selected tab from the
//! `UiState` context provided by `App` and hands it to the transition
//! container; the navigation bar is the only writer.

use leptos::prelude::*;

use crate::components::header_banner::HeaderBanner;
use crate::components::nav_bar::NavBar;
use crate::components::sidebar::Sidebar;
use crate::components::site_footer::SiteFooter;
use crate::components::tab_transition::TabTransition;
use crate::content::PROFILE;
use crate::state::ui::UiState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active = Memo::new(move |_| ui.with(|u| u.active_tab));

    view! {
        <div class="profile-page">
            <HeaderBanner />
            <NavBar />
            <main class="profile-page__main">
                <Sidebar name=PROFILE.name />
                <div class="profile-page__content">
                    <TabTransition active=active />
                </div>
            </main>
            <SiteFooter />
        </div>
    }
}

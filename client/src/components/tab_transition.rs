//! Animated container for the active tab's content.
//!
//! ARCHITECTURE
//! ============
//! The container keeps its own `TransitionState` derived from the selected
//! tab. A tab change first flips the container into its exit animation; a
//! browser timer then swaps in the new content, which plays the enter
//! animation. Memos sit between the state and the DOM so the mounted view is
//! rebuilt only when the displayed tab actually changes.
//!
//! Effects do not run during SSR, so the server always renders the initial
//! tab. The synchronous exit branch below is only reached when effects run
//! natively, which is the case in the crate's wiring tests.

use leptos::prelude::*;

use crate::components::about_tab::AboutTab;
use crate::components::articles_tab::ArticlesTab;
use crate::components::home_tab::HomeTab;
use crate::components::portfolio_tab::PortfolioTab;
use crate::state::transition::{Phase, TransitionState};
use crate::state::ui::Tab;

/// Wraps the content of `active`, animating between tabs in wait mode.
#[component]
pub fn TabTransition(#[prop(into)] active: Signal<Tab>) -> impl IntoView {
    let transition = RwSignal::new(TransitionState::new(active.get_untracked()));
    let phase = Memo::new(move |_| transition.with(TransitionState::phase));
    let displayed = Memo::new(move |_| transition.with(TransitionState::displayed));

    Effect::new(move || {
        let requested = active.get();
        let ticket = transition.try_update(|t| t.request(requested)).flatten();
        if let Some(ticket) = ticket {
            finish_exit_after_delay(transition, ticket);
        }
    });

    view! {
        <div
            id="tab-panel"
            role="tabpanel"
            class=move || phase.get().class()
            data-tab=move || displayed.get().key()
            aria-busy=move || if phase.get() == Phase::Exiting { "true" } else { "false" }
        >
            {move || tab_view(displayed.get())}
        </div>
    }
}

/// Render the content view for `tab`.
pub fn tab_view(tab: Tab) -> AnyView {
    match tab {
        Tab::Home => view! { <HomeTab /> }.into_any(),
        Tab::About => view! { <AboutTab /> }.into_any(),
        Tab::Articles => view! { <ArticlesTab /> }.into_any(),
        Tab::Photos => view! { <PortfolioTab /> }.into_any(),
    }
}

fn finish_exit_after_delay(transition: RwSignal<TransitionState>, ticket: u64) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::motion::TRANSITION_MS;

        gloo_timers::callback::Timeout::new(TRANSITION_MS, move || {
            transition.update(|t| {
                t.complete_exit(ticket);
            });
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        transition.update(|t| {
            t.complete_exit(ticket);
        });
    }
}

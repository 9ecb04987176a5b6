//! Blurred banner with the site title.

use leptos::prelude::*;

use crate::content::{SITE_TAGLINE, SITE_TITLE};
use crate::util::picsum::{BANNER, seed_url};

#[component]
pub fn HeaderBanner() -> impl IntoView {
    view! {
        <header class="banner">
            <img class="banner__image" src=seed_url("banner", BANNER) alt="Banner" referrerpolicy="no-referrer" />
            <div class="banner__overlay">
                <h1 class="banner__title">{SITE_TITLE}</h1>
                <p class="banner__tagline">{SITE_TAGLINE}</p>
            </div>
        </header>
    }
}

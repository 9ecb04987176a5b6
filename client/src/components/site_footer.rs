use leptos::prelude::*;

use crate::content::FOOTER_TEXT;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>{FOOTER_TEXT}</p>
        </footer>
    }
}

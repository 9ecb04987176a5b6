//! Photo grid tab.

use leptos::prelude::*;

use crate::content::PORTFOLIO;
use crate::util::motion::{PORTFOLIO_STAGGER_MS, stagger_style};
use crate::util::picsum::{PORTFOLIO_TILE, seed_url};

#[component]
pub fn PortfolioTab() -> impl IntoView {
    view! {
        <div class="tab-view tab-view--photos portfolio-grid">
            {PORTFOLIO
                .iter()
                .enumerate()
                .map(|(idx, image)| {
                    // Tiles are numbered from one; the first already waits a step.
                    view! {
                        <div class="portfolio-tile" style=stagger_style(idx + 1, PORTFOLIO_STAGGER_MS)>
                            <div class="portfolio-tile__frame">
                                <img
                                    src=seed_url(image.seed, PORTFOLIO_TILE)
                                    alt="Work"
                                    referrerpolicy="no-referrer"
                                />
                                <div class="portfolio-tile__overlay">
                                    <span class="portfolio-tile__badge">"查看作品"</span>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

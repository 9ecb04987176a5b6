//! Home tab: self-introduction and the latest updates grid.

use leptos::prelude::*;

use crate::content::{BIO, UPDATES};
use crate::util::picsum::{UPDATE_THUMB, seed_url};

#[component]
pub fn HomeTab() -> impl IntoView {
    view! {
        <div class="tab-view tab-view--home">
            <section class="panel">
                <h3 class="panel__title">
                    <span class="panel__marker"></span>
                    "自我介绍"
                </h3>
                <p class="panel__body panel__body--prose">{BIO}</p>
            </section>

            <section class="panel">
                <h3 class="panel__title">
                    <span class="panel__marker"></span>
                    "最新动态"
                </h3>
                <div class="update-grid">
                    {UPDATES
                        .iter()
                        .map(|update| {
                            view! {
                                <div class="update-card">
                                    <div class="update-card__media">
                                        <img
                                            src=seed_url(update.seed, UPDATE_THUMB)
                                            alt="Dynamic"
                                            referrerpolicy="no-referrer"
                                        />
                                        <div class="update-card__overlay">
                                            <span>"查看详情"</span>
                                        </div>
                                    </div>
                                    <p class="update-card__caption">{update.caption}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}

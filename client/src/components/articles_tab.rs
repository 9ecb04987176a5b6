//! Article list tab. Cards fade up one after another.

use leptos::prelude::*;

use crate::content::ARTICLES;
use crate::util::motion::{ARTICLE_STAGGER_MS, stagger_style};
use crate::util::picsum::{ARTICLE_THUMB, seed_url};

#[component]
pub fn ArticlesTab() -> impl IntoView {
    view! {
        <div class="tab-view tab-view--articles">
            {ARTICLES
                .iter()
                .enumerate()
                .map(|(idx, article)| {
                    view! {
                        <article class="article-card" style=stagger_style(idx, ARTICLE_STAGGER_MS)>
                            <div class="article-card__media">
                                <img
                                    src=seed_url(article.seed, ARTICLE_THUMB)
                                    alt="Article"
                                    referrerpolicy="no-referrer"
                                />
                            </div>
                            <div class="article-card__body">
                                <h4 class="article-card__title">{article.title}</h4>
                                <div class="article-card__meta">
                                    <span>"发布人：" {article.author}</span>
                                    <span>"发布时间：" {article.date}</span>
                                </div>
                                <p class="article-card__excerpt">{article.excerpt}</p>
                            </div>
                        </article>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

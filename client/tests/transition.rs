//! Reactive wiring of the transition container.
//!
//! Effects run natively here (`reactive_graph/effects` + the tokio spawner),
//! so writing the `active` signal drives the container exactly as a nav click
//! does in the browser. Without `hydrate` the exit completes synchronously,
//! so each change settles within a couple of executor ticks.

use any_spawner::Executor;
use leptos::prelude::*;
use profile_client::components::tab_transition::TabTransition;
use profile_client::state::ui::Tab;
use tokio::task::LocalSet;

async fn settle() {
    for _ in 0..4 {
        Executor::tick().await;
    }
}

/// Mount the container on `Home`, feed it `steps`, and render what it shows.
async fn render_after(steps: &[Tab]) -> String {
    let _ = Executor::init_tokio();
    let owner = Owner::new();
    let active = RwSignal::new(Tab::Home);
    let view = owner.with(|| view! { <TabTransition active=active /> });
    settle().await;

    for &tab in steps {
        active.set(tab);
        settle().await;
    }
    owner.with(move || view.to_html())
}

fn run(steps: &'static [Tab]) -> String {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(LocalSet::new().run_until(render_after(steps)))
}

// =============================================================
// Initial mount
// =============================================================

#[test]
fn untouched_container_shows_home_entering() {
    let html = run(&[]);
    assert!(html.contains(r#"data-tab="home""#));
    assert!(html.contains(r#"aria-busy="false""#));
    assert!(html.contains("tab-transition--enter"));
    assert!(html.contains("tab-view--home"));
}

// =============================================================
// Signal changes
// =============================================================

#[test]
fn container_follows_single_change() {
    let html = run(&[Tab::Photos]);
    assert!(html.contains(r#"data-tab="photos""#));
    assert!(html.contains(r#"aria-busy="false""#));
    assert_eq!(html.matches("portfolio-tile__badge").count(), 8);
    assert!(!html.contains("tab-view--home"));
}

#[test]
fn container_follows_latest_of_two_changes() {
    let html = run(&[Tab::Photos, Tab::About]);
    assert!(html.contains(r#"data-tab="about""#));
    assert!(html.contains(r#"aria-busy="false""#));
    assert!(html.contains("教育背景"));
    assert!(!html.contains("portfolio-tile"));
}

#[test]
fn repeating_a_change_settles_on_that_tab() {
    let html = run(&[Tab::Articles, Tab::Articles]);
    assert!(html.contains(r#"data-tab="articles""#));
    assert!(html.contains("tab-transition--enter"));
    assert_eq!(html.matches(r#"class="article-card""#).count(), 3);
}

#[test]
fn returning_home_swaps_back() {
    let html = run(&[Tab::About, Tab::Home]);
    assert!(html.contains(r#"data-tab="home""#));
    assert!(html.contains("tab-view--home"));
    assert!(!html.contains("tab-view--about"));
}

//! Profile card and info list shown beside every tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sidebar never reads tab state; it renders the same static profile
//! whichever view is active.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::PROFILE;
use crate::util::picsum::{AVATAR, seed_url};

/// Static profile sidebar. `name` is the display name shown on the card.
#[component]
pub fn Sidebar(name: &'static str) -> impl IntoView {
    let avatar = seed_url(PROFILE.avatar_seed, AVATAR);

    view! {
        <aside class="sidebar">
            <div class="sidebar__card">
                <div class="sidebar__avatar">
                    <img src=avatar alt="Profile" referrerpolicy="no-referrer" />
                </div>
                <h2 class="sidebar__name">{name}</h2>
                <p class="sidebar__role">{PROFILE.role}</p>
            </div>

            <div class="sidebar__info">
                <ul class="sidebar__facts">
                    <li class="sidebar__fact">
                        <Icon kind=IconKind::User />
                        <span>"姓名：" {name}</span>
                    </li>
                    <li class="sidebar__fact">
                        <Icon kind=IconKind::MapPin />
                        <span>"地点：" {PROFILE.location}</span>
                    </li>
                    <li class="sidebar__fact">
                        <Icon kind=IconKind::GraduationCap />
                        <span>"学校：" {PROFILE.school}</span>
                    </li>
                    <li class="sidebar__fact">
                        <Icon kind=IconKind::Heart />
                        <span>"爱好：" {PROFILE.hobbies}</span>
                    </li>
                </ul>
            </div>
        </aside>
    }
}

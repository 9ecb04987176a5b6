//! Inline stroke icons used by the sidebar and section headings.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    User,
    MapPin,
    GraduationCap,
    Briefcase,
    Heart,
}

/// 24x24 stroke icon drawn in the current text color.
#[component]
pub fn Icon(kind: IconKind, #[prop(optional)] large: bool) -> impl IntoView {
    let class = if large { "icon icon--lg" } else { "icon" };

    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {match kind {
                IconKind::User => view! {
                    <circle cx="12" cy="8" r="4" />
                    <path d="M4 21 C4 17 8 14 12 14 C16 14 20 17 20 21" />
                }
                    .into_any(),
                IconKind::MapPin => view! {
                    <path d="M12 22 C12 22 19 15.5 19 10 A7 7 0 0 0 5 10 C5 15.5 12 22 12 22 Z" />
                    <circle cx="12" cy="10" r="2.5" />
                }
                    .into_any(),
                IconKind::GraduationCap => view! {
                    <path d="M2 9 L12 4 L22 9 L12 14 Z" />
                    <path d="M6 11 V16 C9 18 15 18 18 16 V11" />
                }
                    .into_any(),
                IconKind::Briefcase => view! {
                    <rect x="3" y="7" width="18" height="13" rx="2" />
                    <path d="M9 7 V5 A2 2 0 0 1 11 3 H13 A2 2 0 0 1 15 5 V7" />
                }
                    .into_any(),
                IconKind::Heart => view! {
                    <path d="M12 20 C12 20 5 15.5 3 11 A4.5 4.5 0 0 1 12 9 A4.5 4.5 0 0 1 21 11 C19 15.5 12 20 12 20 Z" />
                }
                    .into_any(),
            }}
        </svg>
    }
}

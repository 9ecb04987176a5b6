//! About tab: education, experience and skills sections.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::{EDUCATION, EXPERIENCES, SKILLS};

#[component]
pub fn AboutTab() -> impl IntoView {
    view! {
        <div class="tab-view tab-view--about">
            <section class="panel">
                <h3 class="panel__title">
                    <Icon kind=IconKind::GraduationCap large=true />
                    "教育背景"
                </h3>
                <div class="timeline">
                    {EDUCATION
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class="timeline__entry">
                                    <div class="timeline__head">
                                        <h4 class="timeline__title">{entry.title}</h4>
                                        {entry
                                            .period
                                            .map(|period| view! { <span class="timeline__period">{period}</span> })}
                                    </div>
                                    <p class="timeline__body">{entry.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="panel">
                <h3 class="panel__title">
                    <Icon kind=IconKind::Briefcase large=true />
                    "专业经历"
                </h3>
                <div class="experience-list">
                    {EXPERIENCES
                        .iter()
                        .map(|exp| {
                            view! {
                                <div class="experience">
                                    <div class="experience__dot"></div>
                                    <div>
                                        <h4 class="experience__title">{exp.title}</h4>
                                        <p class="experience__body">{exp.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="panel">
                <h3 class="panel__title">
                    <Icon kind=IconKind::Heart large=true />
                    "技能与优势"
                </h3>
                <div class="skill-grid">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class=skill.accent.class()>
                                    <h4 class="skill-card__heading">{skill.heading}</h4>
                                    <p class="skill-card__body">{skill.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}

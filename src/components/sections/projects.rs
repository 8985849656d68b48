//! Project grid with category filter and detail modal.

use folio_core::content::{
    Filter, Project, ProjectCategory, ProjectStatus, projects_in, tech_preview,
};
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{class_if, shared};
use crate::components::icons as ic;
use crate::components::window::{SectionHeading, WindowBar};
use crate::config::TECH_PREVIEW_LEN;

stylance::import_crate_style!(css, "src/components/sections/projects.module.css");

// ============================================================================
// Helpers
// ============================================================================

const FILTERS: [(Filter<ProjectCategory>, &str, IconData); 5] = [
    (Filter::All, "All Projects", ic::CODE),
    (Filter::Only(ProjectCategory::Cloud), "Cloud", ic::CLOUD),
    (Filter::Only(ProjectCategory::Devops), "DevOps", ic::GITHUB),
    (Filter::Only(ProjectCategory::Monitoring), "Monitoring", ic::MONITOR),
    (Filter::Only(ProjectCategory::Automation), "Automation", ic::DATABASE),
];

fn status_class(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Completed => css::statusCompleted,
        ProjectStatus::InProgress => css::statusInProgress,
        ProjectStatus::Planned => css::statusPlanned,
    }
}

// ============================================================================
// Components
// ============================================================================

#[component]
fn ProjectCard(
    project: &'static Project,
    index: usize,
    on_open: Callback<&'static Project>,
) -> impl IntoView {
    let (shown, hidden) = tech_preview(project.technologies, TECH_PREVIEW_LEN);

    let tags = shown
        .into_iter()
        .map(|t| view! { <span class=shared::tag>{t}</span> })
        .collect_view();
    let more = (hidden > 0).then(|| {
        view! { <span class=shared::tagMore>{format!("+{} more", hidden)}</span> }
    });

    let stop = |ev: leptos::ev::MouseEvent| ev.stop_propagation();

    view! {
        <div
            class=format!("{} {} {}", shared::window, shared::windowGlow, css::card)
            style=format!("animation-delay: {}ms", index * 100)
            on:click=move |_| on_open.run(project)
        >
            <WindowBar title=format!("{}.md", project.id)>
                <span class=format!("{} {}", css::status, status_class(project.status))>
                    {project.status.label()}
                </span>
            </WindowBar>

            <div class=shared::body>
                <h3 class=css::title>{project.title}</h3>
                <p class=css::description>{project.description}</p>

                <div class=format!("{} {}", shared::tags, css::preview)>
                    {tags}
                    {more}
                </div>

                <div class=css::actions>
                    {project.github_url.map(|url| view! {
                        <a class=css::linkMuted href=url target="_blank" rel="noopener noreferrer" on:click=stop>
                            <Icon icon=ic::GITHUB />
                            "Code"
                        </a>
                    })}
                    {project.live_url.map(|url| view! {
                        <a class=css::linkPrimary href=url target="_blank" rel="noopener noreferrer" on:click=stop>
                            <Icon icon=ic::EXTERNAL_LINK />
                            "Live"
                        </a>
                    })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ProjectModal(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    let features = project
        .features
        .iter()
        .map(|f| view! { <li class=shared::bullet>{*f}</li> })
        .collect_view();
    let technologies = project
        .technologies
        .iter()
        .map(|t| view! { <span class=format!("{} {}", shared::tag, css::tagLarge)>{*t}</span> })
        .collect_view();

    view! {
        <div class=css::overlay on:click=move |_| on_close.run(())>
            <div
                class=format!("{} {}", shared::window, css::modal)
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <WindowBar title=format!("{}_details.md", project.id)>
                    <button class=css::close aria-label="Close" on:click=move |_| on_close.run(())>
                        <Icon icon=ic::CLOSE />
                    </button>
                </WindowBar>

                <div class=format!("{} {}", shared::body, css::modalBody)>
                    <div>
                        <h3 class=css::modalTitle>{project.title}</h3>
                        <span class=status_class(project.status)>{project.status.label()}</span>
                    </div>

                    <p class=css::longDescription>{project.long_description}</p>

                    <div>
                        <h4 class=css::modalHeading>"Key Features"</h4>
                        <ul class=shared::bullets>{features}</ul>
                    </div>

                    <div>
                        <h4 class=css::modalHeading>"Technologies Used"</h4>
                        <div class=shared::tags>{technologies}</div>
                    </div>

                    <div class=css::actions>
                        {project.github_url.map(|url| view! {
                            <a class=format!("{} {}", shared::button, shared::buttonMuted) href=url target="_blank" rel="noopener noreferrer">
                                <Icon icon=ic::GITHUB />
                                "View Code"
                            </a>
                        })}
                        {project.live_url.map(|url| view! {
                            <a class=shared::button href=url target="_blank" rel="noopener noreferrer">
                                <Icon icon=ic::EXTERNAL_LINK />
                                "Live Demo"
                            </a>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let filter = RwSignal::new(Filter::<ProjectCategory>::All);
    let selected = RwSignal::new(None::<&'static Project>);

    let on_open = Callback::new(move |project: &'static Project| selected.set(Some(project)));
    let on_close = Callback::new(move |_: ()| selected.set(None));

    let filter_buttons = FILTERS
        .into_iter()
        .map(|(value, label, icon)| {
            let class =
                move || class_if(shared::filter, shared::filterActive, filter.get() == value);
            view! {
                <button class=class on:click=move |_| filter.set(value)>
                    <Icon icon=icon />
                    {label}
                </button>
            }
        })
        .collect_view();

    let grid = move || {
        projects_in(filter.get())
            .enumerate()
            .map(|(index, project)| {
                view! { <ProjectCard project=project index=index on_open=on_open /> }
            })
            .collect_view()
    };

    view! {
        <section id="projects" class=shared::section>
            <div class=shared::container>
                <SectionHeading
                    title="Featured Projects"
                    lead="A showcase of DevOps and cloud engineering projects that demonstrate infrastructure automation, scalability, and modern best practices."
                />

                <div class=shared::filters>{filter_buttons}</div>

                <div class=css::grid>{grid}</div>

                {move || selected.get().map(|project| view! {
                    <ProjectModal project=project on_close=on_close />
                })}
            </div>
        </section>
    }
}

use leptos::{either::Either, prelude::*};

use super::guarded_step;
use super::video::{VideoFrame, VideoModal};
use crate::content::{Link, Project};
use crate::modal::ModalState;
use crate::selection::{Rotation, Step};

const PRIMARY_LINK_CLASS: &str = "inline-flex items-center justify-center w-[180px] h-12 bg-slate-900 text-white text-sm font-medium rounded-lg whitespace-nowrap hover:bg-slate-800 dark:bg-slate-800 dark:hover:bg-slate-700 transition-all duration-200";
const SECONDARY_LINK_CLASS: &str = "inline-flex items-center justify-center w-[180px] h-12 border border-slate-200 dark:border-slate-700 text-slate-700 dark:text-slate-300 text-sm font-medium rounded-lg whitespace-nowrap hover:bg-slate-100 dark:hover:bg-slate-800/50 transition-all duration-200";
const MEDIA_CLASS: &str = "relative w-full aspect-[16/9] rounded-2xl overflow-hidden bg-gradient-to-br from-slate-100 to-slate-200 dark:from-slate-900 dark:to-slate-800 shadow-2xl";

#[component]
fn OutboundLink(url: &'static str, text: &'static str, classes: &'static str) -> impl IntoView {
    view! {
        <a href=url target="_blank" rel="noopener noreferrer" class=classes>
            {text}
            <span class="ml-2">"→"</span>
        </a>
    }
}

#[component]
fn ProjectCard(project: &'static Project, modal: RwSignal<ModalState>) -> impl IntoView {
    view! {
        <article class="py-20 space-y-12">
            <div class="text-center max-w-3xl mx-auto px-4">
                <h3 class="text-4xl font-bold mb-4">{project.title.as_str()}</h3>
                <p class="text-xl text-slate-700 dark:text-slate-300">
                    {project.subtitle.as_str()}
                </p>
            </div>

            <div class="max-w-6xl mx-auto px-4 space-y-6">
                {project
                    .video_url
                    .as_deref()
                    .map(|src| {
                        view! {
                            <div class=MEDIA_CLASS>
                                <VideoFrame src fit="object-contain" />
                            </div>
                            <button
                                class="text-sm text-slate-600 dark:text-slate-400 hover:text-slate-900 dark:hover:text-slate-100 transition-colors"
                                on:click=move |_| modal.update(|m| m.open(src))
                            >
                                "▶ Watch Demo"
                            </button>
                        }
                    })}
                {project
                    .image_url
                    .as_deref()
                    .map(|src| {
                        view! {
                            <div class=MEDIA_CLASS>
                                <img
                                    src=src
                                    alt=project.title.as_str()
                                    class="w-full h-full object-contain rounded-2xl"
                                />
                            </div>
                        }
                    })}
            </div>

            <div class="max-w-5xl mx-auto px-4 mt-16">
                <div class="mb-12">
                    <h4 class="text-xl font-semibold mb-4">"Overview"</h4>
                    <p class="text-slate-700 dark:text-slate-300 leading-relaxed max-w-3xl">
                        {project.description.as_str()}
                    </p>
                </div>
                <div class="grid md:grid-cols-2 gap-16">
                    <div>
                        <h4 class="text-xl font-semibold mb-6">"Key Features"</h4>
                        <ul class="space-y-4">
                            {project
                                .features
                                .iter()
                                .map(|feature| {
                                    view! {
                                        <li class="flex items-center group">
                                            <span class="w-1.5 h-1.5 rounded-full bg-slate-300 dark:bg-slate-600 group-hover:bg-slate-900 dark:group-hover:bg-slate-400 transition-colors duration-200 mr-4" />
                                            <span class="text-slate-700 dark:text-slate-300">
                                                {feature.as_str()}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="space-y-8">
                        <div>
                            <h4 class="text-xl font-semibold mb-6">"Tech Stack"</h4>
                            <div class="flex flex-wrap gap-2">
                                {project
                                    .tech_stack
                                    .iter()
                                    .map(|tech| {
                                        view! {
                                            <span class="px-4 py-2 rounded-lg bg-slate-100 dark:bg-slate-800/50 text-slate-700 dark:text-slate-300 text-sm border border-slate-200 dark:border-slate-700">
                                                {tech.as_str()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <ProjectLinks project />
                    </div>
                </div>
            </div>
        </article>
    }
}

#[component]
fn ProjectLinks(project: &'static Project) -> impl IntoView {
    let secondary = project.secondary_link.as_ref().map(|Link { url, text }| {
        view! { <OutboundLink url=url.as_str() text=text.as_str() classes=SECONDARY_LINK_CLASS /> }
    });
    let tertiary = project.tertiary_link.as_ref().map(|Link { url, text }| {
        view! {
            <div class="flex justify-start pl-[30px]">
                <a
                    href=url.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center text-slate-600 dark:text-slate-400 hover:text-slate-900 dark:hover:text-slate-200 text-sm transition-colors"
                >
                    {text.as_str()}
                    <span class="ml-1">"→"</span>
                </a>
            </div>
        }
    });
    view! {
        <div>
            <div class="flex items-center gap-3 mb-3">
                {project
                    .link
                    .as_deref()
                    .map(|url| {
                        view! { <OutboundLink url text="View Main Site" classes=PRIMARY_LINK_CLASS /> }
                    })}
                {secondary}
            </div>
            {tertiary}
        </div>
    }
}

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    let Some(start) = Rotation::for_items(projects) else {
        return Either::Right(());
    };
    let rotation = RwSignal::new(start);
    let index = Memo::new(move |_| rotation.with(Rotation::index));
    let modal = RwSignal::new(ModalState::default());

    let step = guarded_step(rotation);

    Either::Left(view! {
        <section id="projects" class="mt-32">
            <div class="max-w-[1400px] mx-auto">
                <h2 class="text-5xl font-bold text-center mb-12">"Featured Projects"</h2>
                <div class="flex items-center justify-center gap-6">
                    <button
                        class="p-3 rounded-full hover:bg-slate-100 dark:hover:bg-slate-800 transition"
                        aria-label="Previous project"
                        on:click=move |_| step(Step::Prev)
                    >
                        "←"
                    </button>
                    <div class="flex gap-2">
                        {(0..projects.len())
                            .map(|i| {
                                view! {
                                    <button
                                        aria-label=format!("Show project {}", i + 1)
                                        class=move || {
                                            if rotation.with(|r| r.is_active(i)) {
                                                "w-8 h-2 rounded-full bg-slate-900 dark:bg-slate-100 transition-all"
                                            } else {
                                                "w-2 h-2 rounded-full bg-slate-300 dark:bg-slate-700 transition-all"
                                            }
                                        }
                                        on:click=move |_| {
                                            rotation.update(|r| {
                                                r.select(i);
                                            });
                                        }
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="p-3 rounded-full hover:bg-slate-100 dark:hover:bg-slate-800 transition"
                        aria-label="Next project"
                        on:click=move |_| step(Step::Next)
                    >
                        "→"
                    </button>
                </div>
                <div class=move || {
                    if rotation.with(Rotation::is_transitioning) {
                        "opacity-0 transition-opacity duration-500"
                    } else {
                        "opacity-100 transition-opacity duration-500"
                    }
                }>
                    {move || {
                        let project = &projects[index.get()];
                        view! { <ProjectCard project modal /> }
                    }}
                </div>
            </div>
            <VideoModal state=modal />
        </section>
    })
}

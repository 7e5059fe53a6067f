use leptos::{either::Either, prelude::*};

use crate::content::SkillCategory;
use crate::selection::Rotation;

#[component]
pub fn Skills(categories: &'static [SkillCategory]) -> impl IntoView {
    let Some(start) = Rotation::for_items(categories) else {
        return Either::Right(());
    };
    let selected = RwSignal::new(start);
    let is_selected = move |i: usize| selected.with(|r| r.is_active(i));

    Either::Left(view! {
        <section id="skills" class="py-20 px-6">
            <div class="mb-20">
                <h2 class="text-6xl font-light uppercase tracking-widest mb-4">"Skills"</h2>
                <div class="w-20 h-px bg-cyan-400 mb-8" />
                <p class="text-slate-600 dark:text-slate-400 font-light text-lg max-w-2xl">
                    "What I reach for when building a product"
                </p>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-20">
                <div class="space-y-8">
                    {categories
                        .iter()
                        .enumerate()
                        .map(|(i, category)| {
                            view! {
                                <button
                                    on:click=move |_| {
                                        selected.update(|r| {
                                            r.select(i);
                                        });
                                    }
                                    class=move || {
                                        if is_selected(i) {
                                            "group w-full text-left transition-all duration-300 opacity-100"
                                        } else {
                                            "group w-full text-left transition-all duration-300 opacity-60 hover:opacity-80"
                                        }
                                    }
                                >
                                    <div class="flex items-start space-x-6">
                                        <div class=move || {
                                            if is_selected(i) {
                                                "flex-shrink-0 w-8 h-8 flex items-center justify-center text-cyan-600 font-medium"
                                            } else {
                                                "flex-shrink-0 w-8 h-8 flex items-center justify-center text-slate-400"
                                            }
                                        }>{format!("{:02}", i + 1)}</div>
                                        <div class="flex-1">
                                            <h3 class=move || {
                                                if is_selected(i) {
                                                    "text-xl font-medium uppercase tracking-wide text-cyan-600"
                                                } else {
                                                    "text-xl font-medium uppercase tracking-wide"
                                                }
                                            }>{category.title.as_str()}</h3>
                                            <div class="mt-3 h-px bg-gradient-to-r from-cyan-400 to-transparent" />
                                        </div>
                                    </div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="lg:pl-12">
                    <div class="sticky top-20">
                        {move || {
                            let category = &categories[selected.with(Rotation::index)];
                            view! {
                                <p class="text-slate-700 dark:text-slate-300 text-lg leading-relaxed mb-8">
                                    {category.description.as_str()}
                                </p>
                                <ul class="space-y-4">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <li>
                                                    <span class="font-medium">{skill.name()}</span>
                                                    {skill
                                                        .detail()
                                                        .map(|detail| {
                                                            view! {
                                                                <span class="text-slate-500 dark:text-slate-400">
                                                                    " - " {detail}
                                                                </span>
                                                            }
                                                        })}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                        }}
                    </div>
                </div>
            </div>
        </section>
    })
}

use leptos::{either::Either, prelude::*};
use leptos_use::{use_interval_fn, utils::Pausable};

use super::guarded_step;
use crate::content::Testimonial;
use crate::selection::{Rotation, Step, AUTO_ADVANCE_MS};

#[component]
pub fn Testimonials(testimonials: &'static [Testimonial]) -> impl IntoView {
    let Some(start) = Rotation::for_items(testimonials) else {
        return Either::Right(());
    };
    let rotation = RwSignal::new(start);

    let step = guarded_step(rotation);

    let Pausable { pause, resume, .. } =
        use_interval_fn(move || step(Step::Next), AUTO_ADVANCE_MS);

    // manual navigation gives the reader a full interval on the new quote
    let restart = move || {
        pause();
        resume();
    };
    let navigate = {
        let restart = restart.clone();
        move |s: Step| {
            step(s);
            restart();
        }
    };

    let fading = move || rotation.with(Rotation::is_transitioning);
    let current = move || &testimonials[rotation.with(Rotation::index)];

    Either::Left(view! {
        <section id="testimonials" class="w-full py-16 px-8 bg-slate-50 dark:bg-slate-900">
            <div class="relative max-w-[1200px] mx-auto p-16 bg-white dark:bg-slate-950 rounded-[20px] shadow-lg overflow-hidden">
                <div class="relative max-w-[1000px] mx-auto">
                    <div class="absolute -top-20 -left-5 text-[160px] font-serif text-black/5 dark:text-white/5 select-none">
                        "\u{201C}"
                    </div>
                    <div class="relative z-10 text-center h-[300px] overflow-hidden">
                        <div class=move || {
                            if fading() {
                                "absolute w-full transition-opacity duration-500 opacity-0"
                            } else {
                                "absolute w-full transition-opacity duration-500 opacity-100"
                            }
                        }>
                            <p class="text-2xl leading-normal font-light mb-8">
                                {move || current().quote.as_str()}
                            </p>
                            <div class="mb-10">
                                <h4 class="text-xl font-semibold">{move || current().name.as_str()}</h4>
                                <p class="mt-2 text-lg text-slate-500">
                                    {move || current().role.as_str()}
                                </p>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="flex items-center justify-center gap-8 mt-8">
                    <button
                        class="w-12 h-12 flex items-center justify-center rounded-full hover:bg-slate-100 dark:hover:bg-slate-800 hover:scale-110 transition-all"
                        aria-label="Previous testimonial"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| navigate(Step::Prev)
                        }
                    >
                        <span class="text-2xl">"←"</span>
                    </button>
                    <div class="flex gap-3 items-center">
                        {(0..testimonials.len())
                            .map(|i| {
                                let restart = restart.clone();
                                view! {
                                    <button
                                        class="w-10 h-1 cursor-pointer"
                                        aria-label=format!("Show testimonial {}", i + 1)
                                        on:click=move |_| {
                                            rotation.update(|r| {
                                                r.select(i);
                                            });
                                            restart();
                                        }
                                    >
                                        <div class=move || {
                                            if rotation.with(|r| r.is_active(i)) {
                                                "w-full h-full rounded-sm bg-slate-600 scale-x-125 transition-all duration-300"
                                            } else {
                                                "w-full h-full rounded-sm bg-slate-200 dark:bg-slate-700 transition-all duration-300"
                                            }
                                        } />
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        class="w-12 h-12 flex items-center justify-center rounded-full hover:bg-slate-100 dark:hover:bg-slate-800 hover:scale-110 transition-all"
                        aria-label="Next testimonial"
                        on:click=move |_| navigate(Step::Next)
                    >
                        <span class="text-2xl">"→"</span>
                    </button>
                </div>
            </div>
        </section>
    })
}

use std::sync::{Arc, Mutex};

use leptos::{either::Either, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::video::{VideoFrame, VideoModal};
use crate::content::Profile;
use crate::modal::ModalState;
use crate::typewriter::Typewriter;

const ARROW_PATH: &str = "M17 8l4 4m0 0l-4 4m4-4H3";

#[component]
fn ArrowIcon() -> impl IntoView {
    view! {
        <svg
            class="w-4 h-4 ml-2 transform group-hover:translate-x-1"
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=ARROW_PATH />
        </svg>
    }
}

/// The animated role line under the name.
#[component]
fn TypedRole(roles: &'static [String]) -> impl IntoView {
    let Some(machine) = Typewriter::new(roles.to_vec()) else {
        return Either::Right(());
    };
    let first_delay = machine.timing().typing.as_millis() as f64;
    let machine = StoredValue::new(Arc::new(Mutex::new(machine)));
    let (typed, set_typed) = signal(String::new());
    let (delay, set_delay) = signal(first_delay);
    let (ticks, set_ticks) = signal(0u64);

    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            let (text, next) = machine.with_value(|m| {
                let mut m = m.lock().expect("should be able to lock typewriter");
                let next = m.tick();
                (m.text().to_string(), next)
            });
            set_typed(text);
            set_delay(next.as_millis() as f64);
            set_ticks.update(|n| *n += 1);
        },
        delay,
    );

    // every tick schedules the next one, with whatever delay it asked for
    Effect::new(move |_| {
        ticks.track();
        start(());
    });

    Either::Left(view! {
        <p class="text-base sm:text-lg font-medium text-slate-800 dark:text-slate-200 h-7">
            <span>{typed}</span>
            <span class="animate-pulse">"|"</span>
        </p>
    })
}

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let modal = RwSignal::new(ModalState::default());

    view! {
        <section id="hero" class="flex min-h-screen pb-32">
            <div class="flex-1 flex items-center justify-center pt-20">
                <div class="w-full max-w-xl p-8 space-y-6">
                    <div class="space-y-4">
                        <h1 class="text-5xl sm:text-6xl xl:text-7xl font-bold tracking-tighter">
                            <span class="bg-gradient-to-r from-slate-900 to-slate-700 dark:from-slate-100 dark:to-slate-300 bg-clip-text text-transparent">
                                {profile.greeting.as_str()}
                            </span>
                        </h1>
                        <div class="h-1 w-24 bg-slate-900 dark:bg-slate-100 mt-2" />
                        <p class="text-lg sm:text-xl mt-4 font-light text-slate-700 dark:text-slate-300">
                            "I'm " {profile.name.as_str()}
                        </p>
                        <TypedRole roles=profile.roles.as_slice() />
                        <p class="text-base sm:text-lg text-slate-600 dark:text-slate-400">
                            {profile.tagline.as_str()}
                        </p>
                    </div>

                    <div class="flex flex-wrap gap-2">
                        {profile
                            .chips
                            .iter()
                            .map(|chip| {
                                view! {
                                    <span class="px-3 py-1 rounded-full text-sm bg-slate-100 dark:bg-slate-800/50 text-slate-700 dark:text-slate-300 border border-slate-200 dark:border-slate-700">
                                        {chip.as_str()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="max-w-none text-sm sm:text-base text-slate-600 dark:text-slate-400">
                        <p>{profile.summary.as_str()}</p>
                        <ul class="list-disc pl-5 space-y-1 mt-2">
                            {profile
                                .achievements
                                .iter()
                                .map(|a| view! { <li>{a.as_str()}</li> })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-4 pt-2">
                        <a
                            href="#projects"
                            class="group flex items-center justify-center h-10 px-6 bg-slate-900 text-white text-sm font-medium rounded-lg whitespace-nowrap hover:bg-slate-800 dark:bg-slate-800 dark:hover:bg-slate-700 transition-all duration-200"
                        >
                            <span>"View My Work"</span>
                            <ArrowIcon />
                        </a>
                        <a
                            href=format!("mailto:{}", profile.contact.email)
                            class="group flex items-center justify-center h-10 px-6 border border-slate-200 dark:border-slate-700 text-slate-700 dark:text-slate-300 text-sm font-medium rounded-lg whitespace-nowrap hover:bg-slate-100 dark:hover:bg-slate-800/50 transition-all duration-200"
                        >
                            <span>"Let's Connect"</span>
                            <ArrowIcon />
                        </a>
                    </div>
                </div>
            </div>

            {profile
                .hero_video
                .as_deref()
                .map(|src| {
                    view! {
                        <div class="hidden lg:flex flex-1 flex-col items-center justify-center pt-20">
                            <div class="w-full max-w-2xl p-8">
                                <div class="aspect-video rounded-2xl overflow-hidden shadow-2xl bg-gradient-to-br from-slate-100 to-slate-200 dark:from-slate-900 dark:to-slate-800">
                                    <VideoFrame src />
                                </div>
                                <button
                                    class="mt-4 text-sm text-slate-600 dark:text-slate-400 hover:text-slate-900 dark:hover:text-slate-100 transition-colors"
                                    on:click=move |_| modal.update(|m| m.open(src))
                                >
                                    "▶ Watch with sound"
                                </button>
                            </div>
                        </div>
                        <VideoModal state=modal />
                    }
                })}
        </section>
    }
}

mod contact;
mod faq;
mod footer;
mod hero;
mod projects;
mod skills;
mod testimonial;
mod video;

use std::time::Duration;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::site;
use crate::selection::{Rotation, Step, TRANSITION_MS};

use contact::Contact;
use faq::Faq;
use footer::Footer;
use hero::Hero;
use projects::Projects;
use skills::Skills;
use testimonial::Testimonials;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-white text-slate-900 dark:bg-slate-950 dark:text-slate-100">
                <App />
            </body>
        </html>
    }
}

/// Steps `rotation` and clears its transition flag once the slide animation has run.
fn guarded_step(rotation: RwSignal<Rotation>) -> impl Fn(Step) + Copy + Send + Sync + 'static {
    move |step| {
        if rotation.try_update(|r| r.step(step)).unwrap_or(false) {
            set_timeout(
                move || rotation.update(Rotation::finish_transition),
                Duration::from_millis(TRANSITION_MS),
            );
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let owner = site()
        .map(|c| c.profile.name.clone())
        .unwrap_or_else(|_| "Portfolio".to_string());

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />

        <Router>
            <div class="min-h-screen">
                <main class="max-w-6xl mx-auto px-4">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Renders every section of the page in order.
#[component]
fn HomePage() -> impl IntoView {
    match site() {
        Ok(content) => Either::Left(view! {
            <Title text="Portfolio" />
            <Hero profile=&content.profile />
            <Projects projects=content.projects.as_slice() />
            <Skills categories=content.skills.as_slice() />
            <Faq items=content.faqs.as_slice() />
            <Testimonials testimonials=content.testimonials.as_slice() />
            <Contact info=&content.profile.contact />
            <Footer owner=content.profile.name.as_str() />
        }),
        Err(e) => {
            log::error!("couldn't load site content: {e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <section class="py-32 text-center">
                    <h1 class="text-3xl font-bold mb-4">"Content unavailable"</h1>
                    <p class="text-slate-600 dark:text-slate-400">
                        "This page couldn't be loaded. Please check back soon."
                    </p>
                </section>
            })
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <section class="py-32 text-center">
            <h1 class="text-3xl font-bold mb-4">"Page not found."</h1>
            <A href="/" attr:class="underline hover:text-blue-500">
                "Back home"
            </A>
        </section>
    }
}

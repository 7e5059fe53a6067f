use leptos::prelude::*;

use crate::content::FaqItem;
use crate::selection::Accordion;

#[component]
fn FaqAccordion(
    item: &'static FaqItem,
    is_open: Signal<bool>,
    on_toggle: impl Fn() + Send + Sync + 'static,
) -> impl IntoView {
    let answer_id = format!("faq-answer-{}", item.id);
    let question_id = format!("faq-question-{}", item.id);

    view! {
        <div class="rounded-lg shadow-md overflow-hidden border border-slate-200 dark:border-slate-800">
            <button
                id=question_id.clone()
                on:click=move |_| on_toggle()
                class="w-full px-6 py-4 text-left flex justify-between items-center hover:bg-slate-50 dark:hover:bg-slate-900 transition-colors duration-200"
                aria-expanded=move || is_open.get().to_string()
                aria-controls=answer_id.clone()
            >
                <h3 class="text-xl font-semibold">{item.question.as_str()}</h3>
                <svg
                    class=move || {
                        if is_open.get() {
                            "w-5 h-5 text-slate-500 transition-transform duration-200 rotate-180"
                        } else {
                            "w-5 h-5 text-slate-500 transition-transform duration-200"
                        }
                    }
                    fill="none"
                    viewBox="0 0 24 24"
                    stroke="currentColor"
                    aria-hidden="true"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M19 9l-7 7-7-7"
                    />
                </svg>
            </button>
            <Show when=move || is_open.get()>
                <div
                    id=answer_id.clone()
                    class="px-6 py-4 text-slate-700 dark:text-slate-300 bg-slate-50 dark:bg-slate-900"
                    role="region"
                    aria-labelledby=question_id.clone()
                >
                    {item.answer.as_str()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn Faq(items: &'static [FaqItem]) -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new(items.len()));

    view! {
        <section id="faq" class="max-w-4xl mx-auto py-16 px-4" aria-labelledby="faq-title">
            <div class="text-center mb-12">
                <span class="text-blue-600 font-semibold text-sm uppercase tracking-wider">
                    "Got Questions?"
                </span>
                <h2 id="faq-title" class="text-4xl font-bold mb-4">
                    "Frequently Asked Questions"
                </h2>
                <p class="text-slate-600 dark:text-slate-400 text-lg">
                    "Find answers to common questions about my experience and approach"
                </p>
            </div>
            <div class="space-y-4">
                {items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let is_open = Signal::derive(move || accordion.with(|a| a.is_open(i)));
                        view! {
                            <FaqAccordion
                                item
                                is_open
                                on_toggle=move || {
                                    accordion.update(|a| {
                                        a.toggle(i);
                                    });
                                }
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

use leptos::prelude::*;

use crate::build_info::{copyright_year, last_updated};

#[component]
pub fn Footer(owner: &'static str) -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-slate-200 dark:border-slate-800 text-center text-sm text-slate-500">
            <p>{format!("© {} {owner}", copyright_year())}</p>
            {last_updated().map(|month| view! { <p class="mt-1">"Last updated " {month}</p> })}
        </footer>
    }
}

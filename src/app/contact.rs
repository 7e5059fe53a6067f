use leptos::prelude::*;

use crate::content::ContactInfo;

#[component]
pub fn Contact(info: &'static ContactInfo) -> impl IntoView {
    view! {
        <section class="py-12 sm:py-16 lg:py-20" id="contact">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center space-y-6 sm:space-y-8">
                    <h2 class="text-2xl sm:text-3xl lg:text-4xl font-bold">
                        {info.heading.as_str()}
                    </h2>
                    <div class="inline-flex flex-col items-center space-y-4 sm:space-y-6 border border-slate-200 dark:border-slate-800 rounded-xl sm:rounded-2xl p-6 sm:p-8 lg:p-10">
                        <p class="text-sm sm:text-base lg:text-lg text-slate-600 dark:text-slate-300 max-w-2xl">
                            {info.blurb.as_str()}
                        </p>
                        <div class="flex flex-col items-center space-y-3 sm:space-y-4">
                            <a
                                href=format!("mailto:{}", info.email)
                                class="text-base sm:text-lg hover:text-blue-500 transition-colors"
                            >
                                {info.email.as_str()}
                            </a>
                            {info
                                .phone
                                .as_ref()
                                .map(|phone| {
                                    view! {
                                        <a
                                            href=format!("tel:{}", phone.dial)
                                            class="text-base sm:text-lg hover:text-blue-500 transition-colors"
                                        >
                                            {phone.display.as_str()}
                                        </a>
                                    }
                                })}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

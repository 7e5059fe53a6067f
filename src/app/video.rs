use leptos::{ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::modal::{ModalState, VideoLoad};

/// `HTMLMediaElement.HAVE_CURRENT_DATA`
const HAVE_CURRENT_DATA: u16 = 2;

#[component]
fn Spinner() -> impl IntoView {
    view! {
        <div class="absolute inset-0 flex items-center justify-center bg-black/80">
            <div class="animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-white" />
        </div>
    }
}

#[component]
fn LoadError(message: &'static str) -> impl IntoView {
    view! {
        <div class="absolute inset-0 flex items-center justify-center bg-black">
            <p class="text-white text-center px-4">{message}</p>
        </div>
    }
}

/// Muted, looping inline video with a spinner until the first frame is ready.
#[component]
pub fn VideoFrame(
    src: &'static str,
    #[prop(default = "object-cover")] fit: &'static str,
) -> impl IntoView {
    let video_ref = NodeRef::<html::Video>::new();
    let (load, set_load) = signal(VideoLoad::Loading);

    // media can finish (or fail) before hydration attaches the listeners
    Effect::new(move |_| {
        if let Some(video) = video_ref.get() {
            if video.error().is_some() {
                set_load(VideoLoad::Failed);
            } else if video.ready_state() >= HAVE_CURRENT_DATA {
                set_load(VideoLoad::Ready);
            }
        }
    });

    view! {
        <div class="relative w-full h-full">
            <video
                node_ref=video_ref
                class=format!("w-full h-full {fit}")
                autoplay
                loop
                muted
                playsinline
                on:loadeddata=move |_| set_load(VideoLoad::Ready)
            >
                <source
                    src=src
                    type="video/mp4"
                    on:error=move |_| {
                        log::warn!("video failed to load: {src}");
                        set_load(VideoLoad::Failed);
                    }
                />
                "Your browser does not support the video tag."
            </video>
            <Show when=move || load.get().is_loading()>
                <Spinner />
            </Show>
            {move || load.get().error_message().map(|message| view! { <LoadError message /> })}
        </div>
    }
}

fn set_body_scroll(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = document().body() else {
            return;
        };
        let overflow = if enabled { "unset" } else { "hidden" };
        if let Err(e) = body.style().set_property("overflow", overflow) {
            log::warn!("couldn't set body overflow: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = enabled;
}

#[component]
pub fn VideoModal(state: RwSignal<ModalState>) -> impl IntoView {
    let video_ref = NodeRef::<html::Video>::new();

    Effect::new(move |_| set_body_scroll(!state.with(ModalState::scroll_locked)));
    on_cleanup(move || set_body_scroll(true));

    // the element stops whenever the state says playback is over
    Effect::new(move |_| {
        if state.with(ModalState::is_playing) {
            return;
        }
        if let Some(video) = video_ref.get_untracked() {
            if let Err(e) = video.pause() {
                log::warn!("couldn't pause video: {e:?}");
            }
        }
    });

    let close = move || state.update(ModalState::close);

    let _ = use_event_listener(use_document(), ev::keydown, move |e| {
        if e.key() == "Escape" && state.with_untracked(ModalState::is_open) {
            close();
        }
    });

    view! {
        <Show when=move || state.with(ModalState::is_open)>
            {
                let src = state
                    .with_untracked(|s| s.video_url().map(str::to_string))
                    .unwrap_or_default();
                view! {
                    <div class="fixed inset-0 z-50" role="dialog" aria-modal="true">
                        <div
                            class="fixed inset-0 bg-black/75 transition-opacity duration-300"
                            on:click=move |_| close()
                        />
                        <div class="fixed inset-0 overflow-y-auto pointer-events-none">
                            <div class="flex min-h-full items-center justify-center p-4 sm:p-6">
                                <div class="relative w-full max-w-sm sm:max-w-lg md:max-w-2xl lg:max-w-4xl overflow-hidden rounded-lg sm:rounded-xl lg:rounded-2xl bg-black shadow-xl pointer-events-auto">
                                    <button
                                        on:click=move |_| close()
                                        aria-label="Close video"
                                        class="absolute top-4 right-4 z-10 p-2 rounded-full bg-black/50 hover:bg-black/75 transition-colors"
                                    >
                                        <svg
                                            class="w-6 h-6 text-white"
                                            fill="none"
                                            viewBox="0 0 24 24"
                                            stroke="currentColor"
                                        >
                                            <path
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                stroke-width="2"
                                                d="M6 18L18 6M6 6l12 12"
                                            />
                                        </svg>
                                    </button>
                                    <video
                                        node_ref=video_ref
                                        class="w-full h-full aspect-video"
                                        controls
                                        autoplay
                                        playsinline
                                        on:loadeddata=move |_| state.update(ModalState::loaded)
                                    >
                                        <source
                                            src=src
                                            type="video/mp4"
                                            on:error=move |_| {
                                                log::warn!("modal video failed to load");
                                                state.update(ModalState::failed);
                                            }
                                        />
                                        "Your browser does not support the video tag."
                                    </video>
                                    {move || {
                                        state
                                            .with(|s| s.load().is_loading())
                                            .then(|| view! { <Spinner /> })
                                    }}
                                    {move || {
                                        state
                                            .with(|s| s.load().error_message())
                                            .map(|message| view! { <LoadError message /> })
                                    }}
                                </div>
                            </div>
                        </div>
                    </div>
                }
            }
        </Show>
    }
}

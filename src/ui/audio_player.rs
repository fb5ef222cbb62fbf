//! Floating background music player

use leptos::prelude::*;

use crate::core::audio::{AudioPlayerState, Track};
use crate::core::preferences::{disable_music, music_disabled};
use crate::core::viewport::ViewportEvent;
use crate::ui::browser::BrowserStorage;
use crate::ui::icon::{Icon, icons};
use crate::ui::viewport::subscribe_viewport;

#[component]
pub fn AudioPlayer() -> impl IntoView {
    let track = Track::default();
    let embed_url = StoredValue::new(track.embed_url());
    let title = StoredValue::new(track.title);
    let artist = StoredValue::new(track.artist);
    let state = RwSignal::new(AudioPlayerState::new(false));

    // The opt-out is read once, after hydration, so server and client markup agree
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        if music_disabled(&BrowserStorage) {
            state.update(AudioPlayerState::disable);
        }
    });

    let _scroll = subscribe_viewport(move |event| {
        if let ViewportEvent::Scrolled { scroll_y, .. } = *event {
            state.update(|player| player.on_scroll(scroll_y));
        }
    });

    let opt_out = move |_| {
        state.update(AudioPlayerState::disable);
        if let Err(err) = disable_music(&BrowserStorage) {
            leptos::logging::warn!("Could not persist music opt-out: {}", err);
        }
    };

    let playing = move || state.with(|player| player.playing);

    view! {
        <Show when=move || !state.with(|player| player.disabled)>
            <Show when=move || state.with(|player| player.embed_mounted)>
                <div class="audio-embed" aria-hidden="true">
                    <iframe
                        src=embed_url.get_value()
                        title="YouTube Audio Player"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    ></iframe>
                </div>
            </Show>

            <div class="audio-player" class:audio-player-hidden=move || !state.with(|player| player.visible)>
                <div class="audio-card">
                    <div class="audio-main" on:click=move |_| state.update(AudioPlayerState::toggle_expanded)>
                        <button
                            class="audio-play"
                            aria-label=move || if playing() { "Pause" } else { "Play" }
                            on:click=move |ev| {
                                ev.stop_propagation();
                                state.update(AudioPlayerState::toggle_play);
                            }
                        >
                            {move || if playing() {
                                view! { <Icon name=icons::PAUSE class="w-4 h-4"/> }.into_any()
                            } else {
                                view! { <Icon name=icons::PLAY class="w-4 h-4"/> }.into_any()
                            }}
                        </button>
                        <div class="flex-1 min-w-0">
                            <div class="audio-title">{title.get_value()}</div>
                            <div class="audio-artist">{artist.get_value()}</div>
                        </div>
                        <div class="audio-wave" class:audio-wave-playing=playing>
                            <span></span><span></span><span></span><span></span>
                        </div>
                        <Icon name=icons::MUSIC class="w-4 h-4 ml-2"/>
                    </div>

                    <Show when=move || state.with(|player| player.expanded)>
                        <div class="audio-details">
                            <div class="text-center">
                                <div class="audio-title">"🎵 " {title.get_value()}</div>
                                <div class="audio-artist">"by " {artist.get_value()}</div>
                                <div class="audio-artist mt-2">
                                    {move || state.with(AudioPlayerState::status_label)}
                                </div>
                            </div>
                            <div class="flex items-center justify-between">
                                <div class="audio-artist">
                                    {move || if playing() { "▶️ Playing" } else { "⏸️ Paused" }}
                                </div>
                                <button
                                    class="audio-dismiss"
                                    title="Disable music permanently"
                                    on:click=opt_out
                                >
                                    <Icon name=icons::X class="w-4 h-4"/>
                                </button>
                            </div>
                            <div class="audio-note">"Audio provided by YouTube"</div>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

//! Startup gate and splash screen

use leptos::prelude::*;

use crate::core::schedule::Scheduler;
use crate::core::startup::{
    COMPLETE_HOLD, EXIT_DURATION, GRACE_DELAY, LoadingProgress, PROGRESS_TICK, SplashPhase,
    StartupGate,
};
use crate::ui::browser::{BrowserScheduler, BrowserTask, random_unit};

type TaskSlot = StoredValue<Option<BrowserTask>, LocalStorage>;

/// Preload the critical images and release the gate after the grace delay
///
/// Failed loads count as loaded. The splash screen releases the same gate
/// once its exit animation ends.
pub fn use_startup_gate() -> RwSignal<StartupGate> {
    let gate = RwSignal::new(StartupGate::default());
    let grace: TaskSlot = StoredValue::new_local(None);

    #[cfg(not(feature = "ssr"))]
    {
        let resolve = move |src: String, failed: bool| {
            if failed {
                leptos::logging::warn!("Critical image {} failed to load", src);
            }
            let last = gate.try_update(|gate| gate.resolve(&src)).unwrap_or(false);
            if last {
                let task = BrowserScheduler.schedule(
                    GRACE_DELAY,
                    Box::new(move || {
                        gate.try_update(StartupGate::finish_grace);
                    }),
                );
                grace.set_value(Some(task));
            }
        };

        Effect::new(move |_| {
            let sources: Vec<String> =
                gate.with_untracked(|gate| gate.critical_images().map(str::to_string).collect());
            for src in sources {
                preload(src, resolve);
            }
        });
    }

    #[cfg(feature = "ssr")]
    let _ = grace;

    gate
}

#[cfg(not(feature = "ssr"))]
fn preload(src: String, resolve: impl Fn(String, bool) + Copy + 'static) {
    use leptos::web_sys::HtmlImageElement;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Ok(image) = HtmlImageElement::new() else {
        resolve(src, true);
        return;
    };

    let loaded = src.clone();
    let on_load = Closure::once_into_js(move || resolve(loaded, false));
    let failed = src.clone();
    let on_error = Closure::once_into_js(move || resolve(failed, true));
    image.set_onload(Some(on_load.unchecked_ref()));
    image.set_onerror(Some(on_error.unchecked_ref()));
    image.set_src(&src);
}

fn schedule_tick(
    progress: RwSignal<LoadingProgress>,
    gate: RwSignal<StartupGate>,
    slot: TaskSlot,
) {
    let task = BrowserScheduler.schedule(
        PROGRESS_TICK,
        Box::new(move || match progress.try_update(|p| p.tick(random_unit())) {
            Some(true) => {
                let hold = BrowserScheduler.schedule(
                    COMPLETE_HOLD,
                    Box::new(move || schedule_exit(progress, gate, slot)),
                );
                slot.try_update_value(|pending| *pending = Some(hold));
            }
            Some(false) => schedule_tick(progress, gate, slot),
            None => {}
        }),
    );
    slot.try_update_value(|pending| *pending = Some(task));
}

fn schedule_exit(
    progress: RwSignal<LoadingProgress>,
    gate: RwSignal<StartupGate>,
    slot: TaskSlot,
) {
    if progress.try_update(LoadingProgress::begin_exit).is_none() {
        return;
    }
    let exit = BrowserScheduler.schedule(
        EXIT_DURATION,
        Box::new(move || {
            gate.try_update(StartupGate::finish_splash);
        }),
    );
    slot.try_update_value(|pending| *pending = Some(exit));
}

/// Full-screen splash with a simulated progress bar
///
/// Opens `gate` when the exit animation ends, even if images are still loading.
#[component]
pub fn LoadingScreen(gate: RwSignal<StartupGate>) -> impl IntoView {
    let progress = RwSignal::new(LoadingProgress::new());
    let ticker: TaskSlot = StoredValue::new_local(None);

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| schedule_tick(progress, gate, ticker));
    #[cfg(feature = "ssr")]
    let _ = (ticker, gate, schedule_tick);

    let exiting = move || progress.with(|p| p.phase() == SplashPhase::Exiting);

    view! {
        <div class="splash" class:splash-exit=exiting>
            <div class="text-center">
                <div class="splash-brand">
                    <div class="brand-mark brand-mark-lg">"JS"</div>
                    <h1 class="splash-title">"johnnightsteel"</h1>
                    <p class="eyebrow">"Digital Architect"</p>
                </div>
                <div class="splash-track">
                    <div
                        class="splash-bar"
                        style=move || format!("width: {}%;", progress.with(LoadingProgress::bar_percent))
                    ></div>
                </div>
                <p class="splash-label">{move || progress.with(LoadingProgress::label)}</p>
                <p class="splash-note">"Crafting your experience..."</p>
            </div>
        </div>
    }
}

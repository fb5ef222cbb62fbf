//! Browser bindings for the core traits plus small DOM helpers
//!
//! Everything here degrades to a no-op during server rendering.

use std::time::Duration;

use crate::core::error::{HandoffError, StorageError};
use crate::core::handoff::LinkOpener;
use crate::core::preferences::PreferenceStore;
use crate::core::schedule::Scheduler;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// [`Scheduler`] backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

/// Pending browser timeout; dropping it clears the timer
pub struct BrowserTask {
    #[cfg(not(feature = "ssr"))]
    _timeout: gloo_timers::callback::Timeout,
}

impl Scheduler for BrowserScheduler {
    type Task = BrowserTask;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> BrowserTask {
        #[cfg(not(feature = "ssr"))]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            BrowserTask {
                _timeout: gloo_timers::callback::Timeout::new(millis, callback),
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (delay, callback);
            BrowserTask {}
        }
    }
}

/// Opens deep links in a new browsing context with `noopener,noreferrer`
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowOpener;

impl LinkOpener for WindowOpener {
    fn open(&self, url: &str) -> Result<(), HandoffError> {
        #[cfg(not(feature = "ssr"))]
        {
            let window = web_sys::window().ok_or(HandoffError::NoWindow)?;
            // With noopener the returned handle is always null, so only a thrown
            // error tells us the popup was refused
            window
                .open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
                .map(|_| ())
                .map_err(|_| HandoffError::PopupBlocked)
        }
        #[cfg(feature = "ssr")]
        {
            let _ = url;
            Err(HandoffError::NoWindow)
        }
    }
}

/// `window.localStorage` as a [`PreferenceStore`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(not(feature = "ssr"))]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(feature = "ssr")]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(not(feature = "ssr"))]
        {
            let storage = web_sys::window()
                .and_then(|window| window.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::WriteFailed(key.to_string()))
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// Current `(scroll_y, viewport_width, viewport_height)`
pub fn viewport_metrics() -> Option<(f64, f64, f64)> {
    #[cfg(not(feature = "ssr"))]
    {
        let window = web_sys::window()?;
        let scroll_y = window.scroll_y().ok()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some((scroll_y, width, height))
    }
    #[cfg(feature = "ssr")]
    {
        None
    }
}

/// Smooth-scroll the element with `id` into view
pub fn scroll_to_section(id: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id))
        {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        } else {
            leptos::logging::warn!("Section #{} not found", id);
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = id;
    }
}

pub fn scroll_to_top() {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}

/// Toggle the class that stops the page from scrolling behind an overlay
pub fn set_scroll_locked(locked: bool) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        {
            let class_list = body.class_list();
            let toggled = if locked {
                class_list.add_1("scroll-locked")
            } else {
                class_list.remove_1("scroll-locked")
            };
            if let Err(err) = toggled {
                leptos::logging::warn!("Could not toggle scroll lock: {:?}", err);
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = locked;
    }
}

/// Uniform sample in `0.0..1.0`
pub fn random_unit() -> f64 {
    #[cfg(not(feature = "ssr"))]
    {
        js_sys::Math::random()
    }
    #[cfg(feature = "ssr")]
    {
        0.5
    }
}

/// Run `f` after `delay`, without a handle; for fire-and-forget UI nudges
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use wasm_bindgen_futures::spawn_local;

        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            f();
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (delay, f);
    }
}

/// Current year for the footer copyright
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}


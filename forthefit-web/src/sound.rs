use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};

const SOUND_ENABLED_KEY: &str = "forthefit-sound-enabled";
const SOUND_VOLUME: f64 = 0.3;

// Short cues embedded as data URIs so playback never hits the network.
const CLICK_DATA: &str = "data:audio/wav;base64,UklGRlIAAABXQVZFZm10IBAAAAABAAEAiBUAAIgVAAABAAgAZGF0YVgAAACAgICAwMDAxMTEzMzQ0NTU2Njc4ODk6Ozw9Pj9AQUJDREVGR0hJSktMTU5PUFFSU1RVVldYWVpbXF1eX2BhYmNkZWZnaGprbG1ucHFyc3R1dnd4eXp7fH1+f4CBgoOEhYaHiImKi4yNjo+QkZKTlJWWl5iZmpucnZ6foKGio6SlpqeoqaqrrK2ur7CxsrO0tba3uLm6u7y9vr/AwcLDxMXGx8jJysvMzc7P0NHS09TV1tfY2drb3N3e3+A=";
const UPLOAD_DATA: &str = "data:audio/wav;base64,UklGRkIAAABXQVZFZm10IBAAAAABAAEAiBUAAIgVAAABAAgAZGF0YUYAAAB/f3+AgYKDhIWGh4iJiouMjY6PkJGSk5SVlpeYmZqbnJ2en6ChoqOkpaanqKmqq6ytrq+wsbKztLW2t7i5uru8vb6/wMHCw8TFxsfIycrLzM3Oz9DR0tPU1dbX2Nna29zd3t/g4eLj5OXm5+jp6uvs7e7v8PHy8/T19vf4+fr7/P3+/w==";
const SUCCESS_DATA: &str = "data:audio/wav;base64,UklGRqgAAABXQVZFZm10IBAAAAABAAEAiBUAAIgVAAABAAgAZGF0YZQAAACfn5+goaKjpKWmp6ipqqusra6vsLGys7S1tre4ubq7vL2+v8DBwsPExcbHyMnKy8zNzs/Q0dLT1NXW19jZ2tvc3d7f4OHi4+Tl5ufo6err7O3u7/Dx8vP09fb3+Pn6+/z9/v8AAQIDBAUGBwgJCgsMDQ4PEBESExQVFhcYGRobHB0eHyAhIiMkJSYnKCkqKywtLi8wMTIzNDU2Nzg5Ojs8PT4/QEFCQ0RFRkdISUpLTE1OT1BRUlNUVVZXWFlaW1xdXl9gYWJjZGVmZ2hpamtsbW5vcHFyc3R1dnd4eXp7fH1+f4CBgoOEhYaHiImKi4yNjo+QkZKTlJWWl5iZmpucnZ6f";
const TOGGLE_DATA: &str = "data:audio/wav;base64,UklGRiIAAABXQVZFZm10IBAAAAABAAEAiBUAAIgVAAABAAgAZGF0YVwAAACcnZ6foKGio6SlpqeoqaqrrK2ur7CxsrO0tba3uLm6u7y9vr/AwcLDxMXGx8jJysvMzc7P0NHS09TV1tfY2drb3N3e3+Dh4uPk5ebn6Onq6+zt7u/w8fLz9PX29/j5+vv8/f7/AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8gISIjJCUmJygpKissLS4vMDEyMzQ1Njc4OTo7PD0+P0BBQkNERUZHSElKS0xNTk9QUVJTVFVWV1hZWltcXV5fYGFiY2RlZmdoaWprbG1ub3BxcnN0dXZ3eHl6e3x9fn+AgYKDhIWGh4iJiouMjY6PkJGSk5SVlpeYmZqbg==";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    Click,
    Upload,
    Success,
    Toggle,
}

impl Sound {
    fn data_uri(self) -> &'static str {
        match self {
            Self::Click => CLICK_DATA,
            Self::Upload => UPLOAD_DATA,
            Self::Success => SUCCESS_DATA,
            Self::Toggle => TOGGLE_DATA,
        }
    }
}

/// Process-wide sound preference, initialized once at startup and injected
/// into every component that cues sounds. The flag lives in a signal so the
/// UI tracks it; changes are persisted under a fixed local-storage key, and
/// toggles made in other tabs flow back in through the storage event.
#[derive(Clone, Copy)]
pub struct SoundSettings {
    enabled: RwSignal<bool>,
}

impl SoundSettings {
    pub fn load(cx: Scope) -> Self {
        let enabled = create_rw_signal(cx, stored_preference());

        create_effect(cx, move |_| {
            if let Err(e) = LocalStorage::set(SOUND_ENABLED_KEY, enabled.get()) {
                log::error!("failed to persist sound preference: {e}");
            }
        });

        let on_storage = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
            enabled.update(|e| *e = stored_preference());
        }));
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref())
            {
                log::warn!("failed to attach storage listener: {e:?}");
            }
        }
        on_storage.forget();

        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Read-only view for components that track the flag reactively.
    pub fn subscribe(&self) -> ReadSignal<bool> {
        self.enabled.read_only()
    }

    pub fn toggle(&self) -> bool {
        self.enabled.update(|e| *e = !*e);
        self.enabled.get()
    }

    /// Fire-and-forget playback. Failures never reach the user; autoplay
    /// rejections before the first user gesture are expected and not even
    /// worth a log line.
    pub fn play(&self, sound: Sound) {
        if !self.is_enabled() {
            return;
        }
        let audio = match web_sys::HtmlAudioElement::new_with_src(sound.data_uri()) {
            Ok(audio) => audio,
            Err(e) => {
                log::warn!("failed to create audio element: {e:?}");
                return;
            }
        };
        audio.set_volume(SOUND_VOLUME);
        match audio.play() {
            Ok(promise) => {
                let on_rejected = Closure::once(move |err: JsValue| {
                    let name = err
                        .dyn_ref::<js_sys::Error>()
                        .map(|e| String::from(e.name()));
                    if name.as_deref() != Some("NotAllowedError") {
                        log::warn!("sound playback failed: {err:?}");
                    }
                });
                let _ = promise.catch(&on_rejected);
                on_rejected.forget();
            }
            Err(e) => log::warn!("sound playback failed: {e:?}"),
        }
    }
}

/// Sound is on by default when no preference has been stored yet.
fn stored_preference() -> bool {
    LocalStorage::get(SOUND_ENABLED_KEY).unwrap_or(true)
}

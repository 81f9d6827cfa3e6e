use crate::sound::{Sound, SoundSettings};

use leptos::*;

#[component]
pub fn SoundToggle(cx: Scope, sound: SoundSettings) -> impl IntoView {
    let enabled = sound.subscribe();

    let icon = Signal::derive(cx, move || {
        if enabled.get() {
            "/icons/volume-2.svg"
        } else {
            "/icons/volume-x.svg"
        }
    });
    let label = Signal::derive(cx, move || {
        if enabled.get() {
            "Mute sounds"
        } else {
            "Unmute sounds"
        }
    });

    view! { cx,
        <button
          class="btn btn-outline-lighter rounded p-2"
          title=move || label.get()
          aria-label=move || label.get()
          on:click=move |_| {
              // Audible only when flipping to enabled; muting stays silent.
              if sound.toggle() {
                  sound.play(Sound::Toggle);
              }
          }
        >
            <img src=move || icon.get() alt="" />
        </button>
    }
}

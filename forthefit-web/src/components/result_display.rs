use crate::sound::{Sound, SoundSettings};
use crate::web_util;
use forthefit_core::tryon::{self, TryOnState, CAPTION_INTERVAL_MS};

use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Renders the try-on result panel: placeholder, loading carousel, error, or
/// the generated image with a download button.
#[component]
pub fn ResultDisplay(cx: Scope, state: RwSignal<TryOnState>, sound: SoundSettings) -> impl IntoView {
    let caption_step = create_rw_signal(cx, 0usize);

    // Set while the caption carousel should keep ticking; cleared when
    // loading ends or the panel is torn down so the task winds down on its
    // next tick.
    let ticking = Rc::new(Cell::new(false));

    create_effect(cx, {
        let ticking = Rc::clone(&ticking);
        move |_| {
            let loading = state.get().is_loading();
            if loading && !ticking.get() {
                ticking.set(true);
                caption_step.update(|s| *s = 0);
                let ticking = Rc::clone(&ticking);
                wasm_bindgen_futures::spawn_local(async move {
                    while ticking.get() {
                        let _ = web_util::sleep(CAPTION_INTERVAL_MS).await;
                        if ticking.get() {
                            caption_step.update(|s| *s += 1);
                        }
                    }
                });
            } else if !loading {
                ticking.set(false);
            }
        }
    });

    on_cleanup(cx, {
        let ticking = Rc::clone(&ticking);
        move || ticking.set(false)
    });

    // The success cue fires once per settled image, not on every re-render
    // of an unchanged Success state.
    let last_settled = Rc::new(RefCell::new(None::<String>));
    create_effect(cx, {
        let last_settled = Rc::clone(&last_settled);
        move |_| match state.get() {
            TryOnState::Success(image) => {
                if last_settled.borrow().as_deref() != Some(image.as_str()) {
                    sound.play(Sound::Success);
                }
                *last_settled.borrow_mut() = Some(image);
            }
            _ => {
                *last_settled.borrow_mut() = None;
            }
        }
    });

    let on_download = move |_| {
        sound.play(Sound::Click);
        if let TryOnState::Success(image) = state.get() {
            let filename = tryon::download_filename(web_util::now_timestamp_ms());
            if let Err(e) = web_util::trigger_download(&image, &filename) {
                log::error!("failed to download generated image: {e:?}");
            }
        }
    };

    view! { cx,
      <div class="result-panel bg-darker rounded d-flex justify-content-center align-items-center p-4 position-relative overflow-hidden">
        {move || match state.get() {
            TryOnState::Loading => view! { cx,
                <div class="d-flex flex-column align-items-center text-fit-light text-center">
                  <img class="result-spinner" src="/icons/loader.svg" alt="" />
                  <p class="mt-4 fs-5 fw-semibold">
                      {move || tryon::loading_caption(caption_step.get())}
                  </p>
                </div>
            }.into_view(cx),
            TryOnState::Error(message) => view! { cx,
                <div class="d-flex flex-column align-items-center text-fit-red text-center p-4">
                  <img class="mb-4" src="/icons/alert-circle.svg" alt="" />
                  <h5 class="fw-bold mb-2">"Oops! Something went wrong."</h5>
                  <p class="small">{message}</p>
                </div>
            }.into_view(cx),
            TryOnState::Success(image) => view! { cx,
                <>
                  <img
                    class="result-image w-100 h-100 rounded"
                    src=image
                    alt="Generated virtual try-on"
                  />
                  <button
                    class="btn btn-fit rounded-circle position-absolute bottom-0 end-0 m-3 p-3"
                    aria-label="Download image"
                    title="Download image"
                    on:click=on_download
                  >
                      <img src="/icons/download.svg" alt="" />
                  </button>
                </>
            }.into_view(cx),
            TryOnState::Empty => view! { cx,
                <div class="text-center text-muted p-4">
                  <img class="mb-3" src="/icons/sparkles.svg" alt="" />
                  <p class="fs-5 fw-semibold text-fit-light mb-1">"Your new look will appear here."</p>
                  <p class="small">"Upload your images and click \"Get The Fit\"."</p>
                </div>
            }.into_view(cx),
        }}
      </div>
    }
}

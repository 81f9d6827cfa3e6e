use crate::components::{result_display::*, uploader::*};
use crate::sound::{Sound, SoundSettings};
use crate::{api, web_util};
use forthefit_core::genai::ImageInput;
use forthefit_core::tryon::{RequestCounter, TryOnError, TryOnState};

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

#[component]
pub fn Tool(cx: Scope, sound: SoundSettings) -> impl IntoView {
    let person_file = create_rw_signal(cx, None::<web_sys::File>);
    let outfit_file = create_rw_signal(cx, None::<web_sys::File>);
    let state = create_rw_signal(cx, TryOnState::default());

    // Tags every dispatched request so the settlement of a superseded one
    // (e.g. reset while in flight) is discarded instead of applied.
    let requests = Rc::new(RefCell::new(RequestCounter::default()));

    let try_on_action = create_action(cx, {
        let requests = Rc::clone(&requests);
        move |_: &()| {
            let requests = Rc::clone(&requests);
            async move {
                let (person, outfit) = match (person_file.get(), outfit_file.get()) {
                    (Some(person), Some(outfit)) => (person, outfit),
                    _ => {
                        state.update(|s| {
                            *s = TryOnState::Error(TryOnError::MissingImages.to_string())
                        });
                        return;
                    }
                };

                let id = requests.borrow_mut().issue();
                state.update(|s| *s = TryOnState::Loading);

                let settled = TryOnState::settled(generate(person, outfit).await);

                if !requests.borrow().is_current(id) {
                    log::debug!("discarding settlement of a superseded try-on request");
                    return;
                }
                state.update(|s| *s = settled);
            }
        }
    });

    let on_generate = move |_| {
        sound.play(Sound::Click);
        try_on_action.dispatch(());
    };

    let on_reset = {
        let requests = Rc::clone(&requests);
        move |_| {
            sound.play(Sound::Click);
            requests.borrow_mut().invalidate();
            person_file.update(|f| *f = None);
            outfit_file.update(|f| *f = None);
            state.update(|s| *s = TryOnState::Empty);
        }
    };

    let generate_disabled = Signal::derive(cx, move || {
        person_file.get().is_none() || outfit_file.get().is_none() || state.get().is_loading()
    });
    let generate_label = Signal::derive(cx, move || {
        if state.get().is_loading() {
            "Generating..."
        } else {
            "Get The Fit"
        }
    });
    let show_reset = Signal::derive(cx, move || {
        person_file.get().is_some() || outfit_file.get().is_some() || !state.get().is_empty()
    });

    view! { cx,
      <section class="container px-4 py-5">
        <div class="text-center mb-5">
          <h3 class="fw-bold text-fit">"Try It Yourself"</h3>
          <p class="text-fit-light mt-2">"Upload your images below to get started."</p>
        </div>
        <div class="row g-4 align-items-start">
          <div class="col-lg-7 order-2 order-lg-1">
            <div class="card bg-darker border-dark p-4">
              <div class="row row-cols-1 row-cols-md-2 g-4">
                <div class="col">
                  <Uploader
                    title="Your Image"
                    description="A clear, full-body photo of you."
                    hint="9:16 portrait"
                    file=person_file
                    sound
                  />
                </div>
                <div class="col">
                  <Uploader
                    title="Outfit Image"
                    description="A photo of the clothing item."
                    hint="1:1 square"
                    file=outfit_file
                    sound
                  />
                </div>
              </div>
              <div class="d-flex flex-column flex-sm-row justify-content-center gap-3 mt-4">
                <button
                  class="btn btn-fit rounded px-5 py-2 fw-bold"
                  prop:disabled=move || generate_disabled.get()
                  on:click=on_generate
                >
                    {move || generate_label.get()}
                </button>
                <Show
                  when=move || show_reset.get()
                  fallback=|cx| view! { cx, <></> }
                >
                  <button
                    class="btn btn-outline-lighter rounded px-5 py-2"
                    on:click=on_reset.clone()
                  >
                      "Reset"
                  </button>
                </Show>
              </div>
            </div>
          </div>
          <div class="col-lg-5 order-1 order-lg-2">
            <div class="card bg-darker border-dark p-4">
              <ResultDisplay state sound />
            </div>
          </div>
        </div>
      </section>
    }
}

/// Reads both slot files and invokes the generation capability exactly once.
/// Every failure carries a human-readable reason for the result panel.
async fn generate(person: web_sys::File, outfit: web_sys::File) -> Result<String, TryOnError> {
    let api = api::TryOnApi::from_env().map_err(|e| {
        log::error!("try-on unavailable: {e}");
        TryOnError::generation(Some(e.to_string()))
    })?;

    let person = read_image(person).await?;
    let outfit = read_image(outfit).await?;

    api.generate_try_on(&person, &outfit).await.map_err(|e| {
        log::error!("try-on generation failed: {e}");
        TryOnError::generation(Some(e.to_string()))
    })
}

async fn read_image(file: web_sys::File) -> Result<ImageInput, TryOnError> {
    let mime_type = match file.type_() {
        t if t.is_empty() => "image/png".to_string(),
        t => t,
    };
    match web_util::read_file(file).await {
        Ok(data) => Ok(ImageInput::new(data, mime_type)),
        Err(e) => {
            log::error!("failed to read selected image: {e:?}");
            Err(TryOnError::generation(None))
        }
    }
}

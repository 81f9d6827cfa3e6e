use crate::sound::{Sound, SoundSettings};
use crate::web_util;

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

/// A single-image selection slot with preview, remove button and
/// drag-and-drop. The selected file itself lives in the `file` signal owned
/// by the tool page; this component owns the derived preview handle.
#[component]
pub fn Uploader(
    cx: Scope,
    title: &'static str,
    description: &'static str,
    hint: &'static str,
    file: RwSignal<Option<web_sys::File>>,
    sound: SoundSettings,
) -> impl IntoView {
    let preview = create_rw_signal(cx, None::<String>);
    let is_dragging = create_rw_signal(cx, false);

    // At most one object URL alive per slot; the previous handle is revoked
    // whenever the content changes and once more on teardown.
    let live_url = Rc::new(RefCell::new(None::<String>));

    create_effect(cx, {
        let live_url = Rc::clone(&live_url);
        move |_| {
            let next = file.get().as_ref().and_then(web_util::create_preview_url);
            if let Some(old) = live_url.borrow_mut().take() {
                web_util::revoke_preview_url(&old);
            }
            *live_url.borrow_mut() = next.clone();
            preview.update(|p| *p = next);
        }
    });

    on_cleanup(cx, {
        let live_url = Rc::clone(&live_url);
        move || {
            if let Some(old) = live_url.borrow_mut().take() {
                web_util::revoke_preview_url(&old);
            }
        }
    });

    let frame_class = Signal::derive(cx, move || {
        if is_dragging.get() {
            "uploader-frame uploader-frame-dragging d-flex flex-column justify-content-center align-items-center text-center p-2 w-100 position-relative overflow-hidden"
        } else {
            "uploader-frame d-flex flex-column justify-content-center align-items-center text-center p-2 w-100 position-relative overflow-hidden"
        }
    });

    view! { cx,
      <div class="d-flex flex-column align-items-center">
        <h5 class="text-fit-light mb-2">{title}</h5>
        <label
          class=move || frame_class.get()
          on:dragover=move |ev: ev::DragEvent| {
              ev.prevent_default();
              ev.stop_propagation();
              is_dragging.update(|d| *d = true);
          }
          on:dragenter=move |ev: ev::DragEvent| {
              ev.prevent_default();
              ev.stop_propagation();
              is_dragging.update(|d| *d = true);
          }
          on:dragleave=move |ev: ev::DragEvent| {
              ev.prevent_default();
              ev.stop_propagation();
              is_dragging.update(|d| *d = false);
          }
          on:drop=move |ev: ev::DragEvent| {
              ev.prevent_default();
              ev.stop_propagation();
              is_dragging.update(|d| *d = false);
              if let Some(dropped) = web_util::extract_file_from_drop(ev) {
                  file.update(|f| *f = Some(dropped));
                  sound.play(Sound::Upload);
              }
          }
        >
          {move || match preview.get() {
              Some(url) => view! { cx,
                  <>
                    <img
                      class="uploader-preview position-absolute top-0 start-0 w-100 h-100"
                      src=url
                      alt="Preview"
                    />
                    <button
                      class="btn btn-sm btn-outline-lighter rounded-circle position-absolute top-0 end-0 m-2"
                      aria-label="Remove image"
                      on:click=move |ev: ev::MouseEvent| {
                          ev.prevent_default();
                          ev.stop_propagation();
                          file.update(|f| *f = None);
                          sound.play(Sound::Click);
                      }
                    >
                        <img src="/icons/x.svg" alt="" />
                    </button>
                  </>
              }.into_view(cx),
              None => view! { cx,
                  <div class="pe-none">
                    <img class="mb-2" src="/icons/upload.svg" alt="" />
                    <p class="fw-semibold text-fit-light mb-0">"Click to upload or drag & drop"</p>
                    <p class="small text-muted mb-0">{description}</p>
                    <p class="small text-muted mb-0">"Tip: "{hint}" photo works best."</p>
                  </div>
              }.into_view(cx),
          }}
          <input
            class="d-none"
            type="file"
            accept="image/*"
            on:change=move |ev: ev::Event| {
                let selected = web_util::extract_file_from_html_input(ev);
                let has_file = selected.is_some();
                file.update(|f| *f = selected);
                if has_file {
                    sound.play(Sound::Upload);
                }
            }
          />
        </label>
      </div>
    }
}

use crate::pages::{self, Page};
use crate::sound::{Sound, SoundSettings};

use leptos::*;

#[component]
pub fn FooterLink(cx: Scope, page: Page, sound: SoundSettings) -> impl IntoView {
    view! { cx,
        <button
          class="btn btn-link text-fit-light text-decoration-none"
          on:click=move |_| {
              sound.play(Sound::Click);
              pages::goto_page(cx, page);
          }
        >
            {page.nav_display()}
        </button>
    }
}

#[component]
pub fn Footer(cx: Scope, sound: SoundSettings) -> impl IntoView {
    let links: Vec<_> = Page::footer_pages()
        .iter()
        .map(|&page| view! { cx, <FooterLink page sound /> }.into_view(cx))
        .collect();

    view! { cx,
      <footer class="text-center py-5 border-top border-dark mt-5">
        <p class="fs-5 fw-bold text-white mb-1">"For The Fit"</p>
        <div class="d-flex justify-content-center flex-wrap gap-2 my-2">
            { links }
        </div>
        <p class="text-fit-light small">"Powered by generative AI. All rights reserved."</p>
      </footer>
    }
}

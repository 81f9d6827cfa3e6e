use crate::components::sound_toggle::*;
use crate::pages::{self, Page, Section};
use crate::sound::{Sound, SoundSettings};

use leptos::*;

#[component]
pub fn SectionLink(cx: Scope, page: Page, section: Section, sound: SoundSettings) -> impl IntoView {
    view! { cx,
        <li class="nav-item">
          <button
            class="btn btn-link nav-link text-light"
            on:click=move |_| {
                sound.play(Sound::Click);
                pages::goto_section(cx, page, section);
            }
          >
              {section.nav_display()}
          </button>
        </li>
    }
}

#[component]
pub fn NavBar(cx: Scope, page: Page, sound: SoundSettings) -> impl IntoView {
    let section_links: Vec<_> = Section::nav_sections()
        .iter()
        .map(|&section| view! { cx, <SectionLink page section sound /> }.into_view(cx))
        .collect();

    view! { cx,
      <header class="sticky-top border-bottom border-dark bg-darker shadow-sm">
        <nav class="container d-flex justify-content-between align-items-center py-2 px-4">
          <button
            class="btn btn-link text-decoration-none text-start p-0"
            aria-label="Navigate to home page"
            on:click=move |_| {
                sound.play(Sound::Click);
                pages::goto_page(cx, Page::Home);
            }
          >
              <span class="fs-4 fw-bold font-monospace text-white">"For The "<span class="text-fit">"Fit"</span></span>
              <p class="text-fit-light small mb-0">"AI Virtual Try-on"</p>
          </button>

          <ul class="nav d-none d-md-flex align-items-center">
              { section_links }
          </ul>

          <div class="d-flex align-items-center gap-3">
            <SoundToggle sound />
            <button
              class="btn btn-fit rounded px-4"
              on:click=move |_| {
                  sound.play(Sound::Click);
                  pages::goto_page(cx, Page::Tool);
              }
            >
                {Page::Tool.nav_display()}
            </button>
          </div>
        </nav>
      </header>
    }
}

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod api;
mod components;
mod pages;
mod sound;
mod web_util;

use components::{cursor::*, footer::*, navbar::*, status_message::Message};
use pages::*;
use sound::SoundSettings;

#[component]
pub fn App(cx: Scope) -> impl IntoView {
    provide_meta_context(cx);

    // -- signals -- //

    let sound = SoundSettings::load(cx);
    let global_message = create_rw_signal(cx, Message::Empty);
    let subtitle = create_rw_signal(cx, None::<String>);
    let title = Signal::derive(cx, move || {
        if let Some(subtitle) = subtitle.get() {
            format!("For The Fit - {subtitle}")
        } else {
            format!("For The Fit")
        }
    });

    // Fades the whole shell in on first mount.
    let is_ready = create_rw_signal(cx, false);
    create_effect(cx, move |_| {
        is_ready.update(|r| *r = true);
    });
    let shell_class = Signal::derive(cx, move || {
        if is_ready.get() {
            "app-shell bg-dark text-white min-vh-100 app-shell-ready"
        } else {
            "app-shell bg-dark text-white min-vh-100"
        }
    });

    view! { cx,
          <Link rel="icon" sizes="16x16 32x32 96x96 180x180 256x256 512x512" href="/favicon.ico" />
          <Title text=move || title.get() />
          <Router>
            <div class=move || shell_class.get()>
              <CustomCursor />
              <main>
                <Routes>
                  <Route
                    path=Page::Home.raw_path()
                    view=move |cx| {
                        subtitle.update(|sub| *sub = Some(Page::Home.title().into()));
                        view! { cx,
                          <NavBar page=Page::Home sound />
                          <Home global_message sound />
                          <Footer sound />
                        }.into_view(cx)
                    }
                  />
                  <Route
                    path=Page::Tool.raw_path()
                    view=move |cx| {
                        subtitle.update(|sub| *sub = Some(Page::Tool.title().into()));
                        view! { cx,
                          <NavBar page=Page::Tool sound />
                          <Tool sound />
                          <Footer sound />
                        }.into_view(cx)
                    }
                  />
                  <Route
                    path=Page::About.raw_path()
                    view=move |cx| {
                        subtitle.update(|sub| *sub = Some(Page::About.title().into()));
                        view! { cx,
                          <NavBar page=Page::About sound />
                          <About />
                          <Footer sound />
                        }.into_view(cx)
                    }
                  />
                  <Route
                    path=Page::Contact.raw_path()
                    view=move |cx| {
                        subtitle.update(|sub| *sub = Some(Page::Contact.title().into()));
                        view! { cx,
                          <NavBar page=Page::Contact sound />
                          <Contact />
                          <Footer sound />
                        }.into_view(cx)
                    }
                  />
                  <Route
                    path=Page::Privacy.raw_path()
                    view=move |cx| {
                        subtitle.update(|sub| *sub = Some(Page::Privacy.title().into()));
                        view! { cx,
                          <NavBar page=Page::Privacy sound />
                          <PrivacyPolicy />
                          <Footer sound />
                        }.into_view(cx)
                    }
                  />
                  <Route
                    path=Page::Terms.raw_path()
                    view=move |cx| {
                        subtitle.update(|sub| *sub = Some(Page::Terms.title().into()));
                        view! { cx,
                          <NavBar page=Page::Terms sound />
                          <TermsOfService />
                          <Footer sound />
                        }.into_view(cx)
                    }
                  />
                  <Route
                    path="*"
                    view=move |cx| {
                        subtitle.update(|sub| *sub = Some("404".into()));
                        global_message.update(|m| *m = Message::Error("Oh my 404! The page you're looking for doesn't exist so I brought you back home ;)".into()));
                        view! { cx,
                          <NavBar page=Page::Home sound />
                          <Home global_message sound />
                          <Footer sound />
                        }.into_view(cx)
                    }
                  />
                </Routes>
              </main>
            </div>
          </Router>
        }
}

use crate::components::status_message::*;
use crate::pages::{self, Page, Section};
use crate::sound::{Sound, SoundSettings};

use leptos::*;

#[component]
pub fn Home(cx: Scope, global_message: RwSignal<Message>, sound: SoundSettings) -> impl IntoView {
    view! { cx,
      <div class="container px-4">
        <StatusMessage message=global_message />
        <Hero sound />
        <HowItWorks />
        <Features />
        <Faq sound />
      </div>
    }
}

#[component]
fn Hero(cx: Scope, sound: SoundSettings) -> impl IntoView {
    view! { cx,
      <section class="text-center py-5 my-5">
        <h2 class="display-4 fw-bold text-white">"See Yourself in Any Outfit."</h2>
        <p class="fs-5 text-fit-light mx-auto hero-lead">
            "Stop guessing. Start seeing. Our AI-powered tool lets you virtually try on \
             clothes from any store, using just your photo. Experience the future of shopping."
        </p>
        <button
          class="btn btn-fit btn-lg rounded px-5 py-3 mt-4 fw-bold"
          on:click=move |_| {
              sound.play(Sound::Click);
              pages::goto_page(cx, Page::Tool);
          }
        >
            "Try It Now"
        </button>
      </section>
    }
}

#[component]
fn StepCard(cx: Scope, icon: &'static str, title: &'static str, body: &'static str) -> impl IntoView {
    view! { cx,
      <div class="col">
        <div class="card bg-darker border-dark h-100 p-4 text-center">
          <div class="step-icon rounded-circle mx-auto mb-3 d-flex justify-content-center align-items-center">
              <img src=icon alt="" />
          </div>
          <h5 class="fw-semibold mb-2">{title}</h5>
          <p class="text-fit-light">{body}</p>
        </div>
      </div>
    }
}

#[component]
fn HowItWorks(cx: Scope) -> impl IntoView {
    view! { cx,
      <section id=Section::HowItWorks.id() class="py-5">
        <div class="text-center mb-5">
          <h3 class="fw-bold">"How It Works"</h3>
          <p class="text-fit-light mt-2">"Get your new look in three simple steps."</p>
        </div>
        <div class="row row-cols-1 row-cols-md-3 g-4">
          <StepCard
            icon="/icons/image.svg"
            title="1. Upload Your Photo"
            body="Choose a clear, full-body photo of yourself."
          />
          <StepCard
            icon="/icons/shopping-bag.svg"
            title="2. Upload an Outfit"
            body="Provide an image of the clothing item you want to try."
          />
          <StepCard
            icon="/icons/sparkles.svg"
            title="3. Get Your Fit"
            body="Our AI generates a realistic image of you in the new outfit."
          />
        </div>
      </section>
    }
}

#[component]
fn FeatureCard(cx: Scope, icon: &'static str, title: &'static str, body: &'static str) -> impl IntoView {
    view! { cx,
      <div class="col">
        <div class="card bg-darker border-dark h-100 p-4 d-flex flex-row align-items-start gap-3">
          <div class="feature-icon rounded d-flex justify-content-center align-items-center flex-shrink-0">
              <img src=icon alt="" />
          </div>
          <div>
            <h5 class="fw-semibold mb-2">{title}</h5>
            <p class="text-fit-light mb-0">{body}</p>
          </div>
        </div>
      </div>
    }
}

#[component]
fn Features(cx: Scope) -> impl IntoView {
    view! { cx,
      <section id=Section::Features.id() class="py-5">
        <div class="text-center mb-5">
          <h3 class="fw-bold">"The Future of Fashion is Here"</h3>
          <p class="text-fit-light mt-2">"Discover a new way to shop and express yourself."</p>
        </div>
        <div class="row row-cols-1 row-cols-md-2 g-4">
          <FeatureCard
            icon="/icons/eye.svg"
            title="Visualize Before You Buy"
            body="No more wondering \"how would that look on me?\". Get a realistic preview \
                  and shop with confidence."
          />
          <FeatureCard
            icon="/icons/layers.svg"
            title="Explore Styles Instantly"
            body="Experiment with different looks and discover new brands without leaving \
                  your home. Your next favorite outfit is just an upload away."
          />
          <FeatureCard
            icon="/icons/cpu.svg"
            title="Powered by Advanced AI"
            body="We use state-of-the-art generative AI to ensure results are realistic, \
                  detailed, and true to your form."
          />
          <FeatureCard
            icon="/icons/lock.svg"
            title="Private and Secure"
            body="Your privacy is paramount. Images are processed securely and are never \
                  stored or shared."
          />
        </div>
      </section>
    }
}

#[component]
fn FaqItem(
    cx: Scope,
    question: &'static str,
    answer: &'static str,
    sound: SoundSettings,
) -> impl IntoView {
    let is_open = create_rw_signal(cx, false);

    let chevron_class = Signal::derive(cx, move || {
        if is_open.get() {
            "faq-chevron faq-chevron-open"
        } else {
            "faq-chevron"
        }
    });

    view! { cx,
      <div class="border-bottom border-dark">
        <button
          class="btn btn-link text-decoration-none text-white w-100 d-flex justify-content-between align-items-center text-start py-3"
          aria-expanded=move || is_open.get().to_string()
          on:click=move |_| {
              sound.play(Sound::Click);
              is_open.update(|o| *o = !*o);
          }
        >
          <span class="fw-semibold fs-6">{question}</span>
          <img class=move || chevron_class.get() src="/icons/chevron-down.svg" alt="" />
        </button>
        {move || {
            if is_open.get() {
                view! { cx, <p class="text-fit-light pb-3 mb-0">{answer}</p> }.into_view(cx)
            } else {
                view! { cx, <></> }.into_view(cx)
            }
        }}
      </div>
    }
}

#[component]
fn Faq(cx: Scope, sound: SoundSettings) -> impl IntoView {
    view! { cx,
      <section id=Section::Faq.id() class="py-5">
        <div class="text-center mb-5">
          <h3 class="fw-bold">"Frequently Asked Questions"</h3>
        </div>
        <div class="card bg-darker border-dark mx-auto p-4 faq-card">
          <FaqItem
            sound
            question="What kind of photos work best?"
            answer="For best results, use a clear, well-lit, full-body photo of yourself \
                    where your pose is relatively simple. For the clothing, use a clear \
                    photo of the item on a plain background, like a product photo from a \
                    store."
          />
          <FaqItem
            sound
            question="Are my photos stored on your servers?"
            answer="No. Your privacy is our top priority. Your images are sent to the AI \
                    model for processing and are not stored or used for any other purpose. \
                    The generated image is available for you to download, and then it's \
                    gone."
          />
          <FaqItem
            sound
            question="How accurate is the virtual try-on?"
            answer="Our AI is highly advanced and does an excellent job of realistically \
                    draping the clothing onto your photo, matching your body shape, and \
                    adjusting for lighting. While it's a very realistic simulation, it's \
                    intended for style visualization, not as a perfect sizing tool."
          />
          <FaqItem
            sound
            question="Can I use any type of clothing?"
            answer="Currently, the tool works best with single items like shirts, dresses, \
                    jackets, and pants. Complex layered outfits or accessories might \
                    produce less predictable results. We're constantly working to improve \
                    the AI's capabilities!"
          />
        </div>
      </section>
    }
}

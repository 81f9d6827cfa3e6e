use crate::pages::Page;

use leptos::*;

#[component]
fn ContentPage(cx: Scope, page: Page, body: View) -> impl IntoView {
    view! { cx,
      <section class="container px-4 py-5">
        <div class="card bg-darker border-dark mx-auto p-5 content-card">
          <h2 class="fw-bold text-fit mb-4">{page.title()}</h2>
          <div class="text-fit-light content-prose">
              {body}
          </div>
        </div>
      </section>
    }
}

#[component]
pub fn About(cx: Scope) -> impl IntoView {
    let body = view! { cx,
      <>
        <p>"Welcome to For The Fit, where fashion meets the future. We are a passionate team \
            of developers, designers, and fashion enthusiasts dedicated to revolutionizing \
            the way you shop for clothes."</p>

        <h5>"Our Mission"</h5>
        <p>"Our mission is simple: to eliminate the guesswork and uncertainty of online \
            shopping. We believe that everyone should be able to shop with confidence, \
            knowing exactly how an outfit will look on them before they buy. By harnessing \
            the power of artificial intelligence, we're making that vision a reality."</p>

        <h5>"The Technology"</h5>
        <p>"For The Fit is powered by state-of-the-art generative AI. When you upload your \
            photo and an image of a clothing item, our advanced algorithms analyze your \
            body shape, pose, and the garment's texture, drape, and fit. It then generates \
            a new, photorealistic image showing you wearing the outfit in stunning detail. \
            This isn't just a simple overlay; it's a sophisticated simulation designed to \
            provide the most realistic virtual try-on experience possible."</p>

        <h5>"Our Story"</h5>
        <p>"The idea for For The Fit was born from a shared frustration with online \
            shopping: the hassle of returns, the disappointment of items not fitting as \
            expected, and the inability to visualize styles. We knew there had to be a \
            better way. We assembled a team dedicated to solving this problem, and after \
            countless hours of research, development, and training our AI models, For The \
            Fit was launched."</p>
        <p>"We are continuously working to improve our technology and expand our features. \
            Thank you for joining us on this journey to create a smarter, more \
            personalized, and more enjoyable shopping experience for everyone."</p>
      </>
    }
    .into_view(cx);

    view! { cx, <ContentPage page=Page::About body /> }
}

#[component]
pub fn Contact(cx: Scope) -> impl IntoView {
    let body = view! { cx,
      <>
        <p>"We'd love to hear from you! Whether you have a question, feedback, or a \
            partnership inquiry, please don't hesitate to reach out."</p>

        <h5>"General Inquiries"</h5>
        <p>"For general questions or feedback about our tool, please email us at: "
           <a class="text-fit" href="mailto:hello@forthefit.com">"hello@forthefit.com"</a>"."</p>

        <h5>"Support"</h5>
        <p>"If you're experiencing technical issues or need help using the virtual try-on \
            tool, please contact our support team at: "
           <a class="text-fit" href="mailto:support@forthefit.com">"support@forthefit.com"</a>"."</p>

        <h5>"Business & Press"</h5>
        <p>"For all business development, partnership, and press inquiries, please \
            contact: "
           <a class="text-fit" href="mailto:press@forthefit.com">"press@forthefit.com"</a>"."</p>

        <p>"We do our best to respond to all inquiries within 48 business hours."</p>
      </>
    }
    .into_view(cx);

    view! { cx, <ContentPage page=Page::Contact body /> }
}

#[component]
pub fn PrivacyPolicy(cx: Scope) -> impl IntoView {
    let body = view! { cx,
      <>
        <p>"Your privacy is critically important to us. This Privacy Policy outlines how \
            For The Fit handles your information."</p>

        <h5>"1. Information We Do Not Collect or Store"</h5>
        <p>"We have designed our service with your privacy as a top priority. We do not \
            collect, store, or share any personally identifiable information. \
            Specifically:"</p>
        <ul>
          <li><strong>"Uploaded Images: "</strong>"The photos you upload (of yourself and \
              clothing items) are processed in memory by our AI model to generate the \
              try-on image. They are never saved to our servers or any permanent storage. \
              They are discarded immediately after the generation process is complete."</li>
          <li><strong>"Generated Images: "</strong>"The final try-on image we generate is \
              provided to you for download. We do not store this image."</li>
          <li><strong>"Personal Data: "</strong>"We do not require you to create an \
              account, and therefore we do not collect names, email addresses, or any \
              other personal data."</li>
        </ul>

        <h5>"2. How We Use Your Images"</h5>
        <p>"The images you provide are used for the sole purpose of creating the virtual \
            try-on result. They are not used for AI model training, marketing, or any \
            other purpose."</p>

        <h5>"3. Cookies and Analytics"</h5>
        <p>"We may use anonymous analytics tools to understand website traffic and usage \
            patterns. This data is aggregated and cannot be used to identify individual \
            users. We do not use tracking cookies that collect personal information."</p>

        <h5>"4. Changes to This Policy"</h5>
        <p>"We may update this Privacy Policy from time to time. We will notify you of any \
            changes by posting the new Privacy Policy on this page. We encourage you to \
            review this Privacy Policy periodically for any changes."</p>

        <p>"If you have any questions about this Privacy Policy, please contact us at "
           <a class="text-fit" href="mailto:privacy@forthefit.com">"privacy@forthefit.com"</a>"."</p>
      </>
    }
    .into_view(cx);

    view! { cx, <ContentPage page=Page::Privacy body /> }
}

#[component]
pub fn TermsOfService(cx: Scope) -> impl IntoView {
    let body = view! { cx,
      <>
        <p>"By using the For The Fit website and its AI virtual try-on tool, you agree to \
            these Terms of Service."</p>

        <h5>"1. Use of Service"</h5>
        <p>"You agree to use our service for its intended purpose of virtually trying on \
            clothing. You agree not to upload any content that is illegal, harmful, \
            offensive, or infringing on the rights of others."</p>

        <h5>"2. Intellectual Property"</h5>
        <p>"You retain all rights to the images you upload. By uploading them, you grant \
            us a temporary, non-exclusive license to process them for the sole purpose of \
            generating your virtual try-on image. We claim no ownership over your content \
            or the generated result."</p>

        <h5>"3. Disclaimer of Warranties"</h5>
        <p>"The service is provided \"as is\". While our AI is highly advanced, the \
            virtual try-on is a simulation and should be used for style visualization \
            purposes only. We do not guarantee perfect accuracy in fit or sizing. We make \
            no warranties, express or implied, regarding the service's reliability, \
            accuracy, or availability."</p>

        <h5>"4. Limitation of Liability"</h5>
        <p>"In no event shall For The Fit or its developers be liable for any direct, \
            indirect, incidental, or consequential damages arising out of the use or \
            inability to use the service."</p>

        <h5>"5. Changes to These Terms"</h5>
        <p>"We reserve the right to modify these terms at any time. Your continued use of \
            the service after any such changes constitutes your acceptance of the new \
            terms."</p>
      </>
    }
    .into_view(cx);

    view! { cx, <ContentPage page=Page::Terms body /> }
}

pub mod content;
pub mod home;
pub mod tool;

pub use self::{content::*, home::*, tool::*};

use crate::web_util;

use leptos::*;
use leptos_router::{use_navigate, NavigationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Tool,
    About,
    Contact,
    Privacy,
    Terms,
}

impl Page {
    pub fn raw_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Tool => "/tool",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Privacy => "/privacy",
            Self::Terms => "/terms",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Tool => "Virtual Try-on",
            Self::About => "About Us",
            Self::Contact => "Contact Us",
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Service",
        }
    }

    pub fn nav_display(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Tool => "Try Now",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Privacy => "Privacy Policy",
            Self::Terms => "Terms of Service",
        }
    }

    pub fn footer_pages() -> &'static [Page] {
        &[Self::About, Self::Contact, Self::Privacy, Self::Terms]
    }
}

impl AsRef<str> for Page {
    fn as_ref(&self) -> &str {
        self.raw_path()
    }
}

/// Scroll anchors on the home page, linked from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    HowItWorks,
    Features,
    Faq,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Self::HowItWorks => "how-it-works",
            Self::Features => "features",
            Self::Faq => "faq",
        }
    }

    pub fn nav_display(&self) -> &'static str {
        match self {
            Self::HowItWorks => "How It Works",
            Self::Features => "Features",
            Self::Faq => "FAQ",
        }
    }

    pub fn nav_sections() -> &'static [Section] {
        &[Self::HowItWorks, Self::Features, Self::Faq]
    }
}

pub fn goto(cx: Scope, page: impl AsRef<str>) -> Result<(), NavigationError> {
    let navigate = use_navigate(cx);
    navigate(page.as_ref(), Default::default())
}

/// Navigates to `page` and scrolls back to the top, the way a full page load
/// would.
pub fn goto_page(cx: Scope, page: Page) {
    if let Err(e) = goto(cx, page) {
        log::error!("navigation to {page:?} failed: {e}");
        return;
    }
    web_util::scroll_to_top();
}

/// Smooth-scrolls to a home-page section, navigating home first when invoked
/// from another page. The short delay lets the home page render before the
/// anchor is looked up.
pub fn goto_section(cx: Scope, current: Page, section: Section) {
    if current != Page::Home {
        if let Err(e) = goto(cx, Page::Home) {
            log::error!("navigation to {section:?} failed: {e}");
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let _ = web_util::sleep(100).await;
            web_util::scroll_to_element(section.id());
        });
    } else {
        web_util::scroll_to_element(section.id());
    }
}

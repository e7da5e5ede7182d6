use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod config;
mod content;
mod icons;
mod booking {
    pub mod cycle;
    pub mod form;
    pub mod sink;
}
mod state {
    pub mod nav;
    pub mod scroll;
}
mod components {
    pub mod nav;
    pub mod whatsapp_button;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod services;
    pub mod stats;
    pub mod testimonials;
    pub mod why_us;
}
mod pages {
    pub mod home;
}

use components::{nav::Nav, whatsapp_button::WhatsAppButton};
use config::SiteConfig;
use pages::home::Home;
use sections::footer::Footer;

fn load_site_config() -> SiteConfig {
    match SiteConfig::load() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid site.json, using built-in defaults: {}", err);
            SiteConfig::default()
        }
    }
}

#[function_component]
fn App() -> Html {
    let config = use_memo(|_| load_site_config(), ());

    html! {
        <ContextProvider<Rc<SiteConfig>> context={config}>
            <Nav />
            <Home />
            <Footer />
            <WhatsAppButton />
        </ContextProvider<Rc<SiteConfig>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting site");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Section;

    #[function_component]
    fn ServicesOnly() -> Html {
        let config = Rc::new(SiteConfig {
            phone: config::Phone {
                display: "082 555 0101".to_string(),
                international: "+27825550101".to_string(),
            },
            whatsapp: false,
            sections: vec![Section::Services, Section::Contact],
            ..SiteConfig::default()
        });
        html! {
            <ContextProvider<Rc<SiteConfig>> context={config}>
                <Nav />
                <Home />
                <Footer />
                <WhatsAppButton />
            </ContextProvider<Rc<SiteConfig>>>
        }
    }

    #[tokio::test]
    async fn full_page_renders_every_section() {
        let html = yew::ServerRenderer::<App>::new().render().await;

        for anchor in ["id=\"about\"", "id=\"services\"", "id=\"gallery\"", "id=\"testimonials\"", "id=\"contact\""] {
            assert!(html.contains(anchor), "missing {anchor}");
        }
        assert!(html.contains("Expert Plumbing in Ferndale"));
        assert!(html.contains("Years Experience"));
        assert!(html.contains("Michael van der Merwe"));
        assert!(html.contains("Request Appointment"));
        assert!(html.contains("name=\"date\""));
        assert!(!html.contains(" min=\""));
        assert!(!html.contains("Request Sent!"));
        assert!(html.contains("tel:+27832321233"));
        assert!(html.contains("https://wa.me/27832321233"));
    }

    #[tokio::test]
    async fn menu_starts_closed() {
        let html = yew::ServerRenderer::<App>::new().render().await;
        assert!(html.contains("class=\"top-nav\""));
        assert!(!html.contains("<div class=\"mobile-menu\">"));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[tokio::test]
    async fn disabled_sections_are_skipped() {
        let html = yew::ServerRenderer::<ServicesOnly>::new().render().await;

        assert!(html.contains("id=\"services\""));
        assert!(html.contains("id=\"contact\""));
        assert!(!html.contains("id=\"gallery\""));
        assert!(!html.contains("What Our Clients Say"));
        assert!(!html.contains("wa.me"));
        assert!(html.contains("tel:+27825550101"));
    }
}

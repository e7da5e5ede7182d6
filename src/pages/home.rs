use yew::prelude::*;

use crate::config::{use_site_config, Section};
use crate::sections::{
    about::About, contact::Contact, gallery::Gallery, hero::Hero, services::Services, stats::Stats,
    testimonials::Testimonials, why_us::WhyUs,
};

// Shared layout and type styles used across every section.
const BASE_CSS: &str = r#"
    body {
        margin: 0;
        font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #0f172a;
        background: #fff;
    }
    ::selection { background: #dbeafe; color: #1e3a8a; }
    html { scroll-behavior: smooth; }
    .container {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        position: relative;
        width: 100%;
        box-sizing: border-box;
    }
    .section { padding: 6rem 0; background: #fff; }
    .section-intro {
        text-align: center;
        max-width: 48rem;
        margin: 0 auto 4rem;
    }
    .section-intro p, .section-lead {
        font-size: 1.125rem;
        color: #475569;
        line-height: 1.7;
    }
    .section-title {
        font-size: 2.25rem;
        font-weight: 700;
        color: #0f172a;
        letter-spacing: -0.025em;
        line-height: 1.1;
        margin: 0 0 1.5rem;
    }
    .accent-text { color: #2563eb; }
    .stat-value {
        font-size: 1.875rem;
        font-weight: 700;
        color: #0f172a;
        margin-bottom: 0.25rem;
    }
    .stat-label {
        font-size: 0.875rem;
        color: #64748b;
        font-weight: 500;
        text-transform: uppercase;
        letter-spacing: 0.05em;
    }
    .eyebrow {
        display: block;
        color: #2563eb;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 0.2em;
        font-size: 0.75rem;
        margin-bottom: 1.5rem;
    }
    .btn {
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        padding: 1rem 2rem;
        border-radius: 9999px;
        font-weight: 700;
        font-size: 1.125rem;
        text-decoration: none;
        transition: all 0.2s;
    }
    .btn .icon { width: 1.25rem; height: 1.25rem; }
    .btn-primary {
        background: #2563eb;
        color: #fff;
        box-shadow: 0 20px 25px -5px rgba(37, 99, 235, 0.3);
    }
    .btn-primary:hover { background: #1d4ed8; }
    .btn-glass {
        background: rgba(255, 255, 255, 0.1);
        color: #fff;
        border: 1px solid rgba(255, 255, 255, 0.2);
        backdrop-filter: blur(12px);
    }
    .btn-glass:hover { background: rgba(255, 255, 255, 0.2); }
    .stars { display: flex; gap: 0.125rem; }
    .stars .icon { width: 1rem; height: 1rem; }
    .stars-gold { color: #facc15; }
    @keyframes riseIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @media (min-width: 768px) {
        .section-title { font-size: 3rem; }
    }
"#;

fn render_section(section: Section) -> Html {
    match section {
        Section::Hero => html! { <Hero /> },
        Section::Stats => html! { <Stats /> },
        Section::About => html! { <About /> },
        Section::Services => html! { <Services /> },
        Section::WhyUs => html! { <WhyUs /> },
        Section::Gallery => html! { <Gallery /> },
        Section::Testimonials => html! { <Testimonials /> },
        Section::Contact => html! { <Contact /> },
    }
}

/// Every enabled section, top to bottom, in the fixed page order.
#[function_component(Home)]
pub fn home() -> Html {
    let config = use_site_config();

    html! {
        <main>
            <style>{BASE_CSS}</style>
            { for Section::ALL
                .into_iter()
                .filter(|section| config.is_enabled(*section))
                .map(render_section) }
        </main>
    }
}

use yew::prelude::*;

use crate::config::use_site_config;
use crate::content::SERVICES;
use crate::icons::{Icon, SvgIcon};

#[function_component(Services)]
pub fn services() -> Html {
    let config = use_site_config();

    html! {
        <section id="services" class="section services">
            <style>
                {r#"
                    .services { background: #f8fafc; }
                    .service-grid {
                        display: grid;
                        gap: 2rem;
                    }
                    .service-card {
                        position: relative;
                        overflow: hidden;
                        background: #fff;
                        padding: 2.5rem;
                        border-radius: 2.5rem;
                        border: 1px solid #e2e8f0;
                        box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                        transition: transform 0.3s ease;
                    }
                    .service-card:hover { transform: translateY(-10px); }
                    .service-card::before {
                        content: "";
                        position: absolute;
                        top: -2.5rem;
                        right: -2.5rem;
                        width: 8rem;
                        height: 8rem;
                        background: #f8fafc;
                        border-bottom-left-radius: 9999px;
                        transition: transform 0.3s;
                    }
                    .service-card:hover::before { transform: scale(1.1); }
                    .service-tile {
                        position: relative;
                        width: 5rem;
                        height: 5rem;
                        border-radius: 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 2rem;
                    }
                    .service-tile .icon { width: 2rem; height: 2rem; }
                    .service-card h3 {
                        position: relative;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #0f172a;
                        margin: 0 0 1rem;
                    }
                    .service-card p {
                        position: relative;
                        color: #475569;
                        line-height: 1.7;
                        margin: 0 0 2rem;
                    }
                    .quote-link {
                        position: relative;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #2563eb;
                        font-weight: 900;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        text-decoration: none;
                        transition: gap 0.2s;
                    }
                    .quote-link:hover { gap: 1rem; }
                    .quote-link .icon { width: 1rem; height: 1rem; }
                    .accent-blue { border-color: #dbeafe; }
                    .accent-blue .service-tile { background: #eff6ff; color: #2563eb; }
                    .accent-orange { border-color: #ffedd5; }
                    .accent-orange .service-tile { background: #fff7ed; color: #ea580c; }
                    .accent-cyan { border-color: #cffafe; }
                    .accent-cyan .service-tile { background: #ecfeff; color: #0891b2; }
                    .accent-emerald { border-color: #d1fae5; }
                    .accent-emerald .service-tile { background: #ecfdf5; color: #059669; }
                    .accent-purple { border-color: #f3e8ff; }
                    .accent-purple .service-tile { background: #faf5ff; color: #9333ea; }
                    .accent-slate { border-color: #e2e8f0; }
                    .accent-slate .service-tile { background: #f8fafc; color: #475569; }
                    @media (min-width: 768px) {
                        .service-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-intro">
                    <h2 class="section-title">{"Full-Service Plumbing Solutions"}</h2>
                    <p>
                        {format!(
                            "We offer a comprehensive range of plumbing services for residential and commercial properties in {}. No job is too big or too small.",
                            config.area.suburb
                        )}
                    </p>
                </div>

                <div class="service-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div key={service.title} class={classes!("service-card", service.accent.class())}>
                            <div class="service-tile">
                                <SvgIcon icon={service.icon} />
                            </div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <a href="#contact" class="quote-link">
                                {"Get a Quote"}
                                <SvgIcon icon={Icon::ArrowRight} />
                            </a>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

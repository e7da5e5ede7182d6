use yew::prelude::*;

use crate::config::use_site_config;
use crate::content::{WHY_US, WHY_US_IMAGE};
use crate::icons::{Icon, SvgIcon};

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    let config = use_site_config();

    html! {
        <section class="section why-us">
            <style>
                {r#"
                    .why-us { overflow: hidden; }
                    .why-grid {
                        display: grid;
                        gap: 4rem;
                        align-items: center;
                    }
                    .why-visual { position: relative; }
                    .why-visual::before {
                        content: "";
                        position: absolute;
                        top: -2.5rem;
                        left: -2.5rem;
                        width: 16rem;
                        height: 16rem;
                        background: #dbeafe;
                        border-radius: 9999px;
                        filter: blur(64px);
                        opacity: 0.5;
                    }
                    .why-visual img {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        border-radius: 40px;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .why-badge {
                        position: absolute;
                        bottom: -1.5rem;
                        right: -1.5rem;
                        z-index: 20;
                        max-width: 240px;
                        background: #2563eb;
                        color: #fff;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }
                    .why-badge strong {
                        display: block;
                        font-size: 2.25rem;
                        margin-bottom: 0.5rem;
                    }
                    .why-badge span { font-size: 0.875rem; opacity: 0.9; }
                    .why-points {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .why-point { display: flex; gap: 1rem; }
                    .why-point .icon {
                        flex-shrink: 0;
                        width: 1.5rem;
                        height: 1.5rem;
                        margin-top: 0.25rem;
                        color: #2563eb;
                    }
                    .why-point h4 { margin: 0 0 0.25rem; color: #0f172a; }
                    .why-point p { margin: 0; color: #64748b; font-size: 0.875rem; }
                    .standards-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-top: 3rem;
                        color: #2563eb;
                        font-weight: 700;
                        text-decoration: none;
                        border-bottom: 2px solid #2563eb;
                        padding-bottom: 0.25rem;
                    }
                    .standards-link .icon { width: 1.25rem; height: 1.25rem; }
                    @media (min-width: 768px) {
                        .why-grid { grid-template-columns: 1fr 1fr; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="why-grid">
                    <div class="why-visual">
                        <img src={WHY_US_IMAGE} alt="Plumber at work" referrerpolicy="no-referrer" />
                        <div class="why-badge">
                            <strong>{"100%"}</strong>
                            <span>{"Satisfaction guarantee on every service we provide."}</span>
                        </div>
                    </div>

                    <div>
                        <h2 class="section-title">{format!("Why {} Trusts Us", config.area.suburb)}</h2>
                        <p class="section-lead">
                            {format!(
                                "We've built our reputation on honesty, quality, and speed. When you call {}, you're getting a team that treats your home like their own.",
                                config.business_name
                            )}
                        </p>

                        <div class="why-points">
                            { for WHY_US.iter().map(|point| html! {
                                <div key={point.title} class="why-point">
                                    <SvgIcon icon={Icon::CheckCircle} />
                                    <div>
                                        <h4>{point.title}</h4>
                                        <p>{point.description}</p>
                                    </div>
                                </div>
                            }) }
                        </div>

                        <a href={config.tel_href()} class="standards-link">
                            {"Learn more about our standards"}
                            <SvgIcon icon={Icon::ArrowRight} />
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

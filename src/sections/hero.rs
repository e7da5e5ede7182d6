use yew::prelude::*;

use crate::config::use_site_config;
use crate::content::{avatar_url, HERO_IMAGE};
use crate::icons::{Icon, Stars, SvgIcon};

#[function_component(Hero)]
pub fn hero() -> Html {
    let config = use_site_config();
    let area = &config.area;

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding-top: 5rem;
                        overflow: hidden;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-backdrop img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-backdrop::after {
                        content: "";
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, #0f172a, rgba(15, 23, 42, 0.8), transparent);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 42rem;
                        animation: riseIn 0.6s ease-out both;
                    }
                    .hero-badge {
                        display: inline-block;
                        padding: 0.375rem 1rem;
                        background: rgba(37, 99, 235, 0.2);
                        border: 1px solid rgba(59, 130, 246, 0.3);
                        border-radius: 9999px;
                        color: #60a5fa;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        color: #fff;
                        line-height: 1.1;
                        letter-spacing: -0.025em;
                        margin: 0 0 2rem;
                    }
                    .hero h1 span { color: #3b82f6; }
                    .hero-lead {
                        font-size: 1.25rem;
                        color: #cbd5e1;
                        line-height: 1.7;
                        margin-bottom: 2.5rem;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .hero-proof {
                        margin-top: 3rem;
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                        color: #94a3b8;
                    }
                    .hero-proof strong { color: #fff; }
                    .avatars { display: flex; }
                    .avatars img {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        border: 2px solid #0f172a;
                        object-fit: cover;
                        margin-left: -0.75rem;
                    }
                    .avatars img:first-child { margin-left: 0; }
                "#}
            </style>
            <div class="hero-backdrop">
                <img src={HERO_IMAGE} alt="Professional Plumbing" referrerpolicy="no-referrer" />
            </div>

            <div class="container">
                <div class="hero-content">
                    <span class="hero-badge">{format!("Expert Plumbing in {}", area.suburb)}</span>
                    <h1>
                        {"Plumbing Done "}<span>{"Right"}</span>{", The First Time."}
                    </h1>
                    <p class="hero-lead">
                        {format!(
                            "From emergency leaks to full installations, we provide reliable, professional plumbing services across {} and {}. 24/7 support when you need it most.",
                            area.suburb, area.region
                        )}
                    </p>

                    <div class="hero-actions">
                        <a href={config.tel_href()} class="btn btn-primary">
                            <SvgIcon icon={Icon::Phone} />
                            {"Emergency Call"}
                        </a>
                        <a href="#services" class="btn btn-glass">
                            {"Our Services"}
                            <SvgIcon icon={Icon::ArrowRight} />
                        </a>
                    </div>

                    <div class="hero-proof">
                        <div class="avatars">
                            { for (11..=14u8).map(|seed| html! {
                                <img src={avatar_url(seed)} alt="Customer" />
                            }) }
                        </div>
                        <div>
                            <Stars class="stars-gold" />
                            <p><strong>{"500+"}</strong>{format!(" Happy Customers in {}", area.region)}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

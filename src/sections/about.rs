use yew::prelude::*;

use crate::config::use_site_config;
use crate::content::ABOUT_IMAGE;
use crate::icons::{Icon, SvgIcon};

#[function_component(About)]
pub fn about() -> Html {
    let config = use_site_config();

    html! {
        <section id="about" class="section about">
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        gap: 5rem;
                        align-items: center;
                    }
                    .about-copy p {
                        font-size: 1.125rem;
                        color: #475569;
                        line-height: 1.7;
                        margin: 0 0 1.5rem;
                    }
                    .about-figures {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                        padding-top: 1.5rem;
                    }
                    .about-visual { position: relative; }
                    .about-photo {
                        aspect-ratio: 1;
                        border-radius: 3rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        transform: rotate(3deg);
                        transition: transform 0.5s;
                    }
                    .about-photo:hover { transform: rotate(0); }
                    .about-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .about-quote {
                        display: none;
                        position: absolute;
                        bottom: -2.5rem;
                        left: -2.5rem;
                        max-width: 20rem;
                        background: #2563eb;
                        color: #fff;
                        padding: 2.5rem;
                        border-radius: 2.5rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        transform: rotate(-6deg);
                    }
                    .about-quote .icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        margin-bottom: 1rem;
                    }
                    .about-quote p {
                        font-weight: 700;
                        font-size: 1.25rem;
                        line-height: 1.4;
                        margin: 0;
                    }
                    .about-quote footer {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        opacity: 0.8;
                    }
                    @media (min-width: 768px) {
                        .about-grid { grid-template-columns: 1fr 1fr; }
                    }
                    @media (min-width: 1024px) {
                        .about-quote { display: block; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="about-grid">
                    <div class="about-copy">
                        <span class="eyebrow">{"Our Story"}</span>
                        <h2 class="section-title">
                            {"Decades of Excellence in "}
                            <span class="accent-text">{config.area.suburb.clone()}</span>
                            {" Plumbing."}
                        </h2>
                        <p>
                            {format!(
                                "Founded on the principles of integrity and technical mastery, {} has been the cornerstone of reliable plumbing in the {} area for over 15 years.",
                                config.business_name, config.area.region
                            )}
                        </p>
                        <p>
                            {"We aren't just contractors; we are your neighbors. Our team of licensed master plumbers is dedicated to solving complex infrastructure challenges while providing the personal touch of a local family business."}
                        </p>
                        <div class="about-figures">
                            <div>
                                <div class="stat-value">{"100%"}</div>
                                <div class="stat-label">{"Licensed Team"}</div>
                            </div>
                            <div>
                                <div class="stat-value">{"24/7"}</div>
                                <div class="stat-label">{"Emergency Support"}</div>
                            </div>
                        </div>
                    </div>

                    <div class="about-visual">
                        <div class="about-photo">
                            <img src={ABOUT_IMAGE} alt="Our Team" referrerpolicy="no-referrer" />
                        </div>
                        <blockquote class="about-quote">
                            <SvgIcon icon={Icon::Star} filled={true} />
                            <p>
                                {format!("\"The most reliable plumbing service I've ever used in {}.\"", config.area.region)}
                            </p>
                            <footer>{"— Local Homeowner"}</footer>
                        </blockquote>
                    </div>
                </div>
            </div>
        </section>
    }
}

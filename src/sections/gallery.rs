use yew::prelude::*;

use crate::content::GALLERY;
use crate::icons::{Icon, SvgIcon};

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <section id="gallery" class="section">
            <style>
                {r#"
                    .gallery-grid {
                        display: grid;
                        gap: 2.5rem;
                    }
                    .project {
                        position: relative;
                        aspect-ratio: 4 / 5;
                        border-radius: 2rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px -12px rgba(226, 232, 240, 1);
                        opacity: 0;
                        animation: riseIn 0.6s ease-out forwards;
                    }
                    .project > img {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.7s;
                    }
                    .project:hover > img { transform: scale(1.1); }
                    .project-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, rgba(15, 23, 42, 0.9), rgba(15, 23, 42, 0.2), transparent);
                    }
                    .project-tag {
                        position: absolute;
                        top: 1.5rem;
                        left: 1.5rem;
                        padding: 0.375rem 1rem;
                        background: #2563eb;
                        color: #fff;
                        font-size: 10px;
                        font-weight: 900;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        border-radius: 9999px;
                    }
                    .project-caption {
                        position: absolute;
                        bottom: 2rem;
                        left: 2rem;
                        right: 2rem;
                    }
                    .project-caption h3 { color: #fff; margin: 0 0 0.5rem; font-size: 1.25rem; }
                    .project-caption span {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #60a5fa;
                        font-size: 0.875rem;
                        font-weight: 700;
                    }
                    .project-caption .icon { width: 1rem; height: 1rem; }
                    .project-before {
                        position: absolute;
                        inset: 0;
                        background: #0f172a;
                        opacity: 0;
                        transition: opacity 0.5s;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                        text-align: center;
                    }
                    .project:hover .project-before { opacity: 1; }
                    .project-before .eyebrow { color: #3b82f6; }
                    .project-before img {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                        border-radius: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .project-before p { color: #cbd5e1; font-size: 0.875rem; line-height: 1.6; }
                    @media (min-width: 768px) {
                        .gallery-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-intro">
                    <h2 class="section-title">{"Our Work in Action"}</h2>
                    <p>
                        {"See the quality of our craftsmanship. We take pride in delivering clean, durable, and professional plumbing solutions."}
                    </p>
                </div>

                <div class="gallery-grid">
                    { for GALLERY.iter().enumerate().map(|(idx, project)| html! {
                        <div
                            key={project.title}
                            class="project"
                            style={format!("animation-delay: {:.1}s;", idx as f32 * 0.1)}
                        >
                            <img src={project.after} alt={project.title} referrerpolicy="no-referrer" />
                            <div class="project-shade"></div>
                            <span class="project-tag">{project.tag}</span>
                            <div class="project-caption">
                                <h3>{project.title}</h3>
                                <span>{"View Details"}<SvgIcon icon={Icon::ArrowRight} /></span>
                            </div>
                            <div class="project-before">
                                <span class="eyebrow">{"Before"}</span>
                                <img src={project.before} alt="Before" referrerpolicy="no-referrer" />
                                <p>{"Swipe or hover to see the professional transformation we delivered."}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

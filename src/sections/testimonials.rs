use yew::prelude::*;

use crate::content::TESTIMONIALS;
use crate::icons::Stars;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="section testimonials">
            <style>
                {r#"
                    .testimonials { background: #0f172a; color: #fff; }
                    .testimonials .section-title { color: #fff; }
                    .rating-summary {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .rating-summary .stars { justify-content: center; }
                    .rating-summary .icon { width: 1.5rem; height: 1.5rem; }
                    .rating-summary p { margin-top: 1rem; color: #94a3b8; }
                    .review-grid {
                        display: grid;
                        gap: 2rem;
                    }
                    .review {
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 2rem;
                        border-radius: 1.5rem;
                        backdrop-filter: blur(4px);
                    }
                    .review .stars { margin-bottom: 1rem; }
                    .review blockquote {
                        color: #cbd5e1;
                        font-style: italic;
                        line-height: 1.7;
                        margin: 0 0 2rem;
                    }
                    .reviewer { display: flex; align-items: center; gap: 1rem; }
                    .reviewer-initial {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: #2563eb;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        font-size: 1.125rem;
                    }
                    .reviewer-name { font-weight: 700; }
                    .reviewer-location {
                        font-size: 0.75rem;
                        color: #64748b;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }
                    @media (min-width: 768px) {
                        .review-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <div class="rating-summary">
                    <h2 class="section-title">{"What Our Clients Say"}</h2>
                    <Stars class="stars-gold" />
                    <p>{"4.9/5 average rating based on 500+ reviews"}</p>
                </div>

                <div class="review-grid">
                    { for TESTIMONIALS.iter().map(|review| html! {
                        <div key={review.name} class="review">
                            <Stars count={review.rating} class="stars-gold" />
                            <blockquote>{format!("\"{}\"", review.text)}</blockquote>
                            <div class="reviewer">
                                <div class="reviewer-initial">{review.initial().to_string()}</div>
                                <div>
                                    <div class="reviewer-name">{review.name}</div>
                                    <div class="reviewer-location">{review.location}</div>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::content::STATS;

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <div class="stats-strip">
            <style>
                {r#"
                    .stats-strip {
                        background: #fff;
                        padding: 3rem 0;
                        border-bottom: 1px solid #f1f5f9;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                        text-align: center;
                    }
                    @media (min-width: 768px) {
                        .stats-grid {
                            grid-template-columns: repeat(4, 1fr);
                            text-align: left;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <div key={stat.label}>
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

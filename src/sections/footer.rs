use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config::use_site_config;
use crate::icons::{Icon, SvgIcon};

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_site_config();
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #f8fafc;
                        padding: 3rem 0;
                        border-top: 1px solid #f1f5f9;
                    }
                    .footer-inner {
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        align-items: center;
                        gap: 2rem;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-weight: 700;
                        font-size: 1.125rem;
                        color: #0f172a;
                    }
                    .footer-brand .brand-badge { padding: 0.375rem; border-radius: 0.375rem; }
                    .footer-brand .icon { width: 1rem; height: 1rem; }
                    .footer-links { display: flex; gap: 2rem; font-size: 0.875rem; font-weight: 500; }
                    .footer-links a { color: #64748b; text-decoration: none; }
                    .footer-links a:hover { color: #2563eb; }
                    .footer-copyright { font-size: 0.875rem; color: #94a3b8; }
                    @media (min-width: 768px) {
                        .footer-inner { flex-direction: row; }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-inner">
                    <div class="footer-brand">
                        <span class="brand-badge"><SvgIcon icon={Icon::Wrench} /></span>
                        {config.business_name.clone()}
                    </div>

                    <div class="footer-links">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                        <a href="#">{"Sitemap"}</a>
                    </div>

                    <div class="footer-copyright">
                        {format!("© {} {}. All rights reserved.", year, config.legal_name)}
                    </div>
                </div>
            </div>
        </footer>
    }
}

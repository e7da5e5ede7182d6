use yew::prelude::*;

use crate::config::use_site_config;
use crate::content::NAV_LINKS;
use crate::icons::{Icon, SvgIcon};
use crate::state::nav::{NavAction, NavState};
use crate::state::scroll::{ScrollWatch, WindowScroll};

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        padding: 1.5rem 0;
        background: transparent;
        transition: all 0.3s ease;
    }
    .top-nav.scrolled {
        padding: 0.75rem 0;
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(12px);
        box-shadow: 0 1px 2px rgba(15, 23, 42, 0.08);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-weight: 700;
        font-size: 1.25rem;
        letter-spacing: -0.02em;
        color: #fff;
        text-decoration: none;
    }
    .top-nav.scrolled .nav-brand { color: #0f172a; }
    .brand-badge {
        background: #2563eb;
        padding: 0.5rem;
        border-radius: 0.5rem;
        color: #fff;
        display: flex;
    }
    .brand-badge .icon { width: 1.5rem; height: 1.5rem; }
    .nav-links {
        display: none;
        align-items: center;
        gap: 2rem;
    }
    .nav-link {
        font-size: 0.875rem;
        font-weight: 500;
        color: rgba(255, 255, 255, 0.9);
        text-decoration: none;
        transition: color 0.2s;
    }
    .top-nav.scrolled .nav-link { color: #475569; }
    .nav-link:hover { color: #2563eb; }
    .nav-call {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        background: #2563eb;
        color: #fff;
        padding: 0.625rem 1.25rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 700;
        text-decoration: none;
        box-shadow: 0 10px 15px -3px rgba(37, 99, 235, 0.2);
    }
    .nav-call:hover { background: #1d4ed8; }
    .nav-call .icon { width: 1rem; height: 1rem; }
    .burger-menu {
        background: none;
        border: none;
        padding: 0.5rem;
        color: #fff;
        cursor: pointer;
    }
    .top-nav.scrolled .burger-menu { color: #0f172a; }
    .burger-menu .icon { width: 1.5rem; height: 1.5rem; }
    .mobile-menu {
        background: #fff;
        border-bottom: 1px solid #f1f5f9;
        overflow: hidden;
        animation: menuSlide 0.25s ease-out;
    }
    .mobile-menu-inner {
        display: flex;
        flex-direction: column;
        padding: 1.5rem;
        gap: 1rem;
    }
    .mobile-link {
        color: #475569;
        font-weight: 500;
        text-decoration: none;
    }
    .mobile-call {
        background: #2563eb;
        color: #fff;
        padding: 1rem;
        border-radius: 0.75rem;
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        text-decoration: none;
    }
    .mobile-call .icon { width: 1.25rem; height: 1.25rem; }
    @keyframes menuSlide {
        from { opacity: 0; max-height: 0; }
        to { opacity: 1; max-height: 32rem; }
    }
    @media (min-width: 768px) {
        .nav-links { display: flex; }
        .burger-menu, .mobile-menu { display: none; }
    }
"#;

#[function_component(Nav)]
pub fn nav() -> Html {
    let config = use_site_config();
    let nav = use_reducer_eq(NavState::default);

    {
        let dispatcher = nav.dispatcher();
        use_effect_with_deps(move |_| {
            let watch = web_sys::window().map(|window| {
                ScrollWatch::attach(WindowScroll::new(window), move |y| {
                    dispatcher.dispatch(NavAction::Scrolled(y));
                })
            });
            move || drop(watch)
        }, ());
    }

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    // Closes the panel; the anchor's default navigation still happens.
    let close_menu = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            nav.dispatch(NavAction::LinkChosen);
        })
    };

    let theme = nav.theme();
    let tel_href = config.tel_href();

    html! {
        <nav class={theme.bar_class()}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <a href="#" class="nav-brand">
                    <span class="brand-badge"><SvgIcon icon={Icon::Wrench} /></span>
                    {config.business_name.clone()}
                </a>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href} class="nav-link">{link.label}</a>
                    }) }
                    <a href={tel_href.clone()} class="nav-call">
                        <SvgIcon icon={Icon::Phone} />
                        {config.phone.display.clone()}
                    </a>
                </div>

                <button
                    class="burger-menu"
                    aria-label="Toggle navigation"
                    aria-expanded={nav.is_menu_open.to_string()}
                    onclick={toggle_menu}
                >
                    <SvgIcon icon={if nav.is_menu_open { Icon::X } else { Icon::Menu }} />
                </button>
            </div>

            {
                if nav.is_menu_open {
                    html! {
                        <div class="mobile-menu">
                            <div class="mobile-menu-inner">
                                { for NAV_LINKS.iter().map(|link| html! {
                                    <a
                                        key={link.label}
                                        href={link.href}
                                        class="mobile-link"
                                        onclick={close_menu.clone()}
                                    >
                                        {link.label}
                                    </a>
                                }) }
                                <a href={tel_href} class="mobile-call">
                                    <SvgIcon icon={Icon::Phone} />
                                    {format!("Call Now: {}", config.phone.display)}
                                </a>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

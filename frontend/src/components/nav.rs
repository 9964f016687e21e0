use yew::prelude::*;
use yew_hooks::use_window_scroll;
use yew_router::prelude::*;

use crate::content::COMPANY;
use crate::hooks::{use_motion, use_section_nav};
use crate::i18n::{use_i18n, Language};
use crate::Route;

const SCROLLED_AFTER: f64 = 50.0;

const SECTION_LINKS: [(&str, &str); 3] = [
    ("services", "nav.services"),
    ("about", "nav.about"),
    ("contact", "nav.contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let i18n = use_i18n();
    let motion = use_motion();
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);
    let go_to = use_section_nav();

    let is_scrolled = scroll_y > SCROLLED_AFTER;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let section_link = |id: &'static str| {
        let go_to = go_to.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            go_to.emit(id);
        })
    };

    html! {
        <nav class={classes!(
            "top-nav",
            is_scrolled.then_some("scrolled"),
            motion.enable_blur.then_some("with-blur"),
        )}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1000;
                        padding: 1.5rem 0;
                        transition: padding 0.3s ease, background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 0.75rem 0;
                        background: rgba(10, 15, 28, 0.92);
                        border-bottom: 1px solid rgba(0, 212, 255, 0.1);
                    }
                    .top-nav.scrolled.with-blur {
                        background: rgba(10, 15, 28, 0.7);
                        backdrop-filter: blur(12px);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        color: white;
                        font-size: 1.4rem;
                        font-weight: 700;
                        text-decoration: none;
                        letter-spacing: 0.02em;
                    }
                    .nav-logo span {
                        color: #00d4ff;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.8);
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #00d4ff;
                    }
                    .lang-switcher {
                        display: flex;
                        gap: 0.25rem;
                    }
                    .lang-option {
                        background: none;
                        border: 1px solid transparent;
                        border-radius: 6px;
                        color: rgba(255, 255, 255, 0.6);
                        padding: 0.25rem 0.5rem;
                        font-size: 0.8rem;
                    }
                    .lang-option.active {
                        color: #00d4ff;
                        border-color: rgba(0, 212, 255, 0.4);
                    }
                    .nav-cta {
                        background: linear-gradient(135deg, #00d4ff, #a855f7);
                        color: white;
                        border: none;
                        border-radius: 999px;
                        padding: 0.6rem 1.4rem;
                        font-weight: 600;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: white;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1.5rem;
                            background: rgba(10, 15, 28, 0.98);
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Falcon"}<span>{" Team"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label={i18n.t("nav.menu")}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then_some("mobile-menu-open"))}>
                    {
                        SECTION_LINKS.iter().map(|(id, key)| html! {
                            <a href={format!("/#{}", id)} class="nav-link" onclick={section_link(*id)}>
                                {i18n.t(key)}
                            </a>
                        }).collect::<Html>()
                    }
                    <div class="lang-switcher">
                        {
                            Language::ALL.iter().map(|&language| {
                                let set_language = i18n.set_language.clone();
                                html! {
                                    <button
                                        class={classes!("lang-option", (language == i18n.language).then_some("active"))}
                                        onclick={Callback::from(move |_| set_language.emit(language))}
                                    >
                                        {language.label()}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    <a href={COMPANY.phone_link} class="nav-link">{COMPANY.phone}</a>
                    <button class="nav-cta" onclick={section_link("contact")}>
                        {i18n.t("nav.getConsultation")}
                    </button>
                </div>
            </div>
        </nav>
    }
}

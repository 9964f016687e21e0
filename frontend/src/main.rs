use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact;
mod content;
mod hooks;
mod i18n;
mod motion {
    pub mod capabilities;
    pub mod counter;
    pub mod flow;
    pub mod follow;
    pub mod frame_loop;
    pub mod particles;
    pub mod scroll;
    pub mod split_text;
    pub mod steps;
    pub mod tilt;
    pub mod visibility;
}
mod components {
    pub mod animated_counter;
    pub mod animated_grid;
    pub mod card_3d;
    pub mod custom_cursor;
    pub mod data_flow;
    pub mod footer;
    pub mod magnetic;
    pub mod nav;
    pub mod particle_field;
    pub mod scroll_progress;
    pub mod split_text;
}
mod sections {
    pub mod clients;
    pub mod contact;
    pub mod hero;
    pub mod mission;
    pub mod platforms;
    pub mod services;
    pub mod stats;
    pub mod tiles;
    pub mod timeline;
    pub mod why_us;
}
mod pages {
    pub mod home;
    pub mod service_detail;
}

use components::{custom_cursor::CustomCursor, footer::Footer, nav::Nav, scroll_progress::ScrollProgressBar};
use content::ServiceKey;
use i18n::{shared_catalog, I18n, Language};
use motion::capabilities::{DeviceCapabilities, MotionConfig};
use pages::{home::Home, service_detail::ServiceDetail};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services/:service_key")]
    ServiceDetail { service_key: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// What a route actually renders once its parameters are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Home,
    Service(ServiceKey),
    RedirectHome,
}

fn resolve_route(route: &Route) -> Page {
    match route {
        Route::Home => Page::Home,
        Route::ServiceDetail { service_key } => match service_key.parse() {
            Ok(service) => Page::Service(service),
            Err(_) => Page::RedirectHome,
        },
        Route::NotFound => Page::RedirectHome,
    }
}

fn switch(route: Route) -> Html {
    match resolve_route(&route) {
        Page::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Page::Service(service) => {
            info!("Rendering service page for {}", service);
            html! { <ServiceDetail {service} /> }
        }
        Page::RedirectHome => {
            warn!("No page for {:?}, redirecting home", route);
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub motion: MotionConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let language = use_state(|| {
        web_sys::window()
            .map(|window| Language::detect(&window))
            .unwrap_or_default()
    });

    let set_language = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            if let Some(window) = web_sys::window() {
                next.persist(&window);
                if let Some(root) = window.document().and_then(|document| document.document_element()) {
                    let _ = root.set_attribute("lang", next.code());
                }
            }
            language.set(next);
        })
    };

    let i18n = I18n {
        language: *language,
        catalog: shared_catalog(),
        set_language,
    };

    let root_style = format!("--transition-duration: {}s;", props.motion.transition_duration);

    html! {
        <ContextProvider<MotionConfig> context={props.motion}>
            <ContextProvider<I18n> context={i18n}>
                <BrowserRouter>
                    <div class="app" style={root_style}>
                        <style>
                            {r#"
                                body {
                                    margin: 0;
                                    background: #0a0f1c;
                                    color: white;
                                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                                }
                                html {
                                    scroll-behavior: smooth;
                                }
                                .container {
                                    max-width: 1200px;
                                    margin: 0 auto;
                                    padding: 0 1.5rem;
                                }
                                .section {
                                    padding: 7rem 0;
                                }
                                .section-header {
                                    text-align: center;
                                    margin-bottom: 4rem;
                                }
                                .section-title {
                                    font-size: clamp(2rem, 5vw, 3.5rem);
                                    font-weight: 900;
                                    margin: 0 0 1rem;
                                }
                                .section-subtitle {
                                    color: rgba(255, 255, 255, 0.7);
                                    font-size: 1.15rem;
                                    max-width: 720px;
                                    margin: 0 auto;
                                }
                                .card {
                                    position: relative;
                                    padding: 2rem;
                                    border-radius: 20px;
                                    border: 1px solid rgba(255, 255, 255, 0.08);
                                    background: linear-gradient(135deg, rgba(22, 30, 50, 0.6), rgba(10, 15, 28, 0.6));
                                }
                                .card-3d {
                                    position: relative;
                                    perspective: 1000px;
                                    transform-style: preserve-3d;
                                }
                                .card-3d-inner {
                                    position: relative;
                                    height: 100%;
                                    border-radius: 20px;
                                    transform-style: preserve-3d;
                                    transition: transform 0.15s ease-out, box-shadow 0.3s ease;
                                }
                                .card-3d-inner > .card,
                                .tile-cell > .card {
                                    height: 100%;
                                    box-sizing: border-box;
                                }
                                .card-3d-glow {
                                    position: absolute;
                                    inset: -1px;
                                    border-radius: 20px;
                                    filter: blur(8px);
                                    pointer-events: none;
                                    transition: opacity 0.3s ease;
                                }
                                .tile-grid {
                                    display: grid;
                                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                                    gap: 1.5rem;
                                }
                                .tile-icon {
                                    font-size: 2rem;
                                    margin-bottom: 1rem;
                                }
                                .btn {
                                    border-radius: 999px;
                                    padding: 0.9rem 2rem;
                                    font-size: 1rem;
                                    font-weight: 600;
                                    border: 1px solid transparent;
                                    color: white;
                                    background: none;
                                    will-change: transform;
                                }
                                .btn:disabled {
                                    opacity: 0.6;
                                }
                                .btn-primary {
                                    background: linear-gradient(135deg, #00d4ff, #a855f7);
                                    box-shadow: 0 10px 30px rgba(0, 212, 255, 0.25);
                                }
                                .btn-outline {
                                    border-color: rgba(0, 212, 255, 0.5);
                                }
                                .btn-ghost {
                                    color: rgba(255, 255, 255, 0.7);
                                }
                                .split-text {
                                    display: inline;
                                }
                                .split-mask {
                                    display: inline-block;
                                    overflow: hidden;
                                    vertical-align: bottom;
                                }
                                .split-fragment {
                                    display: inline-block;
                                    transform: translateY(110%);
                                    opacity: 0;
                                    transition: transform var(--transition-duration) cubic-bezier(0.16, 1, 0.3, 1),
                                                opacity var(--transition-duration) ease;
                                }
                                .split-text.is-revealed .split-fragment {
                                    transform: none;
                                    opacity: 1;
                                }
                                .split-space {
                                    white-space: pre;
                                }
                            "#}
                        </style>
                        <CustomCursor />
                        <ScrollProgressBar />
                        <Nav />
                        <Switch<Route> render={switch} />
                        <Footer />
                    </div>
                </BrowserRouter>
            </ContextProvider<I18n>>
        </ContextProvider<MotionConfig>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    let motion = web_sys::window()
        .map(|window| MotionConfig::for_device(DeviceCapabilities::detect(&window)))
        .unwrap_or_default();
    info!("Starting application with {:?}", motion);

    yew::Renderer::<App>::with_props(AppProps { motion }).render();
}

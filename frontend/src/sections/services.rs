use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::split_text::SplitText;
use crate::content::ServiceKey;
use crate::hooks::{use_element_progress, use_motion};
use crate::i18n::use_i18n;
use crate::motion::scroll::ScrollSpan;
use crate::motion::steps::{active_index, StepState};
use crate::Route;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: ServiceKey,
    #[prop_or_default]
    class: Classes,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let i18n = use_i18n();
    let motion = use_motion();
    let key = props.service.as_str();

    html! {
        <Link<Route>
            to={Route::ServiceDetail { service_key: key.to_string() }}
            classes={classes!("card", "service-card", motion.enable_3d.then_some("tilt"), props.class.clone())}
        >
            <div class="service-icon" aria-hidden="true">{props.service.icon()}</div>
            <h3>{i18n.t(&format!("services.{}.title", key))}</h3>
            <p>{i18n.t(&format!("services.{}.description", key))}</p>
            <span class="service-more">{i18n.t("services.learnMore")}{" →"}</span>
        </Link<Route>>
    }
}

/// Services as a horizontal slider pinned for one viewport height per
/// slide. Scrolling through the track picks the visible slide.
#[function_component(PinnedServices)]
fn pinned_services() -> Html {
    let track_ref = use_node_ref();
    let progress = use_element_progress(track_ref.clone(), ScrollSpan::Pinned);
    let count = ServiceKey::ALL.len();
    let active = active_index(progress, count);

    html! {
        <div
            class="services-track"
            ref={track_ref}
            style={format!("height: {}vh;", count * 100)}
        >
            <div class="services-sticky">
                <div
                    class="services-row"
                    style={format!("transform: translate3d(-{}vw, 0, 0);", active * 100)}
                >
                    {
                        ServiceKey::ALL.iter().enumerate().map(|(index, &service)| {
                            let state = StepState::of(index, active);
                            html! {
                                <div class={classes!("service-slide", state.class())} key={service.as_str()}>
                                    <ServiceCard {service} />
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <div class="services-indicator" aria-hidden="true">
                    {
                        ServiceKey::ALL.iter().enumerate().map(|(index, service)| {
                            let reached = StepState::of(index, active).is_reached();
                            html! {
                                <span
                                    key={service.as_str()}
                                    class={classes!(
                                        "services-indicator-dot",
                                        reached.then_some("is-reached"),
                                        (index == active).then_some("is-active"),
                                    )}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let i18n = use_i18n();
    let motion = use_motion();

    html! {
        <section id="services" class="section services-section">
            <style>
                {r#"
                    .service-card {
                        display: block;
                        height: 100%;
                        color: inherit;
                        text-decoration: none;
                        transition: transform var(--transition-duration) ease, border-color 0.3s ease;
                    }
                    .service-card:hover {
                        border-color: #00d4ff;
                        transform: translateY(-8px);
                    }
                    .service-card.tilt:hover {
                        transform: perspective(800px) rotateX(4deg) rotateY(-4deg) translateY(-8px);
                    }
                    .service-icon {
                        font-size: 2rem;
                        width: 64px;
                        height: 64px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 16px;
                        background: linear-gradient(135deg, rgba(0, 212, 255, 0.2), rgba(0, 212, 255, 0.03));
                        margin-bottom: 1.5rem;
                    }
                    .service-more {
                        display: inline-block;
                        margin-top: 1rem;
                        color: #00d4ff;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                    }
                    .services-track {
                        position: relative;
                    }
                    .services-sticky {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        overflow: hidden;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                    }
                    .services-row {
                        display: flex;
                        transition: transform var(--transition-duration) cubic-bezier(0.16, 1, 0.3, 1);
                    }
                    .service-slide {
                        flex: 0 0 100vw;
                        display: flex;
                        justify-content: center;
                        padding: 0 1.5rem;
                        box-sizing: border-box;
                        transition: opacity var(--transition-duration) ease;
                    }
                    .service-slide .service-card {
                        max-width: 560px;
                    }
                    .service-slide.is-future, .service-slide.is-past {
                        opacity: 0.4;
                    }
                    .services-indicator {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        margin-top: 2rem;
                    }
                    .services-indicator-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 999px;
                        background: rgba(255, 255, 255, 0.15);
                        transition: width 0.3s ease, background 0.3s ease;
                    }
                    .services-indicator-dot.is-reached {
                        background: rgba(0, 212, 255, 0.5);
                    }
                    .services-indicator-dot.is-active {
                        width: 32px;
                        background: #00d4ff;
                    }
                "#}
            </style>
            <div class="container">
                <header class="section-header">
                    <h2 class="section-title"><SplitText text={i18n.t("services.title")} /></h2>
                    <p class="section-subtitle">{i18n.t("services.subtitle")}</p>
                </header>
                if !motion.pinned_services {
                    <div class="services-grid">
                        {
                            ServiceKey::ALL.iter().map(|&service| html! {
                                <ServiceCard key={service.as_str()} {service} />
                            }).collect::<Html>()
                        }
                    </div>
                }
            </div>
            if motion.pinned_services {
                <PinnedServices />
            }
        </section>
    }
}

use serde::Deserialize;
use yew::prelude::*;

use crate::components::magnetic::MagneticButton;
use crate::components::split_text::SplitText;
use crate::content::ServiceKey;
use crate::hooks::{use_motion, use_section_nav};
use crate::i18n::use_i18n;
use crate::motion::split_text::SplitMode;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub service: ServiceKey,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    let i18n = use_i18n();
    let motion = use_motion();
    let go_to = use_section_nav();
    let key = props.service.as_str();
    let features: Vec<Feature> = i18n.list(&format!("serviceDetail.{}.features", key));

    // Start every detail page at the top, also when switching services.
    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        props.service,
    );

    let back = {
        let go_to = go_to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            go_to.emit("services");
        })
    };
    let contact = Callback::from(move |_: MouseEvent| go_to.emit("contact"));

    html! {
        <main class="service-detail">
            <style>
                {r#"
                    .service-detail {
                        padding-top: 8rem;
                    }
                    .back-link {
                        display: inline-block;
                        color: #00d4ff;
                        text-decoration: none;
                        margin-bottom: 2rem;
                    }
                    .detail-hero {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .detail-icon {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 4rem;
                    }
                    .feature-card {
                        transition: transform var(--transition-duration) ease;
                    }
                    .feature-card.tilt:hover {
                        transform: perspective(800px) rotateX(3deg) translateY(-6px);
                    }
                    .feature-index {
                        color: #a855f7;
                        font-weight: 700;
                    }
                    .detail-cta {
                        text-align: center;
                        margin-bottom: 6rem;
                    }
                "#}
            </style>
            <div class="container">
                <a href="/#services" class="back-link" onclick={back}>
                    {"← "}{i18n.t("serviceDetail.backToServices")}
                </a>
                <header class="detail-hero">
                    <div class="detail-icon" aria-hidden="true">{props.service.icon()}</div>
                    <h1 class="section-title">
                        <SplitText text={i18n.t(&format!("serviceDetail.{}.title", key))} mode={SplitMode::Chars} stagger={0.02} />
                    </h1>
                    <p class="section-subtitle">{i18n.t(&format!("serviceDetail.{}.subtitle", key))}</p>
                </header>
                <div class="feature-grid">
                    {
                        features.iter().enumerate().map(|(index, feature)| html! {
                            <article class={classes!("card", "feature-card", motion.enable_3d.then_some("tilt"))}>
                                <span class="feature-index">{format!("{:02}", index + 1)}</span>
                                <h3>{feature.title.clone()}</h3>
                                <p>{feature.description.clone()}</p>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
                <section class="card detail-cta">
                    <h2>{i18n.t("serviceDetail.cta.title")}</h2>
                    <p>{i18n.t("serviceDetail.cta.subtitle")}</p>
                    <MagneticButton class="btn btn-primary" onclick={contact}>
                        {i18n.t("serviceDetail.cta.button")}
                    </MagneticButton>
                </section>
            </div>
        </main>
    }
}

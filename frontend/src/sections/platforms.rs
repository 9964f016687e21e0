use yew::prelude::*;

use crate::components::card_3d::Card3D;
use crate::components::split_text::SplitText;
use crate::content::{INTEGRATIONS, PLATFORMS};
use crate::i18n::use_i18n;

#[function_component(Platforms)]
pub fn platforms() -> Html {
    let i18n = use_i18n();

    // doubled so the marquee loops without a gap
    let marquee = INTEGRATIONS.iter().chain(INTEGRATIONS.iter());

    html! {
        <section id="platforms" class="section platforms-section">
            <style>
                {r#"
                    .platforms-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .platform-name {
                        font-size: 0.8rem;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        color: #a855f7;
                    }
                    .integrations-title {
                        text-align: center;
                        color: rgba(255, 255, 255, 0.6);
                        margin-bottom: 1.5rem;
                    }
                    .marquee {
                        overflow: hidden;
                        mask-image: linear-gradient(90deg, transparent, black 10%, black 90%, transparent);
                    }
                    .marquee-row {
                        display: flex;
                        gap: 3rem;
                        width: max-content;
                        animation: marquee 30s linear infinite;
                    }
                    .marquee-item {
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: rgba(255, 255, 255, 0.5);
                        white-space: nowrap;
                    }
                    @keyframes marquee {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .marquee-row {
                            animation: none;
                            flex-wrap: wrap;
                            width: auto;
                            justify-content: center;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <header class="section-header">
                    <h2 class="section-title"><SplitText text={i18n.t("platforms.title")} /></h2>
                    <p class="section-subtitle">{i18n.t("platforms.subtitle")}</p>
                </header>
                <div class="platforms-grid">
                    {
                        PLATFORMS.iter().map(|platform| html! {
                            <Card3D key={platform.key} glow={format!("{}40", platform.accent)} intensity={10.0}>
                                <article class="card">
                                    <span class="platform-name" style={format!("color: {};", platform.accent)}>{platform.name}</span>
                                    <h3>{i18n.t(&format!("platforms.{}.title", platform.key))}</h3>
                                    <p>{i18n.t(&format!("platforms.{}.description", platform.key))}</p>
                                </article>
                            </Card3D>
                        }).collect::<Html>()
                    }
                </div>
                <p class="integrations-title">{i18n.t("platforms.integrations.title")}</p>
                <div class="marquee">
                    <div class="marquee-row">
                        { for marquee.map(|name| html! { <span class="marquee-item">{*name}</span> }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

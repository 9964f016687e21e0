use yew::prelude::*;

use crate::components::split_text::SplitText;
use crate::content::CLIENT_SEGMENTS;
use crate::i18n::use_i18n;
use crate::sections::tiles::TileGrid;

#[function_component(Clients)]
pub fn clients() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="clients" class="section clients-section">
            <style>
                {r#"
                    .case-study {
                        margin-top: 3rem;
                        border-color: rgba(34, 197, 94, 0.3);
                        background: linear-gradient(135deg, rgba(34, 197, 94, 0.08), transparent);
                    }
                    .case-study-savings {
                        color: #22c55e;
                        font-weight: 700;
                        font-size: 1.2rem;
                    }
                "#}
            </style>
            <div class="container">
                <header class="section-header">
                    <h2 class="section-title"><SplitText text={i18n.t("clients.title")} /></h2>
                    <p class="section-subtitle">{i18n.t("clients.subtitle")}</p>
                </header>
                <TileGrid tiles={CLIENT_SEGMENTS} prefix="clients" tilt={8.0} />
                <article class="card case-study">
                    <h3>{i18n.t("clients.caseStudy.title")}</h3>
                    <p>{i18n.t("clients.caseStudy.description")}</p>
                    <p class="case-study-savings">{i18n.t("clients.caseStudy.savings")}</p>
                </article>
            </div>
        </section>
    }
}

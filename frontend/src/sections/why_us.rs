use yew::prelude::*;

use crate::components::split_text::SplitText;
use crate::content::ADVANTAGES;
use crate::i18n::use_i18n;
use crate::sections::tiles::TileGrid;

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="why-us" class="section why-us-section">
            <div class="container">
                <header class="section-header">
                    <h2 class="section-title"><SplitText text={i18n.t("whyUs.title")} /></h2>
                    <p class="section-subtitle">{i18n.t("whyUs.subtitle")}</p>
                </header>
                <TileGrid tiles={ADVANTAGES} prefix="whyUs.advantages" />
            </div>
        </section>
    }
}

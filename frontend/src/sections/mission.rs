use yew::prelude::*;

use crate::components::split_text::SplitText;
use crate::content::VALUES;
use crate::i18n::use_i18n;
use crate::sections::tiles::TileGrid;

#[function_component(Mission)]
pub fn mission() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="mission" class="section mission-section">
            <div class="container">
                <header class="section-header">
                    <h2 class="section-title"><SplitText text={i18n.t("mission.title")} /></h2>
                    <p class="section-subtitle">{i18n.t("mission.subtitle")}</p>
                </header>
                <TileGrid tiles={VALUES} prefix="mission.values" />
            </div>
        </section>
    }
}

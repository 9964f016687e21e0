use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::card_3d::Card3D;
use crate::components::split_text::SplitText;
use crate::content::STATS;
use crate::i18n::use_i18n;

const GLOWS: [&str; 4] = [
    "rgba(0, 212, 255, 0.3)",
    "rgba(168, 85, 247, 0.3)",
    "rgba(16, 185, 129, 0.3)",
    "rgba(251, 146, 60, 0.3)",
];

#[function_component(Stats)]
pub fn stats() -> Html {
    let i18n = use_i18n();

    html! {
        <section id="stats" class="section stats-section">
            <style>
                {r#"
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 1.5rem;
                    }
                    .stat-card {
                        text-align: center;
                        padding: 2rem 1rem;
                    }
                    .stat-value {
                        font-size: clamp(2.5rem, 5vw, 3.5rem);
                        font-weight: 800;
                        font-variant-numeric: tabular-nums;
                        color: #00d4ff;
                    }
                    .stat-label {
                        margin-top: 0.5rem;
                        color: rgba(255, 255, 255, 0.7);
                    }
                "#}
            </style>
            <div class="container">
                <header class="section-header">
                    <h2 class="section-title"><SplitText text={i18n.t("stats.title")} /></h2>
                    <p class="section-subtitle">{i18n.t("stats.subtitle")}</p>
                </header>
                <div class="stats-grid">
                    {
                        STATS.iter().enumerate().map(|(index, stat)| html! {
                            <Card3D key={stat.key} glow={GLOWS[index % GLOWS.len()]} intensity={12.0}>
                                <div class="card stat-card">
                                    <div class="stat-value">
                                        <AnimatedCounter value={stat.value} suffix={stat.suffix} />
                                    </div>
                                    <div class="stat-label">{i18n.t(&format!("stats.{}", stat.key))}</div>
                                </div>
                            </Card3D>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

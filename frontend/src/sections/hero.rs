use yew::prelude::*;

use crate::components::animated_grid::AnimatedGrid;
use crate::components::data_flow::DataFlowLines;
use crate::components::magnetic::MagneticButton;
use crate::components::particle_field::ParticleField;
use crate::components::split_text::SplitText;
use crate::hooks::{use_element_progress, use_motion, use_section_nav};
use crate::i18n::use_i18n;
use crate::motion::scroll::ScrollSpan;
use crate::motion::split_text::SplitMode;

/// How far the hero copy drifts up while the hero scrolls away.
const PARALLAX_DEPTH: f64 = 150.0;

#[function_component(Hero)]
pub fn hero() -> Html {
    let i18n = use_i18n();
    let motion = use_motion();
    let go_to = use_section_nav();
    let section_ref = use_node_ref();
    let progress = use_element_progress(section_ref.clone(), ScrollSpan::Passing);

    // Passing progress is 0.5 with the hero flush at the top of the page.
    let leaving = ((progress - 0.5) * 2.0).clamp(0.0, 1.0);
    let content_style = if motion.enable_parallax {
        format!(
            "transform: translate3d(0, {:.1}px, 0); opacity: {:.3};",
            -leaving * PARALLAX_DEPTH,
            1.0 - leaving
        )
    } else {
        String::new()
    };

    let ambient = !motion.capabilities.should_reduce_animations();

    let goto = |id: &'static str| {
        let go_to = go_to.clone();
        Callback::from(move |_: MouseEvent| go_to.emit(id))
    };

    html! {
        <section id="hero" class="hero-section" ref={section_ref}>
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        background:
                            radial-gradient(circle at 20% 30%, rgba(0, 212, 255, 0.12), transparent 40%),
                            radial-gradient(circle at 80% 70%, rgba(168, 85, 247, 0.12), transparent 40%);
                    }
                    .hero-section .particle-field {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 900px;
                        padding: 0 1.5rem;
                        text-align: center;
                        will-change: transform, opacity;
                    }
                    .hero-title {
                        font-size: clamp(2.5rem, 6vw, 4.5rem);
                        line-height: 1.1;
                        margin: 0 0 1.5rem;
                    }
                    .hero-highlight {
                        display: block;
                        background: linear-gradient(135deg, #00d4ff, #a855f7);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-subtitle {
                        color: rgba(255, 255, 255, 0.7);
                        font-size: 1.2rem;
                        max-width: 680px;
                        margin: 0 auto 2.5rem;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .hero-scroll {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        color: rgba(255, 255, 255, 0.5);
                        font-size: 0.8rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                    }
                "#}
            </style>
            if ambient {
                <ParticleField count={60} connection_distance={120.0} speed={0.3} />
                <AnimatedGrid />
                <DataFlowLines />
            }
            <div class="hero-content" style={content_style}>
                <h1 class="hero-title">
                    <SplitText text={i18n.t("hero.title")} mode={SplitMode::Words} />
                    <span class="hero-highlight">
                        <SplitText text={i18n.t("hero.titleHighlight")} mode={SplitMode::Chars} stagger={0.02} delay={0.3} />
                    </span>
                </h1>
                <p class="hero-subtitle">{i18n.t("hero.subtitle")}</p>
                <div class="hero-actions">
                    <MagneticButton class="btn btn-primary" onclick={goto("contact")} cursor_text="Go">
                        {i18n.t("hero.cta.consultation")}
                    </MagneticButton>
                    <MagneticButton class="btn btn-outline" onclick={goto("contact")}>
                        {i18n.t("hero.cta.quote")}
                    </MagneticButton>
                    <button class="btn btn-ghost" onclick={goto("services")}>
                        {i18n.t("hero.cta.learnMore")}
                    </button>
                </div>
            </div>
            <div class="hero-scroll" aria-hidden="true">{i18n.t("hero.scroll")}</div>
        </section>
    }
}

use yew::prelude::*;

use crate::hooks::use_scroll_progress;

#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let progress = use_scroll_progress();

    html! {
        <div class="scroll-progress" aria-hidden="true">
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 4px;
                        z-index: 1100;
                        pointer-events: none;
                        background: rgba(255, 255, 255, 0.05);
                    }
                    .scroll-progress-fill {
                        height: 100%;
                        background: linear-gradient(90deg, #00d4ff, #a855f7);
                        box-shadow: 0 0 10px rgba(0, 212, 255, 0.6);
                    }
                "#}
            </style>
            <div class="scroll-progress-fill" style={format!("width: {:.2}%;", progress * 100.0)} />
        </div>
    }
}

use yew::prelude::*;

const GRID_SIZE: usize = 10;

/// Dot positions as percentages of the layer, row by row.
fn grid_dots(size: usize) -> impl Iterator<Item = (usize, f64, f64)> {
    (0..size).flat_map(move |row| {
        (0..size).map(move |column| {
            let step = 100.0 / size as f64;
            (row + column, column as f64 * step, row as f64 * step)
        })
    })
}

/// Faint pulsing dot grid, faded out toward the edges.
#[function_component(AnimatedGrid)]
pub fn animated_grid() -> Html {
    html! {
        <div class="animated-grid" aria-hidden="true">
            <style>
                {r#"
                    .animated-grid {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                        -webkit-mask-image: radial-gradient(ellipse 80% 60% at 50% 50%, black 0%, transparent 70%);
                        mask-image: radial-gradient(ellipse 80% 60% at 50% 50%, black 0%, transparent 70%);
                    }
                    .animated-grid svg {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                    }
                    .grid-dot {
                        animation: grid-pulse 4s ease-in-out infinite;
                    }
                    @keyframes grid-pulse {
                        0%, 100% { opacity: 0.15; }
                        50% { opacity: 0.4; }
                    }
                "#}
            </style>
            <svg>
                {
                    grid_dots(GRID_SIZE).map(|(wave, x, y)| html! {
                        <circle
                            class="grid-dot"
                            cx={format!("{}%", x)}
                            cy={format!("{}%", y)}
                            r="1.5"
                            fill="#00d4ff"
                            opacity="0.15"
                            style={format!("animation-delay: {:.1}s;", wave as f64 * 0.2)}
                        />
                    }).collect::<Html>()
                }
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_by_ten_grid_spans_the_layer() {
        let dots: Vec<_> = grid_dots(GRID_SIZE).collect();
        assert_eq!(dots.len(), 100);
        assert_eq!(dots[0], (0, 0.0, 0.0));
        assert_eq!(dots[1], (1, 10.0, 0.0));
        assert_eq!(dots[10], (1, 0.0, 10.0));
        assert_eq!(dots[99], (18, 90.0, 90.0));
    }
}

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::ops::ControlFlow;
use std::rc::Rc;

use gloo_events::EventListener;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};
use yew::prelude::*;

use crate::hooks::use_motion;
use crate::motion::particles::{FieldConfig, Particle, ParticleField as Field, Surface, TRAIL_FILL};
use crate::motion::visibility::ObservedLoop;

/// Draws a frame into a canvas 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn for_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn fade(&mut self, width: f64, height: f64) {
        self.ctx.set_fill_style_str(TRAIL_FILL);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn dot(&mut self, particle: &Particle) {
        self.ctx.save();
        self.ctx.set_global_alpha(particle.alpha);
        self.ctx.set_fill_style_str(particle.color);
        self.ctx.begin_path();
        let _ = self.ctx.arc(particle.x, particle.y, particle.size, 0.0, TAU);
        self.ctx.fill();
        self.ctx.restore();
    }

    fn link(&mut self, from: &Particle, to: &Particle, alpha: f64) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha);
        self.ctx.set_stroke_style_str(from.color);
        self.ctx.set_line_width(0.5);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
        self.ctx.restore();
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    #[prop_or(30)]
    pub count: usize,
    #[prop_or(80.0)]
    pub connection_distance: f64,
    /// Peak starting velocity in pixels per frame.
    #[prop_or(0.5)]
    pub speed: f64,
    #[prop_or_default]
    pub class: Classes,
}

impl From<&ParticleFieldProps> for FieldConfig {
    fn from(props: &ParticleFieldProps) -> Self {
        Self {
            count: props.count,
            connection_distance: props.connection_distance,
            speed: props.speed,
            ..FieldConfig::default()
        }
    }
}

/// Decorative particle canvas that fills its positioned parent.
#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let canvas_ref = use_node_ref();
    let motion = use_motion();

    let config = FieldConfig::from(props);

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(config, compact)| {
                let field = Rc::new(RefCell::new(Field::new(config.clone())));
                let rng = Rc::new(RefCell::new(SmallRng::seed_from_u64(Date::now() as u64)));
                let count = config.count_for(*compact);

                let resize = {
                    let canvas_ref = canvas_ref.clone();
                    let field = field.clone();
                    move || {
                        let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                            return;
                        };
                        let (width, height) = (canvas.offset_width().max(0), canvas.offset_height().max(0));
                        canvas.set_width(width as u32);
                        canvas.set_height(height as u32);
                        field.borrow_mut().reseed(
                            f64::from(width),
                            f64::from(height),
                            count,
                            &mut *rng.borrow_mut(),
                        );
                    }
                };
                resize();
                let resize_listener =
                    web_sys::window().map(|window| EventListener::new(&window, "resize", move |_| resize()));

                let frames = canvas_ref.cast::<Element>().map(|element| {
                    let canvas_ref = canvas_ref.clone();
                    let field = field.clone();
                    ObservedLoop::new(&element, move |_| {
                        // unmounted: stop asking for frames
                        let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                            return ControlFlow::Break(());
                        };
                        if let Some(mut surface) = CanvasSurface::for_canvas(&canvas) {
                            field.borrow_mut().frame(&mut surface);
                        }
                        ControlFlow::Continue(())
                    })
                });

                let frames = frames.map(Rc::new);
                // pause while the tab is hidden
                let tab_listener = frames.clone().and_then(|frames| {
                    let document = web_sys::window()?.document()?;
                    Some(EventListener::new(&document.clone(), "visibilitychange", move |_| {
                        if document.hidden() {
                            frames.stop();
                        } else {
                            frames.start();
                        }
                    }))
                });

                move || {
                    drop(tab_listener);
                    drop(frames);
                    drop(resize_listener);
                    field.borrow_mut().clear();
                }
            },
            (config, motion.capabilities.is_mobile),
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class={classes!("particle-field", props.class.clone())}
            aria-hidden="true"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_shape_the_field() {
        let props = ParticleFieldProps {
            count: 60,
            connection_distance: 120.0,
            speed: 0.3,
            class: Classes::new(),
        };
        let config = FieldConfig::from(&props);
        assert_eq!(config.count, 60);
        assert_eq!(config.connection_distance, 120.0);
        assert_eq!(config.speed, 0.3);
        assert_eq!(config.max_connections, FieldConfig::default().max_connections);

        let mut field = Field::new(config);
        let mut rng = SmallRng::seed_from_u64(3);
        field.reseed(800.0, 600.0, 60, &mut rng);
        assert!(field
            .particles()
            .iter()
            .all(|p| p.vx.abs() <= 0.15 && p.vy.abs() <= 0.15));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas = document
            .create_element("canvas")
            .unwrap()
            .dyn_into::<HtmlCanvasElement>()
            .unwrap();
        canvas.set_width(width);
        canvas.set_height(height);
        canvas
    }

    #[wasm_bindgen_test]
    fn canvas_surface_draws_a_frame() {
        let canvas = canvas(200, 100);
        let mut surface = CanvasSurface::for_canvas(&canvas).expect("2d context");
        let mut field = Field::new(FieldConfig::default());
        let mut rng = SmallRng::seed_from_u64(11);
        field.reseed(200.0, 100.0, 12, &mut rng);

        for _ in 0..10 {
            field.frame(&mut surface);
        }

        for particle in field.particles() {
            assert!(particle.x >= 0.0 && particle.x <= 200.0);
            assert!(particle.y >= 0.0 && particle.y <= 100.0);
        }
    }
}

use gloo_timers::callback::Interval;
use js_sys::Math;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::providers::use_theme;

const PARTICLE_COUNT: usize = 60;

#[derive(Clone)]
struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    size: f64,
}

impl Particle {
    fn new(width: f64, height: f64) -> Self {
        Self {
            x: Math::random() * width,
            y: Math::random() * height,
            vx: (Math::random() - 0.5) * 0.6,
            vy: (Math::random() - 0.5) * 0.6,
            size: Math::random() * 2.5 + 0.5,
        }
    }

    fn update(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        // Wrap around the edges so the field never empties out
        if self.x < -10.0 {
            self.x = width + 10.0;
        } else if self.x > width + 10.0 {
            self.x = -10.0;
        }
        if self.y < -10.0 {
            self.y = height + 10.0;
        } else if self.y > height + 10.0 {
            self.y = -10.0;
        }
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d, color: &str) {
        ctx.begin_path();
        ctx.arc(self.x, self.y, self.size, 0.0, std::f64::consts::PI * 2.0)
            .ok();
        #[allow(warnings)]
        ctx.set_fill_style(&wasm_bindgen::JsValue::from_str(color));
        ctx.fill();
    }
}

/// Cosmetic drifting particle field rendered behind the page content.
/// Restarts its animation with a theme-appropriate color whenever the
/// dark-mode flag flips.
#[function_component(ParticleField)]
pub fn particle_field() -> Html {
    let theme = use_theme();
    let canvas_ref = use_node_ref();
    let particles = use_mut_ref(Vec::<Particle>::new);
    let interval_handle = use_mut_ref(|| None::<Interval>);

    {
        let canvas_ref = canvas_ref.clone();
        let particles = particles.clone();
        let interval_handle = interval_handle.clone();

        use_effect_with(theme.dark_mode, move |dark_mode| {
            let color = if *dark_mode { "#94a3b8" } else { "#475569" }.to_string();

            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let width = canvas.width() as f64;
                let height = canvas.height() as f64;

                {
                    let mut particles_borrow = particles.borrow_mut();
                    if particles_borrow.is_empty() {
                        for _ in 0..PARTICLE_COUNT {
                            particles_borrow.push(Particle::new(width, height));
                        }
                    }
                }

                let particles_inner = particles.clone();
                let canvas_ref_inner = canvas_ref.clone();

                let interval = Interval::new(33, move || {
                    if let Some(canvas) = canvas_ref_inner.cast::<HtmlCanvasElement>() {
                        let ctx: CanvasRenderingContext2d = canvas
                            .get_context("2d")
                            .unwrap()
                            .unwrap()
                            .dyn_into()
                            .unwrap();

                        let width = canvas.width() as f64;
                        let height = canvas.height() as f64;

                        ctx.clear_rect(0.0, 0.0, width, height);

                        let mut particles_borrow = particles_inner.borrow_mut();
                        for particle in particles_borrow.iter_mut() {
                            particle.update(width, height);
                            particle.draw(&ctx, &color);
                        }
                    }
                });

                *interval_handle.borrow_mut() = Some(interval);
            }

            let interval_handle = interval_handle.clone();
            move || {
                *interval_handle.borrow_mut() = None;
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="fixed inset-0 -z-10 h-full w-full"
            width="1920"
            height="1080"
        />
    }
}

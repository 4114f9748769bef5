//! Decorative floating particles, regenerated whenever the theme changes.

use rand::Rng;
use yew::prelude::*;

use crate::config;
use crate::theme::{use_theme, Theme};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub opacity: f64,
    /// Percent of the viewport width.
    pub left: f64,
    /// Percent of the viewport height.
    pub top: f64,
    /// Seconds per drift loop.
    pub duration: f64,
    /// Horizontal offset in px reached at the top of the drift.
    pub drift: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub color: &'static str,
    pub glow: &'static str,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            color: "#00FF88",
            glow: "rgba(0, 255, 136, 0.4)",
        },
        Theme::Light => Palette {
            color: "#1B7F4C",
            glow: "rgba(27, 127, 76, 0.3)",
        },
    }
}

pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            size: rng.gen_range(2.0..6.0),
            opacity: rng.gen_range(0.1..0.4),
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            duration: rng.gen_range(10.0..20.0),
            drift: rng.gen_range(-100.0..100.0),
        })
        .collect()
}

impl Particle {
    fn style(&self, palette: Palette) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; opacity: {opacity:.2}; left: {left:.2}%; top: {top:.2}%; \
             background: {color}; box-shadow: 0 0 10px {glow}; --drift: {drift:.0}px; \
             animation: float-particle {duration:.2}s linear infinite;",
            size = self.size,
            opacity = self.opacity,
            left = self.left,
            top = self.top,
            color = palette.color,
            glow = palette.glow,
            drift = self.drift,
            duration = self.duration,
        )
    }
}

const PARTICLE_CSS: &str = r#"
    .particles-container {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        pointer-events: none;
        z-index: 1;
        overflow: hidden;
    }
    .particle {
        position: absolute;
        border-radius: 50%;
    }
    @keyframes float-particle {
        0% { transform: translateY(100vh) translateX(0px); opacity: 0; }
        10% { opacity: 0.3; }
        90% { opacity: 0.1; }
        100% { transform: translateY(-100vh) translateX(var(--drift)); opacity: 0; }
    }
"#;

#[function_component(Particles)]
pub fn particles() -> Html {
    let theme = use_theme().map(|ctx| ctx.state.value).unwrap_or_default();
    let particles = use_memo(
        |_| generate(&mut rand::thread_rng(), config::PARTICLE_COUNT),
        theme,
    );
    let palette = palette(theme);

    html! {
        <div class="particles-container" aria-hidden="true">
            <style>{PARTICLE_CSS}</style>
            { for particles.iter().enumerate().map(|(i, particle)| html! {
                // theme in the key so a switch mounts fresh elements
                <div key={format!("{}-{}", theme, i)} class="particle" style={particle.style(palette)}></div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_the_requested_count_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let particles = generate(&mut rng, config::PARTICLE_COUNT);
        assert_eq!(particles.len(), 20);
        for p in &particles {
            assert!((2.0..6.0).contains(&p.size));
            assert!((0.1..0.4).contains(&p.opacity));
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((10.0..20.0).contains(&p.duration));
            assert!((-100.0..100.0).contains(&p.drift));
        }
    }

    #[test]
    fn particles_are_independently_randomized() {
        let mut rng = StdRng::seed_from_u64(42);
        let particles = generate(&mut rng, 2);
        assert_ne!(particles[0], particles[1]);
    }

    #[test]
    fn palette_differs_per_theme() {
        assert_ne!(palette(Theme::Dark), palette(Theme::Light));
    }

    #[test]
    fn style_carries_theme_color_and_drift() {
        let particle = Particle {
            size: 3.0,
            opacity: 0.25,
            left: 10.0,
            top: 50.0,
            duration: 12.5,
            drift: -40.0,
        };
        let style = particle.style(palette(Theme::Dark));
        assert!(style.contains("background: #00FF88"));
        assert!(style.contains("--drift: -40px"));
        assert!(style.contains("float-particle 12.50s"));
    }
}

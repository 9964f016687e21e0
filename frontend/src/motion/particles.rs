use rand::Rng;

pub const DEFAULT_PALETTE: &[&str] = &["#00d4ff", "#a855f7", "#22c55e"];
pub const FRICTION: f64 = 0.999;
/// Peak opacity of a connecting line, reached as the distance approaches zero.
pub const LINK_ALPHA: f64 = 0.15;
/// Translucent fill painted over the previous frame, leaving short trails.
pub const TRAIL_FILL: &str = "rgba(10, 15, 28, 0.1)";

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub palette: &'static [&'static str],
    pub min_size: f64,
    pub max_size: f64,
    pub speed: f64,
    pub connection_distance: f64,
    pub max_connections: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 30,
            palette: DEFAULT_PALETTE,
            min_size: 1.0,
            max_size: 3.0,
            speed: 0.5,
            connection_distance: 80.0,
            max_connections: 2,
        }
    }
}

impl FieldConfig {
    /// Narrow viewports get a third of the particles.
    pub fn count_for(&self, compact: bool) -> usize {
        if compact {
            self.count / 3
        } else {
            self.count
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub alpha: f64,
    pub color: &'static str,
}

impl Particle {
    fn distance_sq(&self, other: &Particle) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Moves one step, damps, bounces off the edges and clamps into
    /// `[0, width] x [0, height]`.
    fn advance(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;

        self.vx *= FRICTION;
        self.vy *= FRICTION;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }

        self.x = self.x.min(width).max(0.0);
        self.y = self.y.min(height).max(0.0);
    }
}

/// Where a frame gets drawn. The canvas implementation lives next to the
/// component; tests record calls instead.
pub trait Surface {
    fn fade(&mut self, width: f64, height: f64);
    fn dot(&mut self, particle: &Particle);
    fn link(&mut self, from: &Particle, to: &Particle, alpha: f64);
}

/// The particle store for one canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
        }
    }

    /// Replaces the whole batch for a surface of the given size.
    pub fn reseed<R: Rng + ?Sized>(&mut self, width: f64, height: f64, count: usize, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        let FieldConfig {
            palette,
            min_size,
            max_size,
            speed,
            ..
        } = self.config;

        self.particles = (0..count)
            .map(|_| Particle {
                x: rng.gen::<f64>() * self.width,
                y: rng.gen::<f64>() * self.height,
                vx: (rng.gen::<f64>() - 0.5) * speed,
                vy: (rng.gen::<f64>() - 0.5) * speed,
                size: rng.gen::<f64>() * (max_size - min_size) + min_size,
                alpha: rng.gen::<f64>() * 0.5 + 0.2,
                color: if palette.is_empty() {
                    "#ffffff"
                } else {
                    palette[rng.gen_range(0..palette.len())]
                },
            })
            .collect();
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    #[cfg(test)]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Opacity of the line between two points `distance` apart, or `None`
    /// when they are too far apart to be linked.
    pub fn link_alpha(&self, distance: f64) -> Option<f64> {
        let threshold = self.config.connection_distance;
        if distance < threshold {
            Some((1.0 - distance / threshold) * LINK_ALPHA)
        } else {
            None
        }
    }

    /// Advances every particle one step and draws the result.
    ///
    /// Each particle links to at most `max_connections` later neighbours,
    /// which are read before they move this frame.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let (width, height) = (self.width, self.height);
        let threshold_sq = self.config.connection_distance * self.config.connection_distance;
        let max_connections = self.config.max_connections;

        surface.fade(width, height);

        for i in 0..self.particles.len() {
            self.particles[i].advance(width, height);

            let (head, tail) = self.particles.split_at(i + 1);
            let particle = &head[i];
            surface.dot(particle);

            let mut links = 0;
            for other in tail {
                if links >= max_connections {
                    break;
                }
                let distance_sq = particle.distance_sq(other);
                if distance_sq < threshold_sq {
                    if let Some(alpha) = self.link_alpha(distance_sq.sqrt()) {
                        surface.link(particle, other, alpha);
                        links += 1;
                    }
                }
            }
        }
    }

    /// Advances without drawing.
    #[cfg(test)]
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    #[cfg(test)]
    fn with_particles(config: FieldConfig, width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            config,
            width,
            height,
            particles,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        fades: usize,
        dots: Vec<(f64, f64)>,
        links: Vec<(usize, usize, f64)>,
        positions: Vec<(f64, f64)>,
    }

    impl Recorder {
        fn index_of(&self, p: &Particle) -> usize {
            self.positions
                .iter()
                .position(|&(x, y)| x == p.x && y == p.y)
                .unwrap_or(usize::MAX)
        }
    }

    impl Surface for Recorder {
        fn fade(&mut self, _: f64, _: f64) {
            self.fades += 1;
        }

        fn dot(&mut self, particle: &Particle) {
            self.dots.push((particle.x, particle.y));
        }

        fn link(&mut self, from: &Particle, to: &Particle, alpha: f64) {
            let (a, b) = (self.index_of(from), self.index_of(to));
            self.links.push((a, b, alpha));
        }
    }

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            size: 2.0,
            alpha: 0.5,
            color: "#00d4ff",
        }
    }

    #[test]
    fn positions_stay_in_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        for count in [0, 1, 5, 30, 90] {
            for &(width, height) in &[(0.0, 0.0), (1.0, 1.0), (320.0, 480.0), (1920.0, 600.0)] {
                let mut field = ParticleField::new(FieldConfig {
                    speed: 40.0,
                    ..FieldConfig::default()
                });
                field.reseed(width, height, count, &mut rng);
                assert_eq!(field.particles().len(), count);

                for _ in 0..500 {
                    field.step();
                    for p in field.particles() {
                        assert!((0.0..=width).contains(&p.x), "x={} width={}", p.x, width);
                        assert!((0.0..=height).contains(&p.y), "y={} height={}", p.y, height);
                    }
                }
            }
        }
    }

    #[test]
    fn velocity_decays_and_reflects_at_the_edge() {
        let mut particle = Particle {
            vx: 5.0,
            vy: -1.0,
            ..still(98.0, 50.0)
        };
        particle.advance(100.0, 100.0);

        assert_eq!(particle.x, 100.0);
        assert!(particle.vx < 0.0);
        assert!(particle.vx.abs() < 5.0);
        assert!((particle.vy - (-1.0 * FRICTION)).abs() < 1e-12);
    }

    #[test]
    fn reseed_uses_palette_and_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        let config = FieldConfig::default();
        let mut field = ParticleField::new(config.clone());
        field.reseed(800.0, 600.0, 200, &mut rng);

        for p in field.particles() {
            assert!(config.palette.contains(&p.color));
            assert!(p.size >= config.min_size && p.size <= config.max_size);
            assert!(p.alpha >= 0.2 && p.alpha <= 0.7);
            assert!(p.vx.abs() <= config.speed / 2.0);
        }
    }

    #[test]
    fn compact_viewports_get_a_third() {
        let config = FieldConfig::default();
        assert_eq!(config.count_for(false), 30);
        assert_eq!(config.count_for(true), 10);
    }

    #[test]
    fn far_pairs_are_not_linked() {
        let config = FieldConfig::default();
        let mut field =
            ParticleField::with_particles(config, 500.0, 500.0, vec![still(10.0, 10.0), still(200.0, 10.0)]);
        let mut recorder = Recorder {
            positions: field.particles().iter().map(|p| (p.x, p.y)).collect(),
            ..Recorder::default()
        };
        field.frame(&mut recorder);

        assert_eq!(recorder.fades, 1);
        assert_eq!(recorder.dots.len(), 2);
        assert!(recorder.links.is_empty());
    }

    #[test]
    fn near_pairs_are_linked_with_fading_alpha() {
        let config = FieldConfig::default();
        let mut field = ParticleField::with_particles(
            config,
            500.0,
            500.0,
            vec![still(10.0, 10.0), still(50.0, 10.0), still(89.0, 10.0)],
        );
        let mut recorder = Recorder {
            positions: field.particles().iter().map(|p| (p.x, p.y)).collect(),
            ..Recorder::default()
        };
        field.frame(&mut recorder);

        let first = recorder.links.iter().find(|l| l.0 == 0 && l.1 == 1).expect("0-1 link");
        let second = recorder.links.iter().find(|l| l.0 == 0 && l.1 == 2).expect("0-2 link");
        assert!(first.2 > 0.0);
        assert!(second.2 > 0.0);
        assert!(first.2 > second.2);
        assert!((first.2 - 0.5 * LINK_ALPHA).abs() < 1e-9);
    }

    #[test]
    fn threshold_distance_is_exclusive() {
        let field = ParticleField::new(FieldConfig::default());
        assert_eq!(field.link_alpha(80.0), None);
        assert_eq!(field.link_alpha(120.0), None);
        assert!(field.link_alpha(79.999).unwrap() > 0.0);
        assert_eq!(field.link_alpha(0.0), Some(LINK_ALPHA));
    }

    #[test]
    fn links_per_particle_are_capped() {
        let config = FieldConfig::default();
        let cluster = (0..10).map(|n| still(100.0 + n as f64, 100.0)).collect();
        let mut field = ParticleField::with_particles(config.clone(), 500.0, 500.0, cluster);
        let mut recorder = Recorder {
            positions: field.particles().iter().map(|p| (p.x, p.y)).collect(),
            ..Recorder::default()
        };
        field.frame(&mut recorder);

        for i in 0..10 {
            let outgoing = recorder.links.iter().filter(|l| l.0 == i).count();
            assert!(outgoing <= config.max_connections);
        }
        assert_eq!(recorder.links.len(), 9 * 2 - 1);
    }

    #[test]
    fn clear_empties_the_store() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut field = ParticleField::new(FieldConfig::default());
        field.reseed(100.0, 100.0, 12, &mut rng);
        field.clear();
        assert!(field.particles().is_empty());
    }
}

use rand::seq::SliceRandom;
use rand::Rng;
use std::time::SystemTime;

const BALLOONS: [char; 4] = ['🎈', '🎉', '✨', '⭐'];
const CHEERS: [&str; 5] = ["YOU GOT IT!", "WELL DONE!", "BRILLIANT!", "SPOT ON!", "NAILED IT!"];

/// A single balloon or a letter of the cheer banner
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
    pub age: f64,
    pub max_age: f64,
    pub is_text: bool,
    pub target_x: f64,
    pub target_y: f64,
}

impl Particle {
    fn balloon<R: Rng + ?Sized>(x: f64, y: f64, rng: &mut R) -> Self {
        Self {
            x,
            y,
            vel_x: rng.gen_range(-0.8..0.8),
            vel_y: rng.gen_range(-3.0..-1.0),
            symbol: *BALLOONS.choose(rng).unwrap_or(&'🎈'),
            color_index: rng.gen_range(0..7),
            age: 0.0,
            max_age: rng.gen_range(2.5..4.5),
            is_text: false,
            target_x: x,
            target_y: y,
        }
    }

    fn letter(x: f64, y: f64, target_x: f64, target_y: f64, symbol: char, color: usize) -> Self {
        Self {
            x,
            y,
            vel_x: target_x - x,
            vel_y: target_y - y,
            symbol,
            color_index: color,
            age: 0.0,
            max_age: 4.0,
            is_text: true,
            target_x,
            target_y,
        }
    }

    fn update(&mut self, dt: f64) -> bool {
        if self.is_text {
            let dist = ((self.target_x - self.x).powi(2) + (self.target_y - self.y).powi(2)).sqrt();
            if dist > 1.0 {
                self.x += self.vel_x * dt;
                self.y += self.vel_y * dt;
                self.vel_x *= 0.95;
                self.vel_y *= 0.95;
            } else {
                self.x = self.target_x;
                self.y = self.target_y;
                self.vel_x = 0.0;
                self.vel_y = 0.0;
            }
        } else {
            // balloons drift upwards and pick up speed as they go
            self.x += self.vel_x * dt;
            self.y += self.vel_y * dt;
            self.vel_y -= 2.0 * dt;
        }

        self.age += dt;
        self.age < self.max_age
    }
}

/// Balloons and a cheer shown when the word is found
#[derive(Debug)]
pub struct Celebration {
    pub particles: Vec<Particle>,
    pub start_time: SystemTime,
    pub duration: f64,
    pub is_active: bool,
    pub width: f64,
    pub height: f64,
}

impl Celebration {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            start_time: SystemTime::now(),
            duration: 3.5,
            is_active: false,
            width: 80.0,
            height: 24.0,
        }
    }

    pub fn start(&mut self, width: u16, height: u16) {
        let mut rng = rand::thread_rng();

        self.particles.clear();
        self.start_time = SystemTime::now();
        self.is_active = true;
        self.width = width as f64;
        self.height = height as f64;

        let cheer = CHEERS.choose(&mut rng).unwrap_or(&"YOU GOT IT!");
        self.spell(cheer, &mut rng);

        // balloons start along the bottom edge
        for _ in 0..30 {
            let x = rng.gen_range(0.0..self.width.max(1.0));
            let y = self.height - rng.gen_range(0.0..3.0);
            self.particles.push(Particle::balloon(x, y, &mut rng));
        }
    }

    fn spell<R: Rng + ?Sized>(&mut self, text: &str, rng: &mut R) {
        let spacing = 2.0;
        let center_x = self.width / 2.0;
        let center_y = self.height / 3.0;
        let text_width = (text.chars().count() as f64 - 1.0) * spacing;
        let left = center_x - text_width / 2.0;

        for (i, ch) in text.chars().enumerate() {
            if ch == ' ' {
                continue;
            }
            let from_x = center_x + rng.gen_range(-10.0..10.0);
            let from_y = self.height - 1.0;
            self.particles.push(Particle::letter(
                from_x,
                from_y,
                left + i as f64 * spacing,
                center_y,
                ch,
                rng.gen_range(0..7),
            ));
        }
    }

    pub fn stop(&mut self) {
        self.is_active = false;
        self.particles.clear();
    }

    pub fn update(&mut self) {
        if !self.is_active {
            return;
        }

        let elapsed = self.start_time.elapsed().unwrap_or_default().as_secs_f64();
        if elapsed >= self.duration {
            self.stop();
            return;
        }

        let dt = 0.1;
        let margin = 5.0;
        let width = self.width;
        self.particles.retain_mut(|p| {
            let alive = p.update(dt);
            if p.is_text {
                alive
            } else {
                let gone = p.y < -margin || p.x < -margin || p.x > width + margin;
                alive && !gone
            }
        });
    }
}

impl Default for Celebration {
    fn default() -> Self {
        Self::new()
    }
}

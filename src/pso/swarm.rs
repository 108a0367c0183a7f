//! Fixed-size ordered particle collection.

use rand::Rng;

use super::particle::Particle;

/// The particles under optimization, in a stable evaluation order.
///
/// Created once per run; particles are mutated in place and never added
/// or removed.
#[derive(Debug, Clone)]
pub struct Swarm {
    particles: Vec<Particle>,
}

impl Swarm {
    /// Scatters `count` independent particles around `series`.
    ///
    /// Particles are drawn in order, so a seeded `rng` yields the same swarm
    /// every time.
    pub fn scattered_around<R: Rng + ?Sized>(series: &[f64], count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle::scattered_around(series, rng))
            .collect();
        Self { particles }
    }

    /// Wraps an explicit particle set.
    #[cfg(test)]
    pub(crate) fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }
}

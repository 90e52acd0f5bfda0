//! Ordered entity collection owned by a single view.

use glam::Vec2;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Mutable, ordered collection of simulated entities.
///
/// A store is created when its view activates and dropped with it; nothing
/// holds a reference across views.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityStore<T> {
    entities: Vec<T>,
}

impl<T> EntityStore<T> {
    /// Build `count` entities, calling `seed` with each index in order
    pub fn seed_with<F>(count: usize, seed: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self {
            entities: (0..count).map(seed).collect(),
        }
    }

    pub fn from_vec(entities: Vec<T>) -> Self {
        Self { entities }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entities.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entities
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.entities
    }
}

impl<'a, T> IntoIterator for &'a EntityStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

/// Sample uniformly from `[low, high)`, or return `low` for an empty range
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        Uniform::new(low, high).sample(rng)
    } else {
        low
    }
}

/// Sample a point uniformly inside `[min, max)` on both axes
pub(crate) fn uniform_point<R: Rng + ?Sized>(rng: &mut R, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(uniform(rng, min.x, max.x), uniform(rng, min.y, max.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seed_with_preserves_order() {
        let store = EntityStore::seed_with(4, |i| i * 10);
        assert_eq!(store.as_slice(), &[0, 10, 20, 30]);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_uniform_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(uniform(&mut rng, 3.0, 3.0), 3.0);
        assert_eq!(uniform(&mut rng, 5.0, 1.0), 5.0);
        for _ in 0..100 {
            let v = uniform(&mut rng, -1.0, 1.0);
            assert!((-1.0..1.0).contains(&v));
        }
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source d'aléa injectable : seule non-détermination du moteur.
///
/// Les tests fournissent une séquence scriptée pour obtenir des plannings
/// exacts ; la production tire dans le RNG du thread.
pub trait RandomSource {
    /// Renvoie un indice uniforme dans `0..len`. `len` est toujours > 0.
    fn pick(&mut self, len: usize) -> usize;
}

/// Source de production : `rand::thread_rng()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Source déterministe dérivée d'une graine (option `--seed` du CLI).
#[derive(Debug, Clone)]
pub struct SeededSource(StdRng);

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededSource {
    fn pick(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Source scriptée : rejoue une séquence d'indices, modulo la taille du
/// tirage, puis retombe sur 0 une fois la séquence épuisée.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new<I: IntoIterator<Item = usize>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        self.script.pop_front().map_or(0, |i| i % len)
    }
}

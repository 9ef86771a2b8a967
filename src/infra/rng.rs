use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::domain::dice::{Face, MAX_FACE, MIN_FACE};
use crate::engine::RandomSource;

/// Системный RNG (thread_rng) для обычной игры.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn roll_die(&mut self) -> Face {
        thread_rng().gen_range(MIN_FACE..=MAX_FACE)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одну и ту же партию при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn roll_die(&mut self) -> Face {
        self.inner.gen_range(MIN_FACE..=MAX_FACE)
    }

    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// RNG с заранее заданными гранями.
///
/// Отдаёт грани по очереди; когда очередь пуста, продолжает с `fallback`.
/// `shuffle` порядок не меняет, так что колода раздаётся в исходном порядке
/// (рынок берёт карты с конца списка).
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    faces: VecDeque<Face>,
    fallback: Face,
}

impl ScriptedRng {
    /// Грани вне 1..=6 прижимаются к границам.
    pub fn new(faces: impl IntoIterator<Item = Face>) -> Self {
        Self {
            faces: faces
                .into_iter()
                .map(|f| f.clamp(MIN_FACE, MAX_FACE))
                .collect(),
            fallback: MIN_FACE,
        }
    }

    pub fn with_fallback(mut self, fallback: Face) -> Self {
        self.fallback = fallback.clamp(MIN_FACE, MAX_FACE);
        self
    }

    /// Добавить грани в конец очереди.
    pub fn push_faces(&mut self, faces: impl IntoIterator<Item = Face>) {
        self.faces
            .extend(faces.into_iter().map(|f| f.clamp(MIN_FACE, MAX_FACE)));
    }

    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl RandomSource for ScriptedRng {
    fn roll_die(&mut self) -> Face {
        self.faces.pop_front().unwrap_or(self.fallback)
    }

    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! "Name this note": one highlighted cell, four note names to choose from.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use super::QuizFilter;
use crate::music::{FretPosition, Key, Note};

/// Wrong answers offered next to the right one
pub const DISTRACTORS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindNoteQuiz {
    pub position: FretPosition,
    pub answer: &'static str,
    /// The answer plus the distractors, shuffled
    pub choices: Vec<&'static str>,
}

impl FindNoteQuiz {
    pub fn generate<R: Rng + ?Sized>(key: &Key, filter: &QuizFilter, rng: &mut R) -> Option<Self> {
        let candidates = filter.candidates(key);
        let Some(&position) = candidates.choose(rng) else {
            debug!(%key, "no in-key cell inside the quiz filter");
            return None;
        };

        let answer = key.name_of(position.note());
        let others: Vec<&'static str> = key
            .spelled_names()
            .iter()
            .copied()
            .filter(|&name| name != answer)
            .collect();

        let mut choices: Vec<&'static str> =
            others.choose_multiple(rng, DISTRACTORS).copied().collect();
        choices.push(answer);
        choices.shuffle(rng);

        Some(Self {
            position,
            answer,
            choices,
        })
    }

    /// Accepts the key's spelling or any enharmonic name of the same note
    pub fn check(&self, name: &str) -> bool {
        name == self.answer
            || name
                .parse::<Note>()
                .map_or(false, |note| note == self.position.note())
    }
}

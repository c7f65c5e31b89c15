// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! "Find every X": name a natural note, the player marks all its cells.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use super::QuizFilter;
use crate::music::{FretPosition, Key, Note};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentifyNoteQuiz {
    pub target: Note,
    /// Spelling in the quiz key
    pub name: &'static str,
}

/// Result of comparing the player's marks against the target cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GridScore {
    /// Target cells the player marked
    pub correct: usize,
    /// Marked cells that are not the target
    pub incorrect: usize,
    /// Target cells left unmarked
    pub missed: usize,
}

impl GridScore {
    pub fn is_perfect(&self) -> bool {
        self.incorrect == 0 && self.missed == 0
    }
}

impl IdentifyNoteQuiz {
    /// Pick a natural note of `key` that occurs somewhere inside `filter`
    pub fn generate<R: Rng + ?Sized>(key: &Key, filter: &QuizFilter, rng: &mut R) -> Option<Self> {
        let candidates = filter.candidates(key);
        let names: Vec<(Note, &'static str)> = key
            .notes()
            .iter()
            .zip(key.spelled_names().iter())
            .filter(|(_, name)| !name.contains(['♯', '♭']))
            .filter(|(note, _)| candidates.iter().any(|pos| pos.note() == **note))
            .map(|(note, name)| (*note, *name))
            .collect();

        let Some(&(target, name)) = names.choose(rng) else {
            debug!(%key, "no natural note inside the quiz filter");
            return None;
        };
        Some(Self { target, name })
    }

    /// Diff the marked cells against every target cell inside `filter`.
    ///
    /// Marks outside the filter are ignored.
    pub fn score(&self, selected: &[FretPosition], filter: &QuizFilter) -> GridScore {
        let mut score = GridScore::default();
        for cell in filter.cells() {
            let is_target = cell.note() == self.target;
            let is_marked = selected.contains(&cell);
            match (is_target, is_marked) {
                (true, true) => score.correct += 1,
                (false, true) => score.incorrect += 1,
                (true, false) => score.missed += 1,
                (false, false) => {}
            }
        }
        score
    }
}

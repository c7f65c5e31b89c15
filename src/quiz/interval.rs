// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! "Which degree is this?": one highlighted in-key cell.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use super::QuizFilter;
use crate::music::{interval_label, FretPosition, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntervalQuiz {
    pub position: FretPosition,
    /// Scale degree of the cell, 1-7
    pub degree: u8,
}

impl IntervalQuiz {
    pub fn generate<R: Rng + ?Sized>(key: &Key, filter: &QuizFilter, rng: &mut R) -> Option<Self> {
        let candidates = filter.candidates(key);
        let Some(&position) = candidates.choose(rng) else {
            debug!(%key, "no in-key cell inside the quiz filter");
            return None;
        };
        let degree = key.degree_of(position.note())?;
        Some(Self { position, degree })
    }

    pub fn check(&self, degree: u8) -> bool {
        degree == self.degree
    }

    /// Answer label as shown on the neck (R, 2 ... 7)
    pub fn label(&self) -> &'static str {
        interval_label(self.degree).unwrap_or("?")
    }
}

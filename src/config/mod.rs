// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration system for the trainer.
//!
//! A trainer file stores what the neck shows (key, mode and the per-mode
//! selectors) and how quizzes are filtered. Values are kept as plain
//! strings and indices so the file stays hand-editable; `selection()` and
//! `quiz_filter()` turn them into the typed values the engines accept.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::fretboard::{Inversion, ScaleForm, Selection, ShapeFilter, TrainingMode, TriadShape};
use crate::music::{Note, MAX_FRET};
use crate::quiz::{FretRegion, QuizFilter};

/// Root configuration document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TrainerFile {
    /// What the neck shows
    #[serde(default)]
    pub trainer: TrainerConfig,
    /// Quiz filtering
    #[serde(default)]
    pub quiz: QuizConfig,
}

impl TrainerFile {
    /// Load a trainer configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_yaml(&contents)
    }

    /// Parse a trainer configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// Typed overlay selection
    pub fn selection(&self) -> Result<Selection, TheoryError> {
        let trainer = &self.trainer;
        Ok(Selection {
            root: trainer.key.parse::<Note>()?,
            mode: trainer.mode,
            form: ScaleForm::from_index(trainer.form)?,
            position_fret: checked_position_fret(trainer.position_fret)?,
            shape_filter: trainer.caged_shape.parse::<ShapeFilter>()?,
            inversion: Inversion::from_index(trainer.inversion)?,
            triad_shape: TriadShape::from_index(trainer.triad_shape)?,
            diagonal_set: trainer.diagonal_set,
        })
    }

    /// Typed quiz filter
    pub fn quiz_filter(&self) -> Result<QuizFilter, TheoryError> {
        let region = FretRegion::new(self.quiz.region_start, self.quiz.region_end)?;
        Ok(QuizFilter {
            region,
            strings: self.quiz.strings,
        })
    }

    /// Quiz RNG, seeded from `quiz.seed` when one is set
    pub fn quiz_rng(&self) -> StdRng {
        match self.quiz.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn checked_position_fret(fret: u8) -> Result<u8, TheoryError> {
    if fret > MAX_FRET {
        return Err(TheoryError::PositionFret { fret });
    }
    Ok(fret)
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainerConfig {
    /// Key root (e.g., "C", "F#", "Bb")
    #[serde(default = "default_key")]
    pub key: String,
    #[serde(default)]
    pub mode: TrainingMode,
    /// Scale form index (0-6)
    #[serde(default)]
    pub form: usize,
    /// Fret under the first finger in one-fret-rule mode
    #[serde(default = "default_position_fret")]
    pub position_fret: u8,
    /// "all" or one of C, A, G, E, D
    #[serde(default = "default_caged_shape")]
    pub caged_shape: String,
    /// Triad inversion index (0-2)
    #[serde(default)]
    pub inversion: usize,
    /// Triad shape index (0-15)
    #[serde(default = "default_triad_shape")]
    pub triad_shape: usize,
    /// Which of the two diagonal pentatonic sets (0 or 1)
    #[serde(default)]
    pub diagonal_set: usize,
}

fn default_key() -> String {
    "C".to_string()
}
fn default_position_fret() -> u8 {
    1
}
fn default_caged_shape() -> String {
    "all".to_string()
}
fn default_triad_shape() -> usize {
    // G-B-E major
    12
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            mode: TrainingMode::default(),
            form: 0,
            position_fret: default_position_fret(),
            caged_shape: default_caged_shape(),
            inversion: 0,
            triad_shape: default_triad_shape(),
            diagonal_set: 0,
        }
    }
}

/// Quiz settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizConfig {
    /// First fret of the quiz region
    #[serde(default)]
    pub region_start: u8,
    /// Last fret of the quiz region (inclusive)
    #[serde(default = "default_region_end")]
    pub region_end: u8,
    /// Enabled strings, high E first
    #[serde(default = "default_strings")]
    pub strings: [bool; 6],
    /// Fixed RNG seed for repeatable quizzes
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_region_end() -> u8 {
    MAX_FRET
}
fn default_strings() -> [bool; 6] {
    [true; 6]
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            region_start: 0,
            region_end: default_region_end(),
            strings: default_strings(),
            seed: None,
        }
    }
}

/// Load a trainer file and check that every selector in it is valid
pub fn validate_config<P: AsRef<Path>>(path: P) -> Result<TrainerFile> {
    let file = TrainerFile::load(path.as_ref())?;
    file.selection()
        .with_context(|| format!("Invalid trainer settings in {:?}", path.as_ref()))?;
    file.quiz_filter()
        .with_context(|| format!("Invalid quiz settings in {:?}", path.as_ref()))?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::CagedShape;
    use tempfile::tempdir;

    #[test]
    fn test_parse_trainer_config() {
        let yaml = r#"
trainer:
  key: "Bb"
  mode: caged
  caged_shape: "G"

quiz:
  region_start: 5
  region_end: 9
  strings: [true, true, true, false, false, false]
  seed: 42
"#;

        let config = TrainerFile::from_yaml(yaml).unwrap();
        assert_eq!(config.trainer.key, "Bb");
        assert_eq!(config.trainer.mode, TrainingMode::Caged);
        assert_eq!(config.trainer.form, 0);
        assert_eq!(config.quiz.seed, Some(42));

        let selection = config.selection().unwrap();
        assert_eq!(selection.root, Note::As);
        assert_eq!(selection.shape_filter, ShapeFilter::Only(CagedShape::G));

        let filter = config.quiz_filter().unwrap();
        assert_eq!(filter.region, FretRegion::new(5, 9).unwrap());
        assert_eq!(filter.strings, [true, true, true, false, false, false]);
    }

    #[test]
    fn test_defaults() {
        let config = TrainerFile::from_yaml("{}").unwrap();
        assert_eq!(config, TrainerFile::default());

        let selection = config.selection().unwrap();
        assert_eq!(selection, Selection::default());
        assert_eq!(config.quiz_filter().unwrap(), QuizFilter::full());
    }

    #[test]
    fn test_invalid_selectors() {
        let config = TrainerFile::from_yaml("trainer:\n  form: 7\n").unwrap();
        assert_eq!(config.selection(), Err(TheoryError::FormIndex(7)));

        let config = TrainerFile::from_yaml("trainer:\n  key: H\n").unwrap();
        assert_eq!(config.selection(), Err(TheoryError::NoteName("H".to_string())));

        let yaml = "quiz:\n  region_start: 10\n  region_end: 2\n";
        let config = TrainerFile::from_yaml(yaml).unwrap();
        assert_eq!(
            config.quiz_filter(),
            Err(TheoryError::FretRegion { start: 10, end: 2 })
        );
    }

    #[test]
    fn test_position_fret_past_neck_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("high.yaml");
        fs::write(
            &path,
            "trainer:\n  mode: one_fret_rule\n  form: 2\n  position_fret: 254\n",
        )
        .unwrap();

        let err = validate_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Position fret 254 out of range"));

        let config = TrainerFile::from_yaml("trainer:\n  position_fret: 40\n").unwrap();
        assert_eq!(config.selection(), Err(TheoryError::PositionFret { fret: 40 }));

        let config = TrainerFile::from_yaml("trainer:\n  position_fret: 19\n").unwrap();
        assert_eq!(config.selection().unwrap().position_fret, 19);
    }

    #[test]
    fn test_quiz_section_drives_generation() {
        use crate::quiz::FindNoteQuiz;

        let yaml = r#"
trainer:
  key: G
quiz:
  region_start: 5
  region_end: 7
  strings: [false, false, false, false, false, true]
  seed: 17
"#;
        let config = TrainerFile::from_yaml(yaml).unwrap();
        let key = config.selection().unwrap().key();
        let filter = config.quiz_filter().unwrap();

        for _ in 0..5 {
            let first = FindNoteQuiz::generate(&key, &filter, &mut config.quiz_rng()).unwrap();
            let again = FindNoteQuiz::generate(&key, &filter, &mut config.quiz_rng()).unwrap();
            assert_eq!(first, again);
            // Low E frets 5-7 in G major: A and B
            assert_eq!(first.position.string, 5);
            assert!([5, 7].contains(&first.position.fret));
        }
    }

    #[test]
    fn test_unknown_mode_fails_to_parse() {
        assert!(TrainerFile::from_yaml("trainer:\n  mode: arpeggios\n").is_err());
    }

    #[test]
    fn test_round_trip() {
        let mut config = TrainerFile::default();
        config.trainer.key = "F#".to_string();
        config.trainer.mode = TrainingMode::DiagonalPentatonic;
        config.trainer.diagonal_set = 1;
        config.quiz.seed = Some(7);

        let yaml = config.to_yaml().unwrap();
        let parsed = TrainerFile::from_yaml(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("trainer.yaml");

        let mut config = TrainerFile::default();
        config.trainer.mode = TrainingMode::Triads;
        config.trainer.inversion = 2;
        config.save(&file_path).unwrap();

        let loaded = TrainerFile::load(&file_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_validate_config() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.yaml");
        let bad = dir.path().join("bad.yaml");

        fs::write(&good, "trainer:\n  key: E\n  mode: one_fret_rule\n").unwrap();
        fs::write(&bad, "trainer:\n  triad_shape: 16\n").unwrap();

        let config = validate_config(&good).unwrap();
        assert_eq!(config.trainer.mode, TrainingMode::OneFretRule);

        let err = validate_config(&bad).unwrap_err();
        assert!(format!("{:#}", err).contains("Triad shape index 16"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = TrainerFile::load(dir.path().join("missing.yaml"));
        assert!(result.is_err());
    }
}

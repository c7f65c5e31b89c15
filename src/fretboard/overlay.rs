// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! What to draw on the neck for the current training mode.
//!
//! A renderer hands over a [`Selection`] and gets back one [`Marker`] per
//! highlighted cell. Nothing here computes theory of its own; each mode
//! delegates to its engine and maps the result onto markers.

use serde::{Deserialize, Serialize};

use super::caged::{self, ShapeFilter};
use super::pentatonic::diagonal_pentatonic;
use super::positions::{position_notes, root_for_position, ScaleForm};
use super::triads::{self, Inversion, StringSet, TriadQuality, TriadShape};
use crate::music::{interval_label, FretPosition, Key, Note};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingMode {
    #[default]
    ScalePositions,
    OneFretRule,
    DiagonalPentatonic,
    Caged,
    Triads,
    Intervals,
    NoteNames,
}

impl TrainingMode {
    pub const ALL: [TrainingMode; 7] = [
        TrainingMode::ScalePositions,
        TrainingMode::OneFretRule,
        TrainingMode::DiagonalPentatonic,
        TrainingMode::Caged,
        TrainingMode::Triads,
        TrainingMode::Intervals,
        TrainingMode::NoteNames,
    ];
}

/// Everything the overlay needs to know about the trainer's state.
///
/// Fields a mode does not use are ignored. In `OneFretRule` the key comes
/// from `form` anchored at `position_fret`, not from `root`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub root: Note,
    pub mode: TrainingMode,
    pub form: ScaleForm,
    pub position_fret: u8,
    pub shape_filter: ShapeFilter,
    pub inversion: Inversion,
    pub triad_shape: TriadShape,
    /// 0 = lower diagonal, 1 = upper
    pub diagonal_set: usize,
}

impl Selection {
    pub fn new(root: Note, mode: TrainingMode) -> Self {
        Self {
            root,
            mode,
            ..Self::default()
        }
    }

    /// Key the markers are drawn in
    pub fn key(&self) -> Key {
        match self.mode {
            TrainingMode::OneFretRule => {
                Key::major(root_for_position(self.position_fret, self.form))
            }
            _ => Key::major(self.root),
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            root: Note::C,
            mode: TrainingMode::default(),
            form: ScaleForm::Ionian,
            position_fret: 1,
            shape_filter: ShapeFilter::All,
            inversion: Inversion::Root,
            triad_shape: TriadShape::new(StringSet::Gbe, TriadQuality::Major),
            diagonal_set: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Root,
    ChordTone,
    ScaleTone,
    /// Context note outside the pattern proper
    Faded,
}

/// One highlighted cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub position: FretPosition,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finger: Option<u8>,
    pub emphasis: Emphasis,
}

impl Marker {
    fn new(string: u8, fret: u8, label: &str, finger: Option<u8>, emphasis: Emphasis) -> Self {
        Self {
            position: FretPosition::new(string, fret),
            label: label.to_string(),
            finger,
            emphasis,
        }
    }
}

fn degree_emphasis(degree: u8) -> Emphasis {
    if degree == 1 {
        Emphasis::Root
    } else {
        Emphasis::ScaleTone
    }
}

fn degree_text(degree: u8) -> &'static str {
    interval_label(degree).unwrap_or("?")
}

/// Markers for `selection`, ordered by string then fret
pub fn markers(selection: &Selection) -> Vec<Marker> {
    let mut markers = match selection.mode {
        TrainingMode::ScalePositions => form_markers(selection.root, selection.form),
        TrainingMode::OneFretRule => {
            let root = root_for_position(selection.position_fret, selection.form);
            form_markers(root, selection.form)
        }
        TrainingMode::DiagonalPentatonic => {
            diagonal_markers(selection.root, selection.diagonal_set)
        }
        TrainingMode::Caged => caged_markers(selection.root, selection.shape_filter),
        TrainingMode::Triads => {
            triad_markers(selection.root, selection.inversion, selection.triad_shape)
        }
        TrainingMode::Intervals => key_markers(&selection.key(), |key, note| {
            key.degree_of(note).map(degree_text).unwrap_or("?")
        }),
        TrainingMode::NoteNames => key_markers(&selection.key(), |key, note| key.name_of(note)),
    };
    markers.sort_by_key(|marker| marker.position);
    markers
}

fn form_markers(root: Note, form: ScaleForm) -> Vec<Marker> {
    position_notes(root, form)
        .into_iter()
        .map(|note| {
            Marker::new(
                note.string,
                note.fret,
                degree_text(note.degree),
                Some(note.finger),
                degree_emphasis(note.degree),
            )
        })
        .collect()
}

fn diagonal_markers(root: Note, set: usize) -> Vec<Marker> {
    let Some(set) = diagonal_pentatonic(root).into_iter().nth(set) else {
        return Vec::new();
    };
    set.notes
        .iter()
        .map(|note| {
            let emphasis = if note.faded {
                Emphasis::Faded
            } else {
                degree_emphasis(note.degree)
            };
            let finger = (!note.faded).then_some(note.finger);
            Marker::new(note.string, note.fret, degree_text(note.degree), finger, emphasis)
        })
        .collect()
}

fn caged_markers(root: Note, filter: ShapeFilter) -> Vec<Marker> {
    FretPosition::all()
        .filter_map(|pos| caged::info_at(pos.string, pos.fret, root, filter))
        .map(|info| {
            let note = info.note;
            let (label, emphasis) = match note.tone {
                Some(tone) if note.degree == 1 => (tone.label(), Emphasis::Root),
                Some(tone) => (tone.label(), Emphasis::ChordTone),
                None => (degree_text(note.degree), Emphasis::ScaleTone),
            };
            Marker::new(note.string, note.fret, label, None, emphasis)
        })
        .collect()
}

fn triad_markers(root: Note, inversion: Inversion, shape: TriadShape) -> Vec<Marker> {
    triads::positions_for(root, inversion, shape)
        .into_iter()
        .flat_map(|voicing| voicing.notes)
        .map(|note| {
            let emphasis = if note.is_root {
                Emphasis::Root
            } else {
                Emphasis::ChordTone
            };
            Marker::new(note.string, note.fret, note.interval.label(), Some(note.finger), emphasis)
        })
        .collect()
}

fn key_markers(key: &Key, label: impl Fn(&Key, Note) -> &'static str) -> Vec<Marker> {
    FretPosition::all()
        .filter_map(|pos| {
            let note = pos.note();
            let degree = key.degree_of(note)?;
            Some(Marker::new(
                pos.string,
                pos.fret,
                label(key, note),
                None,
                degree_emphasis(degree),
            ))
        })
        .collect()
}

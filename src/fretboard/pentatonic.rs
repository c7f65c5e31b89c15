// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diagonal pentatonic patterns.
//!
//! A diagonal pattern walks the strings from low E to high E, alternating
//! between the {1, 2, 3} group (three notes) and the {5, 6} group (two notes)
//! of the major pentatonic. Each string takes the first compact cluster of
//! its group at or above the previous string's lowest fret, so the line only
//! ever climbs the neck. Two phases exist, one starting each group on low E.
//!
//! Near the top of the neck a full cluster may not fit. The walk then takes
//! a smaller cluster of the same group, and only if the group has nothing at
//! all above the floor does it accept any pentatonic degree.

use serde::Serialize;
use tracing::{debug, trace};

use crate::music::{Key, Note, Tuning, LOW_STRING, MAX_FRET, STRING_COUNT};

/// Degrees played on the strings that carry the root
const ROOT_GROUP: [u8; 3] = [1, 2, 3];

/// Degrees played on the strings between them
const FIFTH_GROUP: [u8; 2] = [5, 6];

const PENTATONIC: [u8; 5] = [1, 2, 3, 5, 6];

/// Scale tones outside the pentatonic, shown faded for context
const CONTEXT_DEGREES: [u8; 2] = [4, 7];

/// Largest distance from the first to the last fret of one string's cluster
const MAX_CLUSTER_SPAN: u8 = 5;

/// How far outside a string's cluster context tones are shown
const CONTEXT_REACH: u8 = 2;

/// Which degree group the low E string starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagonalPhase {
    /// {1, 2, 3} on low E
    RootFirst,
    /// {5, 6} on low E
    FifthFirst,
}

impl DiagonalPhase {
    pub const ALL: [DiagonalPhase; 2] = [DiagonalPhase::RootFirst, DiagonalPhase::FifthFirst];

    fn parity(self) -> usize {
        match self {
            DiagonalPhase::RootFirst => 0,
            DiagonalPhase::FifthFirst => 1,
        }
    }
}

/// One note of a diagonal pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DiagonalNote {
    pub string: u8,
    pub fret: u8,
    pub degree: u8,
    pub finger: u8,
    /// String pair: 0 for strings 5-4, 1 for 3-2, 2 for 1-0
    pub group: u8,
    /// Degrees 4 and 7 near the pattern, not part of it
    pub faded: bool,
}

/// A complete diagonal pattern for one phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagonalSet {
    pub phase: DiagonalPhase,
    /// Ordered by string from low E, then by fret
    pub notes: Vec<DiagonalNote>,
}

impl DiagonalSet {
    /// Pentatonic notes only
    pub fn core_notes(&self) -> impl Iterator<Item = &DiagonalNote> {
        self.notes.iter().filter(|note| !note.faded)
    }

    /// Lowest fret of the pentatonic notes
    pub fn min_fret(&self) -> Option<u8> {
        self.core_notes().map(|note| note.fret).min()
    }

    /// Notes (core and faded) on one string
    pub fn on_string(&self, string: u8) -> impl Iterator<Item = &DiagonalNote> {
        self.notes.iter().filter(move |note| note.string == string)
    }

    /// Note at (string, fret), if the pattern covers it
    pub fn at(&self, string: u8, fret: u8) -> Option<&DiagonalNote> {
        self.notes
            .iter()
            .find(|note| note.string == string && note.fret == fret)
    }
}

/// String pair index of a string
pub fn group_of(string: u8) -> u8 {
    (LOW_STRING - string) / 2
}

/// Both diagonal patterns for `root`, ordered by ascending lowest fret
pub fn diagonal_pentatonic(root: Note) -> Vec<DiagonalSet> {
    let key = Key::major(root);
    let mut sets: Vec<DiagonalSet> = DiagonalPhase::ALL
        .iter()
        .map(|&phase| build_set(&key, phase))
        .collect();
    sets.sort_by_key(|set| set.min_fret().unwrap_or(u8::MAX));
    sets
}

fn build_set(key: &Key, phase: DiagonalPhase) -> DiagonalSet {
    let mut floor = 0u8;
    let mut clusters: Vec<(u8, Vec<u8>)> = Vec::with_capacity(STRING_COUNT as usize);

    for (step, string) in (0..STRING_COUNT).rev().enumerate() {
        let allowed: &[u8] = if (step + phase.parity()) % 2 == 0 {
            &ROOT_GROUP[..]
        } else {
            &FIFTH_GROUP[..]
        };
        let size = allowed.len();

        match select_cluster(key, string, allowed, size, floor) {
            Some(frets) => {
                floor = frets[0];
                clusters.push((string, frets));
            }
            None => debug!(?phase, string, floor, "no pentatonic note above floor"),
        }
    }

    let mut notes = Vec::new();
    for (string, frets) in &clusters {
        let string = *string;
        for &fret in frets {
            notes.push(place(key, string, fret, false));
        }

        let lo = frets[0].saturating_sub(CONTEXT_REACH);
        let hi = (frets[frets.len() - 1] + CONTEXT_REACH).min(MAX_FRET);
        for fret in lo..=hi {
            if matches!(degree_at(key, string, fret), Some(d) if CONTEXT_DEGREES.contains(&d)) {
                notes.push(place(key, string, fret, true));
            }
        }
    }

    assign_fingers(&mut notes);
    notes.sort_by_key(|note| (LOW_STRING - note.string, note.fret));

    DiagonalSet { phase, notes }
}

/// Pick the cluster for one string, shrinking and then broadening the
/// degree set when the preferred cluster does not fit.
fn select_cluster(
    key: &Key,
    string: u8,
    allowed: &[u8],
    size: usize,
    floor: u8,
) -> Option<Vec<u8>> {
    for len in (1..=size).rev() {
        if let Some(frets) = find_cluster(key, string, allowed, len, floor) {
            if len < size {
                debug!(string, wanted = size, got = len, "shrunk diagonal cluster at edge");
            }
            return Some(frets);
        }
    }

    // No standard-tuning key reaches this
    for len in (1..=size).rev() {
        if let Some(frets) = find_cluster(key, string, &PENTATONIC, len, floor) {
            debug!(string, len, "broadened diagonal cluster to any pentatonic degree");
            return Some(frets);
        }
    }

    None
}

/// First run of `len` consecutive matching frets at or above `floor` whose
/// span stays within [`MAX_CLUSTER_SPAN`]
fn find_cluster(
    key: &Key,
    string: u8,
    allowed: &[u8],
    len: usize,
    floor: u8,
) -> Option<Vec<u8>> {
    let candidates: Vec<u8> = (floor..=MAX_FRET)
        .filter(|&fret| matches!(degree_at(key, string, fret), Some(d) if allowed.contains(&d)))
        .collect();
    trace!(string, ?candidates, len, "cluster candidates");

    candidates
        .windows(len)
        .find(|window| window[len - 1] - window[0] <= MAX_CLUSTER_SPAN)
        .map(<[u8]>::to_vec)
}

fn degree_at(key: &Key, string: u8, fret: u8) -> Option<u8> {
    key.degree_of(Tuning::STANDARD.note_at(string, fret))
}

fn place(key: &Key, string: u8, fret: u8, faded: bool) -> DiagonalNote {
    DiagonalNote {
        string,
        fret,
        degree: degree_at(key, string, fret).unwrap_or(0),
        finger: 1,
        group: group_of(string),
        faded,
    }
}

/// Fingers count from the lowest pentatonic fret of each string pair
fn assign_fingers(notes: &mut [DiagonalNote]) {
    for group in 0..STRING_COUNT / 2 {
        let base = notes
            .iter()
            .filter(|note| note.group == group && !note.faded)
            .map(|note| note.fret)
            .min();
        let Some(base) = base else { continue };

        for note in notes.iter_mut().filter(|note| note.group == group) {
            note.finger = (note.fret as i16 - base as i16 + 1).clamp(1, 4) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core_frets(set: &DiagonalSet, string: u8) -> Vec<u8> {
        set.on_string(string)
            .filter(|note| !note.faded)
            .map(|note| note.fret)
            .collect()
    }

    #[test]
    fn test_c_major_sets() {
        let sets = diagonal_pentatonic(Note::C);
        assert_eq!(sets.len(), 2);

        // Ordered by lowest fret: the {5, 6}-first set starts at fret 3
        let low = &sets[0];
        assert_eq!(low.phase, DiagonalPhase::FifthFirst);
        assert_eq!(core_frets(low, 5), vec![3, 5]);
        assert_eq!(core_frets(low, 4), vec![3, 5, 7]);
        assert_eq!(core_frets(low, 3), vec![5, 7]);
        assert_eq!(core_frets(low, 2), vec![5, 7, 9]);
        assert_eq!(core_frets(low, 1), vec![8, 10]);
        assert_eq!(core_frets(low, 0), vec![8, 10, 12]);

        let high = &sets[1];
        assert_eq!(high.phase, DiagonalPhase::RootFirst);
        assert_eq!(core_frets(high, 5), vec![8, 10, 12]);
        assert_eq!(core_frets(high, 4), vec![10, 12]);
        assert_eq!(core_frets(high, 3), vec![10, 12, 14]);
        assert_eq!(core_frets(high, 2), vec![12, 14]);
        assert_eq!(core_frets(high, 1), vec![13, 15, 17]);
        assert_eq!(core_frets(high, 0), vec![15, 17]);
    }

    #[test]
    fn test_degrees_alternate_by_string() {
        let sets = diagonal_pentatonic(Note::G);
        let root_first = sets
            .iter()
            .find(|set| set.phase == DiagonalPhase::RootFirst)
            .unwrap();
        let degrees: Vec<u8> = root_first
            .on_string(5)
            .filter(|note| !note.faded)
            .map(|note| note.degree)
            .collect();
        assert_eq!(degrees, vec![1, 2, 3]);
        let degrees: Vec<u8> = root_first
            .on_string(4)
            .filter(|note| !note.faded)
            .map(|note| note.degree)
            .collect();
        assert_eq!(degrees, vec![5, 6]);
    }

    #[test]
    fn test_edge_shrinks_cluster() {
        // D# major, {1, 2, 3} first: the B string only fits two notes below
        // fret 20 and the high E string only one.
        let sets = diagonal_pentatonic(Note::Ds);
        let root_first = sets
            .iter()
            .find(|set| set.phase == DiagonalPhase::RootFirst)
            .unwrap();
        assert_eq!(core_frets(root_first, 5), vec![11, 13, 15]);
        assert_eq!(core_frets(root_first, 1), vec![16, 18]);
        assert_eq!(core_frets(root_first, 0), vec![18]);
    }

    #[test]
    fn test_faded_context_tones() {
        let sets = diagonal_pentatonic(Note::C);
        let high = &sets[1];
        // Low E cluster 8-12: B at 7 and F at 13 are within reach
        let faded: Vec<(u8, u8)> = high
            .on_string(5)
            .filter(|note| note.faded)
            .map(|note| (note.fret, note.degree))
            .collect();
        assert_eq!(faded, vec![(7, 7), (13, 4)]);
    }

    #[test]
    fn test_fingers_per_string_pair() {
        let sets = diagonal_pentatonic(Note::C);
        let high = &sets[1];
        // Strings 5-4 start at fret 8
        assert_eq!(high.at(5, 8).unwrap().finger, 1);
        assert_eq!(high.at(5, 10).unwrap().finger, 3);
        assert_eq!(high.at(5, 12).unwrap().finger, 4);
        assert_eq!(high.at(4, 10).unwrap().finger, 3);
        // Strings 1-0 start at fret 13
        assert_eq!(high.at(1, 13).unwrap().finger, 1);
        assert_eq!(high.at(0, 15).unwrap().finger, 3);
        assert_eq!(high.at(0, 15).unwrap().group, 2);
    }

    #[test]
    fn test_group_of() {
        assert_eq!(group_of(5), 0);
        assert_eq!(group_of(4), 0);
        assert_eq!(group_of(3), 1);
        assert_eq!(group_of(2), 1);
        assert_eq!(group_of(1), 2);
        assert_eq!(group_of(0), 2);
    }

    #[test]
    fn test_never_descends() {
        for root in Note::ALL {
            for set in diagonal_pentatonic(root) {
                let lows: Vec<u8> = (0..STRING_COUNT)
                    .rev()
                    .filter_map(|s| core_frets(&set, s).first().copied())
                    .collect();
                assert!(lows.windows(2).all(|w| w[0] <= w[1]), "{:?} {:?}", root, lows);
            }
        }
    }

    #[test]
    fn test_cluster_broadens_past_preferred_degrees() {
        let key = Key::major(Note::C);
        // Low E above fret 17 holds A (6), A♯ and B (7): no 1, 2 or 3
        assert_eq!(find_cluster(&key, 5, &ROOT_GROUP, 1, 17), None);
        assert_eq!(select_cluster(&key, 5, &ROOT_GROUP, 3, 17), Some(vec![17]));

        // Only B is left at fret 19
        assert_eq!(select_cluster(&key, 5, &ROOT_GROUP, 3, 19), None);
        assert_eq!(select_cluster(&key, 5, &FIFTH_GROUP, 2, 19), None);
    }
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};

/// Taps per phrase before the counter moves on.
pub const CYCLE: u64 = 33;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phrase {
    SubhanAllah,
    Alhamdulillah,
    AllahuAkbar,
}

impl Phrase {
    pub const ALL: [Phrase; 3] = [Phrase::SubhanAllah, Phrase::Alhamdulillah, Phrase::AllahuAkbar];

    pub fn next(self) -> Self {
        self.nth(1)
    }

    fn nth(self, steps: u64) -> Self {
        let len = Self::ALL.len() as u64;
        let idx = (self.index() as u64 + steps % len) % len;
        Self::ALL[idx as usize]
    }

    fn index(self) -> usize {
        match self {
            Phrase::SubhanAllah => 0,
            Phrase::Alhamdulillah => 1,
            Phrase::AllahuAkbar => 2,
        }
    }

    pub fn arabic(self) -> &'static str {
        match self {
            Phrase::SubhanAllah => "سُبْحَانَ ٱللَّٰهِ",
            Phrase::Alhamdulillah => "ٱلْحَمْدُ لِلَّٰهِ",
            Phrase::AllahuAkbar => "ٱللَّٰهُ أَكْبَرُ",
        }
    }

    pub fn transliteration(self) -> &'static str {
        match self {
            Phrase::SubhanAllah => "SubhanAllah",
            Phrase::Alhamdulillah => "Alhamdulillah",
            Phrase::AllahuAkbar => "Allahu Akbar",
        }
    }

    pub fn translation(self) -> &'static str {
        match self {
            Phrase::SubhanAllah => "Glory be to Allah",
            Phrase::Alhamdulillah => "All praise is due to Allah",
            Phrase::AllahuAkbar => "Allah is the Greatest",
        }
    }
}

/// Counter state. Operations take and return the state by value; the caller
/// keeps it between taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasbihState {
    pub count: u64,
    pub phrase: Phrase,
}

impl Default for TasbihState {
    fn default() -> Self {
        Self::new()
    }
}

impl TasbihState {
    pub const fn new() -> Self {
        Self {
            count: 0,
            phrase: Phrase::SubhanAllah,
        }
    }

    /// One tap. Every 33rd tap moves to the next phrase. The count saturates
    /// at `u64::MAX` and stops rotating there.
    #[must_use]
    pub fn increment(self) -> Self {
        self.advance_by(1)
    }

    /// Same as `taps` calls to [`increment`](Self::increment).
    #[must_use]
    pub fn advance_by(self, taps: u64) -> Self {
        let count = self.count.saturating_add(taps);
        let rotations = count / CYCLE - self.count / CYCLE;
        Self {
            count,
            phrase: self.phrase.nth(rotations),
        }
    }

    #[must_use]
    pub fn reset(self) -> Self {
        Self::new()
    }

    /// Taps left before the phrase changes.
    pub fn remaining_in_cycle(&self) -> u64 {
        CYCLE - self.count % CYCLE
    }
}

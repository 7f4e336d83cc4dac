// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::tasbih::{Phrase, TasbihState};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TasbihReport {
    pub count: u64,
    pub phrase: Phrase,
    pub arabic: &'static str,
    pub transliteration: &'static str,
    pub translation: &'static str,
    pub remaining_in_cycle: u64,
}

impl From<TasbihState> for TasbihReport {
    fn from(s: TasbihState) -> Self {
        Self {
            count: s.count,
            phrase: s.phrase,
            arabic: s.phrase.arabic(),
            transliteration: s.phrase.transliteration(),
            translation: s.phrase.translation(),
            remaining_in_cycle: s.remaining_in_cycle(),
        }
    }
}

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("count", sub)) => count(sub)?,
        Some(("phrases", _)) => phrases(),
        _ => {}
    }
    Ok(())
}

fn count(sub: &clap::ArgMatches) -> Result<()> {
    let taps = sub.get_one::<u64>("taps").copied().unwrap_or(0);
    let report = TasbihReport::from(TasbihState::new().advance_by(taps));
    if maybe_print_json(sub.get_flag("json"), &report)? {
        return Ok(());
    }
    let rows = vec![vec![
        report.count.to_string(),
        report.arabic.to_string(),
        report.transliteration.to_string(),
        report.translation.to_string(),
        report.remaining_in_cycle.to_string(),
    ]];
    println!(
        "{}",
        pretty_table(
            &["Count", "Phrase", "Transliteration", "Meaning", "Until next"],
            rows
        )
    );
    Ok(())
}

fn phrases() {
    let rows = Phrase::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| {
            vec![
                (i + 1).to_string(),
                p.arabic().to_string(),
                p.transliteration().to_string(),
                p.translation().to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["#", "Phrase", "Transliteration", "Meaning"], rows)
    );
}

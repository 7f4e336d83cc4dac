// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use salamkit::models::{AssetForm, AssetSnapshot, NisabThreshold};
use salamkit::zakat::{compute_zakat, compute_zakat_default, to_non_negative_decimal, ZAKAT_RATE};

fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

fn cash(amount: &str) -> AssetSnapshot {
    AssetSnapshot {
        cash: dec(amount),
        ..Default::default()
    }
}

#[test]
fn empty_snapshot_owes_nothing() {
    let res = compute_zakat_default(&AssetSnapshot::default());
    assert!(res.total_assets.is_zero());
    assert!(!res.eligible);
    assert!(res.zakat_due.is_zero());
}

#[test]
fn uses_the_lower_nisab() {
    let res = compute_zakat_default(&cash("1000"));
    assert_eq!(res.nisab_used, dec("305"));

    let nisab = NisabThreshold {
        gold: dec("200"),
        silver: dec("900"),
    };
    assert_eq!(compute_zakat(&cash("1000"), &nisab).nisab_used, dec("200"));
}

#[test]
fn nisab_boundary_is_inclusive() {
    let at = compute_zakat_default(&cash("305"));
    assert!(at.eligible);
    assert_eq!(at.zakat_due, dec("7.625"));

    let below = compute_zakat_default(&cash("304.99"));
    assert!(!below.eligible);
    assert!(below.zakat_due.is_zero());
}

#[test]
fn zakat_is_exactly_two_and_a_half_percent() {
    assert_eq!(ZAKAT_RATE, dec("0.025"));
    let snapshot = AssetSnapshot {
        cash: dec("5000"),
        gold_value: dec("2500.50"),
        silver_value: dec("300"),
        investments: dec("1200"),
        receivables: dec("999.50"),
        liabilities: dec("1000"),
    };
    let res = compute_zakat_default(&snapshot);
    assert_eq!(res.total_assets, dec("9000"));
    assert_eq!(res.zakat_due, dec("225"));
    // no rounding until display
    let odd = compute_zakat_default(&cash("1234.57"));
    assert_eq!(odd.zakat_due, dec("30.86425"));
}

#[test]
fn liabilities_can_exceed_assets() {
    let snapshot = AssetSnapshot {
        cash: dec("100"),
        liabilities: dec("400"),
        ..Default::default()
    };
    let res = compute_zakat_default(&snapshot);
    assert_eq!(res.total_assets, dec("-300"));
    assert!(!res.eligible);
    assert!(res.zakat_due.is_zero());
}

#[test]
fn negative_fields_count_as_zero() {
    let snapshot = AssetSnapshot {
        cash: dec("1000"),
        liabilities: dec("-500"),
        gold_value: dec("-1"),
        ..Default::default()
    };
    assert_eq!(compute_zakat_default(&snapshot).total_assets, dec("1000"));
}

#[test]
fn zakat_due_never_decreases_once_eligible() {
    let mut last = Decimal::ZERO;
    for step in 0..200 {
        let total = Decimal::from(step * 25);
        let res = compute_zakat_default(&AssetSnapshot {
            investments: total,
            ..Default::default()
        });
        let expected = if res.eligible {
            total * ZAKAT_RATE
        } else {
            Decimal::ZERO
        };
        assert_eq!(res.zakat_due, expected);
        assert!(res.zakat_due >= last);
        last = res.zakat_due;
    }
}

#[test]
fn malformed_input_is_zero() {
    for raw in ["", "   ", "abc", "12abc", "-50", "NaN", "1,000"] {
        assert!(to_non_negative_decimal(raw).is_zero(), "input {:?}", raw);
    }
    assert_eq!(to_non_negative_decimal(" 42.50 "), dec("42.5"));
    assert_eq!(to_non_negative_decimal("1e3"), dec("1000"));

    let garbage = AssetForm {
        cash: Some("abc".into()),
        gold_value: Some("".into()),
        silver_value: None,
        investments: Some("-7".into()),
        receivables: Some("??".into()),
        liabilities: Some("lots".into()),
    };
    let res = compute_zakat_default(&garbage.to_snapshot());
    assert_eq!(res, compute_zakat_default(&AssetSnapshot::default()));
}

#[test]
fn decimal_sums_do_not_drift() {
    let form = AssetForm {
        cash: Some("0.1".into()),
        gold_value: Some("0.2".into()),
        ..Default::default()
    };
    assert_eq!(form.to_snapshot().net_assets(), dec("0.3"));
}

#[test]
fn form_deserializes_with_missing_fields() {
    let form: AssetForm = serde_json::from_str(r#"{"cash":"5000","liabilities":"oops"}"#).unwrap();
    let snapshot = form.to_snapshot();
    assert_eq!(snapshot.cash, dec("5000"));
    assert!(snapshot.liabilities.is_zero());
    assert!(snapshot.gold_value.is_zero());
}

#[test]
fn huge_values_do_not_panic() {
    let max = Decimal::MAX.to_string();
    let form = AssetForm {
        cash: Some(max.clone()),
        gold_value: Some(max.clone()),
        silver_value: Some(max.clone()),
        investments: Some(max.clone()),
        receivables: Some(max),
        liabilities: None,
    };
    let res = compute_zakat_default(&form.to_snapshot());
    assert!(res.eligible);
    assert_eq!(res.total_assets, Decimal::MAX);
}

#[test]
fn nisab_from_metal_prices() {
    let nisab = NisabThreshold::from_metal_prices(dec("100"), dec("1.5"));
    assert_eq!(nisab.gold, dec("8500"));
    assert_eq!(nisab.silver, dec("892.5"));
    assert_eq!(nisab.lower(), dec("892.5"));
}

#[test]
fn negative_nisab_never_makes_debt_eligible() {
    let snapshot = AssetSnapshot {
        liabilities: dec("5"),
        ..Default::default()
    };
    let nisab = NisabThreshold {
        gold: dec("-10"),
        silver: dec("5"),
    };
    let res = compute_zakat(&snapshot, &nisab);
    assert_eq!(res.total_assets, dec("-5"));
    assert!(res.nisab_used.is_zero());
    assert!(!res.eligible);
    assert!(res.zakat_due.is_zero());
}

#[test]
fn out_of_range_amounts_saturate() {
    assert_eq!(to_non_negative_decimal("1e29"), Decimal::MAX);
    assert_eq!(to_non_negative_decimal("1e100"), Decimal::MAX);
    assert_eq!(to_non_negative_decimal("79228162514264337593543950336"), Decimal::MAX);
    assert_eq!(to_non_negative_decimal("1e28"), dec("10000000000000000000000000000"));
    assert!(to_non_negative_decimal("-1e100").is_zero());
    assert!(to_non_negative_decimal("1e-100").is_zero());
    assert!(to_non_negative_decimal("inf").is_zero());

    let res = compute_zakat_default(&AssetForm {
        cash: Some("1e29".into()),
        ..Default::default()
    }
    .to_snapshot());
    assert!(res.eligible);
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use salamkit::cli;
use salamkit::commands::{qibla, tasbih, zakat};
use salamkit::config::{Config, LocationSource, DEMO_LOCATION};
use salamkit::error::{exit_code_for, GeoError, SalamError};
use salamkit::models::GeoCoordinate;

fn sub(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["salamkit"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some((_, m)) => m.clone(),
        None => panic!("no subcommand parsed"),
    }
}

#[test]
fn zakat_from_flags() {
    let m = sub(&[
        "zakat",
        "--cash",
        " 5000 ",
        "--gold",
        "2000",
        "--liabilities",
        "1000",
    ]);
    let res = zakat::run(&Config::default(), &m).unwrap();
    assert_eq!(res.total_assets, Decimal::from(6000));
    assert!(res.eligible);
    assert_eq!(res.zakat_due, Decimal::from(150));
}

#[test]
fn zakat_tolerates_garbage_amounts() {
    let m = sub(&["zakat", "--cash", "abc", "--silver", "-20", "--json"]);
    assert!(m.get_flag("json"));
    let res = zakat::run(&Config::default(), &m).unwrap();
    assert!(res.total_assets.is_zero());
    assert!(!res.eligible);
}

#[test]
fn zakat_nisab_overrides() {
    let m = sub(&["zakat", "--cash", "250", "--silver-nisab", "200"]);
    let nisab = zakat::nisab_from_matches(&Config::default(), &m).unwrap();
    assert_eq!(nisab.silver, Decimal::from(200));
    assert_eq!(nisab.gold, Decimal::from(4340));
    assert!(zakat::run(&Config::default(), &m).unwrap().eligible);

    let bad = sub(&["zakat", "--gold-nisab", "lots"]);
    assert!(zakat::run(&Config::default(), &bad).is_err());
}

#[test]
fn qibla_from_coordinates() {
    let m = sub(&["qibla", "--lat", "-33.8688", "--lng", "151.2093"]);
    let observer = qibla::resolve_observer(&Config::default(), &m).unwrap();
    assert_eq!(observer, GeoCoordinate::new(-33.8688, 151.2093));
}

#[test]
fn qibla_rejects_out_of_range_latitude() {
    let m = sub(&["qibla", "--lat", "95", "--lng", "0"]);
    assert!(qibla::resolve_observer(&Config::default(), &m).is_err());
}

#[test]
fn qibla_demo_and_configured_fixed_location() {
    let demo = sub(&["qibla", "--demo"]);
    assert_eq!(
        qibla::resolve_observer(&Config::default(), &demo).unwrap(),
        DEMO_LOCATION
    );

    let mut cfg = Config::default();
    cfg.location.latitude = 24.7136;
    cfg.location.longitude = 46.6753;
    let plain = sub(&["qibla"]);
    assert_eq!(
        qibla::resolve_observer(&cfg, &plain).unwrap(),
        GeoCoordinate::new(24.7136, 46.6753)
    );
}

#[test]
fn qibla_disabled_location_surfaces_permission_error() {
    let mut cfg = Config::default();
    cfg.location.provider = LocationSource::Disabled;
    for args in [&["qibla"][..], &["qibla", "--locate"][..]] {
        let err = qibla::resolve_observer(&cfg, &sub(args)).unwrap_err();
        assert!(
            matches!(err.downcast_ref::<GeoError>(), Some(GeoError::PermissionDenied(_))),
            "{:?}",
            err
        );
    }
}

#[test]
fn qibla_sources_are_exclusive() {
    let res = cli::build_cli().try_get_matches_from(["salamkit", "qibla", "--demo", "--locate"]);
    assert!(res.is_err());
    let res = cli::build_cli().try_get_matches_from(["salamkit", "qibla", "--lat", "10"]);
    assert!(res.is_err());
}

#[test]
fn qibla_report_for_london() {
    let report = qibla::report_for(DEMO_LOCATION);
    assert!((report.bearing_degrees - 118.987_219).abs() < 1e-4);
    assert_eq!(report.compass_point, "ESE");
    assert!((report.distance_km - 4793.8).abs() < 1.0);
}

#[test]
fn tasbih_count_parses_taps() {
    let m = sub(&["tasbih", "count", "--taps", "34", "--json"]);
    let Some(("count", count)) = m.subcommand() else {
        panic!("count not parsed");
    };
    assert_eq!(count.get_one::<u64>("taps"), Some(&34));
    tasbih::handle(&m).unwrap();
}

#[test]
fn global_flags_after_subcommand() {
    let matches = cli::build_cli().get_matches_from([
        "salamkit",
        "tasbih",
        "phrases",
        "--verbose",
        "--log-format",
        "json",
        "--config",
        "/tmp/x.toml",
    ]);
    assert!(matches.get_flag("verbose"));
    assert_eq!(matches.get_one::<String>("log-format").unwrap(), "json");
    assert_eq!(matches.get_one::<String>("config").unwrap(), "/tmp/x.toml");
}

#[test]
fn negative_nisab_override_is_invalid_input() {
    let m = sub(&["zakat", "--liabilities", "5", "--gold-nisab", "-10"]);
    let err = zakat::run(&Config::default(), &m).unwrap_err();
    assert!(
        matches!(err.downcast_ref::<SalamError>(), Some(SalamError::InvalidInput(_))),
        "{:?}",
        err
    );
    assert_eq!(exit_code_for(&err), 3);
}

#[test]
fn exit_codes_by_failure_kind() {
    let bad_lat = sub(&["qibla", "--lat", "95", "--lng", "0"]);
    let err = qibla::resolve_observer(&Config::default(), &bad_lat).unwrap_err();
    assert_eq!(exit_code_for(&err), 3);

    let not_a_number = sub(&["qibla", "--lat", "north", "--lng", "0"]);
    let err = qibla::resolve_observer(&Config::default(), &not_a_number).unwrap_err();
    assert_eq!(exit_code_for(&err), 3);

    let mut cfg = Config::default();
    cfg.location.provider = LocationSource::Disabled;
    let err = qibla::resolve_observer(&cfg, &sub(&["qibla"])).unwrap_err();
    assert_eq!(exit_code_for(&err), 2);

    let bad_decimal = sub(&["zakat", "--silver-nisab", "lots"]);
    let err = zakat::run(&Config::default(), &bad_decimal).unwrap_err();
    assert_eq!(exit_code_for(&err), 1);
}

//! Cross-module properties of the statistics library.

use approx::assert_relative_eq;
use proptest::prelude::*;

use speechstats::rhythm::{Cov, Cov5, Jitter, Npvi, RelStab, Rpvi};
use speechstats::sequence::{PeakProminence, Slope};
use speechstats::{
    cov, cov5_x, first_changepoint, lm_slope, missing_fraction, npvi, peak_prominence, relstab,
    rpvi, vowel_angles, vowel_center, vowel_norms, CenterMethod, Cov5Config, JitterConfig,
    JitterKind, Measure, MeasureReport, RelStabConfig, StatsError, VowelCenter,
};

#[test]
fn documented_examples_hold() {
    assert_relative_eq!(rpvi(&[1.0, 2.0, 4.0, 7.0], true).unwrap(), 2.0);
    assert!((npvi(&[1.0, 2.0, 4.0, 7.0], true).unwrap() - 63.0).abs() < 0.5);
    assert!((cov(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], true).unwrap() - 0.4276).abs() < 1e-4);

    let x = [1.2, 0.0, 1.5, f64::NAN, -1.0, 2.0];
    assert_relative_eq!(missing_fraction(&x, 0.0).unwrap(), 0.5);
    assert_eq!(first_changepoint(&[0.0, 0.0, 1.2, 1.5, 2.0], 0.0), Some(3));

    let center = vowel_center(
        &[300.0, 600.0, 600.0, 300.0],
        &[2200.0, 1700.0, 1000.0, 900.0],
        CenterMethod::Centroid,
        true,
    )
    .unwrap()
    .unwrap();
    assert_relative_eq!(center.f1c, 450.0);
    assert_relative_eq!(center.f2c, 1450.0);
}

#[test]
fn short_sequences_are_undefined_for_pairwise_measures() {
    for x in [&[][..], &[0.2][..]] {
        assert_eq!(rpvi(x, true), None);
        assert_eq!(npvi(x, true), None);
        assert_eq!(cov(x, true), None);
    }
}

#[test]
fn relstab_rejects_compstart_four() {
    let x: Vec<f64> = (1..=12).map(f64::from).collect();
    let config = RelStabConfig {
        compstart: 4,
        compstop: 12,
        remove_na: true,
    };
    assert!(matches!(
        relstab(&x, &config),
        Err(StatsError::InvalidArgument(_))
    ));
}

#[test]
fn vowel_pipeline_keeps_alignment() {
    let f1 = [300.0, 600.0, f64::NAN, 600.0, 300.0];
    let f2 = [2200.0, 1700.0, 1500.0, 1000.0, 900.0];
    let center = vowel_center(&f1, &f2, CenterMethod::Centroid, true)
        .unwrap()
        .unwrap();
    let norms = vowel_norms(&f1, &f2, center.f1c, center.f2c).unwrap();
    let angles = vowel_angles(&f1, &f2, center.f1c, center.f2c).unwrap();
    assert_eq!(norms.len(), f1.len());
    assert_eq!(angles.len(), f1.len());
    assert_eq!(norms[2], None);
    assert_eq!(angles[2], None);
    assert_relative_eq!(norms[0].unwrap(), (150.0f64.powi(2) + 750.0f64.powi(2)).sqrt());
}

#[test]
fn report_runs_heterogeneous_measures() {
    let durations = [0.18, 0.21, 0.17, 0.25, 0.2, 0.22];
    let jitter = Jitter {
        kind: JitterKind::Local,
        config: JitterConfig::new(0.0, 1.0),
    };
    let measures: [&dyn Measure; 6] = [
        &Rpvi::default(),
        &Npvi::default(),
        &Cov::default(),
        &jitter,
        &Slope::default(),
        &PeakProminence::default(),
    ];
    let report = MeasureReport::evaluate(&measures, &durations).unwrap();
    assert_eq!(report.entries.len(), 6);
    assert_eq!(report.undefined_count(), 0);
    assert_eq!(report.get("rpvi"), rpvi(&durations, true));

    let json = serde_json::to_string(&report).unwrap();
    let back: MeasureReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back.entries[0].name, "rpvi");
}

#[test]
fn report_runs_block_measures_and_stops_on_bad_config() {
    let durations: Vec<f64> = (1..=20).map(f64::from).collect();
    let cov5 = Cov5::default();
    let stability = RelStab::default();
    let report = MeasureReport::evaluate(&[&cov5, &stability], &durations).unwrap();
    assert_eq!(
        report.get("cov5_x"),
        cov5_x(&durations, &Cov5Config::default()).unwrap()
    );
    assert_relative_eq!(report.get("relstab").unwrap(), 680.0, epsilon = 1e-12);

    let early = RelStab(RelStabConfig {
        compstart: 4,
        ..RelStabConfig::default()
    });
    assert!(matches!(
        MeasureReport::evaluate(&[&cov5, &early], &durations),
        Err(StatsError::InvalidArgument(_))
    ));
}

fn center_bits(center: Option<VowelCenter>) -> Option<(u64, u64)> {
    center.map(|c| (c.f1c.to_bits(), c.f2c.to_bits()))
}

proptest! {
    #[test]
    fn pvi_invariant_under_reversal(x in prop::collection::vec(0.05f64..2.0, 2..40)) {
        let mut reversed = x.clone();
        reversed.reverse();
        let (a, b) = (rpvi(&x, true).unwrap(), rpvi(&reversed, true).unwrap());
        prop_assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0));
        let (a, b) = (npvi(&x, true).unwrap(), npvi(&reversed, true).unwrap());
        prop_assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0));
    }

    #[test]
    fn repeated_calls_are_bit_identical(x in prop::collection::vec(0.05f64..2.0, 0..40)) {
        let config = JitterConfig::new(0.1, 1.5);
        for kind in [JitterKind::Local, JitterKind::Ddp, JitterKind::Rap, JitterKind::Ppq5] {
            let first = kind.compute(&x, &config).map(f64::to_bits);
            let second = kind.compute(&x, &config).map(f64::to_bits);
            prop_assert_eq!(first, second);
        }
        prop_assert_eq!(cov(&x, true).map(f64::to_bits), cov(&x, true).map(f64::to_bits));
        prop_assert_eq!(rpvi(&x, true).map(f64::to_bits), rpvi(&x, true).map(f64::to_bits));
        prop_assert_eq!(npvi(&x, true).map(f64::to_bits), npvi(&x, true).map(f64::to_bits));
        prop_assert_eq!(
            lm_slope(&x, 0.0).map(f64::to_bits),
            lm_slope(&x, 0.0).map(f64::to_bits)
        );
        prop_assert_eq!(
            peak_prominence(&x, 0.0).map(f64::to_bits),
            peak_prominence(&x, 0.0).map(f64::to_bits)
        );

        let f2: Vec<f64> = x.iter().rev().map(|v| v * 1000.0).collect();
        for method in [CenterMethod::Centroid, CenterMethod::Twomeans, CenterMethod::Wcentroid] {
            let first = center_bits(vowel_center(&x, &f2, method, true).unwrap());
            let second = center_bits(vowel_center(&x, &f2, method, true).unwrap());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn missing_fraction_stays_in_unit_interval(x in prop::collection::vec(-1.0f64..1.0, 1..40)) {
        let fraction = missing_fraction(&x, 0.0).unwrap();
        prop_assert!((0.0..=1.0).contains(&fraction));
    }
}

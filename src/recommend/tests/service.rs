use crate::economics::EconomicOverrides;
use crate::error::EngineError;
use crate::recommend::tests::utils::{atlantic_advisor, mission};
use crate::recommend::Reason;
use crate::wind::Wind;

#[test]
fn test_transatlantic_leg_keeps_only_wide_bodies() {
    let advisor = atlantic_advisor();
    let scores = advisor.recommend(&mission("IST", "JFK", 300)).unwrap();

    let names: Vec<&str> = scores.iter().map(|s| s.aircraft.as_ref()).collect();
    assert_eq!(names, vec!["A350-900", "B777-300ER"]);

    // The near-full A350 cabin is worth a note.
    assert!(scores[0]
        .reasons
        .iter()
        .any(|r| matches!(r, Reason::HighUtilization { .. })));
}

#[test]
fn test_impossible_passenger_count_is_actionable() {
    let advisor = atlantic_advisor();
    let err = advisor.recommend(&mission("IST", "JFK", 1000)).unwrap_err();

    assert!(matches!(
        err,
        EngineError::NoFeasibleAircraft {
            passengers: 1000,
            ..
        }
    ));
    assert!(err.to_string().contains("1000"));
}

#[test]
fn test_unknown_airport_is_named() {
    let advisor = atlantic_advisor();

    let err = advisor.recommend(&mission("XXX", "JFK", 100)).unwrap_err();
    assert_eq!(err, EngineError::AirportNotFound("XXX".to_string()));

    let err = advisor.recommend(&mission("IST", "YYY", 100)).unwrap_err();
    assert_eq!(err, EngineError::AirportNotFound("YYY".to_string()));

    // Origin resolves first.
    let err = advisor.recommend(&mission("XXX", "YYY", 100)).unwrap_err();
    assert_eq!(err, EngineError::AirportNotFound("XXX".to_string()));
}

#[test]
fn test_airport_lookup_ignores_case() {
    let advisor = atlantic_advisor();
    let lower = advisor.recommend(&mission("ist", "jfk", 300)).unwrap();
    let upper = advisor.recommend(&mission("IST", "JFK", 300)).unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn test_origin_must_differ_from_destination() {
    let advisor = atlantic_advisor();
    let err = advisor.recommend(&mission("IST", "ist", 100)).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput { .. }));
}

#[test]
fn test_identical_requests_identical_rankings() {
    let advisor = atlantic_advisor();
    let mut request = mission("IST", "JFK", 300);
    request.cargo_kg = 2000.0;
    request.wind = Some(Wind {
        speed_kts: 30.0,
        direction_deg: 45.0,
    });

    let first = advisor.recommend(&request).unwrap();
    let second = advisor.recommend(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_ranked_descending_with_consistent_figures() {
    let advisor = atlantic_advisor();
    let scores = advisor.recommend(&mission("IST", "JFK", 300)).unwrap();

    for pair in scores.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for score in &scores {
        assert_eq!(
            score.profit_usd,
            score.revenue_usd - score.operating_cost_usd
        );
        assert!((0.0..=100.0).contains(&score.break_even_load_factor_pct));
    }
}

#[test]
fn test_headwind_narrows_the_field() {
    let advisor = atlantic_advisor();
    let mut request = mission("IST", "JFK", 300);

    // A 200 kt headwind pushes the B777's effective range below the
    // required margin while the A350 barely clears it.
    request.wind = Some(Wind {
        speed_kts: 200.0,
        direction_deg: 180.0,
    });
    let scores = advisor.recommend(&request).unwrap();
    let names: Vec<&str> = scores.iter().map(|s| s.aircraft.as_ref()).collect();
    assert_eq!(names, vec!["A350-900"]);
}

#[test]
fn test_economic_overrides_shift_the_figures() {
    let advisor = atlantic_advisor();
    let mut request = mission("IST", "JFK", 300);

    let baseline = advisor.recommend(&request).unwrap();

    request.economics = EconomicOverrides {
        rask: Some(0.20),
        ..EconomicOverrides::default()
    };
    let premium = advisor.recommend(&request).unwrap();

    let base_a350 = baseline.iter().find(|s| s.aircraft.as_ref() == "A350-900").unwrap();
    let rich_a350 = premium.iter().find(|s| s.aircraft.as_ref() == "A350-900").unwrap();
    assert!(rich_a350.revenue_usd > base_a350.revenue_usd);
    assert!(rich_a350.profit_usd > base_a350.profit_usd);
    // Costs are untouched by a revenue-side override.
    assert_eq!(rich_a350.operating_cost_usd, base_a350.operating_cost_usd);
}

#[test]
fn test_invalid_mission_rejected_before_lookup() {
    let advisor = atlantic_advisor();

    let err = advisor.recommend(&mission("XXX", "JFK", 0)).unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidInput {
            field: "passengers",
            ..
        }
    ));
}

#[test]
fn test_score_output_serializes_reasons_as_strings() {
    let advisor = atlantic_advisor();
    let scores = advisor.recommend(&mission("IST", "JFK", 300)).unwrap();

    let json = serde_json::to_value(&scores).unwrap();
    let first = &json[0];
    assert_eq!(first["aircraft"], "A350-900");
    assert!(first["reasons"].as_array().unwrap().iter().all(|r| r.is_string()));
}

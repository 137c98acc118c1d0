use train_delay_rater::estimator::aggregate;
use train_delay_rater::estimator::resolve::resolve;
use train_delay_rater::estimator::types::Granularity;
use train_delay_rater::parser::parse_rows;
use train_delay_rater::prediction::{PredictionRequest, predict_from_records};

fn request(date: &str, time: &str) -> PredictionRequest {
    PredictionRequest {
        start_station: Some("Berlin Hbf".to_string()),
        end_station: None,
        date: date.to_string(),
        time: time.to_string(),
        train_number: "ICE 845".to_string(),
    }
}

#[test]
fn test_exact_match_pipeline() {
    // 2025-09-03 is a Wednesday; the fixture has two ICE845 trips at hour 14
    // on that day with delays 5 and 7.
    let records = parse_rows(include_str!("fixtures/sample_delays.csv")).unwrap();
    let query = request("2025-09-03", "14:05").to_query().unwrap();

    let store = aggregate::build(&records);
    let pick = resolve(&store, &query);
    assert_eq!(pick.matched, Granularity::TrainHourWeekday);
    assert_eq!(pick.median, Some(6.0));
    assert_eq!(pick.count, Some(2));

    let prediction = predict_from_records(&records, &query);
    assert_eq!(prediction.headline, "Likely delay: 6.0 min");
    assert_eq!(
        prediction.details_line,
        "Confidence: Low • Based on 2 past trips • Pattern: ICE845 at 14:00 on Wed"
    );
    assert_eq!(prediction.fallback_note, None);
}

#[test]
fn test_family_fallback_pipeline() {
    // No ICE845 rows at all in this fixture and no Saturday ICE rows, so a
    // Saturday query falls past both train levels and the weekday-qualified
    // family level, landing on family+hour with 12 trips and median 4.
    let records = parse_rows(include_str!("fixtures/family_fallback.csv")).unwrap();
    // 2025-09-06 is a Saturday
    let query = request("2025-09-06", "14:10").to_query().unwrap();

    let store = aggregate::build(&records);
    let pick = resolve(&store, &query);
    assert_eq!(pick.matched, Granularity::FamilyHour);
    assert_eq!(pick.median, Some(4.0));
    assert_eq!(pick.count, Some(12));

    let prediction = predict_from_records(&records, &query);
    assert_eq!(prediction.headline, "Likely delay: 4.0 min");
    assert_eq!(
        prediction.details_line,
        "Confidence: Medium • Based on 12 past trips • Pattern: ICE trains around 14:00"
    );
    assert_eq!(
        prediction.fallback_note.as_deref(),
        Some("Few exact trips; used the train family pattern.")
    );
}

#[test]
fn test_rows_without_delay_are_excluded() {
    // The fixture has one RE7 row at hour 9 with a delay and one without;
    // only the former counts.
    let records = parse_rows(include_str!("fixtures/sample_delays.csv")).unwrap();
    let store = aggregate::build(&records);

    let entry = store.train_hour[&("RE7".to_string(), 9)];
    assert_eq!(entry.count, 1);
    assert_eq!(entry.median, Some(12.0));

    // 5 rows carry a delay; the delay-less RE7 row is not in overall either.
    assert_eq!(store.overall.count, 5);
}

#[test]
fn test_numeric_train_number_has_no_family_buckets() {
    let records = parse_rows(include_str!("fixtures/sample_delays.csv")).unwrap();
    let store = aggregate::build(&records);

    // Train "12345" aggregates at train level but contributes to no family.
    assert!(store.train_hour.contains_key(&("12345".to_string(), 7)));
    assert!(!store.family_hour.keys().any(|(f, _)| f == "12345"));
}

#[test]
fn test_empty_dataset_yields_no_data_prediction() {
    let records = parse_rows("train_number,hour,delay_minutes,date,station\n").unwrap();
    let query = request("2025-09-03", "14:05").to_query().unwrap();

    let prediction = predict_from_records(&records, &query);
    assert_eq!(prediction.headline, "Likely delay: —");
    assert_eq!(
        prediction.fallback_note.as_deref(),
        Some("Sparse data; used overall history.")
    );
}

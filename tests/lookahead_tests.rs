use chrono::NaiveDate;
use limit_fill::{compute_lookahead, PriceRecord, PriceSeries};

fn series(rows: &[(f64, f64, f64)]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let records = rows
        .iter()
        .enumerate()
        .map(|(i, &(open, high, low))| PriceRecord {
            date: start + chrono::Duration::days(i as i64),
            open,
            high,
            low,
        })
        .collect();
    PriceSeries::from_records(records)
}

#[test]
fn preserves_length_for_any_window() {
    let input = series(&[
        (100.0, 110.0, 90.0),
        (100.0, 105.0, 95.0),
        (100.0, 120.0, 85.0),
        (100.0, 101.0, 99.0),
    ]);
    for window in [1, 2, 3, 4, 30, 180] {
        assert_eq!(compute_lookahead(&input, window).len(), input.len());
    }
}

#[test]
fn window_always_includes_current_day() {
    let input = series(&[
        (100.0, 110.0, 90.0),
        (100.0, 105.0, 95.0),
        (100.0, 120.0, 85.0),
    ]);
    for window in 1..=5 {
        let lookahead = compute_lookahead(&input, window);
        for (row, record) in lookahead.iter().zip(input.iter()) {
            assert!(row.min_low_forward <= record.low);
            assert!(row.max_high_forward >= record.high);
        }
    }
}

#[test]
fn window_of_one_degenerates_to_current_day() {
    let input = series(&[
        (100.0, 110.0, 90.0),
        (100.0, 105.0, 95.0),
        (100.0, 120.0, 85.0),
    ]);
    let lookahead = compute_lookahead(&input, 1);
    for (row, record) in lookahead.iter().zip(input.iter()) {
        assert!((row.min_low_forward - record.low).abs() < f64::EPSILON);
        assert!((row.max_high_forward - record.high).abs() < f64::EPSILON);
    }
}

#[test]
fn tail_windows_clip_to_remaining_rows() {
    // Rows 2 and 3 see fewer than 3 future rows but still get values.
    let input = series(&[
        (100.0, 110.0, 90.0),
        (100.0, 105.0, 95.0),
        (100.0, 120.0, 85.0),
    ]);
    let lookahead = compute_lookahead(&input, 3);
    for row in lookahead.iter() {
        assert!((row.min_low_forward - 85.0).abs() < f64::EPSILON);
    }
    for row in lookahead.iter() {
        assert!((row.max_high_forward - 120.0).abs() < f64::EPSILON);
    }
}

#[test]
fn mid_series_window_stops_before_later_extremes() {
    let input = series(&[
        (100.0, 101.0, 99.0),
        (100.0, 102.0, 98.0),
        (100.0, 130.0, 70.0),
    ]);
    let lookahead = compute_lookahead(&input, 2);
    let rows = lookahead.rows();
    // Row 0's window is rows [0, 1]; the extreme row 2 is out of reach.
    assert!((rows[0].min_low_forward - 98.0).abs() < f64::EPSILON);
    assert!((rows[0].max_high_forward - 102.0).abs() < f64::EPSILON);
    assert!((rows[1].min_low_forward - 70.0).abs() < f64::EPSILON);
}

#[test]
fn growing_window_only_reveals_more_extreme_values() {
    let input = series(&[
        (100.0, 104.0, 97.0),
        (101.0, 106.0, 96.0),
        (99.0, 103.0, 94.0),
        (102.0, 108.0, 98.0),
        (100.0, 105.0, 91.0),
        (103.0, 111.0, 99.0),
    ]);
    let mut previous = compute_lookahead(&input, 1);
    for window in 2..=8 {
        let current = compute_lookahead(&input, window);
        for (prev, cur) in previous.iter().zip(current.iter()) {
            assert!(cur.min_low_forward <= prev.min_low_forward);
            assert!(cur.max_high_forward >= prev.max_high_forward);
        }
        previous = current;
    }
}

#[test]
fn empty_series_yields_empty_lookahead() {
    let lookahead = compute_lookahead(&PriceSeries::from_records(Vec::new()), 30);
    assert!(lookahead.is_empty());
}

#[test]
#[should_panic(expected = "window_length_days must be >= 1")]
fn zero_window_panics() {
    let input = series(&[(100.0, 110.0, 90.0)]);
    compute_lookahead(&input, 0);
}

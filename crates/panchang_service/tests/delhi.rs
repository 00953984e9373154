//! End-to-end checks with the analytic ephemeris.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use panchang_ephem::AnalyticEphemeris;
use panchang_service::{BoundaryMode, Location, PanchangConfig, PanchangService, ValueSource};
use panchang_vedic::{FestivalKind, MUHURTA_COUNT, MoonPhaseName, Nakshatra, Paksha};

fn delhi() -> Location {
    Location::new(28.6139, 77.2090, "Asia/Kolkata", "New Delhi").unwrap()
}

#[test]
fn new_delhi_march_7_2024() {
    let svc = PanchangService::new(AnalyticEphemeris::new());
    let date = Utc.with_ymd_and_hms(2024, 3, 7, 0, 0, 0).unwrap();
    let p = svc.calculate_daily_panchang(date, &delhi()).unwrap();

    assert!((1..=27).contains(&p.nakshatra.number));
    let n = Nakshatra::from_number(p.nakshatra.number);
    assert_eq!(p.nakshatra.name, n.name());
    assert_eq!(p.nakshatra.ruler, n.ruler());
    assert_eq!(p.nakshatra.deity, n.deity());
    assert_eq!(p.muhurtas.len(), MUHURTA_COUNT);

    // Sunrise ≈ 06:40 IST.
    assert_eq!(p.astronomical.sources.sunrise, ValueSource::Computed);
    assert_eq!(p.astronomical.sources.sunset, ValueSource::Computed);
    let sunrise = p.astronomical.sunrise;
    assert!(sunrise > Utc.with_ymd_and_hms(2024, 3, 7, 1, 0, 0).unwrap());
    assert!(sunrise < Utc.with_ymd_and_hms(2024, 3, 7, 1, 20, 0).unwrap());
    assert_eq!(p.muhurtas[0].start, sunrise);
    assert_eq!(p.muhurtas[MUHURTA_COUNT - 1].end, p.astronomical.sunset);

    // Three days before the 2024-03-10 new moon.
    assert_eq!(p.tithi.paksha, Paksha::Krishna);
    assert!((27..=29).contains(&p.tithi.number), "tithi {}", p.tithi.number);
    assert!((0.85..0.95).contains(&p.astronomical.lunar_phase));
    assert_eq!(p.astronomical.phase_name(), MoonPhaseName::WaningCrescent);
}

#[test]
fn march_2024_festivals() {
    let svc = PanchangService::new(AnalyticEphemeris::new());
    let fests = svc.festivals_in_month(2024, 3, &delhi()).unwrap();
    let purnima: Vec<_> = fests.iter().filter(|f| f.name == "Purnima").collect();
    assert_eq!(purnima.len(), 1);
    assert_eq!(purnima[0].date, NaiveDate::from_ymd_opt(2024, 3, 24).unwrap());
    let holi = fests.iter().find(|f| f.name == "Holi").unwrap();
    assert_eq!(holi.kind, FestivalKind::Major);
    assert_eq!(holi.date, NaiveDate::from_ymd_opt(2024, 3, 22).unwrap());
}

#[test]
fn exact_boundaries_bracket_noon() {
    let config = PanchangConfig::default().with_boundary_mode(BoundaryMode::Exact);
    let svc = PanchangService::with_config(AnalyticEphemeris::new(), config);
    let date = Utc.with_ymd_and_hms(2024, 3, 7, 0, 0, 0).unwrap();
    let p = svc.calculate_daily_panchang(date, &delhi()).unwrap();
    let noon = p.date;

    assert!(p.tithi.start <= noon && noon < p.tithi.end);
    let len = p.tithi.end - p.tithi.start;
    assert!(len > TimeDelta::hours(19) && len < TimeDelta::hours(27), "tithi {len}");

    assert!(p.nakshatra.start <= noon && noon < p.nakshatra.end);
    assert!(p.yoga.start <= noon && noon < p.yoga.end);
    assert!(p.karana.start <= noon && noon < p.karana.end);
    let len = p.karana.end - p.karana.start;
    assert!(len > TimeDelta::hours(9) && len < TimeDelta::hours(14), "karana {len}");
}

#[test]
fn every_day_of_a_year_is_in_range() {
    let svc = PanchangService::new(AnalyticEphemeris::new());
    let tromso = Location::new(69.6492, 18.9553, "Europe/Oslo", "Tromsø").unwrap();
    for (i, loc) in [delhi(), tromso].iter().enumerate() {
        for month in (1..=12).step_by(1 + i * 2) {
            for day in svc.calculate_month(2024, month, loc).unwrap() {
                assert!((1..=30).contains(&day.tithi.number));
                assert!((1..=27).contains(&day.nakshatra.number));
                assert!((1..=27).contains(&day.yoga.number));
                assert!((1..=8).contains(&day.karana.number));
                assert!((0.0..=1.0).contains(&day.astronomical.lunar_phase));
                assert_eq!(day.muhurtas.len(), MUHURTA_COUNT);
                assert!(day.muhurtas[0].start <= day.muhurtas[MUHURTA_COUNT - 1].end);
            }
        }
    }
}

#[test]
fn polar_night_falls_back() {
    let svc = PanchangService::new(AnalyticEphemeris::new());
    let svalbard = Location::new(78.22, 15.65, "Arctic/Longyearbyen", "Longyearbyen").unwrap();
    let date = Utc.with_ymd_and_hms(2024, 12, 21, 0, 0, 0).unwrap();
    let p = svc.calculate_daily_panchang(date, &svalbard).unwrap();
    assert_eq!(p.astronomical.sources.sunrise, ValueSource::Fallback);
    assert_eq!(p.astronomical.sources.sunset, ValueSource::Fallback);
    // 06:00 CET
    assert_eq!(
        p.astronomical.sunrise,
        Utc.with_ymd_and_hms(2024, 12, 21, 5, 0, 0).unwrap()
    );
    assert_eq!(p.tithi.source, ValueSource::Computed);
}

#[test]
fn representable_range_ends_fall_back_without_overflow() {
    for mode in [BoundaryMode::Approximate, BoundaryMode::Exact] {
        let config = PanchangConfig::default().with_boundary_mode(mode);
        let svc = PanchangService::with_config(AnalyticEphemeris::new(), config);
        for date in [DateTime::<Utc>::MAX_UTC, DateTime::<Utc>::MIN_UTC] {
            let p = svc.calculate_daily_panchang(date, &delhi()).unwrap();
            assert_eq!(p.fallbacks().len(), 9, "{date}: {:?}", p.fallbacks());
            assert!(p.tithi.start <= p.tithi.end);
            assert!(p.nakshatra.start <= p.nakshatra.end);
            assert!(p.yoga.start <= p.yoga.end);
            assert!(p.karana.start <= p.karana.end);
            assert_eq!(p.karana.start, p.date);
            assert_eq!(p.muhurtas.len(), MUHURTA_COUNT);
        }
    }
}

//! Aggregation behavior under a scripted ephemeris.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use panchang_ephem::{Body, Ephemeris, EphemerisError, Observer, RiseSetDirection};
use panchang_service::{
    BoundaryMode, Location, PanchangConfig, PanchangError, PanchangField, PanchangService,
    TimelineEventKind, ValueSource,
};
use panchang_time::TimeError;
use panchang_vedic::{FestivalKind, MUHURTA_COUNT};

type RiseSetFn = fn(Body, RiseSetDirection, f64) -> Result<Option<f64>, EphemerisError>;

#[derive(Clone, Copy, PartialEq)]
enum Positions {
    Linear,
    Fail,
    NonFinite,
}

/// Longitudes moving linearly from `epoch`, rise/set answers from a
/// function of (body, direction, search start).
struct Scripted {
    epoch: f64,
    sun0: f64,
    moon0: f64,
    sun_rate: f64,
    moon_rate: f64,
    positions: Positions,
    rise_set: RiseSetFn,
}

impl Scripted {
    fn fixed(sun: f64, moon: f64) -> Self {
        Self {
            epoch: noon_mar7(),
            sun0: sun,
            moon0: moon,
            sun_rate: 0.0,
            moon_rate: 0.0,
            positions: Positions::Linear,
            rise_set: regular_day,
        }
    }

    fn lon(&self, body: Body, unix_s: f64) -> f64 {
        let days = (unix_s - self.epoch) / 86_400.0;
        let lon = match body {
            Body::Sun => self.sun0 + self.sun_rate * days,
            Body::Moon => self.moon0 + self.moon_rate * days,
        };
        lon.rem_euclid(360.0)
    }
}

impl Ephemeris for Scripted {
    fn search_rise_set(
        &self,
        body: Body,
        _: &Observer,
        start_unix_s: f64,
        direction: RiseSetDirection,
        _: f64,
    ) -> Result<Option<f64>, EphemerisError> {
        (self.rise_set)(body, direction, start_unix_s)
    }

    fn moon_phase(&self, unix_s: f64) -> Result<f64, EphemerisError> {
        let moon = self.ecliptic_longitude(Body::Moon, unix_s)?;
        let sun = self.ecliptic_longitude(Body::Sun, unix_s)?;
        Ok((moon - sun).rem_euclid(360.0))
    }

    fn ecliptic_longitude(&self, body: Body, unix_s: f64) -> Result<f64, EphemerisError> {
        match self.positions {
            Positions::Linear => Ok(self.lon(body, unix_s)),
            Positions::Fail => Err(EphemerisError::Backend("scripted failure".into())),
            Positions::NonFinite => Ok(f64::NAN),
        }
    }
}

fn regular_day(
    body: Body,
    direction: RiseSetDirection,
    start: f64,
) -> Result<Option<f64>, EphemerisError> {
    let hours = match (body, direction) {
        (Body::Sun, RiseSetDirection::Rise) => 6.0,
        (Body::Sun, RiseSetDirection::Set) => 18.0,
        (Body::Moon, RiseSetDirection::Rise) => 3.0,
        (Body::Moon, RiseSetDirection::Set) => 15.0,
    };
    Ok(Some(start + hours * 3600.0))
}

fn sunrise_throws(
    body: Body,
    direction: RiseSetDirection,
    start: f64,
) -> Result<Option<f64>, EphemerisError> {
    if (body, direction) == (Body::Sun, RiseSetDirection::Rise) {
        return Err(EphemerisError::Backend("sunrise unavailable".into()));
    }
    regular_day(body, direction, start)
}

fn never_found(_: Body, _: RiseSetDirection, _: f64) -> Result<Option<f64>, EphemerisError> {
    Ok(None)
}

fn nan_times(_: Body, _: RiseSetDirection, _: f64) -> Result<Option<f64>, EphemerisError> {
    Ok(Some(f64::NAN))
}

fn sunset_before_sunrise(
    body: Body,
    direction: RiseSetDirection,
    start: f64,
) -> Result<Option<f64>, EphemerisError> {
    if (body, direction) == (Body::Sun, RiseSetDirection::Set) {
        return Ok(Some(start + 2.0 * 3600.0));
    }
    regular_day(body, direction, start)
}

/// 2024-03-07T12:00:00Z
fn noon_mar7() -> f64 {
    1_709_812_800.0
}

fn mar7() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 7, 0, 0, 0).unwrap()
}

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

fn delhi() -> Location {
    Location::new(28.6139, 77.2090, "Asia/Kolkata", "New Delhi").unwrap()
}

fn service(eph: Scripted) -> PanchangService<Scripted> {
    PanchangService::new(eph)
}

#[test]
fn sunrise_error_gives_six_local() {
    let eph = Scripted {
        rise_set: sunrise_throws,
        ..Scripted::fixed(340.0, 100.0)
    };
    let p = service(eph).calculate_daily_panchang(mar7(), &delhi()).unwrap();
    assert_eq!(p.astronomical.sunrise, utc(2024, 3, 7, 0, 30));
    assert_eq!(p.astronomical.sources.sunrise, ValueSource::Fallback);
    assert_eq!(p.astronomical.sources.sunset, ValueSource::Computed);
    assert_eq!(p.fallbacks(), [PanchangField::Sunrise]);
    assert!(!p.is_fully_computed());
    assert_eq!(p.muhurtas.len(), MUHURTA_COUNT);
}

#[test]
fn every_search_miss_uses_fixed_times() {
    let eph = Scripted {
        rise_set: never_found,
        ..Scripted::fixed(340.0, 100.0)
    };
    let p = service(eph).calculate_daily_panchang(mar7(), &delhi()).unwrap();
    let a = &p.astronomical;
    assert_eq!(a.sunrise, utc(2024, 3, 7, 0, 30));
    assert_eq!(a.sunset, utc(2024, 3, 7, 12, 30));
    assert_eq!(a.moonrise, utc(2024, 3, 6, 18, 30));
    assert_eq!(a.moonset, utc(2024, 3, 7, 6, 30));
    assert_eq!(
        p.fallbacks(),
        [
            PanchangField::Sunrise,
            PanchangField::Sunset,
            PanchangField::Moonrise,
            PanchangField::Moonset
        ]
    );
    assert_eq!(p.muhurtas[0].start, a.sunrise);
    assert_eq!(p.muhurtas[MUHURTA_COUNT - 1].end, a.sunset);
}

#[test]
fn non_finite_event_time_is_replaced() {
    let eph = Scripted {
        rise_set: nan_times,
        ..Scripted::fixed(340.0, 100.0)
    };
    let p = service(eph).calculate_daily_panchang(mar7(), &delhi()).unwrap();
    assert_eq!(p.astronomical.sunrise, utc(2024, 3, 7, 0, 30));
    assert_eq!(p.astronomical.sources.moonset, ValueSource::Fallback);
}

#[test]
fn position_failure_gives_default_elements() {
    let eph = Scripted {
        positions: Positions::Fail,
        ..Scripted::fixed(0.0, 0.0)
    };
    let p = service(eph).calculate_daily_panchang(mar7(), &delhi()).unwrap();
    let noon = utc(2024, 3, 7, 12, 0);
    assert_eq!(p.date, noon);
    assert_eq!((p.tithi.number, p.tithi.name), (1, "Pratipada"));
    assert_eq!((p.tithi.start, p.tithi.end), (noon, noon + TimeDelta::hours(24)));
    assert_eq!((p.nakshatra.number, p.nakshatra.name), (1, "Ashwini"));
    assert_eq!(p.nakshatra.pada, None);
    assert_eq!((p.yoga.number, p.karana.number, p.karana.sequence), (1, 1, 1));
    assert_eq!(p.astronomical.lunar_phase, 0.0);
    assert_eq!(p.astronomical.sources.lunar_phase, ValueSource::Fallback);
    assert_eq!(
        p.fallbacks(),
        [
            PanchangField::LunarPhase,
            PanchangField::Tithi,
            PanchangField::Nakshatra,
            PanchangField::Yoga,
            PanchangField::Karana
        ]
    );
    // The default tithi 1 triggers the new-moon rule.
    assert!(p.festivals.iter().any(|f| f.name == "Amavasya"));
}

#[test]
fn nan_longitudes_are_fallbacks() {
    let eph = Scripted {
        positions: Positions::NonFinite,
        ..Scripted::fixed(0.0, 0.0)
    };
    let p = service(eph).calculate_daily_panchang(mar7(), &delhi()).unwrap();
    assert_eq!(p.tithi.source, ValueSource::Fallback);
    assert_eq!(p.nakshatra.source, ValueSource::Fallback);
    assert!((0.0..=1.0).contains(&p.astronomical.lunar_phase));
}

#[test]
fn inverted_daylight_uses_local_six_to_six() {
    let eph = Scripted {
        rise_set: sunset_before_sunrise,
        ..Scripted::fixed(340.0, 100.0)
    };
    let p = service(eph).calculate_daily_panchang(mar7(), &delhi()).unwrap();
    assert!(p.astronomical.sunset < p.astronomical.sunrise);
    assert_eq!(p.muhurtas.len(), MUHURTA_COUNT);
    assert_eq!(p.muhurtas[0].start, utc(2024, 3, 7, 0, 30));
    assert_eq!(p.muhurtas[MUHURTA_COUNT - 1].end, utc(2024, 3, 7, 12, 30));
}

#[test]
fn invalid_location_is_the_only_error() {
    let bad = Location {
        latitude_deg: f64::NAN,
        longitude_deg: 0.0,
        timezone: "UTC".into(),
        name: "nowhere".into(),
    };
    let svc = service(Scripted::fixed(0.0, 0.0));
    assert!(matches!(
        svc.calculate_daily_panchang(mar7(), &bad),
        Err(PanchangError::InvalidLocation(_))
    ));
    assert!(svc.timeline(mar7(), &bad, 1).is_err());
}

#[test]
fn purnima_on_tithi_fifteen() {
    // elongation 170° → tithi 15
    let p = service(Scripted::fixed(10.0, 180.0))
        .calculate_daily_panchang(mar7(), &delhi())
        .unwrap();
    assert_eq!(p.tithi.number, 15);
    let purnima = p.festivals.iter().find(|f| f.name == "Purnima").unwrap();
    assert_eq!(purnima.kind, FestivalKind::Tithi);
    assert_eq!(purnima.date, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
}

#[test]
fn holi_on_march_22() {
    let p = service(Scripted::fixed(340.0, 100.0))
        .calculate_daily_panchang(utc(2024, 3, 22, 20, 0), &delhi())
        .unwrap();
    let holi = p.festivals.iter().find(|f| f.name == "Holi").unwrap();
    assert_eq!(holi.kind, FestivalKind::Major);
}

#[test]
fn same_input_same_output() {
    let svc = service(Scripted::fixed(123.0, 321.0));
    let a = svc.calculate_daily_panchang(mar7(), &delhi()).unwrap();
    let b = svc.calculate_daily_panchang(mar7(), &delhi()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn any_time_of_day_maps_to_noon() {
    let svc = service(Scripted::fixed(123.0, 321.0));
    let a = svc.calculate_daily_panchang(utc(2024, 3, 7, 0, 1), &delhi()).unwrap();
    let b = svc.calculate_daily_panchang(utc(2024, 3, 7, 23, 59), &delhi()).unwrap();
    assert_eq!(a.date, utc(2024, 3, 7, 12, 0));
    assert_eq!(a, b);
}

#[test]
fn month_has_one_record_per_day() {
    let svc = service(Scripted::fixed(340.0, 100.0));
    let feb = svc.calculate_month(2024, 2, &delhi()).unwrap();
    assert_eq!(feb.len(), 29);
    assert_eq!(feb[0].date, utc(2024, 2, 1, 12, 0));
    assert_eq!(feb[28].date, utc(2024, 2, 29, 12, 0));

    assert!(matches!(
        svc.calculate_month(2024, 13, &delhi()),
        Err(PanchangError::Time(TimeError::InvalidCalendar { .. }))
    ));
}

#[test]
fn festivals_in_month_flattens() {
    // Tithi 15 every day, plus Holi on the 22nd.
    let svc = service(Scripted::fixed(10.0, 180.0));
    let fests = svc.festivals_in_month(2024, 3, &delhi()).unwrap();
    assert_eq!(fests.len(), 32);
    assert_eq!(fests.iter().filter(|f| f.name == "Holi").count(), 1);
    assert!(fests.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn timeline_is_sorted_and_complete() {
    let svc = service(Scripted::fixed(340.0, 100.0));
    let events = svc.timeline(mar7(), &delhi(), 1).unwrap();
    assert_eq!(events.len(), 3 * 8);
    assert!(events.windows(2).all(|w| w[0].time <= w[1].time));
    let sunrises = events
        .iter()
        .filter(|e| e.kind == TimelineEventKind::Sunrise)
        .count();
    assert_eq!(sunrises, 3);
    let tithi = events
        .iter()
        .find(|e| e.kind == TimelineEventKind::TithiStart)
        .unwrap();
    assert_eq!(tithi.description.as_deref(), Some("Tithi 11"));
    let nak = events
        .iter()
        .find(|e| e.kind == TimelineEventKind::NakshatraStart)
        .unwrap();
    assert_eq!(nak.name, "Pushya");
    assert_eq!(nak.description.as_deref(), Some("Ruled by Saturn"));
}

#[test]
fn exact_boundaries_follow_the_motion() {
    // Elongation 128° at noon, growing 12°/day (0.5°/h): tithi 11 spans
    // 120°..132° = noon-16h..noon+4h, karana 22 spans 126°..132°.
    let eph = Scripted {
        moon_rate: 12.0,
        ..Scripted::fixed(0.0, 128.0)
    };
    let config = PanchangConfig::default().with_boundary_mode(BoundaryMode::Exact);
    let p = PanchangService::with_config(eph, config)
        .calculate_daily_panchang(mar7(), &delhi())
        .unwrap();
    let noon = utc(2024, 3, 7, 12, 0);
    let off = |t: DateTime<Utc>, expected: DateTime<Utc>| (t - expected).num_milliseconds().abs();
    assert_eq!(p.tithi.number, 11);
    assert!(off(p.tithi.start, noon - TimeDelta::hours(16)) <= 2000);
    assert!(off(p.tithi.end, noon + TimeDelta::hours(4)) <= 2000);
    assert_eq!(p.karana.sequence, 22);
    assert!(off(p.karana.start, noon - TimeDelta::hours(4)) <= 2000);
    assert!(off(p.karana.end, noon + TimeDelta::hours(8)) <= 2000);
}

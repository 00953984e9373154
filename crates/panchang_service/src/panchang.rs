//! Daily panchang aggregation and multi-day helpers.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use log::{debug, warn};
use panchang_ephem::Ephemeris;
use panchang_time::{month_dates, utc_midnight, utc_noon};
use panchang_vedic::{Festival, Muhurta, festivals_for, muhurtas_for_daylight};

use crate::astro::{
    FALLBACK_SUNRISE_HOUR, FALLBACK_SUNSET_HOUR, astronomical_info, fixed_local_time,
};
use crate::config::PanchangConfig;
use crate::elements::{karana_at, nakshatra_at, tithi_at, yoga_at};
use crate::error::PanchangError;
use crate::location::Location;
use crate::panchang_types::{AstronomicalInfo, DailyPanchang, TimelineEvent, TimelineEventKind};

/// Panchang calculator over an injected ephemeris.
///
/// Stateless apart from its configuration; share it across threads with
/// `Arc` if needed.
#[derive(Debug, Clone)]
pub struct PanchangService<E> {
    ephemeris: E,
    config: PanchangConfig,
}

impl<E: Ephemeris> PanchangService<E> {
    pub fn new(ephemeris: E) -> Self {
        Self::with_config(ephemeris, PanchangConfig::default())
    }

    pub fn with_config(ephemeris: E, config: PanchangConfig) -> Self {
        Self { ephemeris, config }
    }

    pub fn config(&self) -> &PanchangConfig {
        &self.config
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// Full panchang for the UTC calendar date of `date`.
    ///
    /// Elements are sampled at 12:00 UTC of that date. Every ephemeris
    /// miss or failure is replaced by a default value and listed in
    /// [`DailyPanchang::fallbacks`]; the only error is an invalid
    /// location.
    pub fn calculate_daily_panchang(
        &self,
        date: DateTime<Utc>,
        location: &Location,
    ) -> Result<DailyPanchang, PanchangError> {
        location.validate()?;
        let noon = utc_noon(date);
        let mode = self.config.boundary_mode;

        let astronomical = astronomical_info(&self.ephemeris, noon, location, &self.config);
        let tithi = tithi_at(&self.ephemeris, noon, mode);
        let nakshatra = nakshatra_at(&self.ephemeris, noon, mode);
        let yoga = yoga_at(&self.ephemeris, noon, mode);
        let karana = karana_at(&self.ephemeris, noon, mode);

        let muhurtas = daylight_muhurtas(&astronomical, noon.date_naive(), location);
        let festivals = festivals_for(noon.date_naive(), tithi.number, nakshatra.number);

        let panchang = DailyPanchang {
            date: noon,
            tithi,
            nakshatra,
            yoga,
            karana,
            astronomical,
            muhurtas,
            festivals,
        };
        let fallbacks = panchang.fallbacks();
        if fallbacks.is_empty() {
            debug!(
                "panchang for {} at {}: all fields computed",
                panchang.calendar_date(),
                location.name
            );
        } else {
            warn!(
                "panchang for {} at {}: {} field(s) fell back: {:?}",
                panchang.calendar_date(),
                location.name,
                fallbacks.len(),
                fallbacks
            );
        }
        Ok(panchang)
    }

    /// One panchang per day of a Gregorian month.
    pub fn calculate_month(
        &self,
        year: i32,
        month: u32,
        location: &Location,
    ) -> Result<Vec<DailyPanchang>, PanchangError> {
        location.validate()?;
        month_dates(year, month)?
            .into_iter()
            .map(|day| self.calculate_daily_panchang(utc_midnight(day), location))
            .collect()
    }

    /// Festivals of every day of a Gregorian month, in date order.
    pub fn festivals_in_month(
        &self,
        year: i32,
        month: u32,
        location: &Location,
    ) -> Result<Vec<Festival>, PanchangError> {
        Ok(self
            .calculate_month(year, month, location)?
            .into_iter()
            .flat_map(|day| day.festivals)
            .collect())
    }

    /// Rise/set events and element starts for `date - days_around ..=
    /// date + days_around`, sorted by time.
    pub fn timeline(
        &self,
        date: DateTime<Utc>,
        location: &Location,
        days_around: u32,
    ) -> Result<Vec<TimelineEvent>, PanchangError> {
        location.validate()?;
        let span = i64::from(days_around);
        let mut events = Vec::new();
        for offset in -span..=span {
            let day = date
                .checked_add_signed(TimeDelta::days(offset))
                .ok_or_else(|| {
                    PanchangError::Aggregation(format!("{date} {offset:+} days is out of range"))
                })?;
            let p = self.calculate_daily_panchang(day, location)?;
            events.extend(day_events(&p));
        }
        events.sort_by_key(|e| e.time);
        Ok(events)
    }
}

/// Muhurtas over sunrise..sunset, or over 06:00..18:00 local time when
/// sunset does not follow sunrise.
fn daylight_muhurtas(
    info: &AstronomicalInfo,
    date: NaiveDate,
    location: &Location,
) -> Vec<Muhurta> {
    if info.sunset > info.sunrise {
        return muhurtas_for_daylight(info.sunrise, info.sunset);
    }
    warn!(
        "sunset {} not after sunrise {} on {date}; using 06:00-18:00 local for muhurtas",
        info.sunset, info.sunrise
    );
    let tz = location.tz();
    muhurtas_for_daylight(
        fixed_local_time(date, FALLBACK_SUNRISE_HOUR, tz),
        fixed_local_time(date, FALLBACK_SUNSET_HOUR, tz),
    )
}

fn event(
    time: DateTime<Utc>,
    kind: TimelineEventKind,
    name: &str,
    description: Option<String>,
) -> TimelineEvent {
    TimelineEvent {
        time,
        kind,
        name: name.to_string(),
        description,
    }
}

fn day_events(p: &DailyPanchang) -> [TimelineEvent; 8] {
    let a = &p.astronomical;
    [
        event(a.sunrise, TimelineEventKind::Sunrise, "Sunrise", None),
        event(a.sunset, TimelineEventKind::Sunset, "Sunset", None),
        event(a.moonrise, TimelineEventKind::Moonrise, "Moonrise", None),
        event(a.moonset, TimelineEventKind::Moonset, "Moonset", None),
        event(
            p.tithi.start,
            TimelineEventKind::TithiStart,
            p.tithi.name,
            Some(format!("Tithi {}", p.tithi.number)),
        ),
        event(
            p.nakshatra.start,
            TimelineEventKind::NakshatraStart,
            p.nakshatra.name,
            Some(format!("Ruled by {}", p.nakshatra.ruler)),
        ),
        event(p.yoga.start, TimelineEventKind::YogaStart, p.yoga.name, None),
        event(p.karana.start, TimelineEventKind::KaranaStart, p.karana.name, None),
    ]
}

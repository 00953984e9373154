//! Daily panchang calculation over an [`Ephemeris`](panchang_ephem::Ephemeris).
//!
//! This crate provides:
//! - [`PanchangService`]: the daily aggregate, month and timeline helpers
//! - The ephemeris adapter with fixed fallbacks ([`astro`])
//! - Element calculators with approximate or exact boundaries
//!   ([`elements`], [`boundary`])
//! - Result types carrying per-field provenance ([`ValueSource`])

pub mod astro;
pub mod boundary;
pub mod config;
pub mod elements;
pub mod error;
pub mod location;
pub mod panchang;
pub mod panchang_types;

pub use astro::astronomical_info;
pub use config::{BoundaryMode, PanchangConfig};
pub use elements::{karana_at, nakshatra_at, tithi_at, yoga_at};
pub use error::PanchangError;
pub use location::Location;
pub use panchang::PanchangService;
pub use panchang_types::{
    AstronomicalInfo, AstronomicalSources, DailyPanchang, KaranaInfo, NakshatraInfo,
    PanchangField, TimelineEvent, TimelineEventKind, TithiInfo, ValueSource, YogaInfo,
};

const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn assert_all() {
        assert_send_sync::<PanchangService<panchang_ephem::AnalyticEphemeris>>();
        assert_send_sync::<DailyPanchang>();
        assert_send_sync::<PanchangError>();
    }
};

//! Consumer-side state: the tracker plus feed freshness and buzzer phase.
//!
//! The tracker itself is `no_std` and has no clock; this wrapper adds the
//! `Instant`-based parts the common crate cannot hold.

use std::time::{Duration, Instant};

use radar_common::widgets::GaugeView;
use radar_common::{DistanceTracker, EventLog, Zone, ZoneChange};

/// Freshness of the incoming feed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeedStatus {
    /// No reading yet.
    Waiting,
    Live,
    /// No reading within the stale window.
    Stale,
}

impl FeedStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Live => "LIVE",
            Self::Stale => "STALE",
        }
    }
}

pub struct MonitorState {
    tracker: DistanceTracker,
    events: EventLog,
    last_sample_at: Option<Instant>,
    /// Start of the current buzzer pattern.
    zone_since: Instant,
    stale_after: Duration,
}

impl MonitorState {
    pub fn new(
        stale_after: Duration,
        now: Instant,
    ) -> Self {
        Self {
            tracker: DistanceTracker::new(),
            events: EventLog::new(),
            last_sample_at: None,
            zone_since: now,
            stale_after,
        }
    }

    /// Apply one reading received at `now`. Logs and returns the zone change.
    pub fn apply(
        &mut self,
        distance: f64,
        now: Instant,
    ) -> Option<ZoneChange> {
        if !distance.is_finite() {
            return None;
        }
        self.last_sample_at = Some(now);

        let change = self.tracker.update(distance)?;
        self.zone_since = now;
        self.events.push(&change);

        if change.to == Zone::RedFull {
            log::warn!("Obstacle at {distance:.2} m: {} -> {}", change.from, change.to);
        } else {
            log::info!("Zone {} -> {} at {distance:.2} m", change.from, change.to);
        }
        Some(change)
    }

    pub fn feed_status(
        &self,
        now: Instant,
    ) -> FeedStatus {
        match self.last_sample_at {
            None => FeedStatus::Waiting,
            Some(at) if now.saturating_duration_since(at) > self.stale_after => FeedStatus::Stale,
            Some(_) => FeedStatus::Live,
        }
    }

    /// Zone to show. A feed that is not live shows nothing.
    pub fn display_zone(
        &self,
        now: Instant,
    ) -> Zone {
        match self.feed_status(now) {
            FeedStatus::Live => self.tracker.zone(),
            FeedStatus::Waiting | FeedStatus::Stale => Zone::None,
        }
    }

    pub fn buzzer_on(
        &self,
        now: Instant,
    ) -> bool {
        let elapsed = now.saturating_duration_since(self.zone_since).as_millis() as u64;
        self.display_zone(now).buzzer().is_on(elapsed)
    }

    /// Gauge frame for `now`.
    pub fn view<'a>(
        &'a self,
        title: &'a str,
        status: &'a str,
        now: Instant,
    ) -> GaugeView<'a> {
        let zone = self.display_zone(now);
        GaugeView {
            title,
            status,
            zone,
            distance: if zone == Zone::None { None } else { self.tracker.last() },
            buzzer_on: self.buzzer_on(now),
            tracker: &self.tracker,
        }
    }

    /// Clear statistics and events. Feed freshness is kept.
    pub fn reset(
        &mut self,
        now: Instant,
    ) {
        self.tracker.reset();
        self.events.clear();
        self.zone_since = now;
        log::info!("Statistics reset");
    }

    #[inline]
    pub const fn tracker(&self) -> &DistanceTracker { &self.tracker }

    #[inline]
    pub const fn events(&self) -> &EventLog { &self.events }
}

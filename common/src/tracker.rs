//! Distance tracking for trend detection, closest approach, rolling average,
//! sparkline history and zone-change detection.
//!
//! `no_std` compatible: fixed arrays and sample-count based intervals instead
//! of wall-clock timing. At the transmitter's 60 ms cadence:
//! - trend window: 50 samples ≈ 3 s
//! - rolling average: 60 entries, one every 5 samples ≈ 18 s
//! - sparkline: 60 entries, one every 2 samples ≈ 7 s

use crate::config::{HISTORY_SIZE, TREND_THRESHOLD};
use crate::zones::{Zone, classify};

// =============================================================================
// Configuration Constants
// =============================================================================

/// Number of samples in the rolling average buffer.
const AVG_BUFFER_SIZE: usize = 60;

/// Interval between rolling average samples (in readings).
const AVG_SAMPLE_INTERVAL: u32 = 5;

/// Number of samples in the sparkline buffer.
pub const GRAPH_HISTORY_SIZE: usize = 60;

/// Interval between sparkline samples (in readings).
const GRAPH_SAMPLE_INTERVAL: u32 = 2;

/// Readings needed before a trend is reported.
const TREND_MIN_SAMPLES: usize = 20;

/// Readings averaged at each end of the trend window.
const TREND_WINDOW: usize = 10;

// =============================================================================
// Public Types
// =============================================================================

/// A transition between two zones.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ZoneChange {
    pub from: Zone,
    pub to: Zone,
    /// The reading that caused the transition.
    pub distance: f64,
}

impl ZoneChange {
    /// True when the obstacle moved into a more dangerous zone.
    #[inline]
    pub fn is_closer(&self) -> bool { self.to < self.from }
}

/// Sparkline view over the tracker's graph ring.
#[derive(Clone, Copy, Debug)]
pub struct GraphData<'a> {
    pub buffer: &'a [f32],
    pub start_idx: usize,
    pub count: usize,
    pub min: f32,
    pub max: f32,
}

// =============================================================================
// Tracker
// =============================================================================

/// Tracks recent readings of one distance feed.
pub struct DistanceTracker {
    /// Circular buffer of recent readings for trend calculation.
    history: [f64; HISTORY_SIZE],
    history_index: usize,
    history_count: usize,

    last: Option<f64>,
    zone: Zone,
    closest: Option<f64>,
    total_samples: u64,
    zone_changes: u32,

    // Rolling Average State
    avg_buffer: [f64; AVG_BUFFER_SIZE],
    avg_index: usize,
    avg_count: usize,
    avg_sum: f64,
    avg_counter: u32,

    // Graph History State
    graph_buffer: [f32; GRAPH_HISTORY_SIZE],
    graph_index: usize,
    graph_count: usize,
    graph_counter: u32,
    graph_min: f32,
    graph_max: f32,
}

impl DistanceTracker {
    /// Create an empty tracker.
    pub const fn new() -> Self {
        Self {
            history: [0.0; HISTORY_SIZE],
            history_index: 0,
            history_count: 0,
            last: None,
            zone: Zone::None,
            closest: None,
            total_samples: 0,
            zone_changes: 0,
            avg_buffer: [0.0; AVG_BUFFER_SIZE],
            avg_index: 0,
            avg_count: 0,
            avg_sum: 0.0,
            avg_counter: 0,
            graph_buffer: [0.0; GRAPH_HISTORY_SIZE],
            graph_index: 0,
            graph_count: 0,
            graph_counter: 0,
            graph_min: f32::MAX,
            graph_max: f32::MIN,
        }
    }

    /// Record a reading. Returns the zone transition it caused, if any.
    ///
    /// Non-finite readings are ignored and leave the tracker untouched.
    pub fn update(
        &mut self,
        distance: f64,
    ) -> Option<ZoneChange> {
        if !distance.is_finite() {
            return None;
        }

        self.history[self.history_index] = distance;
        self.history_index = (self.history_index + 1) % HISTORY_SIZE;
        if self.history_count < HISTORY_SIZE {
            self.history_count += 1;
        }
        self.last = Some(distance);
        self.total_samples += 1;

        self.closest = Some(match self.closest {
            Some(c) if c <= distance => c,
            _ => distance,
        });

        self.avg_counter += 1;
        if self.avg_counter >= AVG_SAMPLE_INTERVAL {
            self.avg_counter = 0;
            self.add_avg_sample(distance);
        }

        self.graph_counter += 1;
        if self.graph_counter >= GRAPH_SAMPLE_INTERVAL {
            self.graph_counter = 0;
            self.add_graph_sample(distance);
        }

        let zone = classify(distance);
        if zone == self.zone {
            return None;
        }
        let change = ZoneChange {
            from: self.zone,
            to: zone,
            distance,
        };
        self.zone = zone;
        self.zone_changes += 1;
        Some(change)
    }

    fn add_avg_sample(
        &mut self,
        value: f64,
    ) {
        if self.avg_count >= AVG_BUFFER_SIZE {
            self.avg_sum -= self.avg_buffer[self.avg_index];
        } else {
            self.avg_count += 1;
        }

        self.avg_buffer[self.avg_index] = value;
        self.avg_sum += value;
        self.avg_index = (self.avg_index + 1) % AVG_BUFFER_SIZE;

        // Resum once per lap so rounding error from the running sum cannot build up
        if self.avg_index == 0 {
            self.avg_sum = self.avg_buffer.iter().sum();
        }
    }

    fn add_graph_sample(
        &mut self,
        value: f64,
    ) {
        // Sparkline only needs screen precision
        self.graph_buffer[self.graph_index] = value as f32;
        self.graph_index = (self.graph_index + 1) % GRAPH_HISTORY_SIZE;

        if self.graph_count < GRAPH_HISTORY_SIZE {
            self.graph_count += 1;
        }

        let (min, max) = self.graph_buffer[..self.graph_count]
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        self.graph_min = min;
        self.graph_max = max;
    }

    /// Zone of the latest reading (`None` before any reading).
    #[inline]
    pub const fn zone(&self) -> Zone { self.zone }

    /// Latest reading.
    #[inline]
    pub const fn last(&self) -> Option<f64> { self.last }

    /// Closest approach since the last reset.
    #[inline]
    pub const fn closest(&self) -> Option<f64> { self.closest }

    /// Readings accepted since the last reset.
    #[inline]
    pub const fn total_samples(&self) -> u64 { self.total_samples }

    /// Zone transitions since the last reset.
    #[inline]
    pub const fn zone_changes(&self) -> u32 { self.zone_changes }

    /// Rolling average distance.
    pub fn average(&self) -> Option<f64> {
        if self.avg_count == 0 {
            None
        } else {
            Some(self.avg_sum / self.avg_count as f64)
        }
    }

    /// Sparkline data, oldest entry at `start_idx`.
    pub fn graph(&self) -> GraphData<'_> {
        let start_idx = if self.graph_count < GRAPH_HISTORY_SIZE {
            0
        } else {
            self.graph_index
        };
        GraphData {
            buffer: &self.graph_buffer,
            start_idx,
            count: self.graph_count,
            min: self.graph_min,
            max: self.graph_max,
        }
    }

    /// Movement direction: `Some(true)` approaching, `Some(false)` receding,
    /// `None` when stable or with too few readings.
    pub fn trend(&self) -> Option<bool> {
        if self.history_count < TREND_MIN_SAMPLES {
            return None;
        }

        let mut recent_sum = 0.0f64;
        for i in 0..TREND_WINDOW {
            let idx = (self.history_index + HISTORY_SIZE - 1 - i) % HISTORY_SIZE;
            recent_sum += self.history[idx];
        }
        let recent_avg = recent_sum / TREND_WINDOW as f64;

        let start = if self.history_count < HISTORY_SIZE {
            0
        } else {
            self.history_index
        };
        let mut older_sum = 0.0f64;
        for i in 0..TREND_WINDOW {
            older_sum += self.history[(start + i) % HISTORY_SIZE];
        }
        let older_avg = older_sum / TREND_WINDOW as f64;

        let diff = recent_avg - older_avg;
        if diff.abs() < TREND_THRESHOLD {
            None
        } else {
            Some(diff < 0.0)
        }
    }

    /// Clear everything, as if no reading had been received.
    pub fn reset(&mut self) { *self = Self::new(); }
}

impl Default for DistanceTracker {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_is_empty() {
        let t = DistanceTracker::new();
        assert_eq!(t.zone(), Zone::None);
        assert_eq!(t.last(), None);
        assert_eq!(t.closest(), None);
        assert_eq!(t.average(), None);
        assert_eq!(t.trend(), None);
        assert_eq!(t.graph().count, 0);
    }

    #[test]
    fn test_first_reading_in_range_reports_change() {
        let mut t = DistanceTracker::new();
        let change = t.update(0.6).expect("entering a zone is a change");
        assert_eq!(change.from, Zone::None);
        assert_eq!(change.to, Zone::YellowFull);
        assert!(change.is_closer());
    }

    #[test]
    fn test_first_reading_out_of_range_is_silent() {
        let mut t = DistanceTracker::new();
        assert_eq!(t.update(3.0), None);
        assert_eq!(t.total_samples(), 1);
    }

    #[test]
    fn test_same_zone_no_change() {
        let mut t = DistanceTracker::new();
        t.update(0.8);
        assert_eq!(t.update(0.75), None, "still Yellow");
        assert_eq!(t.zone_changes(), 1);
    }

    #[test]
    fn test_receding_change() {
        let mut t = DistanceTracker::new();
        t.update(0.2);
        let change = t.update(1.2).expect("zone changed");
        assert_eq!(change.from, Zone::RedFull);
        assert_eq!(change.to, Zone::Green);
        assert!(!change.is_closer());
    }

    #[test]
    fn test_closest_approach() {
        let mut t = DistanceTracker::new();
        for d in [1.2, 0.9, 0.35, 0.8, 1.5] {
            t.update(d);
        }
        assert_eq!(t.closest(), Some(0.35));
        assert_eq!(t.last(), Some(1.5));
    }

    #[test]
    fn test_non_finite_ignored() {
        let mut t = DistanceTracker::new();
        t.update(0.4);
        assert_eq!(t.update(f64::NAN), None);
        assert_eq!(t.update(f64::INFINITY), None);
        assert_eq!(t.zone(), Zone::Red);
        assert_eq!(t.total_samples(), 1);
    }

    #[test]
    fn test_average_after_interval() {
        let mut t = DistanceTracker::new();
        for _ in 0..AVG_SAMPLE_INTERVAL - 1 {
            t.update(1.0);
        }
        assert_eq!(t.average(), None, "no average sample yet");
        t.update(1.0);
        let avg = t.average().expect("one average sample");
        assert!((avg - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_average_does_not_drift() {
        let mut t = DistanceTracker::new();
        // One full lap of huge values leaves rounding error in a running sum
        for _ in 0..AVG_BUFFER_SIZE as u32 * AVG_SAMPLE_INTERVAL {
            t.update(1.0e9);
        }
        for _ in 0..AVG_BUFFER_SIZE as u32 * AVG_SAMPLE_INTERVAL {
            t.update(0.3);
        }
        let avg = t.average().expect("buffer is full");
        assert!((avg - 0.3).abs() < 1e-12, "average drifted to {avg}");
    }

    #[test]
    fn test_trend_approaching() {
        let mut t = DistanceTracker::new();
        for i in 0..30 {
            t.update(1.5 - i as f64 * 0.04);
        }
        assert_eq!(t.trend(), Some(true));
    }

    #[test]
    fn test_trend_receding() {
        let mut t = DistanceTracker::new();
        for i in 0..30 {
            t.update(0.2 + i as f64 * 0.04);
        }
        assert_eq!(t.trend(), Some(false));
    }

    #[test]
    fn test_trend_stable() {
        let mut t = DistanceTracker::new();
        for _ in 0..60 {
            t.update(0.8);
        }
        assert_eq!(t.trend(), None);
    }

    #[test]
    fn test_graph_min_max() {
        let mut t = DistanceTracker::new();
        for d in [0.5, 0.5, 0.9, 0.9, 0.3, 0.3] {
            t.update(d);
        }
        let g = t.graph();
        assert_eq!(g.count, 3);
        assert_eq!(g.min, 0.3);
        assert_eq!(g.max, 0.9);
    }

    #[test]
    fn test_graph_wraps() {
        let mut t = DistanceTracker::new();
        for i in 0..(GRAPH_HISTORY_SIZE as u32 * GRAPH_SAMPLE_INTERVAL + 4) {
            t.update(i as f64 * 0.01);
        }
        let g = t.graph();
        assert_eq!(g.count, GRAPH_HISTORY_SIZE);
        assert_eq!(g.start_idx, 2, "oldest entry follows the write index");
    }

    #[test]
    fn test_reset() {
        let mut t = DistanceTracker::new();
        for d in [0.2, 0.4, 0.6] {
            t.update(d);
        }
        t.reset();
        assert_eq!(t.zone(), Zone::None);
        assert_eq!(t.closest(), None);
        assert_eq!(t.total_samples(), 0);
        assert!(t.update(0.2).is_some(), "zone re-entered after reset");
    }
}

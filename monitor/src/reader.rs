//! Background reader producing distances into a bounded channel.
//!
//! A reader owns one source (serial port, stdin or a synthetic sweep) and
//! runs on its own named thread. Readings travel to the consumer over a
//! `crossbeam_channel::bounded` channel. Shutdown goes through a separate
//! stop channel: [`ReaderHandle::stop`] closes it and then waits for the
//! thread's completion report before joining.

use std::io::{self, BufRead, BufReader, ErrorKind};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, SendTimeoutError, Sender, TryRecvError, bounded};
use radar_common::reading::{LINE_CAPACITY, format_reading, parse_line};

use crate::error::{MonitorError, Result};
use crate::timing::{JOIN_TIMEOUT, SEND_RETRY, SERIAL_READ_TIMEOUT};

// =============================================================================
// Sweep Configuration
// =============================================================================

/// Closest point of the synthetic sweep (m).
pub const SWEEP_MIN: f64 = 0.1;

/// Farthest point of the synthetic sweep (m).
pub const SWEEP_MAX: f64 = 1.6;

/// Angular frequency of the sweep (rad/s); one full cycle takes ~12.6 s.
const SWEEP_FREQ: f64 = 0.5;

// =============================================================================
// Source and Statistics
// =============================================================================

/// Where readings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Serial port emitting one decimal reading per line.
    Serial { port: String, baud: u32 },
    /// Same line format on standard input.
    Stdin,
    /// Synthetic back-and-forth distance, one reading per `period`.
    Sweep { period: Duration },
}

impl Source {
    /// Short name for the header status.
    pub fn describe(&self) -> String {
        match self {
            Self::Serial { port, .. } => port.clone(),
            Self::Stdin => "STDIN".to_owned(),
            Self::Sweep { .. } => "SWEEP".to_owned(),
        }
    }
}

/// What a reader did before it stopped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReaderStats {
    /// Lines seen, valid or not.
    pub lines: u64,
    /// Readings delivered to the channel.
    pub accepted: u64,
    /// Malformed or non-finite lines.
    pub discarded: u64,
    /// Source reached end of input.
    pub eof: bool,
    /// I/O error that ended the reader.
    pub error: Option<String>,
}

// =============================================================================
// Reader Handle
// =============================================================================

/// Owner of a running reader thread.
pub struct ReaderHandle {
    name: String,
    stop_tx: Option<Sender<()>>,
    done_rx: Receiver<ReaderStats>,
    handle: Option<JoinHandle<()>>,
}

impl ReaderHandle {
    /// Thread name.
    pub fn name(&self) -> &str { &self.name }

    /// True once the thread has returned.
    pub fn is_finished(&self) -> bool { self.handle.as_ref().is_none_or(JoinHandle::is_finished) }

    /// Signal the reader to stop and join it.
    ///
    /// Waits at most [`JOIN_TIMEOUT`]. A reader blocked in a read that has no
    /// timeout (stdin) is left detached and reported as
    /// [`MonitorError::ReaderStuck`].
    pub fn stop(mut self) -> Result<ReaderStats> { self.shutdown(JOIN_TIMEOUT) }

    fn shutdown(
        &mut self,
        timeout: Duration,
    ) -> Result<ReaderStats> {
        if let Some(stop_tx) = self.stop_tx.take() {
            // Closing the channel is the signal; the message only wakes a sweep early
            let _ = stop_tx.try_send(());
        }

        match self.done_rx.recv_timeout(timeout) {
            Ok(stats) => {
                if let Some(handle) = self.handle.take() {
                    handle.join().map_err(|_| MonitorError::ReaderPanicked)?;
                }
                log::debug!("{} joined", self.name);
                Ok(stats)
            }
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(handle) = self.handle.take() {
                    let _ = handle.join();
                }
                Err(MonitorError::ReaderPanicked)
            }
            Err(RecvTimeoutError::Timeout) => {
                self.handle.take();
                log::warn!("{} still blocked after {timeout:?}, detaching", self.name);
                Err(MonitorError::ReaderStuck(timeout))
            }
        }
    }
}

impl Drop for ReaderHandle {
    fn drop(&mut self) {
        if self.handle.is_some()
            && let Err(e) = self.shutdown(JOIN_TIMEOUT)
        {
            log::warn!("{e}");
        }
    }
}

// =============================================================================
// Spawning
// =============================================================================

/// Open `source` and start reading it on a background thread.
///
/// The source is opened on the calling thread so open errors surface here.
/// Returns the handle and the receiving end of a channel holding at most
/// `capacity` unread readings.
pub fn spawn(
    source: &Source,
    capacity: usize,
) -> Result<(ReaderHandle, Receiver<f64>)> {
    match source {
        Source::Serial { port, baud } => {
            let serial = serialport::new(port.as_str(), *baud)
                .timeout(SERIAL_READ_TIMEOUT)
                .open()
                .map_err(|source| MonitorError::OpenPort {
                    port: port.clone(),
                    source,
                })?;
            log::info!("Opened {port} at {baud} baud");
            spawn_lines("radar-serial", BufReader::new(serial), capacity)
        }
        Source::Stdin => spawn_lines("radar-stdin", BufReader::new(io::stdin()), capacity),
        Source::Sweep { period } => {
            let period = *period;
            spawn_worker("radar-sweep", capacity, move |tx, stop_rx| run_sweep(period, tx, stop_rx))
        }
    }
}

/// Start a reader over any line source.
pub fn spawn_lines<R>(
    name: &str,
    reader: R,
    capacity: usize,
) -> Result<(ReaderHandle, Receiver<f64>)>
where
    R: BufRead + Send + 'static,
{
    spawn_worker(name, capacity, move |tx, stop_rx| read_lines(reader, tx, stop_rx))
}

fn spawn_worker<F>(
    name: &str,
    capacity: usize,
    body: F,
) -> Result<(ReaderHandle, Receiver<f64>)>
where
    F: FnOnce(&Sender<f64>, &Receiver<()>) -> ReaderStats + Send + 'static,
{
    if capacity == 0 {
        return Err(MonitorError::InvalidConfig("channel capacity must be at least 1".to_owned()));
    }

    let (tx, rx) = bounded::<f64>(capacity);
    let (stop_tx, stop_rx) = bounded::<()>(1);
    let (done_tx, done_rx) = bounded::<ReaderStats>(1);

    let thread_name = name.to_owned();
    let handle = thread::Builder::new().name(name.to_owned()).spawn(move || {
        let stats = body(&tx, &stop_rx);
        log::debug!(
            "{thread_name} finished: {} lines, {} accepted, {} discarded",
            stats.lines,
            stats.accepted,
            stats.discarded
        );
        // Disconnect the readings channel before reporting completion
        drop(tx);
        let _ = done_tx.send(stats);
    })?;

    Ok((
        ReaderHandle {
            name: name.to_owned(),
            stop_tx: Some(stop_tx),
            done_rx,
            handle: Some(handle),
        },
        rx,
    ))
}

// =============================================================================
// Reader Loops
// =============================================================================

fn stop_requested(stop_rx: &Receiver<()>) -> bool { !matches!(stop_rx.try_recv(), Err(TryRecvError::Empty)) }

fn read_lines<R: BufRead>(
    mut reader: R,
    tx: &Sender<f64>,
    stop_rx: &Receiver<()>,
) -> ReaderStats {
    let mut stats = ReaderStats::default();
    // Survives read timeouts, so a line split across two reads is kept whole
    let mut line = Vec::with_capacity(LINE_CAPACITY);

    loop {
        if stop_requested(stop_rx) {
            break;
        }

        match reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                if !line.is_empty() {
                    deliver(&line, tx, stop_rx, &mut stats);
                }
                stats.eof = true;
                break;
            }
            Ok(_) if line.last() == Some(&b'\n') => {
                let keep_going = deliver(&line, tx, stop_rx, &mut stats);
                line.clear();
                if !keep_going {
                    break;
                }
            }
            // Unterminated tail; the next read reports EOF
            Ok(_) => {}
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted) => {}
            Err(e) => {
                log::error!("Read failed: {e}");
                stats.error = Some(e.to_string());
                break;
            }
        }
    }

    stats
}

fn run_sweep(
    period: Duration,
    tx: &Sender<f64>,
    stop_rx: &Receiver<()>,
) -> ReaderStats {
    let mut stats = ReaderStats::default();
    let mut step = 0u32;

    while let Err(RecvTimeoutError::Timeout) = stop_rx.recv_timeout(period) {
        let t = step as f64 * period.as_secs_f64();
        // Same wire text the transmitter sends
        let line = format_reading(sweep_distance(t));
        if !deliver(line.as_bytes(), tx, stop_rx, &mut stats) {
            break;
        }
        step = step.wrapping_add(1);
    }

    stats
}

/// Synthetic distance at `t` seconds, oscillating between [`SWEEP_MIN`] and
/// [`SWEEP_MAX`].
pub fn sweep_distance(t: f64) -> f64 {
    let normalized = (t * SWEEP_FREQ).sin().mul_add(0.5, 0.5);
    SWEEP_MIN + normalized * (SWEEP_MAX - SWEEP_MIN)
}

/// Parse one raw line and push it to the consumer.
///
/// Returns false when the reader should stop.
fn deliver(
    raw: &[u8],
    tx: &Sender<f64>,
    stop_rx: &Receiver<()>,
    stats: &mut ReaderStats,
) -> bool {
    stats.lines += 1;

    let Some(mut distance) = std::str::from_utf8(raw).ok().and_then(parse_line) else {
        stats.discarded += 1;
        log::debug!("Discarded line {:?}", String::from_utf8_lossy(raw).trim_end());
        return true;
    };

    loop {
        match tx.send_timeout(distance, SEND_RETRY) {
            Ok(()) => {
                stats.accepted += 1;
                return true;
            }
            Err(SendTimeoutError::Timeout(d)) => {
                if stop_requested(stop_rx) {
                    return false;
                }
                distance = d;
            }
            Err(SendTimeoutError::Disconnected(_)) => {
                log::debug!("Consumer gone, reader exiting");
                return false;
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};
    use std::time::Instant;

    use super::*;

    /// Never yields data, like a quiet serial port.
    struct QuietPort;

    impl Read for QuietPort {
        fn read(
            &mut self,
            _buf: &mut [u8],
        ) -> io::Result<usize> {
            thread::sleep(Duration::from_millis(5));
            Err(io::Error::new(ErrorKind::TimedOut, "timed out"))
        }
    }

    /// Endless stream of the same reading.
    struct Chatty;

    impl Read for Chatty {
        fn read(
            &mut self,
            buf: &mut [u8],
        ) -> io::Result<usize> {
            let line = b"0.5\n";
            let n = buf.len().min(line.len());
            buf[..n].copy_from_slice(&line[..n]);
            Ok(n)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(
            &mut self,
            _buf: &mut [u8],
        ) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "unplugged"))
        }
    }

    fn cursor(text: &str) -> Cursor<Vec<u8>> { Cursor::new(text.as_bytes().to_vec()) }

    #[test]
    fn test_reader_delivers_and_discards() {
        let (handle, rx) = spawn_lines("test-lines", cursor("0.4\r\nabc\n\n1.2\r\nnan\n0.9"), 8).unwrap();

        let readings: Vec<f64> = rx.iter().collect();
        assert_eq!(readings, vec![0.4, 1.2, 0.9]);

        let stats = handle.stop().unwrap();
        assert_eq!(stats.lines, 6);
        assert_eq!(stats.accepted, 3);
        assert_eq!(stats.discarded, 3);
        assert!(stats.eof);
        assert_eq!(stats.error, None);
    }

    #[test]
    fn test_reader_backpressure_keeps_every_sample() {
        let text: String = (0..20).map(|i| format!("{}.{}\n", i / 10, i % 10)).collect();
        let (handle, rx) = spawn_lines("test-backpressure", cursor(&text), 1).unwrap();

        // Let the reader fill the channel and wait
        thread::sleep(Duration::from_millis(30));
        let readings: Vec<f64> = rx.iter().collect();
        assert_eq!(readings.len(), 20, "no reading may be dropped");
        assert_eq!(readings[0], 0.0);
        assert_eq!(readings[19], 1.9);

        assert_eq!(handle.stop().unwrap().accepted, 20);
    }

    #[test]
    fn test_reader_stops_on_request() {
        let (handle, rx) = spawn_lines("test-quiet", BufReader::new(QuietPort), 4).unwrap();
        thread::sleep(Duration::from_millis(20));
        assert!(!handle.is_finished());

        let started = Instant::now();
        let stats = handle.stop().unwrap();
        assert!(started.elapsed() < JOIN_TIMEOUT, "stop should not wait for the join timeout");
        assert_eq!(stats.lines, 0);
        assert!(!stats.eof);
        // Reader thread is gone, so the channel is disconnected
        assert!(rx.recv().is_err());
    }

    #[test]
    fn test_reader_stops_while_channel_full() {
        let (handle, rx) = spawn_lines("test-full", BufReader::new(Chatty), 2).unwrap();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(rx.len(), 2, "channel should be full");

        let stats = handle.stop().unwrap();
        assert_eq!(stats.accepted, 2);
        assert!(!stats.eof);
    }

    #[test]
    fn test_reader_exits_when_consumer_gone() {
        let (handle, rx) = spawn_lines("test-gone", BufReader::new(Chatty), 1).unwrap();
        drop(rx);

        let deadline = Instant::now() + Duration::from_secs(1);
        while !handle.is_finished() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(handle.is_finished(), "reader should exit on its own");

        let stats = handle.stop().unwrap();
        assert!(!stats.eof);
        assert_eq!(stats.error, None);
    }

    #[test]
    fn test_reader_reports_io_error() {
        let (handle, rx) = spawn_lines("test-broken", BufReader::new(Broken), 4).unwrap();
        assert!(rx.recv().is_err());

        let stats = handle.stop().unwrap();
        assert_eq!(stats.error.as_deref(), Some("unplugged"));
        assert!(!stats.eof);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let result = spawn_lines("test-zero", cursor("0.5\n"), 0);
        assert!(matches!(result, Err(MonitorError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_serial_port() {
        let source = Source::Serial {
            port: "/dev/radar-port-that-does-not-exist".to_owned(),
            baud: 115_200,
        };
        match spawn(&source, 4) {
            Err(MonitorError::OpenPort { port, .. }) => assert_eq!(port, "/dev/radar-port-that-does-not-exist"),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("opening a missing port should fail"),
        }
    }

    #[test]
    fn test_sweep_produces_readings() {
        let source = Source::Sweep {
            period: Duration::from_millis(1),
        };
        let (handle, rx) = spawn(&source, 16).unwrap();

        for _ in 0..5 {
            let d = rx.recv_timeout(Duration::from_secs(1)).unwrap();
            assert!((SWEEP_MIN..=SWEEP_MAX).contains(&d), "sweep out of range: {d}");
        }

        let stats = handle.stop().unwrap();
        assert!(stats.accepted >= 5);
        assert_eq!(stats.discarded, 0);
    }

    #[test]
    fn test_sweep_distance_bounds() {
        for i in 0..500 {
            let d = sweep_distance(i as f64 * 0.06);
            assert!((SWEEP_MIN - 1e-5..=SWEEP_MAX + 1e-5).contains(&d), "t={i}: {d}");
        }
        // Starts mid-range and moves outward
        assert!((sweep_distance(0.0) - 0.85).abs() < 1e-5);
    }

    #[test]
    fn test_source_describe() {
        assert_eq!(Source::Stdin.describe(), "STDIN");
        assert_eq!(
            Source::Serial {
                port: "/dev/ttyUSB0".to_owned(),
                baud: 115_200
            }
            .describe(),
            "/dev/ttyUSB0"
        );
    }
}

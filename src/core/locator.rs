//! Reference position acquisition as an explicit state machine.
//!
//! ```text
//! Pending ──fix──────────> Granted
//!    │ └──denied/timeout─> Denied ──┐
//!    └──no capability───> Unsupported ──(next poll)──> Fallback
//! any state ──manual_override──> ManualOverride
//! ```
//!
//! Timers are deadlines checked by [`Locator::poll`]. Each one carries the
//! generation it was armed in; cancelling bumps the generation, so a stale
//! deadline can never fire.

use crate::models::coordinate::Coordinate;
use crate::models::position::ReferencePosition;
use std::time::{Duration, Instant};

pub const DEFAULT_SENSOR_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub enum LocatorState {
    Pending,
    Granted(Coordinate),
    Denied,
    Unsupported,
    Fallback,
    ManualOverride(ReferencePosition),
}

impl LocatorState {
    pub fn name(&self) -> &'static str {
        match self {
            LocatorState::Pending => "pending",
            LocatorState::Granted(_) => "granted",
            LocatorState::Denied => "denied",
            LocatorState::Unsupported => "unsupported",
            LocatorState::Fallback => "fallback",
            LocatorState::ManualOverride(_) => "manual",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerAction {
    /// Sensor did not answer in time.
    Timeout,
    /// Deferred move to the fallback coordinate.
    Fallback,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    generation: u64,
    due: Instant,
    action: TimerAction,
}

/// What a device sensor reports for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorReading {
    Fix(Coordinate),
    Denied,
    /// No answer yet; the timeout will decide.
    Silent,
}

/// Device position capability (GPS, OS location service, ...).
pub trait PositionSensor {
    fn is_available(&self) -> bool;
    fn request(&self) -> SensorReading;
}

/// Sensor backed by a fixed answer, used by the CLI (`--here`) and in tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticSensor(pub Option<SensorReading>);

impl PositionSensor for StaticSensor {
    fn is_available(&self) -> bool {
        self.0.is_some()
    }

    fn request(&self) -> SensorReading {
        self.0.unwrap_or(SensorReading::Silent)
    }
}

#[derive(Debug)]
pub struct Locator {
    state: LocatorState,
    fallback: Coordinate,
    timeout: Duration,
    generation: u64,
    timer: Option<Timer>,
}

impl Locator {
    pub fn new(fallback: Coordinate, timeout: Duration) -> Self {
        Self {
            state: LocatorState::Pending,
            fallback,
            timeout,
            generation: 0,
            timer: None,
        }
    }

    pub fn state(&self) -> &LocatorState {
        &self.state
    }

    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Begin acquisition. Without a capability the locator becomes `Unsupported`
    /// and schedules the fallback for the next `poll`, never in this call.
    pub fn start(&mut self, capability: bool, now: Instant) {
        self.cancel_timer();
        if capability {
            self.state = LocatorState::Pending;
            self.arm(now + self.timeout, TimerAction::Timeout);
        } else {
            self.state = LocatorState::Unsupported;
            self.arm(now, TimerAction::Fallback);
        }
        log::debug!("locator started: {}", self.state.name());
    }

    /// Device reported a fix. Ignored unless a request is pending.
    pub fn on_fix(&mut self, coordinate: Coordinate) -> bool {
        if self.state != LocatorState::Pending {
            return false;
        }
        self.cancel_timer();
        self.state = LocatorState::Granted(coordinate);
        true
    }

    /// Device refused access. The fallback follows on the next `poll`.
    pub fn on_denied(&mut self, now: Instant) -> bool {
        if self.state != LocatorState::Pending {
            return false;
        }
        self.cancel_timer();
        self.state = LocatorState::Denied;
        self.arm(now, TimerAction::Fallback);
        true
    }

    /// Caller picked a position (e.g. a resolver candidate). Wins from any state.
    pub fn manual_override(&mut self, position: ReferencePosition) {
        self.cancel_timer();
        self.state = LocatorState::ManualOverride(position);
    }

    /// Fire due timers. Returns true when the state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;

        while let Some(timer) = self.timer {
            if timer.generation != self.generation || timer.due > now {
                break;
            }
            self.timer = None;

            match (timer.action, &self.state) {
                (TimerAction::Timeout, LocatorState::Pending) => {
                    log::debug!("locator: sensor timed out");
                    self.state = LocatorState::Denied;
                    self.arm(now, TimerAction::Fallback);
                    changed = true;
                }
                (TimerAction::Fallback, LocatorState::Denied | LocatorState::Unsupported) => {
                    self.state = LocatorState::Fallback;
                    changed = true;
                }
                _ => {}
            }
        }

        changed
    }

    /// The position to measure from, once one is settled.
    pub fn reference(&self) -> Option<ReferencePosition> {
        match &self.state {
            LocatorState::Granted(c) => Some(ReferencePosition::sensor(*c)),
            LocatorState::Fallback => Some(ReferencePosition::fallback(self.fallback)),
            LocatorState::ManualOverride(p) => Some(p.clone()),
            _ => None,
        }
    }

    /// Drive a full acquisition against `sensor`, then settle on whatever the
    /// machine reaches (a silent sensor ends in the fallback once the timeout passes).
    pub fn acquire<S: PositionSensor>(&mut self, sensor: &S, now: Instant) -> ReferencePosition {
        self.start(sensor.is_available(), now);

        if self.state == LocatorState::Pending {
            match sensor.request() {
                SensorReading::Fix(c) => {
                    self.on_fix(c);
                }
                SensorReading::Denied => {
                    self.on_denied(now);
                }
                SensorReading::Silent => {}
            }
        }

        self.poll(now);
        if self.reference().is_none() {
            self.poll(now + self.timeout);
        }

        self.reference()
            .unwrap_or_else(|| ReferencePosition::fallback(self.fallback))
    }

    fn arm(&mut self, due: Instant, action: TimerAction) {
        self.timer = Some(Timer {
            generation: self.generation,
            due,
            action,
        });
    }

    fn cancel_timer(&mut self) {
        self.generation += 1;
        self.timer = None;
    }
}

use racecar_wire::{decode_command, Command};
use tracing::{debug, info, warn};

use crate::error::{Result, SessionError};
use crate::vehicle::Vehicle;

/// Largest lifecycle notification the session will read.
pub const DEFAULT_MAX_NOTIFICATION_SIZE: usize = 256;

/// A user callback invoked by the session loop.
pub type Callback<V> = Box<dyn FnMut(&mut V) -> Result<()>>;

/// Where the session loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Callbacks registered, loop not yet entered.
    Idle,
    /// Blocked on the host's next notification.
    AwaitingHost,
    /// Handling a notification; callbacks may be running.
    Running,
    /// The host ended the session. No further I/O happens.
    Terminated,
    /// A step failed after the loop left `Idle`. The last notification may
    /// be unacknowledged, so no further I/O happens.
    Failed,
}

/// Session loop behaviour.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Receive bound for lifecycle notifications. Default: 256 bytes.
    pub max_notification_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_notification_size: DEFAULT_MAX_NOTIFICATION_SIZE,
        }
    }
}

/// Counters kept over the lifetime of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Notifications read from the host, `terminate` included.
    pub notifications: u64,
    /// Frames for which the frame callback ran.
    pub frames: u64,
    /// Notifications answered with the `error` sentinel.
    pub rejected: u64,
}

/// Runs user callbacks in lockstep with the simulation host.
///
/// Every `begin` or `advance` notification is handled to completion and
/// acknowledged before the next one is read. `terminate` ends the loop
/// without a reply. Anything else is answered with the `error` sentinel and
/// the loop keeps waiting.
pub struct Session<V: Vehicle> {
    vehicle: V,
    on_begin: Callback<V>,
    on_frame: Callback<V>,
    config: SessionConfig,
    state: SessionState,
    stats: SessionStats,
    begun: bool,
}

impl<V: Vehicle> Session<V> {
    /// Create a session with its start and per-frame callbacks.
    pub fn new<B, F>(vehicle: V, on_begin: B, on_frame: F) -> Self
    where
        B: FnMut(&mut V) -> Result<()> + 'static,
        F: FnMut(&mut V) -> Result<()> + 'static,
    {
        Self {
            vehicle,
            on_begin: Box::new(on_begin),
            on_frame: Box::new(on_frame),
            config: SessionConfig::default(),
            state: SessionState::Idle,
            stats: SessionStats::default(),
            begun: false,
        }
    }

    /// Override session behaviour config.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace both callbacks.
    pub fn set_start_update<B, F>(&mut self, on_begin: B, on_frame: F)
    where
        B: FnMut(&mut V) -> Result<()> + 'static,
        F: FnMut(&mut V) -> Result<()> + 'static,
    {
        self.on_begin = Box::new(on_begin);
        self.on_frame = Box::new(on_frame);
    }

    /// Run until the host sends `terminate`.
    ///
    /// Transport faults and callback errors end the loop and are returned.
    pub fn go(&mut self) -> Result<()> {
        info!("waiting for the simulation host to start the user program");
        while self.step()? != SessionState::Terminated {}
        info!(
            notifications = self.stats.notifications,
            frames = self.stats.frames,
            rejected = self.stats.rejected,
            "session terminated"
        );
        Ok(())
    }

    /// Read and handle exactly one notification.
    ///
    /// Returns the state the loop is left in: `AwaitingHost` after a reply,
    /// `Terminated` after `terminate`. Any error moves the session to
    /// `Failed`.
    pub fn step(&mut self) -> Result<SessionState> {
        match self.state {
            SessionState::Terminated => return Err(SessionError::Terminated),
            SessionState::Failed => return Err(SessionError::Failed),
            _ => {}
        }

        let result = self.exchange();
        if result.is_err() {
            self.state = SessionState::Failed;
        }
        result
    }

    fn exchange(&mut self) -> Result<SessionState> {
        self.state = SessionState::AwaitingHost;
        let packet = self
            .vehicle
            .link()
            .receive(self.config.max_notification_size)?;
        self.state = SessionState::Running;
        self.stats.notifications += 1;

        let response = match decode_command(&packet) {
            Ok(Command::Begin) => self.handle_begin()?,
            Ok(Command::Advance) => self.handle_advance()?,
            Ok(Command::Terminate) => {
                info!("exit command received from host");
                self.state = SessionState::Terminated;
                return Ok(self.state);
            }
            Ok(command) => {
                warn!(code = command.code(), %command, "unexpected packet from host");
                self.stats.rejected += 1;
                Command::Error
            }
            Err(err) => {
                warn!(%err, len = packet.len(), "unreadable packet from host");
                self.stats.rejected += 1;
                Command::Error
            }
        };

        self.vehicle.link().send_command(response)?;
        self.state = SessionState::AwaitingHost;
        Ok(self.state)
    }

    fn handle_begin(&mut self) -> Result<Command> {
        if self.begun {
            warn!("repeated begin from host; start callback already ran");
            return Ok(Command::Acknowledge);
        }
        info!("begin received from host");
        self.begun = true;
        (self.on_begin)(&mut self.vehicle)?;
        Ok(Command::Acknowledge)
    }

    fn handle_advance(&mut self) -> Result<Command> {
        if !self.begun {
            warn!("advance before begin; skipping frame callback");
            return Ok(Command::Acknowledge);
        }
        (self.on_frame)(&mut self.vehicle)?;
        self.vehicle.refresh()?;
        self.stats.frames += 1;
        debug!(frame = self.stats.frames, "frame complete");
        Ok(Command::Acknowledge)
    }

    /// Current loop state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Counters so far.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Borrow the vehicle.
    pub fn vehicle(&self) -> &V {
        &self.vehicle
    }

    /// Mutably borrow the vehicle.
    pub fn vehicle_mut(&mut self) -> &mut V {
        &mut self.vehicle
    }

    /// Consume the session and return the vehicle.
    pub fn into_vehicle(self) -> V {
        self.vehicle
    }
}

impl<V: Vehicle> std::fmt::Debug for Session<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("state", &self.state)
            .field("stats", &self.stats)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

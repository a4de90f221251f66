//! Frame loop: countdown, scene, render, present, input.

use crate::config::TinselConfig;
use crate::countdown::Countdown;
use crate::error::TuiError;
use crate::input::{Action, InputHandler};
use crate::scene::Scene;
use crate::terminal::{CrosstermBackend, GenericTerminal, Terminal};
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tinsel_core::{env_seed, Grid, RandomSource, SeededRng};

/// Frame timing metrics.
#[derive(Debug, Clone, Default)]
pub struct FrameMetrics {
    /// Time spent building and rendering the last scene.
    pub compose_time: Duration,
    /// Time spent writing the last frame to the terminal.
    pub present_time: Duration,
    /// Total time of the last frame, input wait excluded.
    pub total_time: Duration,
    /// Frames presented so far.
    pub frame_count: u64,
}

/// Pick the ornament seed: config, then `TINSEL_SEED`, then the wall clock.
#[must_use]
pub fn resolve_seed(configured: Option<u64>) -> u64 {
    configured
        .or_else(env_seed)
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(tinsel_core::DEFAULT_SEED, |d| d.as_nanos() as u64)
        })
}

/// The running card.
pub struct TinselApp<R: RandomSource = SeededRng> {
    config: TinselConfig,
    scene: Scene,
    input: InputHandler,
    rng: R,
    clock: fn() -> DateTime<Utc>,
    metrics: FrameMetrics,
    should_quit: bool,
}

impl TinselApp<SeededRng> {
    /// Validate `config` and seed the ornament generator from it.
    pub fn new(config: TinselConfig) -> Result<Self, TuiError> {
        let seed = resolve_seed(config.seed);
        log::info!("app: ornament seed {seed}");
        Self::with_rng(config, SeededRng::new(seed))
    }

    /// Run the card on the real terminal (blocking).
    pub fn run(&mut self) -> Result<(), TuiError> {
        let terminal = GenericTerminal::new(CrosstermBackend::new());
        self.run_with_terminal(terminal)
    }
}

impl<R: RandomSource> TinselApp<R> {
    /// Validate `config` and use `rng` for ornament placement.
    pub fn with_rng(config: TinselConfig, rng: R) -> Result<Self, TuiError> {
        config.validate()?;
        Ok(Self {
            scene: Scene::from_config(&config),
            input: InputHandler::with_quit_key(config.quit_key),
            config,
            rng,
            clock: Utc::now,
            metrics: FrameMetrics::default(),
            should_quit: false,
        })
    }

    /// Replace the wall clock the countdown reads.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Get the validated configuration.
    #[must_use]
    pub const fn config(&self) -> &TinselConfig {
        &self.config
    }

    /// Get the current frame metrics.
    #[must_use]
    pub const fn metrics(&self) -> &FrameMetrics {
        &self.metrics
    }

    /// Request the loop to stop after the current frame.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Delay between frames.
    #[must_use]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.config.fps.max(1)))
    }

    /// Compose and render one frame.
    pub fn frame(&mut self, frame: u64) -> Result<Grid, TuiError> {
        let now = (self.clock)();
        let countdown = Countdown::until_christmas(now, self.config.timezone_offset_hours)?;
        let canvas = self.scene.compose(frame, &countdown, &mut self.rng)?;
        Ok(canvas.render())
    }

    /// First frame, for printing without a terminal.
    pub fn render_once(&mut self) -> Result<Grid, TuiError> {
        self.frame(0)
    }

    /// Run the loop on any terminal. The terminal is always left, even when
    /// a frame fails; the frame error wins over a leave error.
    pub fn run_with_terminal<T: Terminal>(&mut self, mut terminal: T) -> Result<(), TuiError> {
        terminal.enter()?;
        log::debug!("app: entered terminal, {} fps", self.config.fps);

        let result = self.run_loop(&mut terminal);
        if let Err(err) = &result {
            log::warn!("app: frame loop stopped: {err}");
        }

        let left = terminal.leave();
        log::debug!("app: left terminal after {} frames", self.metrics.frame_count);
        result.and(left)
    }

    fn run_loop<T: Terminal>(&mut self, terminal: &mut T) -> Result<(), TuiError> {
        let tick = self.tick();

        loop {
            let frame_start = Instant::now();

            let grid = self.frame(self.metrics.frame_count)?;
            self.metrics.compose_time = frame_start.elapsed();

            let present_start = Instant::now();
            terminal.present(&grid)?;
            self.metrics.present_time = present_start.elapsed();

            self.metrics.total_time = frame_start.elapsed();
            self.metrics.frame_count += 1;

            if terminal.poll(tick)? {
                let event = terminal.read_event()?;
                if self.input.action(&event) == Some(Action::Quit) {
                    log::info!("app: quit requested");
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

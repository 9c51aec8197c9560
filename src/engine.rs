//=========================================================================
// Engine
//
// Entry point: configures the game, then runs it on two threads.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_config()           └─ spawns the logic thread
//         ├─ with_tps()                 runs the platform loop
//         ├─ with_channel_capacity()    blocks until exit
//         ├─ with_audio()
//         └─ with_renderer()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::audio::{Audio, SilentAudio};
use crate::core::config::{ConfigError, GameConfig};
use crate::core::platform_bridge::{EventCollector, PlatformError, PlatformEvent};
use crate::core::render::{LogRenderer, Renderer};
use crate::core::CoreSystemsOrchestrator;
use crate::platform::{Platform, WindowSettings};

//=== Constants ===========================================================

const WINDOW_TITLE: &str = "Gridshot";

//=== EngineBuilder =======================================================

/// Builder for an [`Engine`].
///
/// # Default Values
///
/// - **Config**: [`GameConfig::default`] (960x640)
/// - **TPS**: 60.0
/// - **Channel capacity**: 128 events
/// - **Audio**: [`SilentAudio`]
/// - **Renderer**: [`LogRenderer`]
///
/// # Examples
///
/// ```no_run
/// use gridshot::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .build()
///     .expect("default config is valid")
///     .run()
///     .expect("platform failed");
/// ```
pub struct EngineBuilder {
    config: GameConfig,
    tps: f64,
    channel_capacity: usize,
    audio: Option<Box<dyn Audio>>,
    renderer: Option<Box<dyn Renderer + Send>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            tps: 60.0,
            channel_capacity: 128,
            audio: None,
            renderer: None,
        }
    }

    /// Replaces the game configuration. Checked by [`build`](Self::build).
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of the platform → logic channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sound output, e.g. a [`ChannelAudio`](crate::core::audio::ChannelAudio)
    /// whose backend end is served by the host.
    pub fn with_audio(mut self, audio: Box<dyn Audio>) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn with_renderer(mut self, renderer: Box<dyn Renderer + Send>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Validates the configuration and builds the game on the title screen.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in the configuration.
    pub fn build(self) -> Result<Engine, ConfigError> {
        self.config.validate()?;

        info!(
            "Building engine (TPS: {}, channel: {}, screen: {}x{})",
            self.tps, self.channel_capacity, self.config.screen.width, self.config.screen.height
        );

        let audio = self.audio.unwrap_or_else(|| Box::new(SilentAudio));
        let renderer = self.renderer.unwrap_or_else(|| Box::new(LogRenderer));

        Ok(Engine {
            window: WindowSettings {
                title: WINDOW_TITLE.to_owned(),
                width: self.config.screen.width,
                height: self.config.screen.height,
            },
            orchestrator: CoreSystemsOrchestrator::new(self.config, audio),
            renderer,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        })
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// The game runtime.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► InputSystem, ScreenManager, Renderer
///   │
///   └─► Platform (Event Loop)
///         └─► Window, keyboard
///
/// Communication: crossbeam channel (PlatformEvent)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    renderer: Box<dyn Renderer + Send>,
    window: WindowSettings,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    /// The game state before it starts running.
    pub fn orchestrator(&self) -> &CoreSystemsOrchestrator {
        &self.orchestrator
    }

    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the bounded platform → logic channel
    /// 2. Spawns the logic thread at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On close: `WindowClosed` is sent, the logic thread exits and is
    ///    joined
    ///
    /// # Errors
    ///
    /// Returns the [`PlatformError`] that stopped the event loop. The logic
    /// thread is still joined first.
    pub fn run(self) -> Result<(), PlatformError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channel -----------------------------
        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(
            EventCollector::new(rx),
            self.renderer,
            self.tps,
        );
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(tx, self.window);
        let result = platform.run();

        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }
        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScreenKey;

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.config, GameConfig::default());
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn build_uses_screen_size_for_window() {
        let mut config = GameConfig::default();
        config.screen.width = 800.0;
        config.screen.height = 600.0;

        let engine = EngineBuilder::new()
            .with_config(config)
            .with_tps(120.0)
            .with_channel_capacity(256)
            .build()
            .unwrap();

        assert_eq!(engine.window.width, 800.0);
        assert_eq!(engine.window.height, 600.0);
        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(engine.orchestrator().screens().current(), ScreenKey::Title);
    }

    #[test]
    fn build_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.screen.width = 0.0;

        let result = EngineBuilder::new().with_config(config).build();

        assert!(matches!(result, Err(ConfigError::InvalidScreenSize { .. })));
    }
}

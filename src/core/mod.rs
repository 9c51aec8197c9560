//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for the game running on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Own the game state (GlobalContext + GlobalSystems)
// - Receive platform events via the bounded crossbeam channel
// - Tick at a fixed rate (TPS) with a measured frame delta
// - Emit one render pass per tick
//
// Notes:
// The orchestrator runs independently from the platform layer. It can
// also be driven by hand (push_inputs / tick / render), which is how the
// integration tests run the game headlessly.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod animation;
pub mod audio;
pub mod config;
pub mod entity;
pub mod globals;
pub mod input;
pub mod platform_bridge;
pub mod render;
pub mod scene;
pub mod timer;

#[cfg(test)]
pub(crate) mod testing;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::Duration;

//=== External Crates =====================================================

use log::info;

//=== Internal Modules ====================================================

use audio::Audio;
use config::GameConfig;
use globals::{GlobalContext, GlobalSystems};
use input::event::InputEvent;
use platform_bridge::{EventCollector, TickControl};
use render::Renderer;
use timer::FrameTimer;

use crate::game::ScreenManager;

//=== CoreSystemsOrchestrator =============================================

/// Owns the whole game state and advances it one tick at a time.
#[derive(Debug)]
pub struct CoreSystemsOrchestrator {
    context: GlobalContext,
    systems: GlobalSystems,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    /// Builds the game on the title screen. Does not start a thread.
    pub fn new(config: GameConfig, audio: Box<dyn Audio>) -> Self {
        let context = GlobalContext::new(config, audio);
        let systems = GlobalSystems::new(&context);
        Self { context, systems }
    }

    //--- Manual Driving ---------------------------------------------------

    /// Queues a batch of input for the next tick.
    pub fn push_inputs(&mut self, batch: Vec<InputEvent>) {
        if !batch.is_empty() {
            self.context.frame_events.push(batch);
        }
    }

    /// Advances the game by `dt` seconds (clamped to ≥ 0).
    pub fn tick(&mut self, dt: f32) {
        self.context.set_delta_time(dt);
        self.systems.update(&mut self.context);
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.systems.render(renderer);
    }

    //--- Queries ----------------------------------------------------------

    pub fn context(&self) -> &GlobalContext {
        &self.context
    }

    pub fn screens(&self) -> &ScreenManager {
        &self.systems.screens
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Each tick:
    //  1. Collects platform events (exit on close/disconnect)
    //  2. Updates the game with the measured delta
    //  3. Renders
    //  4. Sleeps to maintain fixed pacing
    //
    pub(crate) fn spawn_core_thread(
        mut self,
        mut collector: EventCollector,
        mut renderer: Box<dyn Renderer + Send>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut timer = FrameTimer::new();

            loop {
                let dt = timer.tick();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting.");
                    break;
                }
                for batch in collector.take_batches() {
                    self.push_inputs(batch);
                }

                //--- Step 2: Update ------------------------------------------
                self.tick(dt);

                //--- Step 3: Render ------------------------------------------
                self.render(renderer.as_mut());

                //--- Step 4: Maintain deterministic pacing ----------------
                let wait = timer.remaining(frame_duration);
                if !wait.is_zero() {
                    thread::sleep(wait);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

//=========================================================================
// Gridshot Library Root
//
// Runtime core of a grid-based arcade shooter: scene entities, the
// Title / Controls / Play state machine and timed stage transitions.
//
// Layout:
// - `core`: game-agnostic services (entities, input, timing, audio and
//   render seams, scenes, the logic-thread orchestrator)
// - `game`: the shooter itself (player, bullets, stages, screens)
// - `platform`: winit window and keyboard, kept private
//
// Typical usage:
// ```no_run
// use gridshot::EngineBuilder;
//
// fn main() {
//     let engine = EngineBuilder::new().build().expect("valid config");
//     if let Err(e) = engine.run() {
//         eprintln!("{}", e);
//     }
// }
// ```
//
// Headless driving (tests, tools) goes through
// `core::CoreSystemsOrchestrator` directly.
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod core;
pub mod game;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the OS window and event loop and is not part of the
// public API. `engine` wires it to the logic thread.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};

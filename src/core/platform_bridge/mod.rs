//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the window layer with the logic thread.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Logic-side event collection and buffering
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Public API ==========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub use interface::{PlatformError, PlatformEvent};

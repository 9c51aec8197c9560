//=========================================================================
// Game Configuration
//=========================================================================
//
// Every tunable of the game, with defaults matching the shipped game.
//
//   GameConfig
//     ├─ screen: ScreenConfig        (960 x 640)
//     ├─ player: PlayerConfig        (grid step, bounds, lives, anims)
//     ├─ bullet: BulletConfig        (speed, heading, offscreen margin)
//     ├─ stage:  StageTimings        (intro / respawn / game-over)
//     ├─ play:   PlayScreenConfig    (start delay, flag cadence)
//     └─ title:  TitleConfig         (slide-in)
//
// validate() runs once, in EngineBuilder::build().
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use glam::Vec2;

//=== ConfigError =========================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidScreenSize { width: f32, height: f32 },
    InvertedBounds { axis: &'static str, min: f32, max: f32 },
    InvalidDuration { name: &'static str, value: f32 },
    InvalidSpeed(f32),
    InvalidStep { x: f32, y: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidScreenSize { width, height } => {
                write!(f, "Screen size must be positive, got {}x{}", width, height)
            }
            ConfigError::InvertedBounds { axis, min, max } => {
                write!(f, "Player {} bounds are inverted: min {} > max {}", axis, min, max)
            }
            ConfigError::InvalidDuration { name, value } => {
                write!(f, "{} must be a finite, non-negative duration, got {}", name, value)
            }
            ConfigError::InvalidSpeed(speed) => {
                write!(f, "Bullet speed must be finite and positive, got {}", speed)
            }
            ConfigError::InvalidStep { x, y } => {
                write!(f, "Player grid step must be finite and non-negative, got ({}, {})", x, y)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

//=== ScreenConfig ========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenConfig {
    pub width: f32,
    pub height: f32,
}

impl ScreenConfig {
    /// Point at the given fractions of the screen size.
    pub fn at(&self, fx: f32, fy: f32) -> Vec2 {
        Vec2::new(self.width * fx, self.height * fy)
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 640.0,
        }
    }
}

//=== PlayerConfig ========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    pub starting_lives: u32,
    /// Spawn point as fractions of the screen size.
    pub spawn: Vec2,
    /// One grid cell: horizontal and vertical move distance.
    pub step: Vec2,
    pub bounds_x: (f32, f32),
    pub bounds_y: (f32, f32),
    pub leave_frames: u32,
    pub leave_duration: f32,
    pub death_frames: u32,
    pub death_duration: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            starting_lives: 2,
            spawn: Vec2::new(0.267, 0.58),
            step: Vec2::new(157.0, 100.0),
            bounds_x: (99.0, 413.0),
            bounds_y: (277.0, 471.0),
            leave_frames: 4,
            leave_duration: 0.2,
            death_frames: 1,
            death_duration: 2.0,
        }
    }
}

//=== BulletConfig ========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletConfig {
    /// Pixels per second along the bullet's heading.
    pub speed: f32,
    /// Degrees. 90 turns "up" into +x.
    pub rotation: f32,
    /// Margin outside the screen before a bullet is reclaimed.
    pub offscreen_buffer: f32,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            speed: 1500.0,
            rotation: 90.0,
            offscreen_buffer: 10.0,
        }
    }
}

//=== StageTimings ========================================================

/// Stage intro, respawn and game-over timings, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageTimings {
    pub stage_label_on: f32,
    pub stage_label_off: f32,
    pub ready_label_duration: f32,
    pub respawn_delay: f32,
    pub respawn_label_on: f32,
    pub game_over_delay: f32,
    pub game_over_label_on: f32,
}

impl StageTimings {
    pub fn ready_label_on(&self) -> f32 {
        self.stage_label_off
    }

    pub fn ready_label_off(&self) -> f32 {
        self.ready_label_on() + self.ready_label_duration
    }
}

impl Default for StageTimings {
    fn default() -> Self {
        Self {
            stage_label_on: 0.0,
            stage_label_off: 1.5,
            ready_label_duration: 3.0,
            respawn_delay: 3.0,
            respawn_label_on: 2.0,
            game_over_delay: 6.0,
            game_over_label_on: 1.0,
        }
    }
}

//=== PlayScreenConfig ====================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayScreenConfig {
    /// Pause between stages.
    pub level_start_delay: f32,
    /// Time between two stage flags appearing.
    pub flag_interval: f32,
    pub flag_width: f32,
}

impl Default for PlayScreenConfig {
    fn default() -> Self {
        Self {
            level_start_delay: 1.0,
            flag_interval: 0.5,
            flag_width: 72.0,
        }
    }
}

//=== TitleConfig =========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleConfig {
    pub slide_duration: f32,
    /// Vertical distance between two menu entries.
    pub cursor_spacing: f32,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            slide_duration: 1.0,
            cursor_spacing: 60.0,
        }
    }
}

//=== GameConfig ==========================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    pub player: PlayerConfig,
    pub bullet: BulletConfig,
    pub stage: StageTimings,
    pub play: PlayScreenConfig,
    pub title: TitleConfig,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ScreenConfig { width, height } = self.screen;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidScreenSize { width, height });
        }

        let player = &self.player;
        check_bounds("x", player.bounds_x)?;
        check_bounds("y", player.bounds_y)?;
        if !(player.step.is_finite() && player.step.x >= 0.0 && player.step.y >= 0.0) {
            return Err(ConfigError::InvalidStep {
                x: player.step.x,
                y: player.step.y,
            });
        }
        check_duration("player.leave_duration", player.leave_duration)?;
        check_duration("player.death_duration", player.death_duration)?;

        let speed = self.bullet.speed;
        if !(speed.is_finite() && speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(speed));
        }
        check_duration("bullet.offscreen_buffer", self.bullet.offscreen_buffer)?;

        let stage = &self.stage;
        check_duration("stage.stage_label_on", stage.stage_label_on)?;
        check_duration("stage.stage_label_off", stage.stage_label_off)?;
        check_duration("stage.ready_label_duration", stage.ready_label_duration)?;
        check_duration("stage.respawn_delay", stage.respawn_delay)?;
        check_duration("stage.respawn_label_on", stage.respawn_label_on)?;
        check_duration("stage.game_over_delay", stage.game_over_delay)?;
        check_duration("stage.game_over_label_on", stage.game_over_label_on)?;

        check_duration("play.level_start_delay", self.play.level_start_delay)?;
        check_duration("play.flag_interval", self.play.flag_interval)?;
        check_duration("title.slide_duration", self.title.slide_duration)?;

        Ok(())
    }
}

//=== Helpers =============================================================

fn check_bounds(axis: &'static str, (min, max): (f32, f32)) -> Result<(), ConfigError> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvertedBounds { axis, min, max })
    }
}

fn check_duration(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDuration { name, value })
    }
}

//=== Tests ===============================================================

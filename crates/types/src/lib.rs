//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! Classic playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (`BOARD_WIDTH / 2 - 2`, 0) = (3, 0)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal runner (~60 FPS) |
//! | `INITIAL_FALL_INTERVAL_MS` | 1000 | Gravity at the start of a run |
//! | `LOST_MESSAGE_MS` | 2000 | How long the loss message stays up |
//!
//! # Scoring
//!
//! Every cleared row is worth `POINTS_PER_ROW` (10). A lock-in that clears
//! `SPEED_UP_MIN_ROWS` (4) or more rows multiplies the fall interval by
//! `SPEED_UP_FACTOR` (0.95).
//!
//! # Examples
//!
//! ```
//! use classic_tetris_types::{PieceKind, GameAction, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! // Type ids are stable and 1-based
//! assert_eq!(PieceKind::I.id(), 1);
//! assert_eq!(PieceKind::from_id(7), Some(PieceKind::Z));
//!
//! // Short names for logs
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_eq!(GameAction::MoveLeft.as_str(), "moveLeft");
//!
//! // Board dimensions
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn origin for every new piece (top-left of its bounding box)
pub const SPAWN_POSITION: (i8, i8) = ((BOARD_WIDTH / 2) as i8 - 2, 0);

/// Frame interval of the terminal runner in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at the start of a run (1000ms = 1 second per row)
pub const INITIAL_FALL_INTERVAL_MS: f64 = 1000.0;

/// Points awarded per cleared row
pub const POINTS_PER_ROW: u32 = 10;

/// Minimum rows cleared by a single lock-in to trigger a speed-up
pub const SPEED_UP_MIN_ROWS: u32 = 4;

/// Fall interval multiplier applied on a speed-up
pub const SPEED_UP_FACTOR: f64 = 0.95;

/// Rows with `y` below this value are the loss zone for locked cells
pub const LOSS_ROW_LIMIT: i8 = 1;

/// How long the "You Lost!" message stays on screen before shutdown
pub const LOST_MESSAGE_MS: u64 = 2000;


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Color table indexed by `PieceKind::id() - 1`
pub const SHAPE_COLORS: [Rgb; 7] = [
    Rgb::new(0, 255, 255),   // cyan
    Rgb::new(255, 255, 0),   // yellow
    Rgb::new(255, 0, 255),   // magenta
    Rgb::new(0, 0, 255),     // blue
    Rgb::new(255, 165, 0),   // orange
    Rgb::new(0, 255, 0),     // green
    Rgb::new(255, 0, 0),     // red
];

/// The seven tetromino piece kinds
///
/// Each piece has a type id (1..7) and a color:
/// - **I** (1): Cyan, horizontal bar
/// - **O** (2): Yellow, 2x2 square
/// - **T** (3): Magenta, T-shaped
/// - **J** (4): Blue, J-shaped
/// - **L** (5): Orange, L-shaped (mirror of J)
/// - **S** (6): Green, S-shaped
/// - **Z** (7): Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in type-id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Numeric type identifier (1..=7) used for color lookup
    pub fn id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::J => 4,
            PieceKind::L => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::id`]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Display color of this kind
    pub fn color(&self) -> Rgb {
        SHAPE_COLORS[(self.id() - 1) as usize]
    }

    /// Uppercase letter used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Game actions that modify the falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise (with wall-kick recovery)
    Rotate,
}

impl GameAction {
    /// Convert to camelCase string (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
        }
    }
}

/// Discrete events delivered by the input boundary once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Terminate the session immediately
    Quit,
    /// Apply an action to the falling piece
    Action(GameAction),
}

impl From<GameAction> for InputEvent {
    fn from(action: GameAction) -> Self {
        InputEvent::Action(action)
    }
}

/// A cell on the game grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with a locked block of that kind
pub type Cell = Option<PieceKind>;

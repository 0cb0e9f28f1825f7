//! Доменная модель ставочного HUD: фишки, тип игры, игроки, снапшот стола.

pub mod chips;
pub mod game_type;
pub mod player;
pub mod table;

// Базовые идентификаторы.
pub type PlayerId = u64;
pub type TableId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Chips и т.п.
pub use chips::*;
pub use game_type::*;
pub use player::*;
pub use table::*;

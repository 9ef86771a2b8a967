//! Доменная модель игры: камни, кубики, карты, бонусы, игроки, рынок, настройки.

pub mod bonus;
pub mod card;
pub mod config;
pub mod dice;
pub mod gems;
pub mod market;
pub mod player;
pub mod rules;

// Базовые идентификаторы.
pub type CardId = u32;
/// Индекс игрока в партии: 0 или 1.
pub type SeatIndex = usize;

pub const PLAYER_COUNT: usize = 2;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Gems и т.п.
pub use bonus::*;
pub use card::*;
pub use config::*;
pub use dice::*;
pub use gems::*;
pub use market::*;
pub use player::*;
pub use rules::*;

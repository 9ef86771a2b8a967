//! Инфраструктурный слой вокруг игрового движка:
//! - RNG-реализации для движка;
//! - генерация ID карт;
//! - разбор таблиц карт и встроенный набор карт;
//! - маппинги между API и domain;
//! - настройка логирования;
//! - разделяемая сессия с защитой от параллельных вызовов.

pub mod card_table;
pub mod catalog;
pub mod ids;
pub mod logging;
pub mod mapping;
pub mod rng;
pub mod shared;

pub use card_table::{parse_bonus_cards, parse_standard_cards, CardTableError};
pub use catalog::{default_bonus_cards, default_catalog, default_standard_cards};
pub use ids::*;
pub use mapping::*;
pub use rng::*;
pub use shared::SharedGame;

//! Движок настольной игры "кубики и камни" на двух игроков.
//!
//! Игроки бросают пул кубиков, перебрасывают выбранные, получают камни
//! за комбинации граней и покупают на них карты с победными очками.
//! Отрисовка и звук живут снаружи: они вызывают `api` / `engine::GameSession`
//! и перерисовываются по снимку состояния.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod state;

pub use engine::{GameError, GameSession, RandomSource};
pub use state::{GameOutcome, GamePhase, GameState};

//! Игровой движок: броски, подсчёт камней, покупки, смена ходов и раундов.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `start_game` – новая партия
//!   - `roll_dice` / `reroll_selected` / `toggle_dice_selection` – броски хода
//!   - `purchase_card` – покупка карты на рынке
//!   - `end_turn` – подсчёт камней, передача хода, конец раунда и партии

pub mod dice_round;
pub mod errors;
pub mod game_history;
pub mod game_loop;
pub mod scoring;
pub mod session;
pub mod turn;
pub mod validation;

pub use dice_round::{DiceRound, RollOutcome, RollPhase};
pub use errors::GameError;
pub use game_history::{GameEvent, GameEventKind, GameHistory};
pub use game_loop::{
    build_market, purchase_card, reroll_selected, roll_dice, start_game, toggle_dice_selection,
    PurchaseOutcome, PurchasedCard,
};
pub use scoring::{score, ScoreLine, ScoreResult, ScoreSource};
pub use session::GameSession;
pub use turn::{check_game_end, end_round, end_turn, switch_player, EndTurnOutcome, RoundResult};

use crate::domain::dice::Face;

/// RNG интерфейс для engine.
///
/// Один поток на партию: первый бросок вызывает `roll_die` по порядку индексов,
/// переброс только для выбранных кубиков по возрастанию индексов.
/// Реализации лежат в infra (обёртки над `rand` и скриптовый RNG для тестов).
pub trait RandomSource {
    /// Грань 1..=6.
    fn roll_die(&mut self) -> Face;

    fn shuffle<T>(&mut self, slice: &mut [T]);
}

//! Смена ходов и раундов, бонус за шестёрки, проверка окончания партии.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::gems::Gems;
use crate::domain::{SeatIndex, PLAYER_COUNT};
use crate::engine::errors::GameError;
use crate::engine::game_history::GameEventKind;
use crate::engine::scoring::{score, ScoreResult};
use crate::engine::validation::ensure_running;
use crate::state::{GameOutcome, GamePhase, GameState};

/// Итог завершения хода для внешнего кода.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndTurnOutcome {
    /// Кто ходил.
    pub scored_seat: SeatIndex,
    pub score: ScoreResult,
    pub next_player_index: SeatIndex,
    pub round_ended: bool,
    pub game_ended: bool,
    pub winner: Option<SeatIndex>,
}

/// Итог раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    pub round: u32,
    pub sixes: [u32; PLAYER_COUNT],
    /// `None` при равенстве шестёрок.
    pub winner: Option<SeatIndex>,
    pub bonus: Gems,
}

/// Завершить ход текущего игрока.
///
/// Считает камни за последний бросок, начисляет их, сбрасывает броски,
/// передаёт ход и проверяет окончание партии.
pub fn end_turn(state: &mut GameState) -> Result<EndTurnOutcome, GameError> {
    ensure_running(state)?;
    if state.dice.roll_count == 0 {
        return Err(GameError::InvalidState("roll the dice before ending the turn"));
    }

    let seat = state.current_player_index;
    let counts = state.dice.counts();
    let result = score(
        &counts,
        state.current_player(),
        state.opponent(),
        &state.config.scoring,
    );

    let sixes = counts.count(6);
    {
        let player = state.current_player_mut();
        player.gems += result.delta;
        player.sixes = sixes;
    }

    let name = state.current_player().name.clone();
    info!(seat, delta = %result.delta, sixes, "turn scored");
    state.log(
        GameEventKind::TurnScored {
            seat,
            delta: result.delta,
            sixes,
        },
        format!("{} {}", result.summary(&name), sixes_note(&name, sixes)),
    );

    state.dice.reset();

    let round_ended = switch_player(state);
    let outcome = check_game_end(state);

    Ok(EndTurnOutcome {
        scored_seat: seat,
        score: result,
        next_player_index: state.current_player_index,
        round_ended,
        game_ended: outcome.is_some(),
        winner: outcome.and_then(|o| o.winner()),
    })
}

fn sixes_note(name: &str, sixes: u32) -> String {
    format!("{name} ended their turn with {sixes} sixes.")
}

/// Передать ход. Если ходил второй игрок, сначала закрывается раунд.
///
/// Возвращает `true`, если раунд закончился.
pub fn switch_player(state: &mut GameState) -> bool {
    let from = state.current_player_index;
    let round_ended = from == PLAYER_COUNT - 1;

    if round_ended {
        end_round(state);
    }

    state.current_player_index = (from + 1) % PLAYER_COUNT;
    let to = state.current_player_index;

    let message = if round_ended {
        format!(
            "Starting round {} with {}'s turn.",
            state.round_count, state.players[to].name
        )
    } else {
        format!("{}'s turn.", state.players[to].name)
    };
    state.log(GameEventKind::TurnPassed { from, to }, message);

    round_ended
}

/// Закрыть раунд: бонус за строго большее число шестёрок, сброс счётчиков,
/// следующий номер раунда.
pub fn end_round(state: &mut GameState) -> RoundResult {
    let sixes = [state.players[0].sixes, state.players[1].sixes];
    let bonus = state.config.round_bonus;
    let round = state.round_count;

    let winner = match sixes[0].cmp(&sixes[1]) {
        core::cmp::Ordering::Greater => Some(0),
        core::cmp::Ordering::Less => Some(1),
        core::cmp::Ordering::Equal => None,
    };

    let message = match winner {
        Some(seat) => {
            let player = &mut state.players[seat];
            player.gems += bonus;
            format!(
                "{} wins the round with {} sixes and earns {}!",
                player.name, sixes[seat], bonus
            )
        }
        None => format!("Round ends in a tie! No {bonus} awarded."),
    };

    info!(round, ?winner, ?sixes, "round ended");
    state.log(
        GameEventKind::RoundEnded {
            round,
            winner,
            sixes,
            bonus,
        },
        message,
    );

    for player in state.players.iter_mut() {
        player.sixes = 0;
    }
    state.round_count += 1;

    let next = state.round_count;
    state.log(
        GameEventKind::RoundStarted { round: next },
        format!("Round {next} begins."),
    );

    RoundResult {
        round,
        sixes,
        winner,
        bonus,
    }
}

/// Проверить порог победных очков.
///
/// Если кто-то набрал `victory_threshold`, партия переходит в Ended:
/// побеждает игрок со строго большим числом очков, иначе ничья.
/// Повторный вызов после окончания возвращает тот же итог.
pub fn check_game_end(state: &mut GameState) -> Option<GameOutcome> {
    match state.phase {
        GamePhase::Ended(outcome) => return Some(outcome),
        GamePhase::Running => {}
        GamePhase::NotStarted | GamePhase::Stopped => return None,
    }

    let threshold = state.config.victory_threshold;
    let points = state.victory_points();
    if points.iter().all(|&vp| vp < threshold) {
        return None;
    }

    let outcome = match points[0].cmp(&points[1]) {
        core::cmp::Ordering::Greater => GameOutcome::Winner {
            seat: 0,
            victory_points: points[0],
        },
        core::cmp::Ordering::Less => GameOutcome::Winner {
            seat: 1,
            victory_points: points[1],
        },
        core::cmp::Ordering::Equal => GameOutcome::Tie {
            victory_points: points[0],
        },
    };

    state.phase = GamePhase::Ended(outcome);

    let message = match outcome {
        GameOutcome::Winner {
            seat,
            victory_points,
        } => format!(
            "{} wins the game with {} victory points!",
            state.players[seat].name, victory_points
        ),
        GameOutcome::Tie { victory_points } => {
            format!("The game ends in a tie at {victory_points} victory points.")
        }
    };
    info!(?outcome, "game ended");
    state.log(GameEventKind::GameEnded { outcome }, message);

    Some(outcome)
}

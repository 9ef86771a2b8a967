use serde::{Deserialize, Serialize};

use crate::domain::card::{BonusCard, Card, MarketCard};
use crate::domain::market::CardMarket;
use crate::domain::player::Player;
use crate::domain::SeatIndex;
use crate::engine::{GameHistory, RollPhase};
use crate::state::{GameOutcome, GamePhase, GameState};

use super::dto::{
    BonusCardDto, CardDto, DieDto, GameViewDto, HistoryEntryDto, MarketDto, PlayerDto,
};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Полный снимок партии.
    GetState,

    /// События истории, начиная с индекса `since`.
    GetHistory { since: u32 },

    /// Один игрок.
    GetPlayer { seat: usize },
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    State(GameViewDto),
    History(Vec<HistoryEntryDto>),
    Player(PlayerDto),
}

/// Подпись кнопки броска.
pub fn roll_action_label(state: &GameState) -> &'static str {
    if state.dice.roll_count == 0 {
        "Roll All Dice"
    } else {
        "Roll Selected Dice"
    }
}

/// Строка статуса бросков для текущего хода.
pub fn roll_status(state: &GameState) -> String {
    match state.dice.phase() {
        RollPhase::NotStarted => String::new(),
        RollPhase::Rolled => format!("Roll {} of {}", state.dice.roll_count, state.dice.max_rolls),
        RollPhase::Exhausted => format!(
            "Maximum {} rolls used! Please end your turn.",
            state.dice.max_rolls
        ),
    }
}

/// Сформировать DTO партии на основе `GameState`.
pub fn build_game_view(state: &GameState) -> GameViewDto {
    let running = state.is_running();
    let buyer = state.current_player();

    let players = state
        .players
        .iter()
        .enumerate()
        .map(|(seat, p)| build_player_dto(state, seat, p))
        .collect();

    let dice = state
        .dice
        .dice
        .iter()
        .enumerate()
        .map(|(index, d)| DieDto {
            index,
            value: d.value,
            selected: d.selected,
        })
        .collect();

    let (winner, is_tie) = match state.outcome() {
        Some(GameOutcome::Winner { seat, .. }) => (Some(seat), false),
        Some(GameOutcome::Tie { .. }) => (None, true),
        None => (None, false),
    };

    GameViewDto {
        phase: phase_name(&state.phase).to_string(),
        round: state.round_count,
        current_player_index: state.current_player_index,
        players,
        dice,
        sorted_values: state.dice.sorted_values(),
        roll_count: state.dice.roll_count,
        max_rolls: state.dice.max_rolls,
        roll_status: roll_status(state),
        roll_action_label: roll_action_label(state).to_string(),
        can_roll: running && state.dice.can_roll(),
        can_end_turn: running && state.dice.roll_count > 0,
        standard_market: market_dto(&state.standard_market, |c| card_dto(c, buyer, running)),
        bonus_market: market_dto(&state.bonus_market, |c| bonus_card_dto(c, buyer, running)),
        victory_points: state.victory_points(),
        victory_threshold: state.config.victory_threshold,
        winner,
        is_tie,
    }
}

/// DTO одного игрока.
pub fn build_player_dto(state: &GameState, seat: SeatIndex, player: &Player) -> PlayerDto {
    PlayerDto {
        seat,
        name: player.name.clone(),
        gems: player.gems,
        sixes: player.sixes,
        victory_points: player.victory_points,
        purchased_cards: player
            .purchased_cards
            .iter()
            .map(|c| card_dto(c, player, false))
            .collect(),
        bonus_cards: player
            .bonus_cards
            .iter()
            .map(|c| bonus_card_dto(c, player, false))
            .collect(),
        is_current: seat == state.current_player_index,
    }
}

/// Записи истории начиная с `since`.
pub fn build_history(history: &GameHistory, since: u32) -> Vec<HistoryEntryDto> {
    history
        .since(since)
        .iter()
        .map(|e| HistoryEntryDto {
            index: e.index,
            round: e.round,
            actor: e.kind.actor(),
            message: e.message.clone(),
        })
        .collect()
}

fn phase_name(phase: &GamePhase) -> &'static str {
    match phase {
        GamePhase::NotStarted => "NotStarted",
        GamePhase::Running => "Running",
        GamePhase::Ended(_) => "Ended",
        GamePhase::Stopped => "Stopped",
    }
}

fn market_dto<C: MarketCard, T>(market: &CardMarket<C>, map: impl Fn(&C) -> T) -> MarketDto<T> {
    MarketDto {
        displayed: market.displayed.iter().map(map).collect(),
        deck_remaining: market.deck.len(),
        discarded: market.discarded.len(),
    }
}

fn card_dto(card: &Card, buyer: &Player, running: bool) -> CardDto {
    CardDto {
        id: card.id,
        name: card.name.clone(),
        cost: card.cost,
        points: card.points,
        kind: card.kind,
        affordable: running && CardMarket::<Card>::can_afford(buyer, card),
    }
}

fn bonus_card_dto(card: &BonusCard, buyer: &Player, running: bool) -> BonusCardDto {
    BonusCardDto {
        id: card.id,
        name: card.name.clone(),
        description: card.description.clone(),
        cost: card.cost,
        points: card.points,
        effect: card.effect.to_string(),
        affordable: running && CardMarket::<BonusCard>::can_afford(buyer, card),
    }
}

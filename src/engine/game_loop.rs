use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::card::{BonusCard, Card, CardFamily, MarketCard};
use crate::domain::config::GameConfig;
use crate::domain::market::CardMarket;
use crate::domain::{CardId, SeatIndex};
use crate::engine::dice_round::{RollOutcome, RollPhase};
use crate::engine::errors::GameError;
use crate::engine::game_history::GameEventKind;
use crate::engine::turn::check_game_end;
use crate::engine::validation::{ensure_running, ensure_seat, normalize_player_name};
use crate::engine::RandomSource;
use crate::state::{GameOutcome, GamePhase, GameState};

/// Купленная карта любого семейства.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PurchasedCard {
    Standard(Card),
    Bonus(BonusCard),
}

impl PurchasedCard {
    pub fn family(&self) -> CardFamily {
        match self {
            PurchasedCard::Standard(_) => CardFamily::Standard,
            PurchasedCard::Bonus(_) => CardFamily::Bonus,
        }
    }

    pub fn id(&self) -> CardId {
        match self {
            PurchasedCard::Standard(c) => c.id,
            PurchasedCard::Bonus(c) => c.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PurchasedCard::Standard(c) => &c.name,
            PurchasedCard::Bonus(c) => &c.name,
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            PurchasedCard::Standard(c) => c.points,
            PurchasedCard::Bonus(c) => c.points,
        }
    }
}

/// Итог покупки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseOutcome {
    pub seat: SeatIndex,
    pub card: PurchasedCard,
    /// Заполнено, если покупка закончила партию.
    pub game_over: Option<GameOutcome>,
}

/// Перемешать карты и выложить рынок.
pub fn build_market<C: MarketCard, R: RandomSource>(
    mut cards: Vec<C>,
    rng: &mut R,
    display_slots: usize,
) -> CardMarket<C> {
    rng.shuffle(&mut cards);
    CardMarket::new(cards, display_slots)
}

/// Старт новой партии. Любое прежнее состояние выбрасывается.
pub fn start_game<R: RandomSource>(
    config: GameConfig,
    standard_cards: Vec<Card>,
    bonus_cards: Vec<BonusCard>,
    rng: &mut R,
) -> Result<GameState, GameError> {
    config.validate()?;

    let slots = config.display_slots;
    let standard_market = build_market(standard_cards, rng, slots);
    let bonus_market = build_market(bonus_cards, rng, slots);

    let mut state = GameState::new(config, standard_market, bonus_market);
    info!(
        standard = state.standard_market.total_cards(),
        bonus = state.bonus_market.total_cards(),
        "game started"
    );
    state.log(GameEventKind::GameStarted, "Game started!");

    let first = state.current_player().name.clone();
    state.log(
        GameEventKind::RoundStarted { round: 1 },
        format!("Round 1 begins with {first}'s turn."),
    );

    Ok(state)
}

/// Кнопка броска: первый бросок хода или переброс выбранных.
pub fn roll_dice<R: RandomSource>(
    state: &mut GameState,
    rng: &mut R,
) -> Result<RollOutcome, GameError> {
    ensure_running(state)?;
    match state.dice.phase() {
        RollPhase::NotStarted => first_roll(state, rng),
        RollPhase::Rolled | RollPhase::Exhausted => reroll_selected(state, rng),
    }
}

fn first_roll<R: RandomSource>(
    state: &mut GameState,
    rng: &mut R,
) -> Result<RollOutcome, GameError> {
    let outcome = state.dice.start_turn(rng)?;
    let seat = state.current_player_index;

    let sixes = state.dice.sixes();
    state.current_player_mut().sixes = sixes;

    let name = state.current_player().name.clone();
    let shown: Vec<String> = state
        .dice
        .sorted_values()
        .iter()
        .map(|v| v.to_string())
        .collect();
    state.log(
        GameEventKind::DiceRolled {
            seat,
            values: outcome.dice_values.clone(),
        },
        format!("{name} rolled dice: {}.", shown.join(", ")),
    );
    note_exhausted(state, &outcome);

    Ok(outcome)
}

/// Перебросить выбранные кубики текущего игрока.
pub fn reroll_selected<R: RandomSource>(
    state: &mut GameState,
    rng: &mut R,
) -> Result<RollOutcome, GameError> {
    ensure_running(state)?;
    let outcome = state.dice.reroll(rng)?;
    let seat = state.current_player_index;

    let sixes = state.dice.sixes();
    state.current_player_mut().sixes = sixes;

    let name = state.current_player().name.clone();
    let message = if outcome.rerolled > 0 {
        format!("{name} re-rolled {} dice.", outcome.rerolled)
    } else {
        format!("{name} passed a roll without re-rolling.")
    };
    state.log(
        GameEventKind::DiceRerolled {
            seat,
            rerolled: outcome.rerolled,
            values: outcome.dice_values.clone(),
        },
        message,
    );
    note_exhausted(state, &outcome);

    Ok(outcome)
}

fn note_exhausted(state: &mut GameState, outcome: &RollOutcome) {
    if !outcome.exhausted {
        return;
    }
    let seat = state.current_player_index;
    let name = state.current_player().name.clone();
    state.log(
        GameEventKind::RollsExhausted { seat },
        format!("{name} has used all {} rolls.", outcome.max_rolls),
    );
}

/// Переключить выбор кубика текущего игрока. Возвращает новое значение флага.
pub fn toggle_dice_selection(state: &mut GameState, index: usize) -> Result<bool, GameError> {
    ensure_running(state)?;
    let selected = state.dice.toggle_selection(index)?;
    debug!(index, selected, "die selection toggled");
    Ok(selected)
}

/// Покупка карты текущим игроком.
///
/// После покупки сразу проверяется порог победных очков.
pub fn purchase_card(
    state: &mut GameState,
    family: CardFamily,
    index: usize,
) -> Result<PurchaseOutcome, GameError> {
    ensure_running(state)?;
    let seat = state.current_player_index;

    let card = {
        let player = &mut state.players[seat];
        let result = match family {
            CardFamily::Standard => state
                .standard_market
                .purchase(player, index)
                .map(PurchasedCard::Standard),
            CardFamily::Bonus => state
                .bonus_market
                .purchase(player, index)
                .map(PurchasedCard::Bonus),
        };
        result.map_err(|e| {
            warn!(seat, %family, index, error = %e, "purchase rejected");
            GameError::from(e)
        })?
    };

    let card_id = card.id();
    let name = state.players[seat].name.clone();
    info!(seat, %family, card_id, points = card.points(), "card purchased");
    state.log(
        GameEventKind::CardPurchased {
            seat,
            family,
            card_id,
            points: card.points(),
        },
        format!(
            "{name} bought {} for {} victory points.",
            card.name(),
            card.points()
        ),
    );

    let game_over = check_game_end(state);

    Ok(PurchaseOutcome {
        seat,
        card,
        game_over,
    })
}

/// Сменить имя игрока. Разрешено только во время партии.
pub fn rename_player(state: &mut GameState, seat: SeatIndex, name: &str) -> Result<(), GameError> {
    ensure_running(state)?;
    ensure_seat(seat)?;
    let new_name = normalize_player_name(name)?;

    let old_name = std::mem::replace(&mut state.players[seat].name, new_name.clone());
    state.log(
        GameEventKind::PlayerRenamed {
            seat,
            old_name: old_name.clone(),
            new_name: new_name.clone(),
        },
        format!("{old_name} is now {new_name}."),
    );
    Ok(())
}

/// Остановить партию извне. Дальнейшие изменяющие вызовы отклоняются
/// до следующего старта.
pub fn stop_game(state: &mut GameState) -> Result<(), GameError> {
    ensure_running(state)?;
    state.phase = GamePhase::Stopped;
    info!(round = state.round_count, "game stopped");
    state.log(GameEventKind::GameStopped, "Game stopped.");
    Ok(())
}

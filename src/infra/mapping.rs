use crate::api::dto::{EndTurnDto, PurchaseDto, RollDto};
use crate::api::CardFamilyApi;
use crate::domain::card::CardFamily;
use crate::engine::{EndTurnOutcome, PurchaseOutcome, RollOutcome, ScoreLine};
use crate::state::GameOutcome;

/// Маппинг семейства карт между API и domain.
pub fn card_family_from_api(api: CardFamilyApi) -> CardFamily {
    match api {
        CardFamilyApi::Standard => CardFamily::Standard,
        CardFamilyApi::Bonus => CardFamily::Bonus,
    }
}

pub fn card_family_to_api(domain: CardFamily) -> CardFamilyApi {
    match domain {
        CardFamily::Standard => CardFamilyApi::Standard,
        CardFamily::Bonus => CardFamilyApi::Bonus,
    }
}

pub fn map_roll(outcome: &RollOutcome) -> RollDto {
    RollDto {
        dice_values: outcome.dice_values.clone(),
        roll_count: outcome.roll_count,
        max_rolls: outcome.max_rolls,
        exhausted: outcome.exhausted,
    }
}

pub fn map_end_turn(outcome: &EndTurnOutcome) -> EndTurnDto {
    EndTurnDto {
        score_delta: outcome.score.delta,
        score_lines: outcome.score.lines.iter().map(ScoreLine::describe).collect(),
        next_player_index: outcome.next_player_index,
        round_ended: outcome.round_ended,
        game_ended: outcome.game_ended,
        winner: outcome.winner,
    }
}

pub fn map_purchase(outcome: &PurchaseOutcome) -> PurchaseDto {
    PurchaseDto {
        family: card_family_to_api(outcome.card.family()),
        card_id: outcome.card.id(),
        name: outcome.card.name().to_string(),
        points: outcome.card.points(),
        game_ended: outcome.game_over.is_some(),
        winner: outcome.game_over.as_ref().and_then(GameOutcome::winner),
    }
}

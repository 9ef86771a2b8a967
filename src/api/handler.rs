//! Исполнение команд и запросов API поверх `GameSession`.

use crate::engine::{GameSession, RandomSource};
use crate::infra::mapping::{card_family_from_api, map_end_turn, map_purchase, map_roll};

use super::commands::Command;
use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::{build_game_view, build_history, build_player_dto, Query, QueryResponse};

/// Выполнить команду. При ошибке состояние сессии не меняется.
pub fn execute_command<R: RandomSource>(
    session: &mut GameSession<R>,
    command: Command,
) -> Result<CommandResponse, ApiError> {
    let response = match command {
        Command::StartGame => {
            let state = session.start_game()?;
            CommandResponse::GameState(build_game_view(state))
        }

        Command::RollDice => {
            let outcome = session.roll_dice()?;
            CommandResponse::Rolled {
                roll: map_roll(&outcome),
                game: build_game_view(session.state()),
            }
        }

        Command::RerollSelected => {
            let outcome = session.reroll_selected()?;
            CommandResponse::Rolled {
                roll: map_roll(&outcome),
                game: build_game_view(session.state()),
            }
        }

        Command::ToggleDie(cmd) => {
            let selected = session.toggle_dice_selection(cmd.index)?;
            CommandResponse::DieToggled {
                index: cmd.index,
                selected,
                game: build_game_view(session.state()),
            }
        }

        Command::EndTurn => {
            let outcome = session.end_turn()?;
            CommandResponse::TurnEnded {
                result: map_end_turn(&outcome),
                game: build_game_view(session.state()),
            }
        }

        Command::PurchaseCard(cmd) => {
            let family = card_family_from_api(cmd.family);
            let outcome = session.purchase_card(family, cmd.index)?;
            CommandResponse::CardPurchased {
                purchase: map_purchase(&outcome),
                game: build_game_view(session.state()),
            }
        }

        Command::RenamePlayer(cmd) => {
            session.rename_player(cmd.seat, &cmd.name)?;
            CommandResponse::GameState(build_game_view(session.state()))
        }

        Command::StopGame => {
            session.stop_game()?;
            CommandResponse::GameState(build_game_view(session.state()))
        }
    };

    Ok(response)
}

/// Выполнить запрос "только чтение".
pub fn execute_query<R: RandomSource>(
    session: &GameSession<R>,
    query: Query,
) -> Result<QueryResponse, ApiError> {
    let state = session.state();
    match query {
        Query::GetState => Ok(QueryResponse::State(build_game_view(state))),
        Query::GetHistory { since } => Ok(QueryResponse::History(build_history(
            &state.history,
            since,
        ))),
        Query::GetPlayer { seat } => {
            let player = state.players.get(seat).ok_or_else(|| {
                ApiError::BadRequest(format!("Player seat {seat} does not exist"))
            })?;
            Ok(QueryResponse::Player(build_player_dto(state, seat, player)))
        }
    }
}

/// Команда в JSON -> ответ в JSON.
///
/// Ошибки тоже сериализуются, чтобы клиент всегда получал разбираемый ответ.
pub fn execute_json_command<R: RandomSource>(session: &mut GameSession<R>, json: &str) -> String {
    let result = serde_json::from_str::<Command>(json)
        .map_err(ApiError::from)
        .and_then(|cmd| execute_command(session, cmd));

    serde_json::to_string(&result).unwrap_or_else(|e| {
        format!("{{\"Err\":{{\"EngineError\":\"response serialization failed: {e}\"}}}}")
    })
}

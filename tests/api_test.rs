use gem_dice_engine::{
    api::{
        commands::{CardFamilyApi, Command, PurchaseCardCommand, RenamePlayerCommand, ToggleDieCommand},
        dto::CommandResponse,
        errors::ApiError,
        handler::{execute_command, execute_json_command, execute_query},
        queries::{build_game_view, Query, QueryResponse},
    },
    domain::{
        card::{BonusCard, Card, CardKind},
        config::GameConfig,
        gems::Gems,
    },
    engine::{GameError, GameSession},
    infra::ScriptedRng,
};

/// Утилита: сессия с одной картой каждого семейства.
fn make_session(faces: &[u8]) -> GameSession<ScriptedRng> {
    let standard = vec![Card {
        id: 1,
        name: "Copper Chalice".into(),
        cost: Gems::new(2, 0, 0, 0),
        points: 1,
        kind: CardKind::Treasure,
    }];
    let bonus: Vec<BonusCard> = Vec::new();
    GameSession::new(
        GameConfig::default(),
        standard,
        bonus,
        ScriptedRng::new(faces.iter().copied()),
    )
    .expect("valid session")
}

fn started(faces: &[u8]) -> GameSession<ScriptedRng> {
    let mut session = make_session(faces);
    execute_command(&mut session, Command::StartGame).expect("start must succeed");
    session
}

// ---------------------------------------------------------------------------
// Снимок состояния
// ---------------------------------------------------------------------------

#[test]
fn view_labels_follow_roll_progress() {
    let mut session = started(&[1, 1, 1, 1, 1, 1, 1, 1]);

    let view = build_game_view(session.state());
    assert_eq!(view.phase, "Running");
    assert_eq!(view.roll_action_label, "Roll All Dice");
    assert_eq!(view.roll_status, "");
    assert!(view.can_roll);
    assert!(!view.can_end_turn);
    assert_eq!(view.standard_market.displayed.len(), 1);
    assert!(!view.standard_market.displayed[0].affordable);

    execute_command(&mut session, Command::RollDice).unwrap();
    let view = build_game_view(session.state());
    assert_eq!(view.roll_action_label, "Roll Selected Dice");
    assert_eq!(view.roll_status, "Roll 1 of 4");
    assert!(view.can_end_turn);
    assert_eq!(view.players[0].sixes, 0);

    for _ in 0..3 {
        execute_command(&mut session, Command::RerollSelected).unwrap();
    }
    let view = build_game_view(session.state());
    assert_eq!(view.roll_status, "Maximum 4 rolls used! Please end your turn.");
    assert!(!view.can_roll);
}

#[test]
fn toggle_command_reports_selection() {
    let mut session = started(&[3; 8]);
    execute_command(&mut session, Command::RollDice).unwrap();

    let resp = execute_command(&mut session, Command::ToggleDie(ToggleDieCommand { index: 2 }))
        .unwrap();

    match resp {
        CommandResponse::DieToggled {
            index,
            selected,
            game,
        } => {
            assert_eq!(index, 2);
            assert!(selected);
            assert!(game.dice[2].selected);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn end_turn_and_purchase_through_commands() {
    // Alice: восемь единиц -> 8 red
    let mut session = started(&[1; 8]);
    execute_command(&mut session, Command::RollDice).unwrap();

    let resp = execute_command(&mut session, Command::EndTurn).unwrap();
    let CommandResponse::TurnEnded { result, game } = resp else {
        panic!("expected TurnEnded");
    };
    assert_eq!(result.score_delta, Gems::new(8, 0, 0, 0));
    assert_eq!(result.next_player_index, 1);
    assert_eq!(game.players[0].gems, Gems::new(8, 0, 0, 0));
    assert!(!game.standard_market.displayed[0].affordable, "Bob cannot afford it");

    let err = execute_command(
        &mut session,
        Command::PurchaseCard(PurchaseCardCommand {
            family: CardFamilyApi::Standard,
            index: 0,
        }),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::InsufficientGems(_)));
}

// ---------------------------------------------------------------------------
// Ошибки
// ---------------------------------------------------------------------------

#[test]
fn engine_errors_map_to_api_categories() {
    assert!(matches!(
        ApiError::from(GameError::InvalidState("game is over")),
        ApiError::InvalidCommand(_)
    ));
    assert!(matches!(
        ApiError::from(GameError::MaxRollsExceeded { max_rolls: 4 }),
        ApiError::InvalidCommand(_)
    ));
    assert!(matches!(
        ApiError::from(GameError::IndexOutOfRange { index: 9, len: 8 }),
        ApiError::BadRequest(_)
    ));
    assert_eq!(ApiError::from(GameError::Busy), ApiError::Busy);
}

#[test]
fn commands_before_start_are_invalid() {
    let mut session = make_session(&[]);
    let err = execute_command(&mut session, Command::EndTurn).unwrap_err();
    assert!(matches!(err, ApiError::InvalidCommand(_)));
}

#[test]
fn rename_with_blank_name_is_bad_request() {
    let mut session = started(&[]);
    let err = execute_command(
        &mut session,
        Command::RenamePlayer(RenamePlayerCommand {
            seat: 0,
            name: " ".into(),
        }),
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

// ---------------------------------------------------------------------------
// Запросы и JSON
// ---------------------------------------------------------------------------

#[test]
fn history_query_returns_events_since_index() {
    let mut session = started(&[2; 8]);
    execute_command(&mut session, Command::RollDice).unwrap();

    let QueryResponse::History(all) = execute_query(&session, Query::GetHistory { since: 0 }).unwrap()
    else {
        panic!("expected history");
    };
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].actor, None);
    assert_eq!(all[2].actor, Some(0));

    let QueryResponse::History(tail) = execute_query(&session, Query::GetHistory { since: 2 }).unwrap()
    else {
        panic!("expected history");
    };
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].message, "Alice rolled dice: 2, 2, 2, 2, 2, 2, 2, 2.");
}

#[test]
fn player_query_checks_seat() {
    let session = started(&[]);

    let QueryResponse::Player(p) = execute_query(&session, Query::GetPlayer { seat: 1 }).unwrap()
    else {
        panic!("expected player");
    };
    assert_eq!(p.name, "Bob");
    assert!(!p.is_current);

    let err = execute_query(&session, Query::GetPlayer { seat: 2 }).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn json_command_round_trip() {
    let mut session = make_session(&[4; 8]);

    let start = execute_json_command(&mut session, r#""StartGame""#);
    assert!(start.starts_with(r#"{"Ok":{"GameState""#), "got: {start}");

    let roll = execute_json_command(&mut session, r#""RollDice""#);
    let parsed: Result<CommandResponse, ApiError> = serde_json::from_str(&roll).unwrap();
    let CommandResponse::Rolled { roll, .. } = parsed.unwrap() else {
        panic!("expected Rolled");
    };
    assert_eq!(roll.dice_values, vec![4; 8]);

    let bad = execute_json_command(&mut session, r#"{"ToggleDie":{"index":"x"}}"#);
    let parsed: Result<CommandResponse, ApiError> = serde_json::from_str(&bad).unwrap();
    assert!(matches!(parsed, Err(ApiError::BadRequest(_))));
}

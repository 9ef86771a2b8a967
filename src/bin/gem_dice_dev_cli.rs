// src/bin/gem_dice_dev_cli.rs

use gem_dice_engine::api::{build_game_view, GameViewDto};
use gem_dice_engine::domain::card::{CardFamily, MarketCard};
use gem_dice_engine::domain::config::GameConfig;
use gem_dice_engine::domain::dice::DiceCounts;
use gem_dice_engine::domain::market::CardMarket;
use gem_dice_engine::domain::player::Player;
use gem_dice_engine::engine::{GameError, GameSession, RandomSource};
use gem_dice_engine::infra::logging::init_tracing;
use gem_dice_engine::infra::{default_catalog, DeterministicRng};

/// Защита от бесконечной партии, если оба игрока ничего не покупают.
const MAX_TURNS: u32 = 200;

fn main() {
    init_tracing();
    println!("gem_dice_dev_cli: автоматическая партия двух ботов…");

    // 1. Seed можно передать первым аргументом, чтобы повторить партию.
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);
    println!("seed = {seed}");

    // 2. Конфиг по умолчанию и встроенный набор карт.
    let config = GameConfig::default();
    let (standard, bonus) = default_catalog();
    let rng = DeterministicRng::from_seed(seed);

    let mut session = match GameSession::new(config, standard, bonus, rng) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("failed to create session: {e}");
            return;
        }
    };

    if let Err(e) = session.start_game() {
        eprintln!("failed to start game: {e}");
        return;
    }

    println!();
    println!("================ GAME SIMULATION =================");

    let mut turns = 0;
    while session.state().is_running() && turns < MAX_TURNS {
        if let Err(e) = play_turn(&mut session) {
            eprintln!("turn failed: {e}");
            break;
        }
        turns += 1;
    }

    println!();
    println!("================ HISTORY =================");
    for event in session.history().events.iter() {
        println!("[#{:>3} r{:>2}] {}", event.index, event.round, event.message);
    }

    println!();
    println!("================ FINAL STANDINGS =================");
    debug_print_game(&build_game_view(session.state()));

    if turns >= MAX_TURNS {
        println!("Stopped after {MAX_TURNS} turns without a winner.");
    }
}

/// Один ход бота: бросок, перебросы, покупки, конец хода.
fn play_turn<R: RandomSource>(session: &mut GameSession<R>) -> Result<(), GameError> {
    session.roll_dice()?;

    while session.state().dice.can_roll() {
        let picks = pick_rerolls(&session.state().dice.values());
        if picks.is_empty() {
            break;
        }
        for index in picks {
            session.toggle_dice_selection(index)?;
        }
        session.reroll_selected()?;
    }

    // Покупаем самые дорогие по очкам карты, пока хватает камней.
    while session.state().is_running() {
        let state = session.state();
        let buyer = state.current_player();
        let best_standard = best_affordable(&state.standard_market, buyer);
        let best_bonus = best_affordable(&state.bonus_market, buyer);

        let choice = match (best_standard, best_bonus) {
            (Some((i, p)), Some((j, q))) => {
                if p >= q {
                    (CardFamily::Standard, i)
                } else {
                    (CardFamily::Bonus, j)
                }
            }
            (Some((i, _)), None) => (CardFamily::Standard, i),
            (None, Some((j, _))) => (CardFamily::Bonus, j),
            (None, None) => break,
        };

        session.purchase_card(choice.0, choice.1)?;
    }

    if session.state().is_running() {
        session.end_turn()?;
    }
    Ok(())
}

/// Перебрасываем одиночные двойки, тройки и пятёрки:
/// они реже всего дают камни сами по себе.
fn pick_rerolls(values: &[u8]) -> Vec<usize> {
    let counts = DiceCounts::from_values(values);
    values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| matches!(v, 2 | 3 | 5) && counts.count(v) == 1)
        .map(|(i, _)| i)
        .collect()
}

/// Индекс и очки самой ценной карты, которую игрок может купить.
fn best_affordable<C: MarketCard>(market: &CardMarket<C>, buyer: &Player) -> Option<(usize, u32)> {
    market
        .displayed
        .iter()
        .enumerate()
        .filter(|(_, c)| CardMarket::<C>::can_afford(buyer, c))
        .map(|(i, c)| (i, c.points()))
        .max_by_key(|&(_, points)| points)
}

fn debug_print_game(view: &GameViewDto) {
    println!(
        "phase={} round={} vp={:?} threshold={}",
        view.phase, view.round, view.victory_points, view.victory_threshold
    );
    for p in &view.players {
        println!(
            "  seat {} {:<10} vp={:>2} gems={} cards={} bonus_cards={}",
            p.seat,
            p.name,
            p.victory_points,
            p.gems,
            p.purchased_cards.len(),
            p.bonus_cards.len()
        );
    }
    match (view.winner, view.is_tie) {
        (Some(seat), _) => println!("Winner: seat {seat}"),
        (None, true) => println!("Result: tie"),
        (None, false) => println!("Result: no winner"),
    }
}

use gem_dice_engine::domain::{
    bonus::BonusEffect,
    card::BonusCard,
    dice::DiceCounts,
    gems::{GemColor, Gems},
    player::Player,
    rules::ScoringRules,
};
use gem_dice_engine::engine::{score, ScoreSource};

fn counts(values: &[u8]) -> DiceCounts {
    DiceCounts::from_values(values)
}

fn bonus_card(id: u32, effect: BonusEffect) -> BonusCard {
    BonusCard {
        id,
        name: effect.to_string(),
        description: effect.describe().to_string(),
        cost: Gems::ZERO,
        points: 1,
        effect,
    }
}

fn plain_players() -> (Player, Player) {
    (Player::new("Alice"), Player::new("Bob"))
}

// ---------------------------------------------------------------------------
// Базовая таблица
// ---------------------------------------------------------------------------

#[test]
fn pairs_triples_and_ones() {
    let (alice, bob) = plain_players();
    let c = counts(&[1, 1, 2, 2, 3, 3, 3, 6]);

    let result = score(&c, &alice, &bob, &ScoringRules::canonical());

    assert_eq!(result.delta, Gems::new(2, 1, 1, 0));
    assert_eq!(result.base_delta(), result.delta);
    assert_eq!(c.count(6), 1);
}

#[test]
fn four_fives_and_flat_four_presence() {
    let (alice, bob) = plain_players();
    let c = counts(&[5, 5, 5, 5, 4, 4, 1, 1]);

    let result = score(&c, &alice, &bob, &ScoringRules::canonical());

    assert_eq!(result.delta, Gems::new(2, 0, 1, 1));
    let four_line = result
        .lines
        .iter()
        .find(|l| matches!(l.source, ScoreSource::Face { face: 4, .. }))
        .expect("face 4 must produce a line");
    assert_eq!(four_line.gems, Gems::single(GemColor::Green, 1));
}

#[test]
fn fives_are_mutually_exclusive_by_exact_count() {
    let (alice, bob) = plain_players();
    let rules = ScoringRules::canonical();

    let expected = [
        (1, Gems::single(GemColor::Red, 1)),
        (2, Gems::single(GemColor::Blue, 1)),
        (3, Gems::single(GemColor::Green, 1)),
        (4, Gems::single(GemColor::Purple, 1)),
        (5, Gems::ZERO),
    ];
    for (n, gems) in expected {
        let mut values = vec![5u8; n];
        values.resize(8, 6);
        let result = score(&counts(&values), &alice, &bob, &rules);
        assert_eq!(result.delta, gems, "{n} fives");
    }
}

#[test]
fn sixes_and_empty_roll_score_nothing() {
    let (alice, bob) = plain_players();
    let rules = ScoringRules::canonical();

    let sixes = score(&counts(&[6; 8]), &alice, &bob, &rules);
    assert!(sixes.delta.is_zero());
    assert!(sixes.lines.is_empty(), "zero rewards do not produce lines");

    let empty = score(&DiceCounts::default(), &alice, &bob, &rules);
    assert!(empty.delta.is_zero());
    assert_eq!(empty.summary("Alice"), "Alice earned no gems.");
}

#[test]
fn legacy_table_rewards_single_four_with_purple() {
    let (alice, bob) = plain_players();
    let c = counts(&[4, 5, 5, 5, 6, 6, 6, 6]);

    let canonical = score(&c, &alice, &bob, &ScoringRules::canonical());
    let legacy = score(&c, &alice, &bob, &ScoringRules::legacy());

    assert_eq!(canonical.delta, Gems::new(0, 0, 2, 0));
    assert_eq!(legacy.delta, Gems::new(0, 1, 0, 1));
}

// ---------------------------------------------------------------------------
// Бонусные карты
// ---------------------------------------------------------------------------

#[test]
fn bonus_cards_add_lines_in_purchase_order() {
    let (mut alice, bob) = plain_players();
    alice.bonus_cards.push(bonus_card(20, BonusEffect::SixthSense));
    alice.bonus_cards.push(bonus_card(10, BonusEffect::EmptyHand));
    alice.bonus_cards.push(bonus_card(30, BonusEffect::CrimsonTide));

    let c = counts(&[6, 6, 6, 2, 2, 3, 4, 1]);
    let result = score(&c, &alice, &bob, &ScoringRules::canonical());

    let bonus_ids: Vec<u32> = result
        .lines
        .iter()
        .filter_map(|l| match l.source {
            ScoreSource::BonusCard { card_id, .. } => Some(card_id),
            ScoreSource::Face { .. } => None,
        })
        .collect();
    assert_eq!(bonus_ids, vec![20, 10], "crimson tide needs three 1s");

    // 1 red (one 1), 1 blue (pair of 2s), 1 green (4 present) + purple + blue
    assert_eq!(result.base_delta(), Gems::new(1, 1, 1, 0));
    assert_eq!(result.delta, Gems::new(1, 2, 1, 1));
}

#[test]
fn scoring_is_pure() {
    let (mut alice, bob) = plain_players();
    alice.gems = Gems::new(1, 1, 1, 1);
    alice.bonus_cards.push(bonus_card(1, BonusEffect::Scavenger));
    let before = alice.clone();

    let c = counts(&[1, 2, 3, 4, 5, 6, 1, 2]);
    let first = score(&c, &alice, &bob, &ScoringRules::canonical());
    let second = score(&c, &alice, &bob, &ScoringRules::canonical());

    assert_eq!(first, second);
    assert_eq!(alice, before, "scoring must not touch the player");
}

use gem_dice_engine::domain::{
    bonus::BonusEffect,
    card::{CardFamily, CardKind},
    config::GameConfig,
    dice::DiceCounts,
    gems::{GemColor, Gems},
    player::Player,
    rules::{FaceRule, ScoringRules},
};

/// Утилита: игрок с заданными камнями и очками.
fn player_with(gems: Gems, victory_points: u32) -> Player {
    let mut p = Player::new("Tester");
    p.gems = gems;
    p.victory_points = victory_points;
    p
}

fn counts(values: &[u8]) -> DiceCounts {
    DiceCounts::from_values(values)
}

// ---------------------------------------------------------------------------
// Gems
// ---------------------------------------------------------------------------

#[test]
fn gems_checked_sub_requires_every_color_to_cover_cost() {
    let have = Gems::new(2, 1, 0, 0);

    assert_eq!(have.checked_sub(&Gems::new(2, 1, 0, 0)), Some(Gems::ZERO));
    assert_eq!(have.checked_sub(&Gems::new(1, 0, 0, 0)), Some(Gems::new(1, 1, 0, 0)));
    assert_eq!(
        have.checked_sub(&Gems::new(0, 0, 1, 0)),
        None,
        "missing green must reject the subtraction"
    );
    assert!(have.covers(&Gems::new(2, 0, 0, 0)));
    assert!(!have.covers(&Gems::new(3, 0, 0, 0)));
}

#[test]
fn gems_add_and_display() {
    let mut g = Gems::single(GemColor::Red, 2);
    g += Gems::single(GemColor::Green, 1);

    assert_eq!(g.get(GemColor::Red), 2);
    assert_eq!(g.get(GemColor::Green), 1);
    assert_eq!(g.total(), 3);
    assert_eq!(g.to_string(), "2 red, 1 green");
    assert_eq!(Gems::ZERO.to_string(), "nothing");
    assert!(Gems::ZERO.is_zero());
}

#[test]
fn gems_serialize_with_named_colors() {
    let g = Gems::new(1, 2, 3, 4);
    let json = serde_json::to_value(g).unwrap();

    assert_eq!(json["red"], 1);
    assert_eq!(json["blue"], 2);
    assert_eq!(json["green"], 3);
    assert_eq!(json["purple"], 4);
}

// ---------------------------------------------------------------------------
// DiceCounts
// ---------------------------------------------------------------------------

#[test]
fn dice_counts_tally_faces_and_ignore_out_of_range() {
    let c = counts(&[1, 1, 2, 6, 6, 6, 0, 7]);

    assert_eq!(c.count(1), 2);
    assert_eq!(c.count(2), 1);
    assert_eq!(c.count(6), 3);
    assert_eq!(c.count(0), 0);
    assert_eq!(c.total(), 6);
    assert_eq!(c.most_common(), Some((6, 3)));
}

#[test]
fn dice_counts_full_straight() {
    assert!(counts(&[1, 2, 3, 4, 5, 6, 6, 1]).is_full_straight());
    assert!(!counts(&[1, 2, 3, 4, 5, 5, 5, 5]).is_full_straight());
}

// ---------------------------------------------------------------------------
// Правила граней
// ---------------------------------------------------------------------------

#[test]
fn face_rules_reward_by_shape() {
    let per_group = FaceRule::PerGroup {
        gem: GemColor::Blue,
        size: 2,
    };
    assert_eq!(per_group.reward(1), Gems::ZERO);
    assert_eq!(per_group.reward(5), Gems::single(GemColor::Blue, 2));

    let presence = FaceRule::Presence {
        gem: GemColor::Green,
        min: 1,
        max: None,
    };
    assert_eq!(presence.reward(0), Gems::ZERO);
    assert_eq!(presence.reward(4), Gems::single(GemColor::Green, 1));

    let rules = ScoringRules::canonical();
    let fives = rules.rule_for(5);
    assert_eq!(fives.reward(4), Gems::single(GemColor::Purple, 1));
    assert_eq!(fives.reward(5), Gems::ZERO, "five 5s grant nothing");
    assert_eq!(rules.rule_for(6).reward(8), Gems::ZERO);
}

#[test]
fn scoring_rules_round_trip_through_json() {
    let rules = ScoringRules::legacy();
    let json = serde_json::to_string(&rules).unwrap();
    let back: ScoringRules = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rules);
}

// ---------------------------------------------------------------------------
// Бонусные эффекты
// ---------------------------------------------------------------------------

#[test]
fn bonus_effects_fire_on_their_conditions() {
    let owner = player_with(Gems::ZERO, 0);
    let opp = player_with(Gems::ZERO, 0);

    let ones = counts(&[1, 1, 1, 2, 3, 4, 5, 5]);
    assert_eq!(
        BonusEffect::CrimsonTide.evaluate(&ones, &owner, &opp),
        Some(Gems::single(GemColor::Red, 1))
    );
    assert_eq!(BonusEffect::SixthSense.evaluate(&ones, &owner, &opp), None);

    let twos = counts(&[2, 2, 2, 2, 5, 6, 6, 6]);
    assert_eq!(
        BonusEffect::SapphireTwins.evaluate(&twos, &owner, &opp),
        Some(Gems::single(GemColor::Blue, 1))
    );
    assert_eq!(
        BonusEffect::SixthSense.evaluate(&twos, &owner, &opp),
        Some(Gems::single(GemColor::Purple, 1))
    );

    let path = counts(&[3, 3, 3, 4, 1, 1, 5, 5]);
    assert!(BonusEffect::EmeraldPath.evaluate(&path, &owner, &opp).is_some());
    let no_four = counts(&[3, 3, 3, 2, 1, 1, 5, 5]);
    assert!(BonusEffect::EmeraldPath.evaluate(&no_four, &owner, &opp).is_none());

    let straight = counts(&[1, 2, 3, 4, 5, 6, 1, 1]);
    assert!(BonusEffect::RainbowRoll.evaluate(&straight, &owner, &opp).is_some());

    let no_fives = counts(&[1, 2, 3, 4, 6, 6, 1, 1]);
    assert!(BonusEffect::EmptyHand.evaluate(&no_fives, &owner, &opp).is_some());
    assert!(
        BonusEffect::EmptyHand
            .evaluate(&DiceCounts::default(), &owner, &opp)
            .is_none(),
        "an empty roll does not count as a roll without fives"
    );
}

#[test]
fn bonus_effects_compare_owner_with_opponent() {
    let any = counts(&[1, 2, 3, 4, 5, 6, 6, 6]);

    let trailing = player_with(Gems::new(1, 0, 0, 0), 2);
    let leading = player_with(Gems::new(3, 0, 0, 0), 5);

    assert!(BonusEffect::UnderdogCharm.evaluate(&any, &trailing, &leading).is_some());
    assert!(BonusEffect::UnderdogCharm.evaluate(&any, &leading, &trailing).is_none());
    assert!(BonusEffect::Scavenger.evaluate(&any, &trailing, &leading).is_some());
    assert!(BonusEffect::Scavenger.evaluate(&any, &leading, &trailing).is_none());

    let equal = player_with(Gems::new(1, 0, 0, 0), 2);
    assert!(BonusEffect::UnderdogCharm.evaluate(&any, &trailing, &equal).is_none());
}

#[test]
fn bonus_effect_parses_loose_names() {
    assert_eq!("sixth-sense".parse::<BonusEffect>(), Ok(BonusEffect::SixthSense));
    assert_eq!("Rainbow Roll".parse::<BonusEffect>(), Ok(BonusEffect::RainbowRoll));
    assert!("lucky".parse::<BonusEffect>().is_err());

    for effect in BonusEffect::ALL {
        assert_eq!(effect.to_string().parse::<BonusEffect>(), Ok(effect));
    }
}

// ---------------------------------------------------------------------------
// Карты и конфиг
// ---------------------------------------------------------------------------

#[test]
fn card_kind_parse_defaults_to_treasure() {
    assert_eq!("".parse::<CardKind>(), Ok(CardKind::Treasure));
    assert_eq!("spell".parse::<CardKind>(), Ok(CardKind::Spell));
    assert!("potion".parse::<CardKind>().is_err());
    assert_eq!(CardFamily::Bonus.to_string(), "bonus");
}

#[test]
fn config_defaults_and_partial_json() {
    let config = GameConfig::default();
    assert_eq!(config.num_dice, 8);
    assert_eq!(config.max_rolls, 4);
    assert_eq!(config.victory_threshold, 10);
    assert_eq!(config.player_names, ["Alice".to_string(), "Bob".to_string()]);
    assert_eq!(config.round_bonus, Gems::single(GemColor::Purple, 1));

    let parsed = GameConfig::from_json_str(r#"{ "max_rolls": 3, "victory_threshold": 6 }"#)
        .expect("partial config must parse");
    assert_eq!(parsed.max_rolls, 3);
    assert_eq!(parsed.victory_threshold, 6);
    assert_eq!(parsed.num_dice, 8, "omitted fields keep defaults");
}

#[test]
fn config_rejects_degenerate_values() {
    assert!(GameConfig::from_json_str(r#"{ "max_rolls": 0 }"#).is_err());
    assert!(GameConfig::from_json_str(r#"{ "num_dice": 0 }"#).is_err());
    assert!(GameConfig::from_json_str(r#"{ "player_names": ["  ", "Bob"] }"#).is_err());
    assert!(GameConfig::from_json_str("{ not json").is_err());
}

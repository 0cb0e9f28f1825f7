// tests/bounds_tests.rs

//! Тесты калькулятора границ рейза:
//! - структурные границы при пустом списке пресетов
//! - сверка границ со списком пресетов (без "All in")
//! - вырожденный диапазон при min > max
//! - pot-limit: нижняя граница не ниже current_bet + 1, кап по банку
//! - отсутствие игрока → (0, 0)

use poker_hud_engine::domain::chips::Chips;
use poker_hud_engine::domain::game_type::GameType;
use poker_hud_engine::domain::player::PlayerBettingState;
use poker_hud_engine::domain::table::TableSnapshot;
use poker_hud_engine::engine::{
    quick_actions, raise_bounds, raise_targets, QuickAction, QuickLabel, RaiseBounds,
};

/// Хелпер: стол, где герой сидит на месте 0.
fn make_table(
    game_type: GameType,
    big_blind: Chips,
    last_raise: Chips,
    hero_bet: Chips,
    hero_balance: Chips,
    villain_bets: &[u64],
) -> TableSnapshot {
    let mut hero = PlayerBettingState::new(1, hero_balance);
    hero.current_total_bet = hero_bet;

    let mut seats = vec![Some(hero)];
    let mut highest = hero_bet;
    let mut pot = hero_bet;
    for (i, bet) in villain_bets.iter().enumerate() {
        let mut v = PlayerBettingState::new(2 + i as u64, Chips::new(10_000));
        v.current_total_bet = Chips::new(*bet);
        highest = highest.max(v.current_total_bet);
        pot += v.current_total_bet;
        seats.push(Some(v));
    }

    TableSnapshot {
        table_id: 1,
        game_type,
        big_blind,
        last_raise,
        highest_bet: highest,
        pot,
        current_player_index: 0,
        seats,
    }
}

/// Пустой список пресетов: границы чисто структурные.
#[test]
fn structural_bounds_when_no_presets() {
    // Герой уже внёс BB (100), call = 100, стек 10000.
    let table = make_table(
        GameType::NoLimit,
        Chips::new(100),
        Chips::ZERO,
        Chips::new(100),
        Chips::new(10_000),
        &[100],
    );

    let bounds = raise_bounds(&table, 0, &[]);

    // min = call + BB = 200, max = current_bet + balance = 10100.
    assert_eq!(bounds, RaiseBounds::new(Chips::new(200), Chips::new(10_100)));
}

/// Непустой список: границы сверяются с первым/последним пресетом.
#[test]
fn bounds_reconciled_with_presets() {
    let table = make_table(
        GameType::NoLimit,
        Chips::new(100),
        Chips::ZERO,
        Chips::new(100),
        Chips::new(10_000),
        &[100],
    );

    let targets = raise_targets(&quick_actions(&table, 0));
    assert_eq!(targets.len(), 2, "expected Min and 3x BB presets");

    let bounds = raise_bounds(&table, 0, &targets);

    // Пресеты [300, 400] внутри структурных (200, 10100):
    // min = max(300, 200), max = min(400, 10100).
    assert_eq!(bounds, RaiseBounds::new(Chips::new(300), Chips::new(400)));
}

/// min > max после сверки: диапазон схлопывается в одну точку (max).
#[test]
fn degenerate_range_collapses_to_single_point() {
    let table = make_table(
        GameType::NoLimit,
        Chips::new(100),
        Chips::new(200),
        Chips::ZERO,
        Chips::new(10_000),
        &[300],
    );

    // Рукотворный список с единственной целью ниже структурного минимума
    // (call 300 + last_raise 200 = 500).
    let crafted = [QuickAction::new(Chips::new(450), QuickLabel::Min)];
    let bounds = raise_bounds(&table, 0, &crafted);

    assert_eq!(bounds.min, bounds.max, "range must collapse");
    assert_eq!(bounds.max, Chips::new(450));
}

/// Pot-limit: структурный максимум – живой банк, минимум не ниже
/// current_bet + 1 и не выше банка.
#[test]
fn pot_limit_structural_bounds() {
    // Пять игроков по 200: live pot = 1000, call = 200.
    let table = make_table(
        GameType::PotLimit {
            big_blind: Chips::new(50),
        },
        Chips::new(50),
        Chips::ZERO,
        Chips::new(200),
        Chips::new(5_000),
        &[200, 200, 200, 200],
    );

    let targets = raise_targets(&quick_actions(&table, 0));
    let bounds = raise_bounds(&table, 0, &targets);

    assert_eq!(bounds, RaiseBounds::new(Chips::new(250), Chips::new(1_000)));
}

/// Pot-limit, где call + инкремент превышает банк: минимум капится.
#[test]
fn pot_limit_min_capped_by_pot() {
    // Оппонент поставил 500, банк = 500, call = 500:
    // min_from_call = 550 > банк → кап до 500, диапазон (500, 500).
    let table = make_table(
        GameType::PotLimit {
            big_blind: Chips::new(50),
        },
        Chips::new(50),
        Chips::ZERO,
        Chips::ZERO,
        Chips::new(10_000),
        &[500],
    );

    let targets = raise_targets(&quick_actions(&table, 0));
    let bounds = raise_bounds(&table, 0, &targets);

    assert_eq!(bounds.min, bounds.max);
    assert_eq!(bounds.max, Chips::new(500));
    assert!(bounds.contains(Chips::new(500)));
}

/// Отсутствующий игрок → сентинел (0, 0).
#[test]
fn missing_player_yields_zero_bounds() {
    let mut table = make_table(
        GameType::NoLimit,
        Chips::new(100),
        Chips::ZERO,
        Chips::ZERO,
        Chips::new(10_000),
        &[100],
    );
    table.seats[0] = None;

    assert_eq!(raise_bounds(&table, 0, &[]), RaiseBounds::ZERO);
}

/// Инвариант min <= max на представительном наборе снапшотов.
#[test]
fn min_never_exceeds_max() {
    let cases = [
        (GameType::NoLimit, 0u64, 0u64, 10_000u64, vec![100u64]),
        (GameType::NoLimit, 200, 100, 350, vec![300]),
        (
            GameType::PotLimit {
                big_blind: Chips::new(50),
            },
            0,
            200,
            5_000,
            vec![200, 200, 200, 200],
        ),
        (
            GameType::SpreadLimit {
                min_bet: Chips::new(100),
                max_bet: Chips::new(500),
            },
            0,
            0,
            2_000,
            vec![100],
        ),
    ];

    for (game_type, last_raise, hero_bet, balance, villains) in cases {
        let table = make_table(
            game_type,
            Chips::new(100),
            Chips::new(last_raise),
            Chips::new(hero_bet),
            Chips::new(balance),
            &villains,
        );
        let targets = raise_targets(&quick_actions(&table, 0));
        let bounds = raise_bounds(&table, 0, &targets);

        assert!(
            bounds.min <= bounds.max,
            "min {} must not exceed max {} for {:?}",
            bounds.min,
            bounds.max,
            table.game_type
        );
    }
}

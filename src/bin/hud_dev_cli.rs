// src/bin/hud_dev_cli.rs

use poker_hud_engine::domain::chips::Chips;
use poker_hud_engine::domain::game_type::GameType;
use poker_hud_engine::domain::player::PlayerBettingState;
use poker_hud_engine::domain::table::{SeatIndex, TableSnapshot};
use poker_hud_engine::engine::{quick_actions, raise_targets, resolve_actions};

fn main() {
    println!("hud_dev_cli: разбор действий по демонстрационным снапшотам…");

    // 1. Но-лимит стол: герой на ходу, открывающий рейз.
    let no_limit = sample_table(
        GameType::NoLimit,
        Chips::new(100),
        Chips::ZERO,
        Chips::new(100),
    );
    print_seat("NO-LIMIT", &no_limit, 0);

    // 2. Pot-limit стол впятером: банк 1000, у каждого по 200 в раунде.
    let mut seats = Vec::new();
    for id in 1..=5u64 {
        let mut p = PlayerBettingState::new(id, Chips::new(5_000));
        p.current_total_bet = Chips::new(200);
        seats.push(Some(p));
    }
    let mut pot_limit = TableSnapshot {
        table_id: 2,
        game_type: GameType::PotLimit {
            big_blind: Chips::new(50),
        },
        big_blind: Chips::new(50),
        last_raise: Chips::ZERO,
        highest_bet: Chips::new(200),
        pot: Chips::ZERO,
        current_player_index: 0,
        seats,
    };
    pot_limit.pot = pot_limit.live_pot();
    print_seat("POT-LIMIT", &pot_limit, 0);

    // 3. Тот же стол, но вне хода героя: пресеты обязаны быть пустыми.
    pot_limit.current_player_index = 1;
    print_seat("POT-LIMIT (чужой ход)", &pot_limit, 0);
}

/// Стол на двоих: герой на месте 0, ход тоже его.
fn sample_table(
    game_type: GameType,
    big_blind: Chips,
    last_raise: Chips,
    highest_bet: Chips,
) -> TableSnapshot {
    let hero = PlayerBettingState::new(1, Chips::new(10_000));
    let mut villain = PlayerBettingState::new(2, Chips::new(10_000));
    villain.current_total_bet = highest_bet;

    TableSnapshot {
        table_id: 1,
        game_type,
        big_blind,
        last_raise,
        highest_bet,
        pot: highest_bet,
        current_player_index: 0,
        seats: vec![Some(hero), Some(villain)],
    }
}

fn print_seat(title: &str, table: &TableSnapshot, seat: SeatIndex) {
    println!();
    println!("================ {} =================", title);

    let actions = quick_actions(table, seat);
    if actions.is_empty() {
        println!("quick actions: (пусто)");
    } else {
        for a in &actions {
            println!("quick action: {:>8}  [{}]", a.amount, a.label);
        }
    }
    println!("raise targets: {} шт.", raise_targets(&actions).len());

    let set = resolve_actions(table, seat);
    println!("fold:   {}", set.fold.is_some());
    println!("check:  {}", set.check.is_some());
    match &set.call {
        Some(call) => println!("call:   цена {}", call.price),
        None => println!("call:   нет"),
    }
    match &set.raise {
        Some(raise) => println!(
            "raise:  {:?}, [{} .. {}], старт {}",
            raise.kind, raise.bounds.min, raise.bounds.max, raise.staged
        ),
        None => println!("raise:  нет"),
    }
    match &set.all_in {
        Some(all_in) => println!("all-in: до {}", all_in.target),
        None => println!("all-in: нет"),
    }
}

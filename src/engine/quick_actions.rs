use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::table::{SeatIndex, TableSnapshot};
use crate::engine::structure::classify;

/// Подпись пресета. Ключом набора служит сумма, подпись – только отображение.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QuickLabel {
    Min,
    TripleLastRaise,
    TripleBigBlind,
    Pot,
    HalfPot,
    AllIn,
}

impl fmt::Display for QuickLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            QuickLabel::Min => "Min",
            QuickLabel::TripleLastRaise => "3x Last raise",
            QuickLabel::TripleBigBlind => "3x BB",
            QuickLabel::Pot => "Pot",
            QuickLabel::HalfPot => "1/2 Pot",
            QuickLabel::AllIn => "All in",
        };
        f.write_str(text)
    }
}

/// Пресет ставки "в один клик". `amount` – абсолютный raise-to, не дельта.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickAction {
    pub amount: Chips,
    pub label: QuickLabel,
}

impl QuickAction {
    pub fn new(amount: Chips, label: QuickLabel) -> Self {
        Self { amount, label }
    }
}

/// Построить набор пресетов для места `seat`.
///
/// Вне хода игрока набор всегда пуст – для чужих мест ничего не считаем.
/// Набор отсортирован по возрастанию суммы, сравнение строго целочисленное.
pub fn quick_actions(table: &TableSnapshot, seat: SeatIndex) -> Vec<QuickAction> {
    let mut actions: Vec<QuickAction> = Vec::new();

    if !table.is_players_turn(seat) {
        return actions;
    }
    let player = match table.player(seat) {
        Some(p) => p,
        None => return actions,
    };

    let structure = classify(table);
    let current_bet = player.current_total_bet;
    let balance = player.balance;
    let call_value = table.highest_bet;

    // Сколько фишек дополнительно стоит ставка до `amount`.
    let price = |amount: Chips| amount.saturating_sub(current_bet);

    if structure.is_pot_limit {
        let pot_value = table.live_pot();
        let half_pot_value = pot_value.half();

        // Pot
        if pot_value > current_bet && price(pot_value) <= balance {
            actions.push(QuickAction::new(pot_value, QuickLabel::Pot));
        }
        // 1/2 Pot
        if half_pot_value > current_bet
            && half_pot_value < pot_value
            && price(half_pot_value) <= balance
        {
            actions.push(QuickAction::new(half_pot_value, QuickLabel::HalfPot));
        }
        // Min: call + инкремент, сверху ограничен банком.
        let min_raise = call_value + structure.min_increment;
        let valid_min_raise = min_raise.min(pot_value);
        if valid_min_raise > current_bet
            && valid_min_raise != pot_value
            && valid_min_raise != half_pot_value
            && price(valid_min_raise) <= balance
        {
            actions.push(QuickAction::new(valid_min_raise, QuickLabel::Min));
        }
    } else {
        let raise_to_from_delta = |delta: Chips| call_value + delta;

        if !table.last_raise.is_zero() {
            actions.push(QuickAction::new(
                raise_to_from_delta(table.last_raise.saturating_mul(2)),
                QuickLabel::Min,
            ));
            actions.push(QuickAction::new(
                raise_to_from_delta(table.last_raise.saturating_mul(3)),
                QuickLabel::TripleLastRaise,
            ));
        } else if !table.big_blind.is_zero() {
            actions.push(QuickAction::new(
                raise_to_from_delta(table.big_blind.saturating_mul(2)),
                QuickLabel::Min,
            ));
            actions.push(QuickAction::new(
                raise_to_from_delta(table.big_blind.saturating_mul(3)),
                QuickLabel::TripleBigBlind,
            ));
        }

        // Pot / 1/2 Pot добавляются только поверх уже существующих пресетов
        // и только если строго превышают первый из них.
        let pot_to_value = raise_to_from_delta(table.pot);
        if !table.pot.is_zero()
            && !actions.is_empty()
            && pot_to_value > actions[0].amount
        {
            actions.push(QuickAction::new(pot_to_value, QuickLabel::Pot));
            let half_pot_to_value = raise_to_from_delta(table.pot.half());
            if half_pot_to_value > actions[0].amount {
                actions.push(QuickAction::new(half_pot_to_value, QuickLabel::HalfPot));
            }
        }

        // Недоступное по стеку (дороже, чем весь остаток) – выкидываем;
        // ровно весь остаток – это олл-ин, он добавляется отдельно.
        actions.retain(|a| price(a.amount) < balance);
    }

    // All in: весь остаток поверх вложенного. В pot-limit нельзя выйти
    // за банк, в остальных вариантах ограничения нет.
    if !balance.is_zero() {
        let all_in_value = player.all_in_target();
        if !structure.is_pot_limit || all_in_value <= table.live_pot() {
            actions.push(QuickAction::new(all_in_value, QuickLabel::AllIn));
        }
    }

    actions.sort_by_key(|a| a.amount);
    actions
}

/// Пресеты, пригодные как цели рейза: всё, кроме "All in".
/// Именно этот список участвует в расчёте границ рейза.
pub fn raise_targets(actions: &[QuickAction]) -> Vec<QuickAction> {
    actions
        .iter()
        .copied()
        .filter(|a| a.label != QuickLabel::AllIn)
        .collect()
}

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::table::{SeatIndex, TableSnapshot};
use crate::engine::quick_actions::QuickAction;
use crate::engine::structure::classify;

/// Допустимый диапазон raise-to (включительно). Инвариант: min <= max.
///
/// Сам по себе диапазон не говорит, доступен ли рейз – это решает
/// резолвер действий. При отсутствии данных об игроке возвращается ZERO.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RaiseBounds {
    pub min: Chips,
    pub max: Chips,
}

impl RaiseBounds {
    pub const ZERO: RaiseBounds = RaiseBounds {
        min: Chips::ZERO,
        max: Chips::ZERO,
    };

    pub fn new(min: Chips, max: Chips) -> Self {
        Self { min, max }
    }

    /// Вырожденный диапазон из одной точки (рейз возможен ровно в одну сумму).
    fn collapsed(point: Chips) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    pub fn contains(&self, amount: Chips) -> bool {
        self.min <= amount && amount <= self.max
    }
}

/// Рассчитать границы рейза для места `seat`.
///
/// `raise_actions` – список пресетов уже без "All in": олл-ин отдельное
/// действие, его сумма не участвует в границах рейза.
pub fn raise_bounds(
    table: &TableSnapshot,
    seat: SeatIndex,
    raise_actions: &[QuickAction],
) -> RaiseBounds {
    let player = match table.player(seat) {
        Some(p) => p,
        None => return RaiseBounds::ZERO,
    };

    let structure = classify(table);
    let current_bet = player.current_total_bet;
    let call_value = table.highest_bet;

    let structural_max = if structure.is_pot_limit {
        table.live_pot()
    } else {
        current_bet + player.balance
    };

    let structural_min = if structure.is_pot_limit {
        // Рейз обязан превышать и текущую ставку игрока, и call + инкремент,
        // но не может выйти за банк.
        let min_from_call = call_value + structure.min_increment;
        let min_from_current = current_bet + Chips(1);
        min_from_call.max(min_from_current).min(structural_max)
    } else {
        call_value + structure.min_increment
    };

    if let (Some(first), Some(last)) = (raise_actions.first(), raise_actions.last()) {
        let min = first.amount.max(structural_min);
        let max = last.amount.min(structural_max);
        if min > max {
            // Типичный случай: pot-cap совпал с ценой колла.
            return RaiseBounds::collapsed(max);
        }
        return RaiseBounds::new(min, max);
    }

    if structural_min > structural_max {
        return RaiseBounds::collapsed(structural_max);
    }
    RaiseBounds::new(structural_min, structural_max)
}

use crate::domain::chips::Chips;
use crate::domain::table::TableSnapshot;

/// Структурные параметры лимита, выведенные из типа игры (классификатор).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BettingStructure {
    /// Pot-limit семейство (PL / PLO4 / PLO5).
    pub is_pot_limit: bool,
    /// Минимальный инкремент повышения:
    /// - pot-limit: big blind варианта;
    /// - остальные: last_raise, при нуле – big blind стола.
    pub min_increment: Chips,
}

/// Тотальная функция: ошибок нет, на любом снапшоте даёт результат.
/// Инкремент никогда не ноль – нижний предел 1 фишка.
pub fn classify(table: &TableSnapshot) -> BettingStructure {
    let is_pot_limit = table.game_type.is_pot_limit();

    let min_increment = if is_pot_limit {
        let bb = table
            .game_type
            .pot_limit_big_blind()
            .unwrap_or(table.big_blind);
        non_zero(bb)
    } else if !table.last_raise.is_zero() {
        table.last_raise
    } else {
        non_zero(table.big_blind)
    };

    BettingStructure {
        is_pot_limit,
        min_increment,
    }
}

fn non_zero(amount: Chips) -> Chips {
    if amount.is_zero() {
        Chips(1)
    } else {
        amount
    }
}

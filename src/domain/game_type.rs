use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Структура лимитов стола. Неизменна на всё время жизни стола.
///
/// Каждый вариант несёт только те поля, которые нужны его арифметике.
/// Pot-limit семейство (PL / PLO4 / PLO5) считает ставки одинаково,
/// различается только размером руки – это вне данного движка.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameType {
    /// Без лимита – ограничение только по стеку.
    NoLimit,
    /// Фиксированный лимит: малая/большая ставка.
    FixedLimit { small_bet: Chips, big_bet: Chips },
    /// Spread-limit: ставка в диапазоне [min_bet, max_bet].
    SpreadLimit { min_bet: Chips, max_bet: Chips },
    /// Pot-limit холдем: рейз ограничен размером банка.
    PotLimit { big_blind: Chips },
    /// Pot-limit омаха (4 карты).
    PotLimitOmaha4 { big_blind: Chips },
    /// Pot-limit омаха (5 карт).
    PotLimitOmaha5 { big_blind: Chips },
}

impl GameType {
    /// Относится ли вариант к pot-limit семейству.
    pub fn is_pot_limit(&self) -> bool {
        matches!(
            self,
            GameType::PotLimit { .. }
                | GameType::PotLimitOmaha4 { .. }
                | GameType::PotLimitOmaha5 { .. }
        )
    }

    /// Big blind варианта, если он хранится прямо в нём (pot-limit семейство).
    pub fn pot_limit_big_blind(&self) -> Option<Chips> {
        match self {
            GameType::PotLimit { big_blind }
            | GameType::PotLimitOmaha4 { big_blind }
            | GameType::PotLimitOmaha5 { big_blind } => Some(*big_blind),
            _ => None,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Тегированный payload ставки – ровно то, что принимает `place_bet` бекенда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BetAction {
    /// Рейз/бет до абсолютной суммы (raise-to). Олл-ин – тот же Raised
    /// до суммы current_total_bet + balance.
    Raised(Chips),
    /// Уравнять текущую ставку.
    Called,
}

/// Исходящий запрос к удалённому сервису стола. Один запрос = один вызов.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TableRequest {
    /// place_bet: Raised(amount) или Called.
    PlaceBet {
        player_id: PlayerId,
        action: BetAction,
    },

    /// check: отдельный вызов без суммы.
    Check { player_id: PlayerId },

    /// fold: бекенду важно, свой ли сейчас ход у фолдящего.
    Fold {
        player_id: PlayerId,
        is_own_turn: bool,
    },
}

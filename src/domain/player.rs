use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::PlayerId;

/// Статус игрока в текущем раунде ставок (приходит из снапшота бекенда).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerAction {
    /// Игрок активен и участвует в раунде.
    Active,
    /// Игрок сфолдил.
    Folded,
    /// Игрок сидит за столом, но не играет (sit out).
    SittingOut,
    /// Игрок в процессе подсадки, ещё не участвует.
    Joining,
}

/// Состояние ставок одного игрока, обновляется вместе со столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerBettingState {
    pub player_id: PlayerId,
    /// Сколько игрок уже вложил в текущем раунде.
    pub current_total_bet: Chips,
    /// Остаток стека, доступный для ставок.
    pub balance: Chips,
    pub action: PlayerAction,
}

impl PlayerBettingState {
    pub fn new(player_id: PlayerId, balance: Chips) -> Self {
        Self {
            player_id,
            current_total_bet: Chips::ZERO,
            balance,
            action: PlayerAction::Active,
        }
    }

    /// Только активные игроки учитываются в проверках "сколько оппонентов осталось".
    pub fn is_active(&self) -> bool {
        matches!(self.action, PlayerAction::Active)
    }

    /// Целевая сумма при олл-ине: всё вложенное + весь остаток.
    pub fn all_in_target(&self) -> Chips {
        self.current_total_bet + self.balance
    }
}

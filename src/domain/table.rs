use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::game_type::GameType;
use crate::domain::player::PlayerBettingState;
use crate::domain::TableId;

/// Индекс места за столом (0..max_seats-1).
pub type SeatIndex = u8;

/// Снапшот состояния раунда ставок, приходит от авторитетного бекенда
/// на каждое событие стола. Движок его не мутирует – каждый пересчёт
/// строится с нуля по свежему снапшоту.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSnapshot {
    pub table_id: TableId,
    pub game_type: GameType,

    /// Big blind стола.
    pub big_blind: Chips,
    /// Размер последнего повышения (инкремент, не raise-to).
    pub last_raise: Chips,
    /// Максимальный current_total_bet среди игроков в этом раунде.
    pub highest_bet: Chips,
    /// Банк раунда. Инвариант бекенда: pot == сумма current_total_bet
    /// всех игроков. Движок на него полагается, но не проверяет.
    pub pot: Chips,

    /// Чей сейчас ход.
    pub current_player_index: SeatIndex,

    /// Места за столом: индекс вектора = SeatIndex, None – место пустое.
    pub seats: Vec<Option<PlayerBettingState>>,
}

impl TableSnapshot {
    /// Игрок на месте, если оно занято.
    pub fn player(&self, seat: SeatIndex) -> Option<&PlayerBettingState> {
        self.seats.get(seat as usize).and_then(|s| s.as_ref())
    }

    /// Ход ли сейчас этого места.
    pub fn is_players_turn(&self, seat: SeatIndex) -> bool {
        self.current_player_index == seat
    }

    /// "Живой" банк: сумма current_total_bet всех сидящих игроков.
    /// Pot-limit арифметика использует именно его, чтобы совпадать
    /// с проверками бекенда.
    pub fn live_pot(&self) -> Chips {
        self.seats
            .iter()
            .flatten()
            .fold(Chips::ZERO, |sum, p| sum + p.current_total_bet)
    }

    /// Количество активных игроков в раунде.
    pub fn active_count(&self) -> usize {
        self.seats
            .iter()
            .flatten()
            .filter(|p| p.is_active())
            .count()
    }
}

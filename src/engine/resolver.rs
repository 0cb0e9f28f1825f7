use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::player::PlayerAction;
use crate::domain::table::{SeatIndex, TableSnapshot};
use crate::engine::bounds::{raise_bounds, RaiseBounds};
use crate::engine::quick_actions::{quick_actions, raise_targets, QuickAction};
use crate::engine::structure::classify;

/// Fold доступен, пока игрок сам ещё не сфолдил.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FoldAction {
    /// Ход ли сейчас этого игрока – бекенду важно при фолде вне очереди.
    pub is_own_turn: bool,
}

/// Check: обязательная ставка равна нулю.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckAction;

/// Call: есть что уравнивать.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallAction {
    /// Цена колла: highest_bet − current_total_bet игрока.
    pub price: Chips,
    /// Подпись для ховера кнопки.
    pub hover_label: String,
}

/// Как подписывать кнопку рейза: Bet на непочатой улице, иначе Raise.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RaiseKind {
    Bet,
    Raise,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RaiseAction {
    pub kind: RaiseKind,
    pub bounds: RaiseBounds,
    /// Пресеты для показа рядом с ручным вводом.
    pub quick_actions: Vec<QuickAction>,
    /// Начальное значение ручного ввода – минимум диапазона.
    pub staged: Chips,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllInAction {
    /// Raise-to сумма олл-ина: current_total_bet + balance.
    pub target: Chips,
}

/// Итог пересчёта: какие действия предлагать игроку и с какими данными.
///
/// Гарантии:
/// - check и call никогда не присутствуют одновременно;
/// - raise присутствует только при существующей легальной цели рейза.
///
/// Отсутствующий в снапшоте игрок (устаревшее состояние) даёт пустой набор.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ResolvedActionSet {
    pub fold: Option<FoldAction>,
    pub check: Option<CheckAction>,
    pub call: Option<CallAction>,
    pub raise: Option<RaiseAction>,
    pub all_in: Option<AllInAction>,
}

impl ResolvedActionSet {
    pub fn is_empty(&self) -> bool {
        self.fold.is_none()
            && self.check.is_none()
            && self.call.is_none()
            && self.raise.is_none()
            && self.all_in.is_none()
    }
}

/// Пересчитать набор действий для места `seat` по свежему снапшоту.
///
/// Чистая функция: любое изменение состояния (balance, pot, highest_bet)
/// подаётся новым снапшотом, ничего не мутируется на месте.
pub fn resolve_actions(table: &TableSnapshot, seat: SeatIndex) -> ResolvedActionSet {
    let player = match table.player(seat) {
        Some(p) => p,
        None => return ResolvedActionSet::default(),
    };

    let mut set = ResolvedActionSet::default();
    let is_own_turn = table.is_players_turn(seat);
    let structure = classify(table);

    // Fold
    if !matches!(player.action, PlayerAction::Folded) {
        set.fold = Some(FoldAction { is_own_turn });
    }

    // Check против Call: ровно одно из двух.
    let min_required_bet = table.highest_bet.saturating_sub(player.current_total_bet);
    if min_required_bet.is_zero() {
        set.check = Some(CheckAction);
    } else {
        set.call = Some(CallAction {
            price: min_required_bet,
            hover_label: min_required_bet.to_string(),
        });
    }

    // Raise: в pot-limit контролы рейза показываются на своём ходу всегда,
    // в остальных вариантах – когда есть хоть один пресет-цель.
    let all_actions = quick_actions(table, seat);
    let targets = raise_targets(&all_actions);
    let offer_raise = if structure.is_pot_limit {
        is_own_turn
    } else {
        !targets.is_empty()
    };

    if offer_raise {
        let bounds = raise_bounds(table, seat, &targets);
        let kind = if table.highest_bet.is_zero() {
            RaiseKind::Bet
        } else {
            RaiseKind::Raise
        };
        let quick = if targets.is_empty() {
            all_actions
        } else {
            targets
        };
        set.raise = Some(RaiseAction {
            kind,
            bounds,
            quick_actions: quick,
            staged: bounds.min,
        });
    }

    // All in считается всегда, когда есть чем ставить; очередность хода
    // на его доступность не влияет.
    if !player.balance.is_zero() {
        set.all_in = Some(AllInAction {
            target: player.all_in_target(),
        });
    }

    set
}

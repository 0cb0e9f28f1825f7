use crate::domain::chips::Chips;
use crate::engine::bounds::RaiseBounds;

/// Локально выбранная сумма рейза и флаг инлайн-ввода.
///
/// Единственное состояние, которое переживает пересчёты снапшота.
/// Контракт на границе хода:
/// - когда ход игрока начинается, сумма сбрасывается на свежий минимум;
/// - когда ход не его, инлайн-ввод принудительно закрывается;
/// - в остальных случаях сумма лишь зажимается в новые границы.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StagedRaise {
    amount: Chips,
    inline_input_open: bool,
    was_own_turn: bool,
}

impl StagedRaise {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> Chips {
        self.amount
    }

    pub fn is_inline_input_open(&self) -> bool {
        self.inline_input_open
    }

    /// Выставить сумму вручную (слайдер/инпут). Зажимается в границы.
    pub fn set_amount(&mut self, amount: Chips, bounds: &RaiseBounds) {
        self.amount = amount.clamp(bounds.min, bounds.max);
    }

    pub fn open_inline_input(&mut self) {
        self.inline_input_open = true;
    }

    pub fn close_inline_input(&mut self) {
        self.inline_input_open = false;
    }

    /// Применить свежие границы и текущую очередность хода.
    /// Вызывается на каждом обновлении снапшота.
    pub fn refresh(&mut self, bounds: &RaiseBounds, is_own_turn: bool) {
        self.amount = self.amount.clamp(bounds.min, bounds.max);

        if is_own_turn && !self.was_own_turn {
            self.amount = bounds.min;
        }
        if !is_own_turn {
            self.inline_input_open = false;
        }

        self.was_own_turn = is_own_turn;
    }
}

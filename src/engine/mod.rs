//! Движок ставочного HUD: чистые пересчёты по снапшоту стола.
//!
//! Поток данных на каждое обновление:
//!   снапшот → classify → quick_actions → raise_bounds → resolve_actions
//!
//! Все функции тотальные: на некорректном/устаревшем снапшоте они
//! деградируют до пустого набора действий и нулевых границ, не падая.

pub mod bounds;
pub mod quick_actions;
pub mod resolver;
pub mod staged;
pub mod structure;

pub use bounds::{raise_bounds, RaiseBounds};
pub use quick_actions::{quick_actions, raise_targets, QuickAction, QuickLabel};
pub use resolver::{
    resolve_actions, AllInAction, CallAction, CheckAction, FoldAction, RaiseAction, RaiseKind,
    ResolvedActionSet,
};
pub use staged::StagedRaise;
pub use structure::{classify, BettingStructure};

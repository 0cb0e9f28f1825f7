//! Движок разрешения ставочных действий покерного клиента.
//!
//! По снапшоту раунда ставок движок решает:
//! - какие действия легальны (fold / check / call / raise / all-in);
//! - легальный диапазон raise-to [min, max];
//! - набор quick-пресетов (Min, Pot, 1/2 Pot, All in) с учётом варианта
//!   лимита, в частности pot-limit правил, ограничивающих рейз банком.
//!
//! Арифметика обязана бит-в-бит совпадать с авторитетным бекендом, иначе
//! игроку покажут (или дадут отправить) нелегальное действие.
//!
//! Движок чистый и однопоточный: пересчёт вызывается синхронно на каждом
//! обновлении стола. Единственная асинхронщина – отправка действия через
//! `api::SubmissionAdapter`.

pub mod api;
pub mod domain;
pub mod engine;

pub use domain::{Chips, GameType, PlayerBettingState, TableSnapshot};
pub use engine::{resolve_actions, ResolvedActionSet};

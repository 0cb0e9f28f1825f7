//! Внешняя граница движка.
//!
//! Здесь описываются:
//! - команды (commands.rs) — точные payload'ы удалённых вызовов;
//! - ошибки (errors.rs) — таксономия отказов при отправке;
//! - сервис (service.rs) — trait удалённого стола и адаптер отправки.

pub mod commands;
pub mod errors;
pub mod service;

pub use commands::*;
pub use errors::*;
pub use service::*;

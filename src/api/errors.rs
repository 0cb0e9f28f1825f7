use thiserror::Error;

use crate::api::service::SubmitKind;

/// Ошибки на границе отправки действий.
///
/// Вычислительные компоненты движка не падают вовсе; всё, что может
/// сломаться, ломается здесь и отдаётся UI для показа, без ретраев
/// и без мутации локального состояния.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Снапшот устарел: стол или игрок не найдены.
    #[error("Стол или игрок не найдены в снапшоте")]
    MissingState,

    /// Бекенд отклонил действие (не твой ход, нелегальная сумма и т.п.).
    /// Payload непрозрачный – отдаём как есть, не интерпретируя.
    #[error("Бекенд отклонил действие: {0}")]
    Rejected(serde_json::Value),

    /// Сам вызов не дошёл/не завершился.
    #[error("Транспортная ошибка: {0}")]
    Transport(String),

    /// Такое же действие уже отправлено и ждёт ответа.
    #[error("Действие {0:?} уже отправлено и ждёт ответа")]
    AlreadyPending(SubmitKind),
}

use std::cell::RefCell;
use std::collections::BTreeSet;

use async_trait::async_trait;
use log::{debug, warn};

use crate::api::commands::{BetAction, TableRequest};
use crate::api::errors::SubmitError;
use crate::domain::chips::Chips;
use crate::domain::table::{SeatIndex, TableSnapshot};

/// Выбранное игроком действие (вход адаптера отправки).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChosenAction {
    Fold,
    Check,
    Call,
    /// Рейз/бет до абсолютной суммы.
    Raise(Chips),
    AllIn,
}

/// Вид отправляемого действия – ключ дисциплины "не больше одного в полёте".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SubmitKind {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

impl ChosenAction {
    pub fn kind(&self) -> SubmitKind {
        match self {
            ChosenAction::Fold => SubmitKind::Fold,
            ChosenAction::Check => SubmitKind::Check,
            ChosenAction::Call => SubmitKind::Call,
            ChosenAction::Raise(_) => SubmitKind::Raise,
            ChosenAction::AllIn => SubmitKind::AllIn,
        }
    }
}

/// Удалённый авторитетный сервис стола.
///
/// Успех – свежий снапшот стола, отказ – непрозрачный payload бекенда
/// либо транспортная ошибка. Движок однопоточный, поэтому trait не Send.
#[async_trait(?Send)]
pub trait TableService {
    async fn submit(&self, request: TableRequest) -> Result<TableSnapshot, SubmitError>;
}

/// Адаптер отправки: превращает выбранное действие ровно в один удалённый
/// вызов и следит, чтобы одинаковые действия не отправлялись параллельно.
///
/// Успешный ответ возвращается вызывающему как свежий снапшот – все новые
/// пересчёты обязаны идти уже от него. Ответ применяется и в том случае,
/// если ход успел уйти от игрока (идемпотентное слияние: снапшот просто
/// новее). Неуспех локальное состояние не трогает.
pub struct SubmissionAdapter<S> {
    service: S,
    in_flight: RefCell<BTreeSet<SubmitKind>>,
}

impl<S: TableService> SubmissionAdapter<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            in_flight: RefCell::new(BTreeSet::new()),
        }
    }

    /// Ждёт ли ответа действие этого вида.
    pub fn is_pending(&self, kind: SubmitKind) -> bool {
        self.in_flight.borrow().contains(&kind)
    }

    /// Отправить выбранное действие для места `seat`.
    ///
    /// Возвращает свежий снапшот при успехе. Второй вызов того же вида,
    /// пока первый в полёте, сразу отклоняется с `AlreadyPending` и до
    /// сервиса не доходит.
    pub async fn submit(
        &self,
        table: &TableSnapshot,
        seat: SeatIndex,
        action: ChosenAction,
    ) -> Result<TableSnapshot, SubmitError> {
        let player = table.player(seat).ok_or(SubmitError::MissingState)?;
        let player_id = player.player_id;

        let request = match action {
            ChosenAction::Raise(amount) => TableRequest::PlaceBet {
                player_id,
                action: BetAction::Raised(amount),
            },
            ChosenAction::AllIn => TableRequest::PlaceBet {
                player_id,
                action: BetAction::Raised(player.all_in_target()),
            },
            ChosenAction::Call => TableRequest::PlaceBet {
                player_id,
                action: BetAction::Called,
            },
            ChosenAction::Check => TableRequest::Check { player_id },
            ChosenAction::Fold => TableRequest::Fold {
                player_id,
                is_own_turn: table.is_players_turn(seat),
            },
        };

        let kind = action.kind();
        if !self.in_flight.borrow_mut().insert(kind) {
            return Err(SubmitError::AlreadyPending(kind));
        }

        let result = self.service.submit(request).await;
        self.in_flight.borrow_mut().remove(&kind);

        match &result {
            Ok(snapshot) => {
                debug!(
                    "submit {:?}: ok, table={} обновлён",
                    kind, snapshot.table_id
                );
            }
            Err(err) => {
                warn!("submit {:?}: {}", kind, err);
            }
        }

        result
    }
}

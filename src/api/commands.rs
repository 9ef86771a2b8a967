use serde::{Deserialize, Serialize};

/// Семейство карт на уровне API.
///
/// В домене маппим в `domain::card::CardFamily`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardFamilyApi {
    Standard,
    Bonus,
}

/// Команда верхнего уровня: всё, что меняет состояние партии.
///
/// Слой отображения вызывает только эти команды и перерисовывается
/// по снимку состояния из ответа или из `Query::GetState`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Начать новую партию (или перезапустить текущую).
    StartGame,

    /// Первый бросок хода или переброс выбранных кубиков.
    RollDice,

    /// Явный переброс выбранных кубиков.
    RerollSelected,

    /// Выбрать / снять выбор с кубика.
    ToggleDie(ToggleDieCommand),

    /// Завершить ход текущего игрока.
    EndTurn,

    /// Купить открытую карту.
    PurchaseCard(PurchaseCardCommand),

    /// Сменить имя игрока.
    RenamePlayer(RenamePlayerCommand),

    /// Остановить партию без победителя.
    StopGame,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToggleDieCommand {
    /// Индекс кубика в порядке броска, не в отсортированном виде.
    pub index: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseCardCommand {
    pub family: CardFamilyApi,
    /// Индекс среди открытых карт семейства.
    pub index: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenamePlayerCommand {
    pub seat: usize,
    pub name: String,
}

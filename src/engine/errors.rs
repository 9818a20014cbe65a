use thiserror::Error;

use crate::domain::{Card, Chips, SeatIndex, Stage};

/// Ошибки использования движка: вызывающий код передал некорректные данные.
/// Такие вызовы прерываются, их не показывают игроку.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Для оценки руки нужно минимум 5 карт, передано {0}")]
    InsufficientCards(usize),

    #[error("Для оценки руки можно передать максимум 7 карт, передано {0}")]
    TooManyCards(usize),

    #[error("Карта {0} встречается в руке дважды")]
    DuplicateCard(Card),

    #[error("Индекс карты {0} вне диапазона 0..51")]
    InvalidCardIndex(u8),

    #[error("В колоде {available} карт, запрошено {requested}")]
    NotEnoughCards { requested: usize, available: usize },

    #[error("Нельзя делить банк без победителей")]
    NoWinners,

    #[error("Место {0} указано среди победителей дважды")]
    DuplicateWinner(SeatIndex),

    #[error("Банк разыгрывается только на шоудауне, текущая стадия {0:?}")]
    NotAtShowdown(Stage),

    #[error("Некорректный конфиг стола: {0}")]
    InvalidConfig(String),
}

/// Нарушения правил торговли. Это не сбой: причину показывают игроку
/// через `ValidationResult`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Раздача не активна (стадия {0:?})")]
    HandNotActive(Stage),

    #[error("На стадии {0:?} торговли нет")]
    NoBettingRound(Stage),

    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("В месте {0} нет игрока")]
    EmptySeat(SeatIndex),

    #[error("Сейчас ход места {expected}, а не {actual}")]
    NotPlayersTurn { expected: SeatIndex, actual: SeatIndex },

    #[error("Игрок уже сфолдил")]
    AlreadyFolded,

    #[error("Игрок в олл-ине и больше не ходит")]
    AlreadyAllIn,

    #[error("Невозможно выполнить check – нужно уравнять ставку {to_call}")]
    CannotCheck { to_call: Chips },

    #[error("Невозможно выполнить call – нет ставки для уравнивания")]
    NothingToCall,

    #[error("Недостаточно фишек: нужно {required}, в стеке {available}")]
    NotEnoughChips { required: Chips, available: Chips },

    #[error("Bet невозможен – уже есть ставка {0}, нужен raise")]
    BetAlreadyOpen(Chips),

    #[error("Raise невозможен – ставки ещё нет, нужен bet")]
    NoBetToRaise,

    #[error("Ставка {amount} меньше большого блайнда {minimum}")]
    BetTooSmall { amount: Chips, minimum: Chips },

    #[error("Рейз до {amount} слишком мал, минимум {minimum}")]
    RaiseTooSmall { amount: Chips, minimum: Chips },

    #[error("Нет фишек для олл-ина")]
    EmptyStack,

    #[error("Для старта раздачи нужно минимум {required} игроков, за столом {seated}")]
    NotEnoughPlayers { required: usize, seated: usize },

    #[error("Переход со стадии {from:?} невозможен")]
    IllegalTransition { from: Stage },
}

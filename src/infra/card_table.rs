//! Разбор таблицы карт (CSV или другой разделитель) в записи домена.
//!
//! Ожидается строка заголовков. Колонки:
//! `name, red, blue, green, purple, points` и необязательные
//! `type`, `description`, `effect` (для бонусных карт обязательна).
//! Пустая ячейка цены означает 0.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::bonus::BonusEffect;
use crate::domain::card::{BonusCard, Card, CardKind};
use crate::domain::gems::Gems;
use crate::engine::GameError;
use crate::infra::ids::CardIdGenerator;

#[derive(Debug, Error)]
pub enum CardTableError {
    #[error("malformed card table: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {message}")]
    InvalidRow { row: usize, message: String },
}

impl From<CardTableError> for GameError {
    fn from(err: CardTableError) -> Self {
        GameError::CardTable(err.to_string())
    }
}

/// Одна строка таблицы как она есть.
#[derive(Debug, Deserialize)]
struct CardRow {
    name: String,
    #[serde(default)]
    red: Option<u32>,
    #[serde(default)]
    blue: Option<u32>,
    #[serde(default)]
    green: Option<u32>,
    #[serde(default)]
    purple: Option<u32>,
    points: u32,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    effect: Option<String>,
}

impl CardRow {
    fn cost(&self) -> Gems {
        Gems::new(
            self.red.unwrap_or(0),
            self.blue.unwrap_or(0),
            self.green.unwrap_or(0),
            self.purple.unwrap_or(0),
        )
    }

    fn validate(&self, row: usize) -> Result<(), CardTableError> {
        if self.name.trim().is_empty() {
            return Err(invalid(row, "card name is empty"));
        }
        if self.points == 0 {
            return Err(invalid(row, "card points must be positive"));
        }
        Ok(())
    }
}

fn invalid(row: usize, message: impl Into<String>) -> CardTableError {
    CardTableError::InvalidRow {
        row,
        message: message.into(),
    }
}

fn read_rows(text: &str, delimiter: u8) -> Result<Vec<CardRow>, CardTableError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.deserialize::<CardRow>() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Обычные карты. ID выдаются генератором в порядке строк.
pub fn parse_standard_cards(
    text: &str,
    delimiter: u8,
    ids: &CardIdGenerator,
) -> Result<Vec<Card>, CardTableError> {
    let rows = read_rows(text, delimiter)?;
    let mut cards = Vec::with_capacity(rows.len());

    for (i, row) in rows.into_iter().enumerate() {
        let line = i + 1;
        row.validate(line)?;
        let kind = match row.kind.as_deref() {
            Some(raw) => raw.parse::<CardKind>().map_err(|e| invalid(line, e))?,
            None => CardKind::default(),
        };
        cards.push(Card {
            id: ids.next_card_id(),
            name: row.name.trim().to_string(),
            cost: row.cost(),
            points: row.points,
            kind,
        });
    }

    Ok(cards)
}

/// Бонусные карты. Колонка `effect` обязательна; без `description`
/// берётся стандартный текст эффекта.
pub fn parse_bonus_cards(
    text: &str,
    delimiter: u8,
    ids: &CardIdGenerator,
) -> Result<Vec<BonusCard>, CardTableError> {
    let rows = read_rows(text, delimiter)?;
    let mut cards = Vec::with_capacity(rows.len());

    for (i, row) in rows.into_iter().enumerate() {
        let line = i + 1;
        row.validate(line)?;
        let effect = match row.effect.as_deref() {
            Some(raw) => raw.parse::<BonusEffect>().map_err(|e| invalid(line, e))?,
            None => return Err(invalid(line, "bonus card has no effect")),
        };
        let cost = row.cost();
        let description = row
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| effect.describe().to_string());

        cards.push(BonusCard {
            id: ids.next_card_id(),
            name: row.name.trim().to_string(),
            description,
            cost,
            points: row.points,
            effect,
        });
    }

    Ok(cards)
}

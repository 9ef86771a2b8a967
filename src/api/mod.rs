//! Внешний API игрового движка.
//!
//! Здесь описываются:
//! - команды (commands.rs) — всё, что меняет состояние (старт, бросок, покупка, конец хода);
//! - запросы (queries.rs) — только чтение;
//! - DTO (dto.rs) — удобные структуры для слоя отображения;
//! - ошибки (errors.rs) — то, что видит клиент;
//! - исполнение команд и запросов поверх сессии (handler.rs).

pub mod commands;
pub mod dto;
pub mod errors;
pub mod handler;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use handler::*;
pub use queries::*;

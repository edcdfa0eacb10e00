//! daybook - a command-line personal assistant for contacts and notes.
//!
//! The library holds the validated record model and the two keyed
//! collections; the binary wraps them in an interactive menu. The core
//! performs no I/O: reading input, printing, and persistence all happen
//! in the outer layers.
//!
//! # Architecture
//!
//! - **domain**: validated field value objects (name, phone, birthday, ...)
//! - **models**: aggregate records `Contact` and `Note`
//! - **books**: keyed collections `ContactBook` and `NoteBook`
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **storage**: JSON persistence for both books
//! - **repl**: the interactive command layer

pub mod books;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use books::{AddStatus, ContactBook, NoteBook, UpcomingBirthday};
pub use config::Config;
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{Contact, Note};

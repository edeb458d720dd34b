//! FILENAME: core/dataset/src/lib.rs
//! PURPOSE: Main library entry point for the Olympics event data model.
//! CONTEXT: Re-exports the record types, selectors and the `Events` context
//! shared by `persistence` (which builds it) and `query-engine` (which reads it).

pub mod events;
pub mod record;
pub mod selector;

// Re-export commonly used types at the crate root
pub use events::Events;
pub use record::{EventRecord, Medal, MedalLabel, NaturalKey, Season, Sex};
pub use selector::{Selector, SelectorError, OVERALL};

//! Shared traits for entities handled by the analytics services.

use uuid::Uuid;

/// Exposes a stable identifier for entities handed in by the store.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

//! Traits shared by ledger entities plus id-based lookup helpers.

use uuid::Uuid;

use crate::domain::transaction::TransactionType;

/// Entities stored in the ledger under a stable identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Entities that belong to exactly one side of the ledger.
pub trait Typed {
    fn kind(&self) -> TransactionType;
}

/// Supplies a presentation-ready label for list views and logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Returns the first entity whose id matches.
pub fn find_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

/// Returns the position of the entity whose id matches.
pub fn position_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Keeps only the entities of the requested side.
pub fn of_kind<T: Typed>(items: &[T], kind: TransactionType) -> impl Iterator<Item = &T> {
    items.iter().filter(move |item| item.kind() == kind)
}

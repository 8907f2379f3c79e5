pub mod category;
pub mod common;
pub mod period;
pub mod summary;
pub mod transaction;

pub use category::{Category, CategoryIcon, ColorTag, NewCategory};
pub use common::{Displayable, Identifiable, Typed};
pub use period::{Period, TransactionFilter};
pub use summary::{BalanceStatus, CategoryTotal, MonthlyTotals, Totals};
pub use transaction::{Transaction, TransactionDraft, TransactionInput, TransactionType};

//! Order ledger
//!
//! The shared group order for one restaurant. Every mutation is a pure
//! whole-state transition: `(current ledger, args) -> new ledger`. The
//! caller commits the result through the sync gateway as a full document
//! replace; nothing here touches storage.
//!
//! One action per file under [`actions`], aggregation read-side in
//! [`summary`].

pub mod actions;
pub mod error;
pub mod summary;

pub use actions::{
    AddItem, ClearAll, ClearUser, LockOrder, RemoveItem, SetDeliveryFee, SetNote,
};
pub use error::LedgerError;
pub use summary::{ItemSummary, OrderSummary, UserSummary};

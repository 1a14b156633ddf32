//! Fatoor Client - group food-ordering coordination core
//!
//! The office breakfast board: everyone adds their own lines to one shared
//! per-restaurant order, the totals (including an evenly split delivery
//! fee) update live for every connected client, and informal polls decide
//! where to order from. Persistence and fan-out are delegated to an
//! external document store behind the [`sync::SyncGateway`] trait; this
//! crate computes the next full document for every user action and lets
//! the store's echo drive local state.
//!
//! # Module structure
//!
//! ```text
//! fatoor-client/src/
//! ├── config.rs      # Environment-driven configuration
//! ├── orders/        # Ledger actions and aggregations
//! ├── polls/         # Ballot transitions and validation
//! ├── sync/          # SyncGateway trait + in-process implementation
//! ├── session.rs     # Admin credential gate
//! ├── state.rs       # Root application state container
//! └── utils/         # Logging setup
//! ```

pub mod config;
pub mod orders;
pub mod polls;
pub mod session;
pub mod state;
pub mod sync;
pub mod utils;

// Re-export public types
pub use config::Config;
pub use orders::{LedgerError, OrderSummary};
pub use polls::{CreatePoll, PollError};
pub use session::{AdminSession, SessionError};
pub use state::{greeting, greeting_for_hour, AppState};
pub use sync::{Collection, DocId, GatewayError, MemoryGateway, Subscription, SyncGateway};
pub use utils::logger::{init_logger, init_logger_with_file};

// Re-export shared types for convenience
pub use shared::models::{
    MenuItem, OrderLine, Poll, Restaurant, RestaurantOrder, User, UserRole, VoteOption,
};
pub use shared::{AppError, AppResult};

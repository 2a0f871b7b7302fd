//! # State Module
//!
//! Manages live state for a storefront session.
//!
//! ## Why Multiple State Types? (Option B)
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   StorefrontSession                             │   │
//! │  │  catalog: CatalogState,   ledger: LedgerState,                  │   │
//! │  │  account: AccountState,   config: StoreConfig                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CatalogState │  │ LedgerState  │  │  AccountState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  RwLock<     │  │  Arc<Mutex<  │  │  RwLock<         │              │
//! │  │   Product    │  │    Ledger    │  │   Account        │              │
//! │  │   Catalog>   │  │  >>          │  │  >               │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: RwLock, many concurrent readers, rare refresh writes  │
//! │  • LedgerState: Arc<Mutex<T>> for exclusive cart/wishlist mutation     │
//! │  • AccountState: RwLock, read per eligibility check, replaced on login │
//! │  • StoreConfig: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod account;
mod catalog;
mod config;
mod ledger;

pub use account::AccountState;
pub use catalog::CatalogState;
pub use config::StoreConfig;
pub use ledger::LedgerState;

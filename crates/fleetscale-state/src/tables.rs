//! redb table definitions for the Fleetscale cooldown store.
//!
//! One table with `&str` keys and `&[u8]` values (JSON-serialized epoch
//! seconds). The decision engine uses a single fixed key for both scaling
//! directions.

use redb::TableDefinition;

/// Last-scale timestamps keyed by cooldown key (e.g. `"last-scale"`).
pub const COOLDOWNS: TableDefinition<&str, &[u8]> = TableDefinition::new("cooldowns");

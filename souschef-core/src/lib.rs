pub mod display;
pub mod error;
pub mod execution;
pub mod ingredient_parser;
pub mod normalize;
pub mod store;
pub mod wire;

pub use error::{NormalizeError, StoreError};
pub use execution::ExecutionSession;
pub use ingredient_parser::{format_ingredient, parse_ingredient, ParsedIngredient};
pub use normalize::{parse_backend_id, to_display, to_wire};
pub use store::{HttpStore, MemoryStore, RecipeStore};

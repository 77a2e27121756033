pub mod buy_listing;
pub mod cancel_listing;
pub mod close_listing;
pub mod create_listing;
pub mod initialize_gpu_mint;
pub mod initialize_marketplace;
pub mod mint_gpu_tokens;

pub use buy_listing::*;
pub use cancel_listing::*;
pub use close_listing::*;
pub use create_listing::*;
pub use initialize_gpu_mint::*;
pub use initialize_marketplace::*;
pub use mint_gpu_tokens::*;

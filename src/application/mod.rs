pub mod damage;
mod game_state;
pub mod scheduler;
pub mod viewport;

pub use damage::{Damage, Painter};
pub use game_state::GameState;
pub use scheduler::Scheduler;
pub use viewport::Viewport;

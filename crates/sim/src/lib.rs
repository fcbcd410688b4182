pub mod combat;
pub mod feed;
pub mod fighter;
pub mod hud;
pub mod input;
pub mod match_loop;
pub mod match_state;
pub mod render;
pub mod scripts;

pub use feed::*;
pub use input::*;
pub use match_loop::*;
pub use match_state::*;
pub use render::*;

pub mod baseline;
pub mod human;
pub mod random;
pub mod registry;
pub mod strategic;

pub use baseline::BaselineBot;
pub use human::HumanBot;
pub use random::RandomBot;
pub use registry::{create_bot_from_spec, label_for_spec};
pub use strategic::StrategicBot;

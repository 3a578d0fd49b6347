pub mod ids;
pub mod seed;
pub mod state;
pub mod store;

pub use ids::IdGenerator;
pub use state::AppState;
pub use store::{MemoryStore, NewAppointment};

mod chunk;
mod medicine;
mod summary;
mod user;

pub use chunk::TextChunk;
pub use medicine::{MedicineRecord, MedicineSuggestion};
pub use summary::{SummaryResult, SummaryStyle};
pub use user::{hash_password, User, UserId};

mod ids;
mod notification;
mod people;
mod record;
mod row;
mod task;

pub use ids::*;
pub use notification::*;
pub use people::*;
pub use record::*;
pub use row::*;
pub use task::*;

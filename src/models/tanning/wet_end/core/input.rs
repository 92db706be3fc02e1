mod bath;
mod categories;
mod drum;
mod offers;
mod process;

pub use bath::FloatBath;
pub use categories::{Climate, DryMethod, PickleStrategy, VegTannin};
pub use drum::Drum;
pub use offers::Offers;
pub use process::Process;

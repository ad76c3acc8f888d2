mod attributes;

pub mod badge;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod input;
pub mod label;
pub mod pagination;
pub mod separator;
pub mod skeleton;

pub mod sidebar;

pub(crate) use attributes::merge_attributes;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use checkbox::*;
pub use input::*;
pub use label::*;
pub use pagination::*;
pub use separator::*;
pub use sidebar::*;
pub use skeleton::*;

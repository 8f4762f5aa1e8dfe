mod contact_registry;
mod shared;

pub use contact_registry::ContactRegistry;
pub use shared::SharedContactRegistry;

mod props_struct;

pub use props_struct::{ActorFactory, Props};

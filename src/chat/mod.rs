// Canned-reply responder exports
pub mod responder;

pub use responder::Responder;

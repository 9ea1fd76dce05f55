// Presentation layer: the form session state machine, the server-rendered
// page and the handlers that serve it.

pub mod handlers;
pub mod page;
pub mod session;

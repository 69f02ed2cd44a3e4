// Idea generation: random sampling over the catalog tables plus the request
// shapes and handlers that feed it. Generation itself is pure and synchronous.

pub mod generator;
pub mod handlers;
pub mod request;

// Persona Document Parser
// Markdown training documents → ParsedPersona records, ranked by customer share.
// Parsing is pure and total; only directory listing can fail.

pub mod fields;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod parser;
pub mod sections;

pub use loader::{find_persona, load_personas, PersonaError};
pub use models::ParsedPersona;
pub use parser::ParseOptions;

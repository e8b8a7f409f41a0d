//! Map viewer session: the engine-facing configuration and the interaction
//! state driving the typology choropleth.
//!
//! The crate is engine-agnostic. It produces plain-data operations and click
//! outcomes; a thin page script (or the CLI) forwards them to whatever
//! renders the map.

pub mod config;
pub mod highlight;
pub mod legend;
pub mod protocol;
pub mod selection;
pub mod session;

pub use config::*;
pub use highlight::*;
pub use legend::*;
pub use protocol::*;
pub use selection::*;
pub use session::*;

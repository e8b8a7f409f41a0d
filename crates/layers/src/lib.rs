pub mod basemap;
pub mod fill;
pub mod line;
pub mod source;
pub mod symbology;

pub use fill::*;
pub use line::*;
pub use source::*;
pub use symbology::*;

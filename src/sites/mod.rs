mod error;
mod ground_site;
mod table;

pub use error::SiteError;
pub use ground_site::GroundSite;
pub use table::SiteTable;

// Every layout variant shipped with the app.

mod brutalist;
mod classic;
mod creative;
mod cxo;
mod eco;
mod elegant;
mod minimalist;
mod modern;
mod pastel;
mod professional;

pub use brutalist::BrutalistTemplate;
pub use classic::ClassicTemplate;
pub use creative::CreativeTemplate;
pub use cxo::CxoTemplate;
pub use eco::EcoTemplate;
pub use elegant::ElegantTemplate;
pub use minimalist::MinimalistTemplate;
pub use modern::ModernTemplate;
pub use pastel::PastelTemplate;
pub use professional::ProfessionalTemplate;

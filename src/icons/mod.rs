//! SVG icon components. Sizing and color come from the host: 20x20 default
//! box, `currentColor` paint, opaque `class` pass-through.

mod chevron_down;
mod volume_muted;

pub use chevron_down::ChevronDown;
pub use volume_muted::VolumeMuted;

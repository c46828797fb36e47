pub mod geometry;
pub mod layout;
pub mod parse;
pub mod spec;
pub mod units;

pub use geometry::{BoundingRegion, DimensionLine, Label, ObjectRef, Rect};
pub use layout::{layout, LayoutResult};
pub use spec::{GridSpec, ValidationError};
pub use units::DisplayUnit;

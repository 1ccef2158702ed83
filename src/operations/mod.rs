pub mod build;
pub mod generate;
pub mod interlace;
pub mod stroke;

pub use build::BuildPattern;
pub use generate::{GeneratePattern, PolygonsInContact, Recipe};
pub use interlace::ApplyInterlacing;
pub use stroke::{find_junction_neighbors, ExpandPattern, ExpandStroke, StrokeWidth};

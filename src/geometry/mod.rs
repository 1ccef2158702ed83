pub mod line;
pub mod ribbon;
pub mod shape;

pub use line::{line, Line};
pub use ribbon::{Ribbon, RIBBON_CORNERS};
pub use shape::{
    edges_of_shape, lines_from_shapes, mirror_at_corner, reflect_at_edge, rotate_about_vertex,
    rotate_points, shape, Shape,
};

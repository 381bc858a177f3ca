pub mod geom;
pub mod model;
pub mod polygon;
pub mod report;

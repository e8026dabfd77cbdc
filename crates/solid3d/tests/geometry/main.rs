mod common;
mod inertia;
mod projection_support;
mod reference_values;
mod shape_validation;
mod world_bounding_volumes;

pub mod registry;

pub use registry::router;

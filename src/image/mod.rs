//! Grayscale rasters used throughout the solver.
//!
//! - [`ImageF32`]: owned float buffer, the working type for targets, shadow
//!   slices and filter outputs.
//! - [`ImageU8`]: borrowed 8-bit view produced by the decoder.
//! - [`io`]: loading/resizing photos into square targets and writing previews.
pub mod f32;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;

mod cache;
mod scan;
mod thumbnail;
mod types;

pub use cache::{DEFAULT_CACHE_CAPACITY, ImageCache};
pub use scan::{is_supported_image, parse_filename, read_staff_images};
pub use thumbnail::{MAX_THUMBNAIL_DIMENSION, THUMBNAIL_JPEG_QUALITY, encode_thumbnail, get_image_data};
pub use types::*;

mod hit_testing;

pub use hit_testing::{point_in_element, resize_handle_at, Handle, HANDLE_HIT_RANGE};

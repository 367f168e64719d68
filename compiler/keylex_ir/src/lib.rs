//! keylex IR - shared highlighting types.
//!
//! Every highlighter in the workspace produces the same flat shape: an
//! ordered list of [`Token`]s, each carrying an absolute byte offset, a
//! display [`Category`] and the covered source text. The list is total over
//! its input: concatenating the token texts reproduces the source.

mod category;
mod token;

pub use category::{Category, CategoryClass};
pub use token::{concat_text, is_contiguous, Token};

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

//! Social domain - posts published into the community feed.

mod post;

pub use post::{Post, MAX_POST_LENGTH};

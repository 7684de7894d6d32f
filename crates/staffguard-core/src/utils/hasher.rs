use std::hash::BuildHasher;
use xxhash_rust::xxh3::Xxh3;

/// Seeds `HashSet`/`HashMap` with xxh3, which is much faster than SipHash for
/// the short string keys the deduplicator stores.
#[derive(Clone, Copy, Default)]
pub struct Xxh3State;

impl BuildHasher for Xxh3State {
    type Hasher = Xxh3;

    #[inline]
    fn build_hasher(&self) -> Xxh3 {
        Xxh3::new()
    }
}

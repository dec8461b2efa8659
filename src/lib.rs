/*! A pure Rust implementation of LZAV, an in-memory, non-streaming LZ77-family compressor.

LZAV trades the usual sliding-window generality for a small, fixed header format: a one-byte
stream prefix, then a sequence of literal and back-reference blocks whose headers share two
bits between neighboring blocks (an "offset carry" trick — see [`block`]) to keep short
references cheap. There is no frame, no streaming API, and no length prefix in the wire
format: callers are expected to track the original length themselves.

# Examples
```
use lzav::{compress, decompress};
let input: &[u8] = b"Hello people, what's up?";
let compressed = compress(input).unwrap();
let uncompressed = decompress(&compressed, input.len()).unwrap();
assert_eq!(input, &uncompressed[..]);
```

# Feature Flags
- `std` (default): enables the allocating entry points (`compress`, `decompress`) and
  `std::error::Error` for [`LzavError`]. Without it the crate is `no_std` + `alloc`.
- `safe-encode` (default): the compressor's table lookups and block writes use plain slice
  indexing rather than raw pointers.
- `safe-decode` (default): the decompressor's copy primitives use plain slice operations
  rather than raw pointers. Bounds checking itself is unconditional either way — only the
  mechanism of an already-proven-safe copy changes.
*/
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod block;

pub use block::compress::{compress_bound, compress_into, compress_into_with_scratch};
pub use block::decompress::decompress_into;
pub use block::LzavError;

#[cfg(feature = "std")]
pub use block::compress::compress;
#[cfg(feature = "std")]
pub use block::decompress::decompress;

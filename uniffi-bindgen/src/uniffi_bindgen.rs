//! Generates Swift and Kotlin bindings for the `biokit` library.
//!
//! ```sh
//! cargo run -p uniffi-bindgen -- generate --library target/release/libbiokit.dylib \
//!     --language swift --out-dir swift/Sources/BioKit
//! ```

fn main() {
    uniffi::uniffi_bindgen_main();
}

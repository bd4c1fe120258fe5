//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lifedash_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("lifedash_core ping={}", lifedash_core::ping());
    println!("lifedash_core version={}", lifedash_core::core_version());
    println!(
        "lifedash_core collections={}",
        lifedash_core::COLLECTION_KEYS.join(",")
    );
    println!(
        "lifedash_core documents={}",
        lifedash_core::DOCUMENT_KEYS.join(",")
    );
}

fn main() {
    let python = std::env::var_os("CARGO_FEATURE_PYTHON").is_some();
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    // The Python module resolves interpreter symbols at import time on macOS.
    if python && target_os == "macos" {
        for arg in ["-undefined", "dynamic_lookup"] {
            println!("cargo:rustc-cdylib-link-arg={}", arg);
        }
    }
}

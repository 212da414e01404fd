use std::env;
use std::fs;
use std::path::PathBuf;

/// Put `memory.x` where the linker can find it and make sure changing it
/// triggers a rebuild.
fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::copy("memory.x", out_dir.join("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
}

use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=ra6m5_memory.x");
    println!("cargo:rerun-if-changed=build.rs");

    // Host builds only compile the library for tests.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("none") {
        return;
    }

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let memory_x = out_dir.join("memory.x");

    println!("cargo:rustc-link-search={}", out_dir.display());

    if cfg!(feature = "ra6m5") {
        std::fs::copy("ra6m5_memory.x", memory_x).unwrap();
    } else {
        panic!("No memory layout specified. Use --features ra6m5.");
    }
}

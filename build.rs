fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Exposed to the crate through env!("BUILD_TIME") for the footer
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Rerun if build.rs or the embedded content changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}

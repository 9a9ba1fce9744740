fn main() {
    #[cfg(feature = "lapack")]
    {
        // The `lapack` crate only declares the Fortran symbols; OpenBLAS
        // provides them together with the BLAS it calls into.
        // On macOS: brew install openblas
        // On Ubuntu: apt install libopenblas-dev
        if let Ok(lib_dir) = std::env::var("OPENBLAS_LIB_DIR") {
            println!("cargo:rustc-link-search=native={}", lib_dir);
        } else if cfg!(target_os = "macos") {
            println!("cargo:rustc-link-search=native=/opt/homebrew/opt/openblas/lib");
            println!("cargo:rustc-link-search=native=/usr/local/opt/openblas/lib");
        }
        println!("cargo:rustc-link-lib=openblas");
    }
}

use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=OPENBLAS_LIB_DIR");
    println!("cargo:rerun-if-env-changed=ZGEMV_CBLAS_LIB");

    if env::var_os("CARGO_FEATURE_BLAS").is_none() {
        return;
    }

    // cblas_zgemv comes from a system CBLAS. OpenBLAS unless overridden,
    // e.g. ZGEMV_CBLAS_LIB=cblas for the netlib build.
    match env::var("OPENBLAS_LIB_DIR") {
        Ok(dir) => println!("cargo:rustc-link-search=native={dir}"),
        Err(_) if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("macos") => {
            println!("cargo:rustc-link-search=native=/opt/homebrew/opt/openblas/lib");
            println!("cargo:rustc-link-search=native=/usr/local/opt/openblas/lib");
        }
        Err(_) => {}
    }

    let lib = env::var("ZGEMV_CBLAS_LIB").unwrap_or_else(|_| "openblas".to_string());
    println!("cargo:rustc-link-lib={lib}");
}

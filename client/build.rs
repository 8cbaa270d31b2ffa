const API_BASE_URL_VAR: &str = "POINTSE_API_BASE_URL";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-env-changed={API_BASE_URL_VAR}");

    // An explicit environment variable wins over `.env`.
    if std::env::var_os(API_BASE_URL_VAR).is_some() {
        return;
    }

    let Ok(entries) = dotenvy::from_filename_iter(".env") else {
        println!("cargo:warning=No .env file found; {API_BASE_URL_VAR} falls back to the built-in default.");
        return;
    };
    for (key, value) in entries.flatten() {
        if key == API_BASE_URL_VAR {
            println!("cargo:rustc-env={API_BASE_URL_VAR}={value}");
        }
    }
}

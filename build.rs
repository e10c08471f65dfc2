use std::env;
use std::path::PathBuf;

const FORWARDED_KEYS: &[&str] = &[
    "VALENTINE_AUDIO_SRC",
    "VALENTINE_COVER_SRC",
    "VALENTINE_SURPRISE_SRC",
];

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let env_path = manifest_dir.join(".env");
    let env_local_path = manifest_dir.join(".env.local");

    // `.env.local` wins because dotenvy never overwrites a variable that is already set.
    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    for key in FORWARDED_KEYS {
        let trunk_key = format!("TRUNK_PUBLIC_{key}");
        println!("cargo:rerun-if-env-changed={key}");
        println!("cargo:rerun-if-env-changed={trunk_key}");
        let value = env::var(key).ok().or_else(|| env::var(&trunk_key).ok());
        if let Some(value) = value {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                println!("cargo:rustc-env={key}={trimmed}");
            }
        }
    }
}

//! Build script for vfdmux-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        fail(
            "display.toml not found!",
            &[
                "The firmware embeds a display.toml configuration file.".to_string(),
                "Please create one in the vfdmux-firmware directory.".to_string(),
            ],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read display.toml", &[format!("Error: {}", e)]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in display.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let errors = validate_display(&config);
    if !errors.is_empty() {
        fail("Invalid [display] configuration", &errors);
    }

    println!("cargo:warning=display.toml validated successfully");
}

/// Tube names the firmware parser accepts
const TUBES: [&str; 2] = ["iv3a", "iv22b"];

/// Check the [display] section against what the firmware parser accepts
fn validate_display(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let display = match config.get("display") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[display] must be a table".to_string());
            return errors;
        }
        None => {
            errors.push("Missing [display] section".to_string());
            return errors;
        }
    };

    for (key, value) in display {
        match key.as_str() {
            "tube" => {
                let known = value
                    .as_str()
                    .is_some_and(|s| TUBES.contains(&s.to_lowercase().as_str()));
                if !known {
                    errors.push("[display] tube must be \"iv3a\" or \"iv22b\"".to_string());
                }
            }
            "mux_interval_ms" => match value {
                toml::Value::Integer(ms) if (1..=100).contains(ms) => {}
                _ => errors.push("[display] mux_interval_ms must be 1-100".to_string()),
            },
            "blank_active_low" => {
                if !value.is_bool() {
                    errors.push("[display] blank_active_low must be true or false".to_string());
                }
            }
            other => errors.push(format!("[display] unknown key '{}'", other)),
        }
    }

    errors
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|line| {
                let truncated = if line.len() > 62 {
                    format!("{}...", &line[..59])
                } else {
                    line.clone()
                };
                format!("║  • {:<62} ║", truncated)
            })
            .collect::<Vec<_>>()
            .join("\n")
    );
}

// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

/// Variablen, die aus .env an den Compiler durchgereicht werden
const FORWARDED_ENV: [&str; 3] = ["POLL_INTERVAL_MS", "JOYSTICK_TRIGGER", "TOGGLE_TRIGGER"];

fn main() {
    // Lade .env file für Loop-Konfiguration
    // Alle Werte sind optional, config.rs hat Defaults
    // Mit eigenen rerun-Direktiven beobachtet cargo nur noch, was hier
    // angemeldet wird: .env muss also explizit dazu.
    match dotenvy::dotenv() {
        Ok(path) => println!("cargo:rerun-if-changed={}", path.display()),
        Err(e) => {
            println!("cargo:warning=.env nicht geladen ({}), nutze Defaults", e);
            println!("cargo:rerun-if-changed=.env");
        }
    }
    println!("cargo:rerun-if-changed=build.rs");

    // Die Werte werden zur Compile-Zeit in den Code eingebacken
    for key in FORWARDED_ENV {
        println!("cargo:rerun-if-env-changed={}", key);
        if let Ok(value) = std::env::var(key) {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }

    linker_hints();

    // 1. defmt.x - Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout, muss als LETZTES kommen
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Wird vom Linker als "--error-handling-script" aufgerufen und gibt
// Hinweise zu fehlenden Linker-Skripten
fn linker_hints() {
    let args: Vec<String> = std::env::args().collect();

    if let [_, kind, what, ..] = args.as_slice() {
        if kind == "undefined-symbol" {
            if what.starts_with("_defmt_") {
                eprintln!();
                eprintln!("💡 `defmt` nicht gefunden - ist `defmt.x` als Linker-Skript eingetragen?");
                eprintln!();
            } else if what == "_stack_start" {
                eprintln!();
                eprintln!("💡 Fehlt das Linker-Skript `linkall.x`?");
                eprintln!();
            }
            std::process::exit(0);
        }
        std::process::exit(1);
    }

    if let Ok(exe) = std::env::current_exe() {
        println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        );
    }
}

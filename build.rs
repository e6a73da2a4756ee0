use std::env;
use std::fs;
use std::path::Path;

// Repassa as chaves do .env para option_env!() em tempo de compilação.
// Variáveis já definidas no ambiente têm prioridade sobre o arquivo.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=Arquivo .env não encontrado, usando a configuração padrão.");
        return;
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value.trim().trim_matches('"'));
            }
        }
    }
}

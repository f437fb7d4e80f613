use std::fs;
use std::io::{self, Read};
use std::path::Path;

use idlsema_core::Program;

/// Load a JSON-serialized program from a file, or from stdin when `path` is `-`.
pub fn load_program(path: &Path) -> Result<Program, String> {
    let (name, content) = if path.as_os_str() == "-" {
        ("<stdin>".to_owned(), read_stdin()?)
    } else {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
        (path.display().to_string(), content)
    };

    Program::from_json(&content).map_err(|e| format!("{name}: {e}"))
}

pub fn write_program(path: &Path, program: &Program) -> Result<(), String> {
    let json = program
        .to_json()
        .map_err(|e| format!("failed to serialize AST: {}", e))?;
    fs::write(path, json + "\n")
        .map_err(|e| format!("failed to write '{}': {}", path.display(), e))
}

fn read_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

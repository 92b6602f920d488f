use std::path::Path;
use std::process::ExitCode;
use tracing::info;
use varscope_core::program::Program;

pub fn run(path: &Path) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let model = crate::read_model(path)?;
    match Program::hydrate(model) {
        Ok(program) => {
            let methods = program.methods().count();
            info!("Model {} is consistent", path.display());
            println!("Classes:  {}", program.classes().len());
            println!("Methods:  {}", methods);
            println!("Closures: {}", program.closures().len());
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Invalid model: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

use std::process::ExitCode;

fn main() -> ExitCode {
    match doctree_validator::cli::run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("doctree-check: {:#}", e);
            ExitCode::from(2)
        }
    }
}

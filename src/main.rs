use std::process::ExitCode;

fn main() -> ExitCode {
    match pdns_loadtest::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

//! NativeCN CLI - Scaffolds styling config and component templates into React Native projects

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = nativecn_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

use std::process::ExitCode;

fn main() -> ExitCode {
    rpasswd::run()
}

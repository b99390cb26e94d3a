use std::process::ExitCode;

use postman2jmx::main as postman2jmx_main;

fn main() -> ExitCode {
    postman2jmx_main(std::env::args_os())
}

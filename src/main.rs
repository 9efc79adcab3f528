fn main() -> std::process::ExitCode {
  lift_log_lib::run()
}

fn main() {
    if let Err(err) = soundalike::run() {
        eprintln!("{}", soundalike::format_error(&err));
        std::process::exit(1);
    }
}

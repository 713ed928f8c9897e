fn main() {
    if let Err(err) = tokdup::run() {
        eprintln!("{}", tokdup::format_error(&err));
        std::process::exit(1);
    }
}
